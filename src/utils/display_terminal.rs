//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 현재 설정 요약을 박스 형태로 출력합니다.

/// 박스 형태의 제목 출력
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 설정 항목 한 줄 출력
pub fn print_setting(name: &str, value: &str) {
    println!("   ├─ {}: {}", name, value);
}

/// 기동 요약 출력
///
/// `backend_status`에는 서비스 키가 아닌 마스킹된 값이나 상태 문구만 넘겨야 합니다.
pub fn print_startup_summary(bind_address: &str, workers: usize, backend_status: &str) {
    println!();
    print_boxed_title("🔐 PASSWORD RESET SERVICE");
    print_setting("Bind", bind_address);
    print_setting("Workers", &workers.to_string());
    print_setting("Identity backend", backend_status);
    println!();
}
