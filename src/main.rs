#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    let code = checksum_calc::run();
    std::process::ExitCode::from(code)
}
