use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(shapedraw::run(std::env::args().skip(1), &mut out))
}
