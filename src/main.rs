use std::process::ExitCode;

fn main() -> ExitCode {
    skillgen_cli::run()
}
