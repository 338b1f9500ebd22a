use std::process::ExitCode;

fn main() -> ExitCode {
    nginx_secure::cli::main()
}
