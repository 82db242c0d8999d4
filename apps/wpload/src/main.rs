use std::process::ExitCode;

fn main() -> ExitCode {
    match wpload_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            wpload_logger::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
