use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::domain::Domain;
use crate::error::ProvisionResult;
use crate::logging;
use crate::pipeline::{Pipeline, Provisioned};

#[derive(Debug, Parser)]
#[command(name = "nginx-secure")]
#[command(version, about = "Secure a domain with Nginx + Let's Encrypt")]
pub struct Cli {
    /// Domain name to secure
    #[arg(short, long)]
    pub domain: Domain,
}

/// Exit status for a successful run.
pub const EXIT_OK: u8 = 0;
/// Exit status for any aborted run.
pub const EXIT_FAILED: u8 = 1;

/// Entry point of the binary: parse arguments, run the system
/// pipeline and turn the outcome into an exit code.
#[must_use]
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    let outcome = Pipeline::system().run(&cli.domain);
    ExitCode::from(finish(outcome, &mut std::io::stdout()))
}

/// Report the outcome of a run and pick the exit status. The
/// success line goes to `out`; failures are logged.
pub fn finish(outcome: ProvisionResult<Provisioned>, out: &mut impl Write) -> u8 {
    match outcome {
        Ok(report) => {
            let _ = writeln!(
                out,
                "\n{} is now secured and accessible at {}",
                report.domain,
                report.url()
            );
            EXIT_OK
        }
        Err(e) => {
            error!("{e}");
            EXIT_FAILED
        }
    }
}
