use tracing::info;

use crate::certificate::CertificateIssuer;
use crate::cmd;
use crate::domain::Domain;
use crate::error::ProvisionResult;

/// Let's Encrypt via certbot's Nginx plugin, run
/// non-interactively.
///
/// The plugin edits the enabled server block in place, adding the
/// TLS listener and an HTTP to HTTPS redirect.
#[derive(Debug, Clone)]
pub struct Certbot {
    pub program: String,
}

impl Certbot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "certbot".to_string(),
        }
    }

    #[must_use]
    pub fn program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Arguments for a batch issuance covering `domain` and
    /// `www.domain`.
    #[must_use]
    pub fn issue_args(domain: &Domain) -> Vec<String> {
        vec![
            "--nginx".to_string(),
            "-n".to_string(),
            "--agree-tos".to_string(),
            "--redirect".to_string(),
            "-m".to_string(),
            domain.admin_contact(),
            "-d".to_string(),
            domain.to_string(),
            "-d".to_string(),
            domain.www(),
        ]
    }
}

impl Default for Certbot {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateIssuer for Certbot {
    fn issue(&self, domain: &Domain) -> ProvisionResult<()> {
        info!("Requesting certificate for {domain} and {}", domain.www());
        let args = Self::issue_args(domain);
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        cmd::run_interactive(&self.program, &refs)
    }
}
