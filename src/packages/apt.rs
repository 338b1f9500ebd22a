use crate::cmd;
use crate::error::ProvisionResult;
use crate::packages::PackageInstaller;

/// Debian/Ubuntu package manager.
#[derive(Debug, Clone)]
pub struct Apt {
    pub program: String,
}

impl Apt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "apt".to_string(),
        }
    }

    /// Use another binary, e.g. `apt-get`.
    #[must_use]
    pub fn program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    #[must_use]
    pub fn update_args() -> Vec<&'static str> {
        vec!["update"]
    }

    #[must_use]
    pub fn install_args<'a>(packages: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["install"];
        args.extend_from_slice(packages);
        args.push("-y");
        args
    }
}

impl Default for Apt {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageInstaller for Apt {
    fn refresh_index(&self) -> ProvisionResult<()> {
        cmd::run_interactive(&self.program, &Self::update_args())
    }

    fn install(&self, packages: &[&str]) -> ProvisionResult<()> {
        cmd::run_interactive(&self.program, &Self::install_args(packages))
    }
}
