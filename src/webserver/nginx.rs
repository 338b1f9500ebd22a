use crate::cmd;
use crate::error::ProvisionResult;
use crate::webserver::WebServerController;

/// Nginx managed by systemd.
#[derive(Debug, Clone)]
pub struct Nginx {
    /// Binary used for `-t`.
    pub binary: String,
    /// Service manager used to reload.
    pub service_manager: String,
    pub service: String,
}

impl Nginx {
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary: "nginx".to_string(),
            service_manager: "systemctl".to_string(),
            service: "nginx".to_string(),
        }
    }

    #[must_use]
    pub fn binary(mut self, binary: &str) -> Self {
        self.binary = binary.to_string();
        self
    }

    #[must_use]
    pub fn service_manager(mut self, program: &str) -> Self {
        self.service_manager = program.to_string();
        self
    }

    #[must_use]
    pub fn service(mut self, name: &str) -> Self {
        self.service = name.to_string();
        self
    }

    #[must_use]
    pub fn reload_args(&self) -> Vec<&str> {
        vec!["reload", self.service.as_str()]
    }
}

impl Default for Nginx {
    fn default() -> Self {
        Self::new()
    }
}

impl WebServerController for Nginx {
    fn test_config(&self) -> ProvisionResult<()> {
        cmd::run_interactive(&self.binary, &["-t"])
    }

    fn reload(&self) -> ProvisionResult<()> {
        cmd::run_interactive(&self.service_manager, &self.reload_args())
    }
}
