pub mod nginx;

use crate::error::ProvisionResult;

/// Controls the running web server.
pub trait WebServerController {
    /// Validate the configuration on disk.
    fn test_config(&self) -> ProvisionResult<()>;

    /// Reload the service so it picks up the new configuration.
    fn reload(&self) -> ProvisionResult<()>;
}
