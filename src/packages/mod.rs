pub mod apt;

use crate::error::ProvisionResult;

/// Packages needed to serve the site and obtain its certificate:
/// the web server, the ACME client and its Nginx plugin.
pub const REQUIRED_PACKAGES: &[&str] = &["nginx", "certbot", "python3-certbot-nginx"];

/// A system package manager.
pub trait PackageInstaller {
    /// Refresh the package index.
    fn refresh_index(&self) -> ProvisionResult<()>;

    /// Install `packages` non-interactively.
    fn install(&self, packages: &[&str]) -> ProvisionResult<()>;
}

/// Refresh the index, then install [`REQUIRED_PACKAGES`]. Always
/// runs; the package manager decides what is already present.
pub fn ensure_packages(installer: &dyn PackageInstaller) -> ProvisionResult<()> {
    installer.refresh_index()?;
    installer.install(REQUIRED_PACKAGES)
}
