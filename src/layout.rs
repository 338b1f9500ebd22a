use std::path::PathBuf;

use crate::domain::Domain;

/// Placeholder substituted with the domain in
/// [`Layout::web_root_template`].
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// Filesystem locations written by a run.
///
/// The defaults match a stock Debian/Ubuntu Nginx install. Tests
/// point every path into a sandbox directory instead.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use nginx_secure::{Domain, Layout};
///
/// let domain: Domain = "example.com".parse().unwrap();
/// let layout = Layout::default();
///
/// assert_eq!(
///     layout.web_root(&domain),
///     Path::new("/var/www/example.com/html")
/// );
/// assert_eq!(
///     layout.symlink_path(&domain),
///     Path::new("/etc/nginx/sites-enabled/example.com")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub sites_available: PathBuf,
    pub sites_enabled: PathBuf,
    pub web_root_template: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sites_available: PathBuf::from("/etc/nginx/sites-available"),
            sites_enabled: PathBuf::from("/etc/nginx/sites-enabled"),
            web_root_template: "/var/www/{domain}/html".to_string(),
        }
    }
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sites_available(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sites_available = dir.into();
        self
    }

    #[must_use]
    pub fn sites_enabled(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sites_enabled = dir.into();
        self
    }

    #[must_use]
    pub fn web_root_template(mut self, template: &str) -> Self {
        self.web_root_template = template.to_string();
        self
    }

    #[must_use]
    pub fn web_root(&self, domain: &Domain) -> PathBuf {
        PathBuf::from(
            self.web_root_template
                .replace(DOMAIN_PLACEHOLDER, domain.as_str()),
        )
    }

    #[must_use]
    pub fn index_path(&self, domain: &Domain) -> PathBuf {
        self.web_root(domain).join("index.html")
    }

    #[must_use]
    pub fn config_path(&self, domain: &Domain) -> PathBuf {
        self.sites_available.join(domain.as_str())
    }

    #[must_use]
    pub fn symlink_path(&self, domain: &Domain) -> PathBuf {
        self.sites_enabled.join(domain.as_str())
    }
}
