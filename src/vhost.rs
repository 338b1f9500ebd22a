use std::path::PathBuf;

use crate::domain::Domain;

/// An Nginx virtual host serving static files from a document
/// root.
///
/// # Example
///
/// ```
/// use nginx_secure::{Domain, VirtualHost};
///
/// let domain: Domain = "example.com".parse().unwrap();
/// let vhost = VirtualHost::for_domain(&domain, "/var/www/example.com/html");
///
/// assert_eq!(vhost.listen, 80);
/// assert_eq!(vhost.server_names, vec!["example.com", "www.example.com"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualHost {
    pub listen: u16,
    pub server_names: Vec<String>,
    pub root: PathBuf,
    pub index: String,
    pub try_files: String,
}

impl VirtualHost {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            listen: 80,
            server_names: Vec::new(),
            root: root.into(),
            index: "index.html".to_string(),
            try_files: "$uri $uri/ =404".to_string(),
        }
    }

    /// Plain-HTTP host for `domain` and its `www` alias. Certbot
    /// adds the TLS listener and redirect later.
    #[must_use]
    pub fn for_domain(domain: &Domain, root: impl Into<PathBuf>) -> Self {
        Self::new(root)
            .server_name(domain.as_str())
            .server_name(&domain.www())
    }

    #[must_use]
    pub fn server_name(mut self, name: &str) -> Self {
        self.server_names.push(name.to_string());
        self
    }
}
