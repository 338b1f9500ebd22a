use std::fmt;
use std::str::FromStr;

use crate::error::{ProvisionError, ProvisionResult};

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated DNS name keying every artifact of a run.
///
/// The name is interpolated into file paths, the generated
/// server block and the certbot arguments, so anything that is
/// not plain hostname syntax is rejected up front. Accepted
/// input is kept exactly as typed.
///
/// # Example
///
/// ```
/// use nginx_secure::Domain;
///
/// let domain: Domain = "example.com".parse().unwrap();
///
/// assert_eq!(domain.as_str(), "example.com");
/// assert_eq!(domain.www(), "www.example.com");
/// assert_eq!(domain.admin_contact(), "admin@example.com");
/// assert_eq!(domain.url(), "https://example.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    pub fn new(raw: &str) -> ProvisionResult<Self> {
        let invalid = |reason: &str| ProvisionError::InvalidDomain {
            domain: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw.len() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 253 characters"));
        }

        let labels: Vec<&str> = raw.split('.').collect();
        if labels.len() < 2 {
            return Err(invalid("expected at least two labels"));
        }

        for label in labels {
            if label.is_empty() {
                return Err(invalid("empty label"));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(invalid("label is longer than 63 characters"));
            }
            if !label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
            {
                return Err(invalid(
                    "only letters, digits and hyphens are allowed",
                ));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(invalid("labels cannot start or end with a hyphen"));
            }
        }

        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `www.` alias served alongside the bare name.
    #[must_use]
    pub fn www(&self) -> String {
        format!("www.{}", self.0)
    }

    /// Contact address registered with the certificate authority.
    #[must_use]
    pub fn admin_contact(&self) -> String {
        format!("admin@{}", self.0)
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("https://{}/", self.0)
    }
}

impl FromStr for Domain {
    type Err = ProvisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
