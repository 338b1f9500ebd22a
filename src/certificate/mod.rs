pub mod certbot;

use crate::domain::Domain;
use crate::error::ProvisionResult;

/// Obtains and installs a TLS certificate for a domain and its
/// `www` alias against an already configured web server.
pub trait CertificateIssuer {
    fn issue(&self, domain: &Domain) -> ProvisionResult<()>;
}
