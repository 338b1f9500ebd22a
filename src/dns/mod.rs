pub mod system;

use std::net::IpAddr;

use tracing::{info, warn};

use crate::domain::Domain;
use crate::error::ProvisionResult;

/// Forward name resolution used to confirm a domain points
/// somewhere before asking a CA to validate it.
pub trait Resolver {
    /// Resolve `domain` to one address.
    fn resolve(&self, domain: &Domain) -> ProvisionResult<IpAddr>;
}

/// Single lookup with no retry. Logs the outcome either way.
pub fn check_dns(resolver: &dyn Resolver, domain: &Domain) -> ProvisionResult<IpAddr> {
    info!("Checking DNS for {domain}...");

    match resolver.resolve(domain) {
        Ok(ip) => {
            info!("{domain} resolves to {ip}");
            Ok(ip)
        }
        Err(e) => {
            warn!("Domain {domain} does not resolve. Set up DNS first.");
            Err(e)
        }
    }
}

/// Pick the address `gethostbyname` would report: the first IPv4
/// one, else whatever came first.
#[must_use]
pub fn preferred_address(addrs: &[IpAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}
