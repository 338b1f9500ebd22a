use std::net::{IpAddr, ToSocketAddrs};

use crate::dns::{self, Resolver};
use crate::domain::Domain;
use crate::error::{ProvisionError, ProvisionResult};

/// Resolver backed by the host's own name service (`/etc/hosts`,
/// `resolv.conf`, nsswitch).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    fn resolve(&self, domain: &Domain) -> ProvisionResult<IpAddr> {
        let unresolved = |reason: String| ProvisionError::DnsUnresolved {
            domain: domain.to_string(),
            reason,
        };

        let addrs: Vec<IpAddr> = (domain.as_str(), 0)
            .to_socket_addrs()
            .map_err(|e| unresolved(e.to_string()))?
            .map(|sa| sa.ip())
            .collect();

        dns::preferred_address(&addrs).ok_or_else(|| unresolved("no addresses returned".into()))
    }
}
