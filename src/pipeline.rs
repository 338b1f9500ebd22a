use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;

use tracing::{info, info_span};

use crate::certificate::CertificateIssuer;
use crate::certificate::certbot::Certbot;
use crate::dns::system::SystemResolver;
use crate::dns::{self, Resolver};
use crate::domain::Domain;
use crate::error::ProvisionResult;
use crate::layout::Layout;
use crate::packages::apt::Apt;
use crate::packages::{self, PackageInstaller};
use crate::preflight::{self, EffectiveUser, PrivilegeCheck};
use crate::site;
use crate::vhost::VirtualHost;
use crate::webroot;
use crate::webserver::WebServerController;
use crate::webserver::nginx::Nginx;

/// Steps of a run, in execution order. A failing step ends the
/// run; nothing is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Preflight,
    DnsCheck,
    Install,
    WebRoot,
    Config,
    Certificate,
}

impl Stage {
    pub const ALL: [Self; 6] = [
        Self::Preflight,
        Self::DnsCheck,
        Self::Install,
        Self::WebRoot,
        Self::Config,
        Self::Certificate,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::DnsCheck => "dns",
            Self::Install => "install",
            Self::WebRoot => "webroot",
            Self::Config => "config",
            Self::Certificate => "certificate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub domain: Domain,
    pub ip: IpAddr,
    pub web_root: PathBuf,
    pub placeholder_written: bool,
    pub config: PathBuf,
    pub symlink_created: bool,
}

impl Provisioned {
    #[must_use]
    pub fn url(&self) -> String {
        self.domain.url()
    }
}

/// Provisioning pipeline for one domain: privilege and DNS
/// checks, packages, web root, Nginx site, certificate.
///
/// Every collaborator is swappable so the sequencing can run
/// against fakes and a sandboxed [`Layout`].
///
/// # Example
///
/// ```rust,no_run
/// use nginx_secure::{Domain, Pipeline};
///
/// fn main() -> anyhow::Result<()> {
///     let domain: Domain = "example.com".parse()?;
///     let report = Pipeline::system().run(&domain)?;
///     println!("{}", report.url());
///     Ok(())
/// }
/// ```
pub struct Pipeline {
    layout: Layout,
    privilege: Box<dyn PrivilegeCheck>,
    resolver: Box<dyn Resolver>,
    packages: Box<dyn PackageInstaller>,
    web_server: Box<dyn WebServerController>,
    issuer: Box<dyn CertificateIssuer>,
}

impl Pipeline {
    /// Pipeline wired to the real host: root check, system
    /// resolver, apt, nginx under systemd, certbot.
    #[must_use]
    pub fn system() -> Self {
        Self {
            layout: Layout::default(),
            privilege: Box::new(EffectiveUser::new()),
            resolver: Box::new(SystemResolver::new()),
            packages: Box::new(Apt::new()),
            web_server: Box::new(Nginx::new()),
            issuer: Box::new(Certbot::new()),
        }
    }

    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn privilege(mut self, check: impl PrivilegeCheck + 'static) -> Self {
        self.privilege = Box::new(check);
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub fn packages(mut self, installer: impl PackageInstaller + 'static) -> Self {
        self.packages = Box::new(installer);
        self
    }

    #[must_use]
    pub fn web_server(mut self, controller: impl WebServerController + 'static) -> Self {
        self.web_server = Box::new(controller);
        self
    }

    #[must_use]
    pub fn issuer(mut self, issuer: impl CertificateIssuer + 'static) -> Self {
        self.issuer = Box::new(issuer);
        self
    }

    /// Run every stage in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the stage that failed. Files written
    /// by earlier stages stay on disk.
    pub fn run(&self, domain: &Domain) -> ProvisionResult<Provisioned> {
        let _run = info_span!("provision", %domain).entered();

        run_stage(Stage::Preflight, || {
            preflight::check_privilege(self.privilege.as_ref())
        })?;

        let ip = run_stage(Stage::DnsCheck, || {
            dns::check_dns(self.resolver.as_ref(), domain)
        })?;

        run_stage(Stage::Install, || {
            packages::ensure_packages(self.packages.as_ref())
        })?;

        let root = run_stage(Stage::WebRoot, || {
            webroot::ensure_web_root(&self.layout, domain)
        })?;

        let files = run_stage(Stage::Config, || {
            let vhost = VirtualHost::for_domain(domain, &root.dir);
            let files = site::write_site(&self.layout, domain, &vhost)?;
            self.web_server.test_config()?;
            self.web_server.reload()?;
            Ok(files)
        })?;

        run_stage(Stage::Certificate, || self.issuer.issue(domain))?;

        Ok(Provisioned {
            domain: domain.clone(),
            ip,
            web_root: root.dir,
            placeholder_written: root.placeholder_written,
            config: files.config,
            symlink_created: files.symlink_created,
        })
    }
}

fn run_stage<T>(stage: Stage, step: impl FnOnce() -> ProvisionResult<T>) -> ProvisionResult<T> {
    let _span = info_span!("stage", %stage).entered();
    let out = step()?;
    info!("{stage} done");
    Ok(out)
}
