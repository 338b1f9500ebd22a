//! Secure a domain with Nginx and Let's Encrypt in one command.
//!
//! `nginx-secure` takes a single domain name and brings a Linux
//! host from "DNS points here" to "serving HTTPS": it checks
//! privileges and DNS, installs Nginx and certbot, creates a web
//! root with a placeholder page, writes and enables an Nginx
//! virtual host, reloads Nginx and asks Let's Encrypt for a
//! certificate.
//!
//! # Usage
//!
//! ```sh
//! sudo nginx-secure --domain example.com
//! ```
//!
//! # Architecture
//!
//! A run is a [`Pipeline`] of six forward-only stages
//! ([`Stage`]). The first failing stage aborts the run; nothing
//! already written is rolled back.
//!
//! 1. **Preflight** - must run as root
//! 2. **DNS** - the domain must resolve
//! 3. **Install** - `apt update`, then install `nginx`, `certbot`
//!    and `python3-certbot-nginx`
//! 4. **Web root** - `/var/www/<domain>/html` with an
//!    `index.html` placeholder, never overwritten
//! 5. **Config** - `/etc/nginx/sites-available/<domain>`, linked
//!    from `sites-enabled`, then `nginx -t` and a reload
//! 6. **Certificate** - `certbot --nginx` in batch mode with an
//!    HTTPS redirect
//!
//! External tools sit behind traits ([`PrivilegeCheck`],
//! [`Resolver`], [`PackageInstaller`], [`WebServerController`],
//! [`CertificateIssuer`]) and filesystem locations come from a
//! [`Layout`], so the whole sequence can run in a sandbox:
//!
//! ```
//! use nginx_secure::{Domain, Layout, VirtualHost, nginxconf};
//!
//! let domain: Domain = "example.com".parse().unwrap();
//! let layout = Layout::default();
//! let vhost = VirtualHost::for_domain(&domain, layout.web_root(&domain));
//! let config = nginxconf::render(&vhost);
//!
//! assert!(config.contains("server_name example.com www.example.com;"));
//! assert!(config.contains("root /var/www/example.com/html;"));
//! ```
//!
//! [`PrivilegeCheck`]: preflight::PrivilegeCheck
//! [`Resolver`]: dns::Resolver
//! [`PackageInstaller`]: packages::PackageInstaller
//! [`WebServerController`]: webserver::WebServerController
//! [`CertificateIssuer`]: certificate::CertificateIssuer

// Allow noisy pedantic lints that don't add value for a
// provisioning tool crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod certificate;
pub mod cli;
pub mod cmd;
pub mod dns;
pub mod domain;
pub mod error;
pub mod layout;
pub mod logging;
pub mod nginxconf;
pub mod packages;
pub mod pipeline;
pub mod preflight;
pub mod site;
pub mod vhost;
pub mod webroot;
pub mod webserver;

pub use certificate::certbot::Certbot;
pub use dns::system::SystemResolver;
pub use domain::Domain;
pub use error::{ProvisionError, ProvisionResult};
pub use layout::Layout;
pub use packages::apt::Apt;
pub use pipeline::{Pipeline, Provisioned, Stage};
pub use preflight::EffectiveUser;
pub use vhost::VirtualHost;
pub use webserver::nginx::Nginx;
