use std::cell::RefCell;
use std::net::{IpAddr, Ipv4Addr};
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::rc::Rc;

use nginx_secure::certificate::CertificateIssuer;
use nginx_secure::dns::Resolver;
use nginx_secure::packages::PackageInstaller;
use nginx_secure::preflight::PrivilegeCheck;
use nginx_secure::webserver::WebServerController;
use nginx_secure::{Domain, Layout, Pipeline, ProvisionError, ProvisionResult};

type Journal = Rc<RefCell<Vec<String>>>;

fn failed(command: &str) -> ProvisionError {
    ProvisionError::CommandFailed {
        command: command.to_string(),
        status: ExitStatus::from_raw(1 << 8),
    }
}

struct Privilege {
    root: bool,
    journal: Journal,
}

impl PrivilegeCheck for Privilege {
    fn is_privileged(&self) -> bool {
        self.journal.borrow_mut().push("privilege".into());
        self.root
    }
}

struct FakeResolver {
    ip: Option<IpAddr>,
    journal: Journal,
}

impl Resolver for FakeResolver {
    fn resolve(&self, domain: &Domain) -> ProvisionResult<IpAddr> {
        self.journal.borrow_mut().push(format!("resolve {domain}"));
        self.ip.ok_or_else(|| ProvisionError::DnsUnresolved {
            domain: domain.to_string(),
            reason: "NXDOMAIN".into(),
        })
    }
}

struct FakeApt {
    fail_install: bool,
    journal: Journal,
}

impl PackageInstaller for FakeApt {
    fn refresh_index(&self) -> ProvisionResult<()> {
        self.journal.borrow_mut().push("apt update".into());
        Ok(())
    }

    fn install(&self, packages: &[&str]) -> ProvisionResult<()> {
        let line = format!("apt install {}", packages.join(" "));
        self.journal.borrow_mut().push(line.clone());
        if self.fail_install {
            Err(failed(&line))
        } else {
            Ok(())
        }
    }
}

struct FakeNginx {
    config: PathBuf,
    symlink: PathBuf,
    fail_test: bool,
    journal: Journal,
}

impl WebServerController for FakeNginx {
    fn test_config(&self) -> ProvisionResult<()> {
        self.journal.borrow_mut().push(format!(
            "nginx -t config={} link={}",
            self.config.exists(),
            self.symlink.symlink_metadata().is_ok()
        ));
        if self.fail_test {
            Err(failed("nginx -t"))
        } else {
            Ok(())
        }
    }

    fn reload(&self) -> ProvisionResult<()> {
        self.journal.borrow_mut().push("reload".into());
        Ok(())
    }
}

struct FakeCertbot {
    fail: bool,
    journal: Journal,
}

impl CertificateIssuer for FakeCertbot {
    fn issue(&self, domain: &Domain) -> ProvisionResult<()> {
        self.journal
            .borrow_mut()
            .push(format!("certbot {domain} {}", domain.www()));
        if self.fail {
            Err(failed("certbot"))
        } else {
            Ok(())
        }
    }
}

/// Knobs for one simulated host.
#[derive(Default)]
struct Host {
    unprivileged: bool,
    unresolvable: bool,
    fail_install: bool,
    fail_config_test: bool,
    fail_certificate: bool,
}

struct Sandbox {
    tmp: tempfile::TempDir,
    layout: Layout,
    journal: Journal,
}

impl Sandbox {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let available = tmp.path().join("sites-available");
        let enabled = tmp.path().join("sites-enabled");
        std::fs::create_dir_all(&available).unwrap();
        std::fs::create_dir_all(&enabled).unwrap();
        let layout = Layout::new()
            .sites_available(available)
            .sites_enabled(enabled)
            .web_root_template(&format!("{}/www/{{domain}}/html", tmp.path().display()));

        Self {
            tmp,
            layout,
            journal: Rc::default(),
        }
    }

    fn pipeline(&self, domain: &Domain, host: &Host) -> Pipeline {
        let j = &self.journal;
        Pipeline::system()
            .layout(self.layout.clone())
            .privilege(Privilege {
                root: !host.unprivileged,
                journal: Rc::clone(j),
            })
            .resolver(FakeResolver {
                ip: (!host.unresolvable).then_some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))),
                journal: Rc::clone(j),
            })
            .packages(FakeApt {
                fail_install: host.fail_install,
                journal: Rc::clone(j),
            })
            .web_server(FakeNginx {
                config: self.layout.config_path(domain),
                symlink: self.layout.symlink_path(domain),
                fail_test: host.fail_config_test,
                journal: Rc::clone(j),
            })
            .issuer(FakeCertbot {
                fail: host.fail_certificate,
                journal: Rc::clone(j),
            })
    }

    fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    fn www_dir(&self) -> PathBuf {
        self.tmp.path().join("www")
    }
}

fn domain() -> Domain {
    "test.example".parse().unwrap()
}

#[test]
fn end_to_end_runs_every_stage_in_order() {
    let sandbox = Sandbox::new();
    let d = domain();

    let report = sandbox.pipeline(&d, &Host::default()).run(&d).unwrap();

    assert_eq!(
        sandbox.journal(),
        vec![
            "privilege",
            "resolve test.example",
            "apt update",
            "apt install nginx certbot python3-certbot-nginx",
            "nginx -t config=true link=true",
            "reload",
            "certbot test.example www.test.example",
        ]
    );

    let index = sandbox.layout.index_path(&d);
    assert!(std::fs::read_to_string(index).unwrap().contains("test.example"));

    let config = std::fs::read_to_string(sandbox.layout.config_path(&d)).unwrap();
    assert!(config.contains("server_name test.example www.test.example;"));
    assert!(config.contains(&format!("root {};", report.web_root.display())));

    let link = std::fs::read_link(sandbox.layout.symlink_path(&d)).unwrap();
    assert_eq!(link, sandbox.layout.config_path(&d));

    assert_eq!(report.ip, IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));
    assert!(report.placeholder_written);
    assert!(report.symlink_created);
    assert_eq!(report.url(), "https://test.example/");
}

#[test]
fn unprivileged_run_touches_nothing() {
    let sandbox = Sandbox::new();
    let d = domain();
    let host = Host {
        unprivileged: true,
        ..Host::default()
    };

    let err = sandbox.pipeline(&d, &host).run(&d).unwrap_err();

    assert!(matches!(err, ProvisionError::NotPrivileged));
    assert_eq!(sandbox.journal(), vec!["privilege"]);
    assert!(!sandbox.www_dir().exists());
    assert!(!sandbox.layout.config_path(&d).exists());
}

#[test]
fn dns_failure_writes_nothing() {
    let sandbox = Sandbox::new();
    let d = domain();
    let host = Host {
        unresolvable: true,
        ..Host::default()
    };

    let err = sandbox.pipeline(&d, &host).run(&d).unwrap_err();

    assert!(matches!(err, ProvisionError::DnsUnresolved { .. }));
    assert_eq!(sandbox.journal(), vec!["privilege", "resolve test.example"]);
    assert!(!sandbox.www_dir().exists());
    assert!(!sandbox.layout.config_path(&d).exists());
    assert!(sandbox.layout.symlink_path(&d).symlink_metadata().is_err());
}

#[test]
fn install_failure_stops_before_web_root() {
    let sandbox = Sandbox::new();
    let d = domain();
    let host = Host {
        fail_install: true,
        ..Host::default()
    };

    let err = sandbox.pipeline(&d, &host).run(&d).unwrap_err();

    assert_eq!(
        err.to_string(),
        "command failed: apt install nginx certbot python3-certbot-nginx"
    );
    assert!(!sandbox.www_dir().exists());
}

#[test]
fn config_test_failure_leaves_files_and_skips_reload() {
    let sandbox = Sandbox::new();
    let d = domain();
    let host = Host {
        fail_config_test: true,
        ..Host::default()
    };

    let err = sandbox.pipeline(&d, &host).run(&d).unwrap_err();

    assert!(matches!(err, ProvisionError::CommandFailed { .. }));
    let journal = sandbox.journal();
    assert_eq!(journal.last().unwrap(), "nginx -t config=true link=true");
    assert!(!journal.iter().any(|l| l == "reload"));
    assert!(sandbox.layout.config_path(&d).exists());
    assert!(sandbox.layout.symlink_path(&d).symlink_metadata().is_ok());
}

#[test]
fn certificate_failure_is_fatal() {
    let sandbox = Sandbox::new();
    let d = domain();
    let host = Host {
        fail_certificate: true,
        ..Host::default()
    };

    let err = sandbox.pipeline(&d, &host).run(&d).unwrap_err();

    assert_eq!(err.to_string(), "command failed: certbot");
    assert_eq!(
        sandbox.journal().last().unwrap(),
        "certbot test.example www.test.example"
    );
}

#[test]
fn rerun_preserves_index_and_link() {
    let sandbox = Sandbox::new();
    let d = domain();

    sandbox.pipeline(&d, &Host::default()).run(&d).unwrap();
    let index = sandbox.layout.index_path(&d);
    std::fs::write(&index, "<p>real content</p>").unwrap();

    let second = sandbox.pipeline(&d, &Host::default()).run(&d).unwrap();

    assert!(!second.placeholder_written);
    assert!(!second.symlink_created);
    assert_eq!(std::fs::read_to_string(&index).unwrap(), "<p>real content</p>");
}

#[test]
fn rerun_overwrites_config() {
    let sandbox = Sandbox::new();
    let d = domain();
    std::fs::write(sandbox.layout.config_path(&d), "server { broken").unwrap();

    sandbox.pipeline(&d, &Host::default()).run(&d).unwrap();

    let config = std::fs::read_to_string(sandbox.layout.config_path(&d)).unwrap();
    assert!(!config.contains("broken"));
    assert!(config.contains("www.test.example"));
}

#[test]
fn repointed_link_is_left_alone() {
    let sandbox = Sandbox::new();
    let d = domain();
    let other = sandbox.layout.sites_available.join("other");
    std::os::unix::fs::symlink(&other, sandbox.layout.symlink_path(&d)).unwrap();

    let report = sandbox.pipeline(&d, &Host::default()).run(&d).unwrap();

    assert!(!report.symlink_created);
    assert_eq!(
        std::fs::read_link(sandbox.layout.symlink_path(&d)).unwrap(),
        other
    );
}
