use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::Domain;
use crate::error::{ProvisionError, ProvisionResult};
use crate::layout::Layout;
use crate::nginxconf;
use crate::vhost::VirtualHost;

/// Files written by [`write_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFiles {
    pub config: PathBuf,
    pub symlink: PathBuf,
    /// `false` when something already sat at the link path.
    pub symlink_created: bool,
}

/// Write the server block into `sites-available`, replacing any
/// previous version, and link it from `sites-enabled` unless an
/// entry with that name is already there.
///
/// An existing entry is left alone even if it points elsewhere or
/// dangles. A link that was deleted is created again.
pub fn write_site(
    layout: &Layout,
    domain: &Domain,
    vhost: &VirtualHost,
) -> ProvisionResult<SiteFiles> {
    let config = layout.config_path(domain);
    let symlink = layout.symlink_path(domain);

    std::fs::write(&config, nginxconf::render(vhost))
        .map_err(ProvisionError::filesystem(&config))?;
    info!("Wrote {}", config.display());

    let symlink_created = if entry_exists(&symlink) {
        info!("Keeping existing {}", symlink.display());
        false
    } else {
        std::os::unix::fs::symlink(&config, &symlink)
            .map_err(ProvisionError::filesystem(&symlink))?;
        info!("Linked {} -> {}", symlink.display(), config.display());
        true
    };

    Ok(SiteFiles {
        config,
        symlink,
        symlink_created,
    })
}

/// Existence of the link itself, without following it.
fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}
