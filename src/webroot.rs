use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::domain::Domain;
use crate::error::{ProvisionError, ProvisionResult};
use crate::layout::Layout;

/// Outcome of [`ensure_web_root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebRoot {
    pub dir: PathBuf,
    pub index: PathBuf,
    /// `false` when an `index.html` was already in place.
    pub placeholder_written: bool,
}

/// Body of the page served until real content is uploaded.
#[must_use]
pub fn placeholder_page(domain: &Domain) -> String {
    format!("<h1>Welcome to {domain} - Secured by Let's Encrypt</h1>")
}

/// Create the domain's document root and drop a placeholder page
/// into it unless an `index.html` already exists.
pub fn ensure_web_root(layout: &Layout, domain: &Domain) -> ProvisionResult<WebRoot> {
    let dir = layout.web_root(domain);
    let index = layout.index_path(domain);

    std::fs::create_dir_all(&dir).map_err(ProvisionError::filesystem(&dir))?;

    // Never replaces an existing index.html.
    let placeholder_written = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&index)
    {
        Ok(mut file) => {
            file.write_all(placeholder_page(domain).as_bytes())
                .map_err(ProvisionError::filesystem(&index))?;
            info!("Wrote placeholder page {}", index.display());
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            info!("Keeping existing {}", index.display());
            false
        }
        Err(e) => return Err(ProvisionError::filesystem(&index)(e)),
    };

    Ok(WebRoot {
        dir,
        index,
        placeholder_written,
    })
}
