use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::manifest::Manifest;
use crate::web::{GreetingPanel, PageShell};

pub const HEADER_FILE: &str = "header.html";
pub const GREETING_FILE: &str = "greeting.html";
pub const INDEX_FILE: &str = "index.html";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes the rendered pages and manifest into `dir`, creating it if needed.
///
/// Returns the written paths in the order header, greeting, index, manifest.
pub fn export_site(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Error creating output directory {}", dir.display()))?;

    let shell = PageShell::default();
    let greeting = GreetingPanel::default().render()?;

    let files = [
        (HEADER_FILE, shell.render()?),
        (GREETING_FILE, greeting.clone()),
        (INDEX_FILE, shell.render_with(&greeting)?),
        (MANIFEST_FILE, Manifest::current().to_json()?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Error writing {}", path.display()))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
