use anyhow::{Context, Result, bail};
use featdeck::domain::config::PanelConfig;
use featdeck::{HtmlPage, MountOutcome, mount};
use std::fs;
use std::path::Path;
use tracing::info;

/// Mounts the panel into the HTML page at `file`.
///
/// Writes to `output` when given, otherwise back to `file`. An already mounted
/// page is left untouched unless a separate output was requested.
///
/// # Errors
/// Returns an error if the page cannot be read or written, or is a fragment without a body.
pub fn inject_panel(
    file: &Path,
    output: Option<&Path>,
    force: bool,
    panel: &PanelConfig,
) -> Result<()> {
    if !panel.auto_mount && !force {
        info!(file = %file.display(), "auto-mount disabled, skipping");
        println!("Skipped {}: panel.auto_mount is disabled (use --force)", file.display());
        return Ok(());
    }

    let html =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let mut page = HtmlPage::new(html);

    let outcome = mount(&mut page);
    if outcome == MountOutcome::NoRoot {
        bail!("{} is not an HTML document with a body to mount the panel into", file.display());
    }

    let target = output.unwrap_or(file);
    if outcome == MountOutcome::Mounted || output.is_some() {
        fs::write(target, page.as_str())
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }

    info!(%outcome, target = %target.display(), "panel injection finished");
    println!("{outcome}: {}", target.display());
    Ok(())
}
