use anyhow::{Context, Result, bail};
use featdeck::domain::config::PanelItemConfig;
use featdeck::{FeatureDescriptor, PanelItem, REGISTRY};

/// Prints the badge for a registry path or an ad-hoc JSON descriptor.
///
/// # Errors
/// Returns an error for malformed descriptor JSON, or for an unknown path in strict mode.
pub fn badge(path: Option<&str>, descriptor: Option<&str>, strict: bool) -> Result<()> {
    let html = match (descriptor, path) {
        (Some(json), _) => {
            let descriptor: FeatureDescriptor =
                serde_json::from_str(json).context("Invalid descriptor JSON")?;
            featdeck::badge(&descriptor)
        },
        (None, Some(path)) if strict => featdeck::badge(REGISTRY.require(path)?),
        (None, Some(path)) => featdeck::badge_for(path),
        (None, None) => bail!("Either a feature path or --descriptor is required"),
    };

    emit(&html);
    Ok(())
}

/// Prints the compact (or inline) indicator for `path`.
///
/// # Errors
/// Returns an error for an unknown path in strict mode.
pub fn indicator(path: &str, inline: bool, strict: bool) -> Result<()> {
    if strict {
        REGISTRY.require(path)?;
    }
    let html =
        if inline { featdeck::inline_indicator(path) } else { featdeck::compact_indicator(path) };

    emit(&html);
    Ok(())
}

/// Prints the panel for `items`, or for the configured items when none are given.
///
/// # Errors
/// Returns an error for an unknown path in strict mode.
pub fn panel(items: &[String], configured: &[PanelItemConfig], strict: bool) -> Result<()> {
    let items: Vec<PanelItem<'_>> = if items.is_empty() {
        configured.iter().map(from_config).collect()
    } else {
        items.iter().map(|item| parse_item(item)).collect()
    };

    if strict {
        for item in &items {
            REGISTRY.require(item.path())?;
        }
    }

    emit(&featdeck::panel(items));
    Ok(())
}

/// `Label=path` or a bare `path`. Paths never contain `=`, so the last one splits.
fn parse_item(raw: &str) -> PanelItem<'_> {
    raw.rsplit_once('=')
        .map_or(PanelItem::Path(raw), |(label, path)| PanelItem::Labeled { label, path })
}

fn from_config(item: &PanelItemConfig) -> PanelItem<'_> {
    item.label.as_deref().map_or(PanelItem::Path(&item.path), |label| PanelItem::Labeled {
        label,
        path: &item.path,
    })
}

fn emit(html: &str) {
    let html = html.trim();
    if !html.is_empty() {
        println!("{html}");
    }
}
