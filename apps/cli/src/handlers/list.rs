use anyhow::Result;
use featdeck::{REGISTRY, StatusSet};

/// Lists registry entries, optionally filtered by status.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn list_features(status: Option<&str>, json: bool) -> Result<()> {
    let statuses = status.map_or(StatusSet::ALL, StatusSet::parse_list);
    let entries: Vec<_> = REGISTRY.select(statuses).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("ℹ️ No features match the requested statuses.");
        return Ok(());
    }

    println!("{:<32} {:<6} {:<12} {:<40}", "Feature", "Ready", "Status", "Reference");
    println!("{:-<92}", "");
    for entry in &entries {
        let descriptor = entry.descriptor;
        println!(
            "{:<32} {:<6} {:<12} {:<40}",
            entry.path().to_string(),
            if descriptor.ready { "yes" } else { "no" },
            descriptor.status.as_str(),
            descriptor.reference().unwrap_or("-"),
        );
    }
    println!("\n{} of {} features", entries.len(), REGISTRY.len());

    Ok(())
}
