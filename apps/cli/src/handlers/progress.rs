use anyhow::Result;
use featdeck::REGISTRY;
use featdeck::registry::GroupProgress;

/// Prints ready/total per group plus the overall line.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn show_progress(json: bool) -> Result<()> {
    let progress = REGISTRY.progress();
    let overall = progress.overall();

    if json {
        let value = serde_json::json!({ "groups": progress.groups, "overall": overall });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<12} {:>7} {:>7} {:>8}", "Group", "Ready", "Total", "Percent");
    println!("{:-<37}", "");
    for group in &progress.groups {
        print_row(group.group, group);
    }
    println!("{:-<37}", "");
    print_row("overall", &overall);

    Ok(())
}

fn print_row(name: &str, group: &GroupProgress) {
    println!(
        "{:<12} {:>7} {:>7} {:>7}%",
        name,
        group.ready,
        group.total,
        group.ready_percent()
    );
}
