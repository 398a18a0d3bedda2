use fleetstat_report::{build_report, datacentre_clustering, host_clustering, slot_usage, write_report};

use crate::config::ResolvedPaths;

pub fn run(paths: &ResolvedPaths, json: bool) -> anyhow::Result<()> {
    let snapshot = fleetstat_data::load(&paths.hosts, &paths.instances)?;

    let hosts_spread = host_clustering(&snapshot.instances);
    let datacentre_spread = datacentre_clustering(&snapshot.instances, &snapshot.hosts)?;
    let usage = slot_usage(&snapshot.hosts, &snapshot.instances)?;

    if json {
        let dump = serde_json::json!({
            "host_clustering": hosts_spread,
            "datacentre_clustering": datacentre_spread,
            "slot_usage": usage,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    let report = build_report(&hosts_spread, &datacentre_spread, &usage);
    write_report(&paths.output, &report)?;

    println!("✓ Wrote {}", paths.output.display());
    Ok(())
}
