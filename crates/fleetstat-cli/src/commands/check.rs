use crate::config::ResolvedPaths;

pub fn run(paths: &ResolvedPaths) -> anyhow::Result<()> {
    let snapshot = fleetstat_data::load(&paths.hosts, &paths.instances)?;
    println!(
        "✓ {} hosts, {} instances",
        snapshot.hosts.len(),
        snapshot.instances.len()
    );
    Ok(())
}
