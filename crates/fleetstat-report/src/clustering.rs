//! Per-customer clustering percentages.
//!
//! For every customer, the percentage of their instances that falls on each
//! host (host clustering) or in each datacentre (datacentre clustering).
//! Both computations are structurally identical; they differ only in the
//! cluster key derived from each instance.
//!
//! Percentages are rounded to two decimals, half away from zero. Result
//! maps are `BTreeMap` so iteration order, and anything rendered from it,
//! is deterministic.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use fleetstat_data::{CustomerId, HostRecord, InstanceRecord};

use crate::error::{ReportError, ReportResult};

/// One customer's spread across a set of cluster keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSpread {
    /// How many instances this customer has in the snapshot.
    pub total_instances: u32,
    /// Cluster key (host id or datacentre id) to percentage of this
    /// customer's instances, 0 excluded, summing to 100 within rounding.
    pub shares: BTreeMap<String, f64>,
}

/// Per-customer clustering, keyed by customer id.
///
/// A customer with zero instances never appears.
pub type ClusteringResult = BTreeMap<CustomerId, CustomerSpread>;

/// Percentage of each customer's instances located on each host.
pub fn host_clustering(instances: &[InstanceRecord]) -> ClusteringResult {
    let pairs = instances
        .iter()
        .map(|instance| (instance.customer.as_str(), instance.host.as_str()))
        .collect();
    tally(pairs)
}

/// Percentage of each customer's instances located in each datacentre.
///
/// Each instance's host is resolved by linear scan of the host list, first
/// match wins. An instance whose host is absent fails the whole
/// computation; it is never silently skipped.
pub fn datacentre_clustering(
    instances: &[InstanceRecord],
    hosts: &[HostRecord],
) -> ReportResult<ClusteringResult> {
    let mut pairs = Vec::with_capacity(instances.len());
    for instance in instances {
        let host = hosts
            .iter()
            .find(|host| host.id == instance.host)
            .ok_or_else(|| ReportError::UnresolvedHost {
                instance: instance.id.clone(),
                host: instance.host.clone(),
            })?;
        pairs.push((instance.customer.as_str(), host.datacentre.as_str()));
    }
    Ok(tally(pairs))
}

/// Count (customer, cluster key) pairs, then convert counts to percentages.
fn tally(pairs: Vec<(&str, &str)>) -> ClusteringResult {
    let mut counts: BTreeMap<&str, (u32, BTreeMap<&str, u32>)> = BTreeMap::new();
    for (customer, key) in pairs {
        let entry = counts.entry(customer).or_default();
        entry.0 += 1;
        *entry.1.entry(key).or_default() += 1;
    }

    debug!(customers = counts.len(), "tallied clustering counts");

    counts
        .into_iter()
        .map(|(customer, (total, per_key))| {
            let shares = per_key
                .into_iter()
                .map(|(key, count)| (key.to_string(), percentage(count, total)))
                .collect();
            (
                customer.to_string(),
                CustomerSpread {
                    total_instances: total,
                    shares,
                },
            )
        })
        .collect()
}

/// `count / total` as a percentage, rounded to two decimals half away
/// from zero.
fn percentage(count: u32, total: u32) -> f64 {
    let raw = f64::from(count) / f64::from(total) * 100.0;
    (raw * 100.0).round() / 100.0
}
