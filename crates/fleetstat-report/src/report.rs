//! Report selection, rendering, and output.
//!
//! Picks the customer with the single largest host-concentration
//! percentage, the customer with the single largest datacentre-concentration
//! percentage, and the hosts with spare slots, then renders the fixed
//! three-line format:
//!
//! ```text
//! HostClustering:<customerID>,<percentage>
//! DatacentreClustering:<customerID>,<percentage>
//! AvailableHosts:<hostID>,<hostID>,...
//! ```
//!
//! A line is omitted entirely when its value is absent. Selection is
//! deterministic: equal percentages resolve to the lexicographically
//! smallest customer id, and available hosts are listed in ascending id
//! order.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use fleetstat_data::{CustomerId, HostId};

use crate::clustering::ClusteringResult;
use crate::error::{ReportError, ReportResult};
use crate::slots::SlotUsage;

/// A customer paired with their peak concentration percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerShare {
    pub customer: CustomerId,
    pub percentage: f64,
}

/// The derived report, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Customer with the largest single per-host percentage.
    pub host_clustering: Option<CustomerShare>,
    /// Customer with the largest single per-datacentre percentage.
    pub datacentre_clustering: Option<CustomerShare>,
    /// Hosts with at least one free slot, ascending by host id.
    pub available_hosts: Vec<HostId>,
}

/// Select the report content from the three computed statistics.
pub fn build_report(
    host_clustering: &ClusteringResult,
    datacentre_clustering: &ClusteringResult,
    slot_usage: &SlotUsage,
) -> Report {
    // SlotUsage is a BTreeMap, so this iterates ascending by host id.
    let available_hosts = slot_usage
        .iter()
        .filter(|(_, stats)| stats.available > 0)
        .map(|(host, _)| host.clone())
        .collect();

    Report {
        host_clustering: top_share(host_clustering),
        datacentre_clustering: top_share(datacentre_clustering),
        available_hosts,
    }
}

/// The customer whose highest single share is largest.
///
/// Iteration is ascending by customer id and only a strictly larger
/// percentage replaces the candidate, so ties resolve to the
/// lexicographically smallest customer.
fn top_share(clustering: &ClusteringResult) -> Option<CustomerShare> {
    let mut best: Option<CustomerShare> = None;
    for (customer, spread) in clustering {
        let peak = spread.shares.values().copied().fold(0.0, f64::max);
        let replaces = match &best {
            None => true,
            Some(current) => peak > current.percentage,
        };
        if replaces {
            best = Some(CustomerShare {
                customer: customer.clone(),
                percentage: peak,
            });
        }
    }
    best
}

impl Report {
    /// Render the fixed output format: present lines only, newline-joined,
    /// no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        if let Some(top) = &self.host_clustering {
            lines.push(format!(
                "HostClustering:{},{}",
                top.customer,
                format_percentage(top.percentage)
            ));
        }
        if let Some(top) = &self.datacentre_clustering {
            lines.push(format!(
                "DatacentreClustering:{},{}",
                top.customer,
                format_percentage(top.percentage)
            ));
        }
        if !self.available_hosts.is_empty() {
            lines.push(format!("AvailableHosts:{}", self.available_hosts.join(",")));
        }
        lines.join("\n")
    }
}

/// Integral percentages keep one decimal (`60.0`); fractional ones print
/// their two-decimal rounding (`66.67`).
fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Write the rendered report to the output path.
pub fn write_report(path: &Path, report: &Report) -> ReportResult<()> {
    std::fs::write(path, report.render()).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote statistics report");
    Ok(())
}
