//! Per-host slot accounting.

use std::collections::BTreeMap;

use serde::Serialize;

use fleetstat_data::{HostId, HostRecord, InstanceRecord};

use crate::error::{ReportError, ReportResult};

/// Capacity figures for one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotStats {
    pub total: u32,
    pub used: u32,
    pub available: u32,
}

/// Slot stats per host id.
pub type SlotUsage = BTreeMap<HostId, SlotStats>;

/// Count used and available slots for every host.
///
/// One instance consumes one slot. A host with more instances than slots
/// fails the whole computation with [`ReportError::SlotOverflow`]; no
/// partial usage map is returned and nothing is clamped.
pub fn slot_usage(hosts: &[HostRecord], instances: &[InstanceRecord]) -> ReportResult<SlotUsage> {
    let mut usage = SlotUsage::new();
    for host in hosts {
        let used = instances
            .iter()
            .filter(|instance| instance.host == host.id)
            .count() as u32;

        if used > host.slots {
            return Err(ReportError::SlotOverflow {
                host: host.id.clone(),
                used,
                total: host.slots,
            });
        }

        usage.insert(
            host.id.clone(),
            SlotStats {
                total: host.slots,
                used,
                available: host.slots - used,
            },
        );
    }
    Ok(usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_host(id: &str, slots: u32) -> HostRecord {
        HostRecord {
            id: id.to_string(),
            slots,
            datacentre: "dc1".to_string(),
        }
    }

    fn make_instance(id: &str, host: &str) -> InstanceRecord {
        InstanceRecord {
            id: id.to_string(),
            customer: "c1".to_string(),
            host: host.to_string(),
        }
    }

    #[test]
    fn counts_used_and_available() {
        let hosts = vec![make_host("host1", 10), make_host("host2", 5)];
        let instances = vec![
            make_instance("i1", "host1"),
            make_instance("i2", "host1"),
            make_instance("i3", "host2"),
        ];

        let usage = slot_usage(&hosts, &instances).unwrap();
        assert_eq!(
            usage["host1"],
            SlotStats {
                total: 10,
                used: 2,
                available: 8
            }
        );
        assert_eq!(
            usage["host2"],
            SlotStats {
                total: 5,
                used: 1,
                available: 4
            }
        );
    }

    #[test]
    fn used_plus_available_equals_total() {
        let hosts = vec![make_host("host1", 7)];
        let instances = vec![make_instance("i1", "host1"), make_instance("i2", "host1")];

        let usage = slot_usage(&hosts, &instances).unwrap();
        for stats in usage.values() {
            assert_eq!(stats.used + stats.available, stats.total);
            assert!(stats.used <= stats.total);
        }
    }

    #[test]
    fn unplaced_host_is_fully_available() {
        let hosts = vec![make_host("host1", 3)];
        let usage = slot_usage(&hosts, &[]).unwrap();
        assert_eq!(usage["host1"].available, 3);
    }

    #[test]
    fn overflow_fails_with_the_offending_counts() {
        let hosts = vec![make_host("hostA", 1)];
        let instances = vec![make_instance("i1", "hostA"), make_instance("i2", "hostA")];

        let err = slot_usage(&hosts, &instances).unwrap_err();
        assert!(matches!(
            err,
            ReportError::SlotOverflow { ref host, used: 2, total: 1 } if host == "hostA"
        ));
        assert_eq!(err.to_string(), "host [hostA] slots 2/1");
    }

    #[test]
    fn instances_on_unknown_hosts_are_not_counted() {
        // Slot accounting only looks at hosts in the host dataset; the
        // datacentre clustering is where an unknown host is fatal.
        let hosts = vec![make_host("host1", 2)];
        let instances = vec![make_instance("i1", "hostZ")];

        let usage = slot_usage(&hosts, &instances).unwrap();
        assert_eq!(usage["host1"].used, 0);
    }
}
