//! Typed domain records for a placement snapshot.
//!
//! These are built only after validation has passed over the raw rows, so
//! conversions here re-read cells that are already known to be well-formed.

use serde::{Deserialize, Serialize};

use crate::row::{RawRow, RawValue};
use crate::schema;
use crate::validate::Violation;

/// Unique identifier for a compute host.
pub type HostId = String;

/// Unique identifier for a VM instance.
pub type InstanceId = String;

/// Unique identifier for a customer.
pub type CustomerId = String;

/// Unique identifier for a datacentre.
pub type DatacentreId = String;

/// A compute host with a fixed slot capacity and datacentre location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub id: HostId,
    pub slots: u32,
    pub datacentre: DatacentreId,
}

/// A workload unit placed on exactly one host, owned by one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub id: InstanceId,
    pub customer: CustomerId,
    pub host: HostId,
}

/// One fully loaded placement snapshot.
///
/// Owns both record lists for the lifetime of a run; the reporting layer
/// only ever borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hosts: Vec<HostRecord>,
    pub instances: Vec<InstanceRecord>,
}

fn text_cell(row: &RawRow, name: &'static str) -> Result<String, Violation> {
    match row.get(name) {
        Some(RawValue::Text(text)) => Ok(text.clone()),
        Some(RawValue::Overflow(values)) => Err(Violation::NonTextValue {
            name: name.to_string(),
            value: format!("{values:?}"),
        }),
        None => Err(Violation::MissingFields {
            fields: vec![name.to_string()],
        }),
    }
}

fn count_cell(row: &RawRow, name: &'static str) -> Result<u32, Violation> {
    let text = text_cell(row, name)?;
    text.parse().map_err(|err: std::num::ParseIntError| {
        Violation::InvalidField {
            name: name.to_string(),
            value: text,
            reason: err.to_string(),
        }
    })
}

impl HostRecord {
    /// Build a typed host record from a validated raw row.
    pub fn from_raw(row: &RawRow) -> Result<Self, Violation> {
        Ok(Self {
            id: text_cell(row, schema::HOST_ID)?,
            slots: count_cell(row, schema::NUMBER_OF_SLOTS)?,
            datacentre: text_cell(row, schema::DATACENTRE_ID)?,
        })
    }
}

impl InstanceRecord {
    /// Build a typed instance record from a validated raw row.
    pub fn from_raw(row: &RawRow) -> Result<Self, Violation> {
        Ok(Self {
            id: text_cell(row, schema::INSTANCE_ID)?,
            customer: text_cell(row, schema::CUSTOMER_ID)?,
            host: text_cell(row, schema::HOST_ID)?,
        })
    }
}
