//! Fixed field schemas for the two input datasets.

/// Field name of a host's identifier.
pub const HOST_ID: &str = "hostID";
/// Field name of a host's slot capacity.
pub const NUMBER_OF_SLOTS: &str = "numberOfSlots";
/// Field name of a host's datacentre.
pub const DATACENTRE_ID: &str = "datacentreID";
/// Field name of an instance's identifier.
pub const INSTANCE_ID: &str = "instanceID";
/// Field name of an instance's owning customer.
pub const CUSTOMER_ID: &str = "customerID";

/// Semantic type expected for a field's cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any text.
    Text,
    /// Text that must parse as a non-negative integer.
    Count,
}

/// An ordered list of expected fields for one input dataset.
///
/// Order matters: cells are matched to fields positionally, and surplus
/// cells past the last field are attributed to the overflow key.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(&'static str, FieldKind)>,
}

impl Schema {
    pub fn new(fields: Vec<(&'static str, FieldKind)>) -> Self {
        Self { fields }
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Expected kind of the named field, if declared.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }
}

/// Schema of the host dataset: `hostID, numberOfSlots, datacentreID`.
pub fn hosts() -> Schema {
    Schema::new(vec![
        (HOST_ID, FieldKind::Text),
        (NUMBER_OF_SLOTS, FieldKind::Count),
        (DATACENTRE_ID, FieldKind::Text),
    ])
}

/// Schema of the instance dataset: `instanceID, customerID, hostID`.
pub fn instances() -> Schema {
    Schema::new(vec![
        (INSTANCE_ID, FieldKind::Text),
        (CUSTOMER_ID, FieldKind::Text),
        (HOST_ID, FieldKind::Text),
    ])
}
