//! Row validation against a field schema.
//!
//! The validator reports every structural and type defect it finds in a
//! row, not just the first. It never fails itself; callers decide whether
//! the collected violations are fatal and how to aggregate them across
//! rows and files.

use std::str::FromStr;

use thiserror::Error;

use crate::row::{OVERFLOW_KEY, RawRow, RawValue};
use crate::schema::{FieldKind, Schema};

/// A single schema violation found in one row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The row has more cells than the schema has fields.
    #[error("Too many values {values:?}")]
    TooManyValues { values: Vec<String> },

    /// The row is missing one or more declared fields.
    #[error("Missing fields {fields:?}")]
    MissingFields { fields: Vec<String> },

    /// A cell holds something other than a single text value.
    #[error("Invalid field [{name}] [{value}]")]
    NonTextValue { name: String, value: String },

    /// A cell failed to parse as the kind the schema expects.
    #[error("Invalid field <name> [{name}] <value> [{value}] <error> [{reason}]")]
    InvalidField {
        name: String,
        value: String,
        reason: String,
    },
}

/// Check one raw row against a schema, returning every violation found.
///
/// Cells under the overflow key are reported once as [`Violation::TooManyValues`]
/// and not flagged a second time as non-text values.
pub fn validate_row(row: &RawRow, schema: &Schema) -> Vec<Violation> {
    let mut violations = Vec::new();

    let overflowed = row.len() > schema.len();
    if overflowed {
        let values = match row.get(OVERFLOW_KEY) {
            Some(RawValue::Overflow(values)) => values.clone(),
            _ => Vec::new(),
        };
        violations.push(Violation::TooManyValues { values });
    }

    if row.len() < schema.len() {
        let fields: Vec<String> = schema
            .field_names()
            .filter(|name| !row.contains_key(*name))
            .map(str::to_string)
            .collect();
        violations.push(Violation::MissingFields { fields });
    }

    for (name, value) in row {
        if overflowed && name.as_str() == OVERFLOW_KEY {
            continue;
        }
        let text = match value {
            RawValue::Text(text) => text,
            RawValue::Overflow(values) => {
                violations.push(Violation::NonTextValue {
                    name: name.clone(),
                    value: format!("{values:?}"),
                });
                continue;
            }
        };
        if let Some(FieldKind::Count) = schema.kind_of(name) {
            if let Err(err) = u32::from_str(text) {
                violations.push(Violation::InvalidField {
                    name: name.clone(),
                    value: text.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn host_row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(name, value)| (name.to_string(), RawValue::Text(value.to_string())))
            .collect()
    }

    #[test]
    fn clean_row_has_no_violations() {
        let row = host_row(&[
            ("hostID", "host1"),
            ("numberOfSlots", "10"),
            ("datacentreID", "dcA"),
        ]);
        assert!(validate_row(&row, &schema::hosts()).is_empty());
    }

    #[test]
    fn short_row_reports_missing_fields_in_schema_order() {
        let row = host_row(&[("hostID", "host1")]);
        let violations = validate_row(&row, &schema::hosts());
        assert_eq!(
            violations,
            vec![Violation::MissingFields {
                fields: vec!["numberOfSlots".to_string(), "datacentreID".to_string()],
            }]
        );
    }

    #[test]
    fn long_row_reports_the_extra_values() {
        let mut row = host_row(&[
            ("hostID", "host1"),
            ("numberOfSlots", "10"),
            ("datacentreID", "dcA"),
        ]);
        row.insert(
            OVERFLOW_KEY.to_string(),
            RawValue::Overflow(vec!["extra_value".to_string()]),
        );
        let violations = validate_row(&row, &schema::hosts());
        assert_eq!(
            violations,
            vec![Violation::TooManyValues {
                values: vec!["extra_value".to_string()],
            }]
        );
        assert_eq!(
            violations[0].to_string(),
            "Too many values [\"extra_value\"]"
        );
    }

    #[test]
    fn unparseable_count_carries_the_parse_error() {
        let row = host_row(&[
            ("hostID", "host1"),
            ("numberOfSlots", "cant_be_a_string"),
            ("datacentreID", "dcA"),
        ]);
        let violations = validate_row(&row, &schema::hosts());
        assert_eq!(violations.len(), 1);
        let message = violations[0].to_string();
        assert!(message.contains("<name> [numberOfSlots]"), "{message}");
        assert!(message.contains("<value> [cant_be_a_string]"), "{message}");
        assert!(message.contains("<error> ["), "{message}");
    }

    #[test]
    fn negative_count_is_invalid() {
        let row = host_row(&[
            ("hostID", "host1"),
            ("numberOfSlots", "-3"),
            ("datacentreID", "dcA"),
        ]);
        let violations = validate_row(&row, &schema::hosts());
        assert!(matches!(
            violations.as_slice(),
            [Violation::InvalidField { name, .. }] if name == "numberOfSlots"
        ));
    }

    #[test]
    fn reports_every_violation_not_just_the_first() {
        // Two fields missing AND an unparseable count in the same row.
        let row = host_row(&[("numberOfSlots", "not_a_number")]);
        let violations = validate_row(&row, &schema::hosts());
        assert_eq!(violations.len(), 2);
        assert!(matches!(&violations[0], Violation::MissingFields { fields }
            if fields == &vec!["hostID".to_string(), "datacentreID".to_string()]));
        assert!(matches!(&violations[1], Violation::InvalidField { name, .. }
            if name == "numberOfSlots"));
    }
}
