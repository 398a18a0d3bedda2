//! Untyped row shape consumed by the validator.
//!
//! The source reader produces one `RawRow` per input line. Field order is
//! preserved so that defects can be attributed to the cells that caused
//! them; no typing is committed until validation has run.

use indexmap::IndexMap;

/// Reserved key under which extra trailing cells are collected.
///
/// A row with more cells than its schema has fields keeps the surplus here
/// instead of dropping it, so the validator can name the offending values.
pub const OVERFLOW_KEY: &str = "extra";

/// A single raw cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// An ordinary text cell.
    Text(String),
    /// The extra trailing cells of an over-long row, kept together under
    /// [`OVERFLOW_KEY`].
    Overflow(Vec<String>),
}

/// One raw input row: field name to raw value, in reader order.
///
/// Missing trailing cells are simply absent from the map.
pub type RawRow = IndexMap<String, RawValue>;
