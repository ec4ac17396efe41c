//! The row projection seam
//!
//! Every entity in this crate persists to exactly one table. [`TableRecord`]
//! exposes that boundary: the table name, the ordered column list, and the
//! pure projection from entity to row. An external persistence layer can
//! consume any record generically through this trait without knowing the
//! entity types.

use serde::Serialize;

use crate::error::RecordError;

/// Projection of an entity into its persistence row.
///
/// # Contract
///
/// - `to_row` reads only the instance's own fields: no I/O, no clock, no
///   mutation. Calling it twice on the same instance yields equal rows.
/// - The projection is total over valid entity states. The only fallible
///   step is JSON-encoding structured sub-fields (coverage plans); that
///   failure is a caller construction error surfaced as
///   [`RecordError::Serialization`].
/// - Serializing the row (serde) produces one entry per column in
///   [`TableRecord::COLUMNS`], keyed by the exact column name. Scalar values
///   keep their native types: dates stay dates, decimals stay numeric,
///   booleans stay boolean.
pub trait TableRecord {
    /// The typed row this entity projects into
    type Row: Serialize;

    /// Target table name
    const TABLE: &'static str;

    /// Column names in row-field order, exactly as the schema spells them
    const COLUMNS: &'static [&'static str];

    /// Projects the entity into a fresh row
    fn to_row(&self) -> Result<Self::Row, RecordError>;
}
