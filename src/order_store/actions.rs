//! View-state operations for the order store.
//!
//! These are the store-level operations that do not touch individual order
//! records: filter merges, pagination, and filter reset. Each one is applied
//! atomically by the store actor.

use crate::model::FilterUpdate;

/// View-state operations on the order list.
#[derive(Debug, Clone)]
pub enum OrderViewOp {
    /// Merges the given fields into the current filters and resets the
    /// current page to 1.
    SetFilters(FilterUpdate),
    /// Sets the current page unconditionally.
    SetPage(u32),
    /// Resets filters to the default (empty search, no status) and the
    /// current page to 1.
    ClearFilters,
}
