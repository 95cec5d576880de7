//! UI-facing view state held by the order store: free-text/status filters
//! and pagination.

use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};

/// Filter state over the order list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilters {
    /// Free-text search over order ids and product names. Empty = no filter.
    pub search: String,
    /// Status filter; `None` matches every status.
    pub status: Option<OrderStatus>,
}

/// Pagination state for the order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: 10,
        }
    }
}

/// Combined view state carried by the order store alongside the order map.
///
/// Every mutation of this state is one store message, so readers never
/// observe a partially-applied filter merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViewState {
    pub filters: OrderFilters,
    pub pagination: Pagination,
}

/// Partial filter update merged field-wise into [`OrderFilters`].
///
/// The outer `Option` on `status` distinguishes "leave unchanged" (`None`)
/// from "set to this value, possibly clearing the filter" (`Some(..)`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub status: Option<Option<OrderStatus>>,
}

impl FilterUpdate {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn status(status: Option<OrderStatus>) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
