//! [`StoreEntity`] implementation for the Order domain type.
//!
//! This is what lets [`Order`] be managed by the generic
//! [`StoreActor`](crate::framework::StoreActor). The order store is the only
//! one that carries view state: the list filters and pagination.

use crate::framework::StoreEntity;
use crate::model::{Order, OrderFilters, OrderPatch, OrderViewState};
use crate::order_store::actions::OrderViewOp;

impl StoreEntity for Order {
    type Id = String;
    type Patch = OrderPatch;
    type View = OrderViewState;
    type ViewOp = OrderViewOp;

    fn id(&self) -> String {
        self.order_id.clone()
    }

    /// Overwrites the status field in place; nothing else is mutable.
    fn apply_patch(&mut self, patch: OrderPatch) {
        self.status = patch.status;
    }

    fn apply_view_op(view: &mut OrderViewState, op: OrderViewOp) {
        match op {
            OrderViewOp::SetFilters(update) => {
                if let Some(search) = update.search {
                    view.filters.search = search;
                }
                if let Some(status) = update.status {
                    view.filters.status = status;
                }
                // Any filter change restarts the listing at page 1 so a
                // filtered result set is never viewed from a stale offset.
                view.pagination.current_page = 1;
            }
            OrderViewOp::SetPage(page) => {
                // Unconditional; bounds against the result set are a
                // view-layer concern.
                view.pagination.current_page = page;
            }
            OrderViewOp::ClearFilters => {
                view.filters = OrderFilters::default();
                view.pagination.current_page = 1;
            }
        }
    }
}
