//! [`StoreEntity`] implementation for the Shipment domain type.
//!
//! The stored record is the generation-time snapshot; the display state is
//! re-derived from the parent order on read (see
//! [`ShipmentClient::for_order`](crate::clients::ShipmentClient::for_order)),
//! so shipments need no patch and no view state.

use crate::framework::StoreEntity;
use crate::model::Shipment;

impl StoreEntity for Shipment {
    type Id = String;
    type Patch = ();
    type View = ();
    type ViewOp = ();

    fn id(&self) -> String {
        self.id.clone()
    }

    fn apply_patch(&mut self, _patch: ()) {}

    fn apply_view_op(_view: &mut (), _op: ()) {}
}
