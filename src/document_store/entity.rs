//! [`StoreEntity`] implementation for the Document domain type.
//!
//! Documents are add-only: the generated trio is seeded wholesale and a
//! shipping label is upserted on issuance. There is no field patch and no
//! view state.

use crate::framework::StoreEntity;
use crate::model::Document;

impl StoreEntity for Document {
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
