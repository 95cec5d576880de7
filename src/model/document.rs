//! The Document domain type: generated paperwork attached to an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of paperwork a [`Document`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Invoice,
    Shipping,
    Customs,
    Insurance,
    Label,
}

impl DocumentType {
    /// Suffix used in the document key (`DOC-<orderId>-<SUFFIX>`).
    pub fn key_suffix(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "INVOICE",
            DocumentType::Shipping => "SHIPPING",
            DocumentType::Customs => "CUSTOMS",
            DocumentType::Insurance => "INSURANCE",
            DocumentType::Label => "LBL",
        }
    }

    /// Lowercased name used in the storage URL file segment.
    pub fn file_slug(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Shipping => "shipping",
            DocumentType::Customs => "customs",
            DocumentType::Insurance => "insurance",
            DocumentType::Label => "label",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentType::Invoice => "Invoice",
            DocumentType::Shipping => "Shipping",
            DocumentType::Customs => "Customs",
            DocumentType::Insurance => "Insurance",
            DocumentType::Label => "Label",
        };
        write!(f, "{s}")
    }
}

/// Review status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    Final,
    Approved,
    Rejected,
}

/// A generated record artifact associated with an order.
///
/// Identity is the composite of order id and document type, rendered as a
/// stable string key (see [`document_key`](crate::derive::document_key)).
/// `size` is a display string, not a byte count. `url` points at an
/// external object store and is never fetched or validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub order_id: String,
    pub name: String,
    pub doc_type: DocumentType,
    pub date: DateTime<Utc>,
    pub size: String,
    pub status: DocumentStatus,
    pub url: String,
}
