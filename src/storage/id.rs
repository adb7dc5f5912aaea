//! Conversion between textual ids and MongoDB `ObjectId`s.
//!
//! Nothing outside [`crate::storage`] sees an `ObjectId`; records carry the
//! 24-character lowercase hex form instead.

use bson::oid::ObjectId;

use crate::error::{BlogError, Result};

pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| BlogError::InvalidId(id.to_string()))
}

pub fn format_id(id: &ObjectId) -> String {
    id.to_hex()
}

/// Formats an optional id, yielding an empty string for documents that were
/// stored without one.
pub fn format_optional_id(id: Option<&ObjectId>) -> String {
    id.map(format_id).unwrap_or_default()
}
