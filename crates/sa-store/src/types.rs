use serde::{Deserialize, Serialize};

/// A category record as the store returns it. The store's `_id` field is
/// aliased to `id`; `order` may be missing or null on older records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub order: Option<i64>,
}

/// Request body for creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub order: i64,
}
