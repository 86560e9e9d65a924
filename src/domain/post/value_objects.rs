use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Post Value Objects
// ============================================================================

/// Opaque post identifier. Minted for new posts, taken verbatim from
/// routing metadata for command targets. Serializes as `{ "id": "..." }`,
/// the shape every outbound event payload carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostId {
    pub id: String,
}

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Mint a fresh, collision-resistant identifier for a new post.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
