use serde::{Deserialize, Serialize};

pub mod error;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use store::ProfileStore;

pub type UserId = u32;

/// A single user record. `drawable_id` is an opaque image reference that
/// only the rendering side interprets; the core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub drawable_id: String,
    pub status: bool,
}
