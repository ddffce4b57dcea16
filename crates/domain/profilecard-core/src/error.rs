use thiserror::Error;

use crate::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no user profile with id {id}")]
    NotFound { id: UserId },

    #[error("duplicate user profile id {id}")]
    DuplicateId { id: UserId },

    #[error("user profile {id} has an empty name")]
    EmptyName { id: UserId },
}
