use std::collections::HashSet;

use crate::{StoreError, UserId, UserProfile};

/// Immutable, ordered collection of user profiles.
///
/// Built once at startup and shared read-only for the life of the process;
/// `all()` preserves insertion order on every call.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<UserProfile>,
}

impl ProfileStore {
    /// Validates the records up front: ids must be unique and names
    /// non-empty. Everything after construction is infallible reads.
    pub fn new(profiles: Vec<UserProfile>) -> Result<Self, StoreError> {
        let mut seen: HashSet<UserId> = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id) {
                return Err(StoreError::DuplicateId { id: profile.id });
            }
            if profile.name.trim().is_empty() {
                return Err(StoreError::EmptyName { id: profile.id });
            }
        }
        Ok(Self { profiles })
    }

    pub fn all(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn by_id(&self, id: UserId) -> Result<&UserProfile, StoreError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
