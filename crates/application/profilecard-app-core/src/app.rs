use std::sync::Arc;

use anyhow::Context;

use profilecard_core::{seed, ProfileStore, UserProfile};

use crate::presenter::{UserDetailsPresenter, UserListPresenter};
use crate::router::Router;

/// Wires one injected store to one Router and both presenters. The store
/// is the single source of truth for every screen.
pub struct ProfileCardApp {
    store: Arc<ProfileStore>,
    router: Router,
    list: UserListPresenter,
    details: UserDetailsPresenter,
}

impl ProfileCardApp {
    pub fn new(profiles: Vec<UserProfile>) -> anyhow::Result<Self> {
        let store =
            Arc::new(ProfileStore::new(profiles).context("invalid user profile data")?);
        let router = Router::new();
        let list = UserListPresenter::new(store.clone(), router.clone());
        let details = UserDetailsPresenter::new(store.clone(), router.clone());

        Ok(Self {
            store,
            router,
            list,
            details,
        })
    }

    /// Stock dataset variant for demos and tests.
    pub fn with_demo_profiles() -> anyhow::Result<Self> {
        Self::new(seed::demo_profiles())
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn list(&self) -> &UserListPresenter {
        &self.list
    }

    pub fn details(&self) -> &UserDetailsPresenter {
        &self.details
    }
}
