use std::sync::Arc;

use profilecard_core::{ProfileStore, StoreError, UserId};

use crate::router::Router;
use crate::viewmodel::{UserDetailsVm, UserRowVm};

/// Derives list rows from the store and forwards selection to the Router.
pub struct UserListPresenter {
    store: Arc<ProfileStore>,
    router: Router,
}

impl UserListPresenter {
    pub fn new(store: Arc<ProfileStore>, router: Router) -> Self {
        Self { store, router }
    }

    /// Lazy and restartable: recomputed from the store on every call, one
    /// row per profile in store order.
    pub fn rows(&self) -> impl Iterator<Item = UserRowVm> + '_ {
        self.store.all().iter().map(UserRowVm::from)
    }

    /// No error path: every row id comes straight from the store.
    pub fn on_row_selected(&self, id: UserId) {
        self.router.select_user(id);
    }
}

/// Resolves a selected user id into the detail screen's view-model.
pub struct UserDetailsPresenter {
    store: Arc<ProfileStore>,
    router: Router,
}

impl UserDetailsPresenter {
    pub fn new(store: Arc<ProfileStore>, router: Router) -> Self {
        Self { store, router }
    }

    /// A miss is reported to the rendering side as `NotFound` so it can
    /// show a placeholder or bounce back to the list; never a panic.
    pub fn load(&self, user_id: UserId) -> Result<UserDetailsVm, StoreError> {
        match self.store.by_id(user_id) {
            Ok(profile) => Ok(UserDetailsVm::from(profile)),
            Err(e) => {
                tracing::warn!(user_id, "details lookup failed: {e}");
                Err(e)
            }
        }
    }

    pub fn on_back(&self) {
        self.router.go_back();
    }
}
