use std::sync::{Arc, Mutex};

use crate::domain::AppState;

use super::{events::NavEvent, reducer::reduce};

/// Clone-shareable holder of the current navigation state. The mutex only
/// makes handles `Send + Sync`; all mutation happens on the event thread.
#[derive(Clone)]
pub struct NavStore {
    inner: Arc<Mutex<AppState>>,
}

impl NavStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> AppState {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: NavEvent) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
