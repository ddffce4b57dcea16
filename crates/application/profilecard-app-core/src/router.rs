use std::sync::{Arc, Mutex};

use profilecard_core::UserId;

use crate::domain::Route;
use crate::nav_core::{NavCommand, NavEvent, NavStore};

/// Push notification for re-render triggers. The rendering side implements
/// this and redraws the active screen on every applied transition.
pub trait RouteObserver: Send + Sync {
    fn route_changed(&self, route: &Route);
}

/// Single authority for the current screen and the transitions between the
/// two screen kinds. Clones share the same state and subscriber list.
#[derive(Clone)]
pub struct Router {
    store: NavStore,
    observers: Arc<Mutex<Vec<Arc<dyn RouteObserver>>>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            store: NavStore::default(),
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.store.state().route
    }

    pub fn subscribe(&self, observer: Arc<dyn RouteObserver>) {
        self.observers.lock().unwrap().push(observer);
    }

    pub fn dispatch(&self, cmd: NavCommand) {
        match cmd {
            NavCommand::SelectUser(id) => self.select_user(id),
            NavCommand::GoBack => self.go_back(),
        }
    }

    /// Routing is decoupled from data validity: an id with no matching
    /// profile still transitions, and the details presenter surfaces the
    /// lookup failure.
    pub fn select_user(&self, id: UserId) {
        self.transition(Route::UserDetails { user_id: id });
    }

    /// No-op when already at the user list; a double-tap on back is not a
    /// programming error. Observers are not notified in that case.
    pub fn go_back(&self) {
        if self.current_route() == Route::UserList {
            tracing::debug!("go_back ignored, already at the user list");
            return;
        }
        self.transition(Route::UserList);
    }

    fn transition(&self, route: Route) {
        tracing::debug!(?route, "route changed");
        self.store.apply(NavEvent::RouteChanged(route.clone()));

        let observers = self.observers.lock().unwrap().clone();
        for observer in observers {
            observer.route_changed(&route);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
