use profilecard_core::UserId;

/// Navigation state. Exactly two screen kinds exist; `UserDetails` carries
/// the id of the profile to show, which the details presenter resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    UserList,
    UserDetails { user_id: UserId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::UserList,
        }
    }
}
