use crate::domain::AppState;

use super::events::NavEvent;

pub fn reduce(mut state: AppState, ev: NavEvent) -> AppState {
    match ev {
        NavEvent::RouteChanged(r) => state.route = r,
    }
    state
}
