use crate::domain::Route;

/// Facts applied to navigation state by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    RouteChanged(Route),
}
