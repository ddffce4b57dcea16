pub mod app;
pub mod domain;
pub mod nav_core;
pub mod presenter;
pub mod router;
pub mod viewmodel;

pub use app::ProfileCardApp;
pub use domain::{AppState, Route};
pub use nav_core::*;
pub use presenter::{UserDetailsPresenter, UserListPresenter};
pub use router::{RouteObserver, Router};
pub use viewmodel::{UserDetailsVm, UserRowVm};
