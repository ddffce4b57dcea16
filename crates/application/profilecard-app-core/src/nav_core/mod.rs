pub mod commands;
pub mod events;
pub mod reducer;
pub mod store;

pub use commands::NavCommand;
pub use events::NavEvent;
pub use reducer::reduce;
pub use store::NavStore;
