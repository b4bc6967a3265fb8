// Admin application state, input handling and the async actions behind them

pub mod actions;
pub mod input;
pub mod state;
pub mod tasks;

pub use input::handle_input;
pub use state::{App, AppScreen, Collection};
