pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod events;
pub mod logging;
pub mod recipe;
pub mod session;
pub mod shell;

pub use error::SessionError;
pub use recipe::{Ingredient, Recipe};
