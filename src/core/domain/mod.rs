//! Domain types.

mod command;
mod env;
mod secret;

pub use command::{Action, CommandConfig};
pub use env::Env;
pub use secret::{extract_names, SecretRef};
