//! Core library components.
//!
//! Secret identity, payload codec, the secret store gateway, and the edit and
//! diff workflows built on top of them.

pub mod codec;
pub mod config;
pub mod constants;
pub mod diff;
pub mod domain;
pub mod edit;
pub mod editor;
pub mod interrupt;
pub mod prompt;
pub mod scratch;
pub mod store;
pub mod types;
