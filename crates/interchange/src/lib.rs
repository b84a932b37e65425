//! tick-interchange: Tick story documents as typed Rust structs.
//!
//! A Tick story is produced by the dialog editor as a single JSON document
//! (camelCase keys). This crate defines the typed form of that document and
//! the loaders every consumer goes through: [`from_json`], [`from_str`] and
//! [`from_path`].

pub mod deserialize;
pub mod types;

pub use deserialize::{from_json, from_path, from_str, InterchangeError};
pub use types::*;
