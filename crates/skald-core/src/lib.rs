//! Core types for the skald client: the error taxonomy, client
//! configuration, and the wire/domain models shared by the client and
//! rendering crates.

pub mod config;
pub mod error;
pub mod model;

pub use crate::config::ApiConfig;
pub use crate::error::{Result, SkaldError};
