//! HTTP client for the social API: session persistence, the request
//! gateway, and one method per API capability.

pub mod client;
pub mod config;
pub mod feed;
pub mod latest;
pub mod paths;
pub mod session;

mod auth;
mod posts;
mod profiles;

pub use crate::client::ApiClient;
pub use crate::feed::FeedSearch;
pub use crate::latest::{Generation, LatestSlot};
pub use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
