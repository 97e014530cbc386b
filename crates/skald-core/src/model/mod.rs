//! Wire and domain types for the social API.
//!
//! Every successful JSON response wraps its payload as `{ "data": ... }`;
//! error responses as `{ "errors": [{ "message": ... }] }`. The structs here
//! mirror those shapes with `#[serde(default)]` on everything the server may
//! omit, so partial payloads (no embedded lists, no counts) still parse.

mod auth;
mod envelope;
mod post;
mod profile;
mod session;

pub use auth::{LoginRequest, LoginSession, RegisterRequest};
pub use envelope::{ApiErrorBody, Envelope, ErrorEnvelope, ResponseMeta};
pub use post::{Author, Comment, CreatePost, Media, Post, PostCount, Reaction, UpdatePost};
pub use profile::{Profile, ProfileCount, ProfileHit, UpdateProfile};
pub use session::Session;
