//! Presentation adapters: pure mappings from domain objects to HTML
//! fragments. Each adapter is a typed view-model rendered through an askama
//! template, so user-supplied text is escaped on interpolation. No adapter
//! touches the network or the session store.

mod format;
mod media_view;

pub mod full_post;
pub mod post_card;
pub mod profile_header;
pub mod profile_result;

pub use crate::full_post::{FullPost, render_full_post};
pub use crate::post_card::{PostCard, render_post_card};
pub use crate::profile_header::{ProfileHeader, render_profile_header};
pub use crate::profile_result::{ProfileResult, render_profile_result};
