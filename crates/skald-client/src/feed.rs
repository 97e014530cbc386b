//! The feed's combined search.
//!
//! One entry point for the feed's search box: `@handle` goes straight to
//! profiles, anything else searches posts first and falls back to a profile
//! search when no posts match.

use skald_core::error::Result;
use skald_core::model::{Post, ProfileHit};

use crate::client::ApiClient;

/// What a feed search produced.
#[derive(Debug)]
pub enum FeedSearch {
    /// Post hits, or the full feed for an empty query.
    Posts(Vec<Post>),
    /// Profile hits, from an `@` query or the empty-posts fallback.
    Profiles(Vec<ProfileHit>),
}

impl FeedSearch {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Posts(posts) => posts.is_empty(),
            Self::Profiles(profiles) => profiles.is_empty(),
        }
    }
}

impl ApiClient {
    /// Runs the feed's documented search behavior on raw input.
    ///
    /// - empty input: the whole feed ([`ApiClient::list_posts`]);
    /// - `@handle`: profile search on the part after the `@` (a bare `@`
    ///   searches nothing and returns no profiles);
    /// - anything else: post search, then a profile search with the same
    ///   query when zero posts match.
    pub async fn search_feed(&self, raw: &str) -> Result<FeedSearch> {
        let query = raw.trim();
        if query.is_empty() {
            return Ok(FeedSearch::Posts(self.list_posts().await?));
        }

        if let Some(handle) = query.strip_prefix('@') {
            if handle.is_empty() {
                return Ok(FeedSearch::Profiles(Vec::new()));
            }
            return Ok(FeedSearch::Profiles(self.search_profiles(handle).await?));
        }

        let posts = self.search_posts(query).await?;
        if posts.is_empty() {
            return Ok(FeedSearch::Profiles(self.search_profiles(query).await?));
        }
        Ok(FeedSearch::Posts(posts))
    }
}
