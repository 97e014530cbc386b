//! Profile operations.
//!
//! Profiles are addressed by handle; handles are percent-encoded into the
//! path by the gateway's URL builder.

use reqwest::Method;

use skald_core::error::Result;
use skald_core::model::{Post, Profile, ProfileHit, UpdateProfile};

use crate::client::ApiClient;

impl ApiClient {
    /// Fetches a profile with embedded posts, followers and following via
    /// `GET /social/profiles/{handle}`.
    pub async fn get_profile(&self, handle: &str) -> Result<Profile> {
        let token = self.require_token("You must be logged in to view a profile.")?;
        let mut url = self.endpoint(&["social", "profiles", handle])?;
        url.query_pairs_mut()
            .append_pair("_posts", "true")
            .append_pair("_followers", "true")
            .append_pair("_following", "true");
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not load this profile.",
        )
        .await
    }

    /// Fetches only a profile's posts via
    /// `GET /social/profiles/{handle}/posts?_author=true`.
    pub async fn get_profile_posts(&self, handle: &str) -> Result<Vec<Post>> {
        let token = self.require_token("You must be logged in to view posts.")?;
        let mut url = self.endpoint(&["social", "profiles", handle, "posts"])?;
        url.query_pairs_mut().append_pair("_author", "true");
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not load profile posts.",
        )
        .await
    }

    /// Searches profiles by name or bio via
    /// `GET /social/profiles/search?q=...`.
    pub async fn search_profiles(&self, query: &str) -> Result<Vec<ProfileHit>> {
        let token = self.require_token("You must be logged in to search profiles.")?;
        let mut url = self.endpoint(&["social", "profiles", "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.request_data(
            Method::GET,
            url,
            Some(&token),
            None::<&()>,
            "Could not search profiles.",
        )
        .await
    }

    /// Follows a profile via `PUT /social/profiles/{handle}/follow` and
    /// returns the server's updated view of the relation. A repeated follow
    /// is passed through as-is: the server is the authority on the relation,
    /// and any error it reports is surfaced, not swallowed.
    pub async fn follow_profile(&self, handle: &str) -> Result<Profile> {
        let token = self.require_token("You must be logged in to follow a profile.")?;
        let url = self.endpoint(&["social", "profiles", handle, "follow"])?;
        self.request_data(
            Method::PUT,
            url,
            Some(&token),
            None::<&()>,
            "Could not follow this profile.",
        )
        .await
    }

    /// Unfollows a profile via `PUT /social/profiles/{handle}/unfollow`.
    pub async fn unfollow_profile(&self, handle: &str) -> Result<Profile> {
        let token = self.require_token("You must be logged in to unfollow a profile.")?;
        let url = self.endpoint(&["social", "profiles", handle, "unfollow"])?;
        self.request_data(
            Method::PUT,
            url,
            Some(&token),
            None::<&()>,
            "Could not unfollow this profile.",
        )
        .await
    }

    /// Edits the user's own profile via `PUT /social/profiles/{handle}`.
    pub async fn update_profile(&self, handle: &str, payload: &UpdateProfile) -> Result<Profile> {
        let token = self.require_token("You must be logged in to edit your profile.")?;
        let url = self.endpoint(&["social", "profiles", handle])?;
        self.request_data(
            Method::PUT,
            url,
            Some(&token),
            Some(payload),
            "Could not edit this profile.",
        )
        .await
    }
}
