//! Registration and login payloads.

use serde::{Deserialize, Serialize};

use super::post::Media;
use crate::error::{Result, SkaldError};

/// Payload for `POST /auth/register`. Name, email and password are required;
/// the profile fields can be added later through a profile update.
///
/// The API's own rules (documented, enforced server-side): email must belong
/// to the allowed student domain, password at least 8 characters, name free of
/// punctuation other than underscore.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            bio: None,
            avatar: None,
            banner: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: Media) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn with_banner(mut self, banner: Media) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Rejects obviously incomplete input before it is submitted.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SkaldError::validation("Name is required."));
        }
        validate_credentials(&self.email, &self.password)
    }
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Rejects obviously incomplete input before it is submitted.
    pub fn validate(&self) -> Result<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// Checks that email and password are non-empty before submission.
fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(SkaldError::validation("Email and password are required."));
    }
    Ok(())
}

/// Successful login response: the access token plus the signed-in profile's
/// public fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub access_token: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
}
