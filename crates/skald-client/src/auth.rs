//! Registration, login and logout.

use reqwest::Method;

use skald_core::error::Result;
use skald_core::model::{LoginRequest, LoginSession, Profile, RegisterRequest};

use crate::client::ApiClient;

impl ApiClient {
    /// Registers a new account via `POST /auth/register`.
    ///
    /// Registering does not log the user in; it only creates the account.
    /// Returns the created account's public profile.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Profile> {
        request.validate()?;
        let url = self.endpoint(&["auth", "register"])?;
        self.request_data(
            Method::POST,
            url,
            None,
            Some(request),
            "Could not register user.",
        )
        .await
    }

    /// Logs in via `POST /auth/login` and, on success, persists the access
    /// token and profile handle into the session store as one record.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession> {
        let request = LoginRequest::new(email, password);
        request.validate()?;
        let url = self.endpoint(&["auth", "login"])?;
        let session: LoginSession = self
            .request_data(Method::POST, url, None, Some(&request), "Login failed.")
            .await?;
        self.session()
            .save(&session.access_token, &session.name)?;
        Ok(session)
    }

    /// Logs out by clearing the saved session. Purely local; the token is
    /// not revoked server-side.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()
    }
}
