use crate::model::{Identity, IdentityConfig};

/// Error type for sign-in
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Whether the auth screen is signing in or creating an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

/// What the auth form submits
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub mode: AuthMode,
    /// Only asked for when signing up
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Turns submitted credentials into an identity
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}

/// Accepts any complete submission and always returns the same identity.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    identity: Identity,
}

impl MockAuthenticator {
    pub fn new(identity: Identity) -> Self {
        MockAuthenticator { identity }
    }

    pub fn from_config(config: &IdentityConfig) -> Self {
        MockAuthenticator::new(Identity {
            name: config.display_name.clone(),
            email: config.email.clone(),
        })
    }
}

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        if credentials.mode == AuthMode::SignUp && credentials.full_name.trim().is_empty() {
            return Err(AuthError::MissingField("full name"));
        }
        if credentials.email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if credentials.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        tracing::info!(email = %credentials.email, "mock sign-in accepted");
        Ok(self.identity.clone())
    }
}
