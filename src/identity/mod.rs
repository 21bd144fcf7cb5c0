//! Turns a bearer token into the principal for a request.

pub mod github;

use async_trait::async_trait;
use thiserror::Error;

use crate::profile::principal::Principal;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("token rejected by identity provider")]
    TokenRejected,

    #[error("identity provider returned status {0}")]
    UnexpectedStatus(u16),

    #[error("identity provider returned a profile that is not a JSON object")]
    InvalidProfile,

    #[error("identity provider request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Principal, IdentityError>;
}
