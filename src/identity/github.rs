use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::Value;

use crate::identity::{IdentityError, PrincipalResolver};
use crate::profile::principal::Principal;

/// Resolves principals against the GitHub `/user` endpoint.
#[derive(Clone)]
pub struct GitHubResolver {
    client: reqwest::Client,
    api_url: String,
    user_agent: String,
}

impl GitHubResolver {
    pub fn new(api_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl PrincipalResolver for GitHubResolver {
    async fn resolve(&self, token: &str) -> Result<Principal, IdentityError> {
        let response = self
            .client
            .get(format!("{}/user", self.api_url))
            .bearer_auth(token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(IdentityError::TokenRejected);
            }
            status if !status.is_success() => {
                return Err(IdentityError::UnexpectedStatus(status.as_u16()));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| IdentityError::InvalidProfile)?;

        Principal::from_json(body).ok_or(IdentityError::InvalidProfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header as header_eq, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn resolves_user_profile() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header_eq("authorization", "Bearer gho_valid"))
            .and(header_eq("user-agent", "github-profile-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "octocat",
                "html_url": "https://github.com/octocat",
                "repos_url": "https://api.github.com/users/octocat/repos",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = GitHubResolver::new(server.uri(), "github-profile-test");
        let principal = resolver.resolve("gho_valid").await.unwrap();

        assert_eq!(principal.attribute("login"), Some(&json!("octocat")));
        assert_eq!(
            principal.attribute("html_url"),
            Some(&json!("https://github.com/octocat"))
        );
    }

    #[tokio::test]
    async fn unauthorized_token_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let resolver = GitHubResolver::new(server.uri(), "github-profile-test");
        let err = resolver.resolve("gho_expired").await.unwrap_err();
        assert!(matches!(err, IdentityError::TokenRejected));
    }

    #[tokio::test]
    async fn server_error_is_unexpected_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let resolver = GitHubResolver::new(server.uri(), "github-profile-test");
        let err = resolver.resolve("gho_valid").await.unwrap_err();
        assert!(matches!(err, IdentityError::UnexpectedStatus(503)));
    }

    #[tokio::test]
    async fn unreachable_api_is_request_error() {
        let resolver = GitHubResolver::new("http://127.0.0.1:1", "github-profile-test");
        let err = resolver.resolve("gho_valid").await.unwrap_err();
        assert!(matches!(err, IdentityError::Request(_)));
    }

    #[tokio::test]
    async fn non_object_body_is_invalid() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["octocat"])))
            .mount(&server)
            .await;

        let resolver = GitHubResolver::new(server.uri(), "github-profile-test");
        let err = resolver.resolve("gho_valid").await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidProfile));
    }
}
