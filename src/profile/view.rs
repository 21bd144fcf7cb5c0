use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::profile::principal::Principal;

pub const HOME_TEMPLATE: &str = "home";

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("no authenticated principal for this request")]
    MissingPrincipal,
}

/// The three GitHub attributes the home page cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileAttributes {
    pub login: Option<String>,
    pub html_url: Option<String>,
    pub repos_url: Option<String>,
}

impl ProfileAttributes {
    pub fn from_principal(principal: &Principal) -> Self {
        Self {
            login: text_attribute(principal, "login"),
            html_url: text_attribute(principal, "html_url"),
            repos_url: text_attribute(principal, "repos_url"),
        }
    }
}

// Strings are taken as-is, null counts as missing, anything else is shown as JSON.
fn text_attribute(principal: &Principal, name: &str) -> Option<String> {
    match principal.attribute(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub user: Option<String>,
    pub profile_link: Option<String>,
    pub repos: Option<String>,
}

impl From<ProfileAttributes> for ViewModel {
    fn from(attrs: ProfileAttributes) -> Self {
        Self {
            user: attrs.login,
            profile_link: attrs.html_url,
            repos: attrs.repos_url,
        }
    }
}

/// A template name paired with the values it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub template: &'static str,
    pub model: ViewModel,
}

/// Maps the request's principal onto the `home` view.
pub fn home_view(principal: Option<&Principal>) -> Result<View, ProfileError> {
    let principal = principal.ok_or(ProfileError::MissingPrincipal)?;

    let attributes = Value::Object(principal.attributes().clone());
    tracing::info!(attributes = %attributes, "principal attributes");

    Ok(View {
        template: HOME_TEMPLATE,
        model: ProfileAttributes::from_principal(principal).into(),
    })
}
