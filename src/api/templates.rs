use axum::response::{Html, IntoResponse, Response};

use crate::api::error::AppError;
use crate::profile::view::{HOME_TEMPLATE, View, ViewModel};

pub fn render(name: &str, model: &ViewModel) -> Result<String, AppError> {
    match name {
        HOME_TEMPLATE => Ok(render_home(model)),
        other => Err(AppError::TemplateNotFound(other.to_string())),
    }
}

fn render_home(model: &ViewModel) -> String {
    let user = escape(model.user.as_deref());
    let profile_link = escape(model.profile_link.as_deref());
    let repos = escape(model.repos.as_deref());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Home</title>
</head>
<body>
    <h1>Welcome, <span id="user">{user}</span></h1>
    <p>Profile: <a id="profileLink" href="{profile_link}">{profile_link}</a></p>
    <p>Repositories: <a id="repos" href="{repos}">{repos}</a></p>
</body>
</html>
"#
    )
}

fn escape(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        match render(self.template, &self.model) {
            Ok(html) => Html(html).into_response(),
            Err(e) => e.into_response(),
        }
    }
}
