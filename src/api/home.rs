use axum::response::Redirect;

use crate::api::auth::CurrentPrincipal;
use crate::api::error::AppError;
use crate::profile::view::{View, home_view};

pub async fn home(CurrentPrincipal(principal): CurrentPrincipal) -> Result<View, AppError> {
    home_view(principal.as_ref()).map_err(AppError::from)
}

pub async fn index() -> Redirect {
    Redirect::to("/home")
}
