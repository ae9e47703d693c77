use axum::{
    extract::Form,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::theme::Theme;

#[derive(Deserialize)]
pub struct ToggleInput {
    #[serde(default)]
    pub next: String,
}

/// Only paths on this site; `//host`, backslash tricks and anything that
/// can't be a `Location` header value fall back to `/`.
fn redirect_target(next: &str) -> &str {
    let same_site = next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(char::is_control)
        && HeaderValue::from_str(next).is_ok();

    if same_site { next } else { "/" }
}

pub async fn toggle(
    jar: CookieJar,
    headers: HeaderMap,
    Form(input): Form<ToggleInput>,
) -> impl IntoResponse {
    let theme = Theme::resolve(&jar, &headers).toggle();

    tracing::debug!(theme = %theme, "theme toggled");

    (
        jar.add(theme.cookie()),
        Redirect::to(redirect_target(&input.next)),
    )
}
