use std::str::FromStr;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const COOKIE_NAME: &str = "theme";
pub const CLIENT_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Cookie first, then the browser's color scheme hint, then light.
    pub fn resolve(jar: &CookieJar, headers: &HeaderMap) -> Self {
        if let Some(theme) = jar
            .get(COOKIE_NAME)
            .and_then(|c| Theme::from_str(c.value()).ok())
        {
            return theme;
        }

        headers
            .get(CLIENT_HINT)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim_matches('"'))
            .and_then(|v| Theme::from_str(v).ok())
            .unwrap_or_default()
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to `<html>`.
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((COOKIE_NAME, self.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(365))
            .build()
    }
}
