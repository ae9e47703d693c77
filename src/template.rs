use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

use crate::{config::SiteConfig, routes::AppState, theme::Theme};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/properties", "Properties"),
    ("/remodeling", "Remodeling"),
    ("/contact", "Contact"),
];

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn usd(value: &u64, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(campos_catalog::format_usd(*value))
    }

    #[askama::filter_fn]
    pub fn count(value: &u64, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(campos_catalog::format_count(*value))
    }
}

/// Per-request presentation context shared by every page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub theme: Theme,
    pub current_path: String,
    /// Path plus query, where the theme toggle sends the visitor back to
    pub return_to: String,
    pub site: SiteConfig,
    pub year: i32,
}

impl Layout {
    pub fn nav(&self) -> [(&'static str, &'static str); 5] {
        NAV
    }

    /// `/` only matches itself, other links also match their sub pages.
    pub fn is_current(&self, href: &str) -> bool {
        if href == "/" {
            return self.current_path == "/";
        }

        self.current_path == href
            || self
                .current_path
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub struct Template {
    layout: Layout,
}

impl Template {
    pub fn layout(&self) -> Layout {
        self.layout.clone()
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(path = %self.layout.current_path, err = %err, "failed to render template");

                self.server_error()
            }
        }
    }

    pub fn server_error(&self) -> Response {
        let page = ServerTemplate {
            layout: self.layout(),
        };

        match askama::Template::render(&page) {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response(),
        }
    }
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let theme = Theme::resolve(&jar, &parts.headers);

        Ok(Template {
            layout: Layout {
                theme,
                current_path: parts.uri.path().to_owned(),
                return_to: parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or("/")
                    .to_owned(),
                site: state.config.site.clone(),
                year: time::OffsetDateTime::now_utc().year(),
            },
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub layout: Layout,
}
