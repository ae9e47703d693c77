use axum::response::IntoResponse;
use campos_catalog::{Service, services};

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub services: &'static [Service],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: template.layout(),
        services: services(),
    })
}
