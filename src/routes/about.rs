use axum::response::IntoResponse;

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        layout: template.layout(),
    })
}
