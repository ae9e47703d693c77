use axum::response::IntoResponse;
use campos_catalog::{ApproachStep, RemodelProject, approach, projects};

use crate::template::{Layout, Template, filters};

#[derive(askama::Template)]
#[template(path = "remodeling.html")]
pub struct RemodelingTemplate {
    pub layout: Layout,
    pub projects: &'static [RemodelProject],
    pub steps: Vec<(String, &'static ApproachStep)>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(RemodelingTemplate {
        layout: template.layout(),
        projects: projects(),
        steps: approach().collect(),
    })
}
