use axum::{extract::Query, response::IntoResponse};
use campos_catalog::{Budget, CostGuide, affordable};
use serde::Deserialize;

use crate::template::{Layout, Template, filters};

#[derive(askama::Template)]
#[template(path = "cost-guides.html")]
pub struct CostGuidesTemplate {
    pub layout: Layout,
    pub budget: Budget,
    pub guides: Vec<&'static CostGuide>,
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub budget: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let budget = query
        .budget
        .as_deref()
        .and_then(Budget::parse)
        .unwrap_or_default();

    template.render(CostGuidesTemplate {
        layout: template.layout(),
        budget,
        guides: affordable(budget),
        min: Budget::MIN,
        max: Budget::MAX,
        step: Budget::STEP,
    })
}
