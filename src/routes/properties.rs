use axum::{
    extract::{Path, Query},
    response::IntoResponse,
};
use campos_catalog::{MarkerPosition, Property, for_sale, properties, toggle_selection};
use serde::Deserialize;

use crate::template::{Layout, Template, filters};

pub struct Marker {
    pub property: &'static Property,
    pub position: MarkerPosition,
    pub selected: bool,
    /// Link that selects this marker, or clears it when already selected
    pub href: String,
}

impl Marker {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%;",
            self.position.left, self.position.top
        )
    }
}

#[derive(askama::Template)]
#[template(path = "properties.html")]
pub struct PropertiesTemplate {
    pub layout: Layout,
    pub listings: Vec<&'static Property>,
    pub markers: Vec<Marker>,
    pub selected: Option<&'static Property>,
}

#[derive(askama::Template)]
#[template(path = "property.html")]
pub struct PropertyTemplate {
    pub layout: Layout,
    pub slug: String,
    pub property: Option<&'static Property>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    // Kept as text so junk values fall back to no selection instead of a 400
    pub selected: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let current = query
        .selected
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|id| properties().iter().any(|p| p.id == *id));

    let markers = properties()
        .iter()
        .map(|property| Marker {
            property,
            position: property.coordinates.marker_position(),
            selected: current == Some(property.id),
            href: match toggle_selection(current, property.id) {
                Some(id) => format!("/properties?selected={id}#map"),
                None => "/properties#map".to_owned(),
            },
        })
        .collect();

    template.render(PropertiesTemplate {
        layout: template.layout(),
        listings: for_sale().collect(),
        markers,
        selected: current.and_then(|id| properties().iter().find(|p| p.id == id)),
    })
}

pub async fn detail(template: Template, Path(slug): Path<String>) -> impl IntoResponse {
    let property = campos_catalog::find_by_slug(&slug);

    template.render(PropertyTemplate {
        layout: template.layout(),
        slug,
        property,
    })
}
