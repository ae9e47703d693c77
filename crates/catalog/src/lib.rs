//! Compiled-in site content: listings, remodeling portfolio and cost guides.

mod cost_guide;
mod money;
mod project;
mod property;
mod service;

pub use cost_guide::{Budget, CostGuide, affordable, cost_guides};
pub use money::{format_count, format_usd};
pub use project::{ApproachStep, RemodelProject, approach, projects};
pub use property::{
    Coordinates, ListingStatus, MarkerPosition, Property, find_by_slug, for_sale, properties,
    toggle_selection,
};
pub use service::{Service, services};
