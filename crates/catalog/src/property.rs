use strum::{AsRefStr, Display, EnumString};

use crate::{format_count, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum ListingStatus {
    #[strum(serialize = "For Sale")]
    ForSale,
    Pending,
    Sold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Offsets in percent from the top-left corner of the area map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPosition {
    pub left: f64,
    pub top: f64,
}

// The map spans longitudes -98.2..-96.7 and latitudes 30.6..30.0.
const MAP_WEST: f64 = -98.2;
const MAP_LNG_SPAN: f64 = 1.5;
const MAP_NORTH: f64 = 30.6;
const MAP_LAT_SPAN: f64 = 0.6;

impl Coordinates {
    pub fn marker_position(&self) -> MarkerPosition {
        MarkerPosition {
            left: (self.lng - MAP_WEST) / MAP_LNG_SPAN * 100.0,
            top: (MAP_NORTH - self.lat) / MAP_LAT_SPAN * 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price: u64,
    pub beds: u8,
    pub baths: f32,
    pub sqft: u64,
    pub status: ListingStatus,
    pub coordinates: Coordinates,
    pub description: &'static str,
}

impl Property {
    pub fn price_label(&self) -> String {
        format_usd(self.price)
    }

    pub fn sqft_label(&self) -> String {
        format_count(self.sqft)
    }

    pub fn is_for_sale(&self) -> bool {
        self.status == ListingStatus::ForSale
    }
}

static PROPERTIES: [Property; 6] = [
    Property {
        id: 1,
        slug: "modern-austin-estate",
        title: "Modern Austin Estate",
        location: "West Lake Hills",
        price: 2_850_000,
        beds: 4,
        baths: 3.5,
        sqft: 3_200,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.3, lng: -97.8 },
        description: "Stunning contemporary estate with panoramic hill country views and premium finishes throughout.",
    },
    Property {
        id: 2,
        slug: "downtown-luxury-condo",
        title: "Downtown Luxury Condo",
        location: "Downtown Austin",
        price: 1_200_000,
        beds: 2,
        baths: 2.0,
        sqft: 1_800,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.27, lng: -97.74 },
        description: "Sophisticated urban living with floor-to-ceiling windows and city skyline views.",
    },
    Property {
        id: 3,
        slug: "hill-country-retreat",
        title: "Hill Country Retreat",
        location: "Dripping Springs",
        price: 3_500_000,
        beds: 5,
        baths: 4.0,
        sqft: 4_500,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.19, lng: -98.09 },
        description: "Private sanctuary nestled among oak trees with resort-style amenities and guest quarters.",
    },
    Property {
        id: 4,
        slug: "contemporary-townhome",
        title: "Contemporary Townhome",
        location: "South Austin",
        price: 950_000,
        beds: 3,
        baths: 2.5,
        sqft: 2_400,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.23, lng: -97.77 },
        description: "Modern townhome in vibrant South Austin with rooftop terrace and designer finishes.",
    },
    Property {
        id: 5,
        slug: "lakefront-villa",
        title: "Lakefront Villa",
        location: "Lake Travis",
        price: 4_200_000,
        beds: 6,
        baths: 5.0,
        sqft: 5_800,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.39, lng: -97.97 },
        description: "Waterfront masterpiece with private dock, infinity pool, and unobstructed lake views.",
    },
    Property {
        id: 6,
        slug: "urban-loft",
        title: "Urban Loft",
        location: "East Austin",
        price: 750_000,
        beds: 2,
        baths: 1.5,
        sqft: 1_400,
        status: ListingStatus::ForSale,
        coordinates: Coordinates { lat: 30.26, lng: -97.72 },
        description: "Industrial chic loft with exposed brick, polished concrete floors, and artistic flair.",
    },
];

pub fn properties() -> &'static [Property] {
    &PROPERTIES
}

pub fn for_sale() -> impl Iterator<Item = &'static Property> {
    PROPERTIES.iter().filter(|p| p.is_for_sale())
}

pub fn find_by_slug(slug: &str) -> Option<&'static Property> {
    PROPERTIES.iter().find(|p| p.slug == slug)
}

/// Selecting the already selected marker clears the selection.
pub fn toggle_selection(current: Option<u32>, id: u32) -> Option<u32> {
    if current == Some(id) { None } else { Some(id) }
}
