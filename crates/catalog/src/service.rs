#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub href: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub cta: &'static str,
}

static SERVICES: [Service; 2] = [
    Service {
        href: "/properties",
        title: "Premium Properties",
        summary: "Discover Austin's finest properties with expert market insights and personalized service.",
        cta: "Explore Properties",
    },
    Service {
        href: "/remodeling",
        title: "Luxury Remodeling",
        summary: "Transform your space with bespoke craftsmanship and timeless design excellence.",
        cta: "View Projects",
    },
];

pub fn services() -> &'static [Service] {
    &SERVICES
}
