use crate::format_usd;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemodelProject {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub duration_weeks: u8,
    pub investment: u64,
}

impl RemodelProject {
    pub fn duration_label(&self) -> String {
        match self.duration_weeks {
            1 => "1 week".to_owned(),
            weeks => format!("{weeks} weeks"),
        }
    }

    pub fn investment_label(&self) -> String {
        format_usd(self.investment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproachStep {
    pub title: &'static str,
    pub description: &'static str,
}

static PROJECTS: [RemodelProject; 6] = [
    RemodelProject {
        title: "Modern Kitchen Transformation",
        category: "Kitchen Remodel",
        description: "Complete kitchen renovation featuring custom cabinetry, quartz countertops, and premium appliances.",
        duration_weeks: 6,
        investment: 85_000,
    },
    RemodelProject {
        title: "Spa-Inspired Master Bath",
        category: "Bathroom Renovation",
        description: "Luxurious master bathroom with natural stone, heated floors, and custom vanity.",
        duration_weeks: 4,
        investment: 45_000,
    },
    RemodelProject {
        title: "Open Concept Living",
        category: "Whole Home",
        description: "Structural renovation creating seamless flow between kitchen, dining, and living areas.",
        duration_weeks: 12,
        investment: 150_000,
    },
    RemodelProject {
        title: "Outdoor Living Oasis",
        category: "Outdoor Space",
        description: "Custom deck, outdoor kitchen, and landscaping for year-round entertaining.",
        duration_weeks: 8,
        investment: 65_000,
    },
    RemodelProject {
        title: "Historic Home Revival",
        category: "Restoration",
        description: "Careful restoration preserving original character while adding modern amenities.",
        duration_weeks: 16,
        investment: 200_000,
    },
    RemodelProject {
        title: "Contemporary Addition",
        category: "Home Addition",
        description: "Seamless addition adding 800 sq ft of living space with floor-to-ceiling windows.",
        duration_weeks: 14,
        investment: 180_000,
    },
];

static APPROACH: [ApproachStep; 3] = [
    ApproachStep {
        title: "Design Consultation",
        description: "Collaborative planning to understand your vision, lifestyle, and aesthetic preferences.",
    },
    ApproachStep {
        title: "Precision Execution",
        description: "Meticulous craftsmanship using premium materials and time-tested construction methods.",
    },
    ApproachStep {
        title: "Lasting Excellence",
        description: "Delivering spaces that enhance your daily life and stand the test of time.",
    },
];

pub fn projects() -> &'static [RemodelProject] {
    &PROJECTS
}

/// Steps paired with their two-digit number (`01`, `02`, ...).
pub fn approach() -> impl Iterator<Item = (String, &'static ApproachStep)> {
    APPROACH
        .iter()
        .enumerate()
        .map(|(i, step)| (format!("{:02}", i + 1), step))
}
