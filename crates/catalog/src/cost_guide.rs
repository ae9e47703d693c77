use std::num::IntErrorKind;

use crate::format_usd;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGuide {
    pub title: &'static str,
    pub min: u64,
    pub max: u64,
    pub note: &'static str,
}

impl CostGuide {
    pub fn range_label(&self) -> String {
        format!("{} – {}", format_usd(self.min), format_usd(self.max))
    }
}

static GUIDES: [CostGuide; 4] = [
    CostGuide {
        title: "Kitchen Remodel",
        min: 8_000,
        max: 25_000,
        note: "Cabinetry, counters, fixtures, lighting",
    },
    CostGuide {
        title: "Bathroom Remodel",
        min: 5_000,
        max: 18_000,
        note: "Tile, vanity, shower, plumbing updates",
    },
    CostGuide {
        title: "Flooring (Whole Home)",
        min: 3_000,
        max: 12_000,
        note: "Laminate, LVP, hardwood options",
    },
    CostGuide {
        title: "Roof Replacement",
        min: 4_500,
        max: 12_000,
        note: "Asphalt shingle; varies by pitch & area",
    },
];

pub fn cost_guides() -> &'static [CostGuide] {
    &GUIDES
}

/// Slider value in whole dollars, always within range and on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Budget(u64);

impl Budget {
    pub const MIN: u64 = 3_000;
    pub const MAX: u64 = 30_000;
    pub const STEP: u64 = 500;
    pub const DEFAULT: u64 = 15_000;

    pub fn new(amount: u64) -> Self {
        let clamped = amount.clamp(Self::MIN, Self::MAX);

        Self(clamped - (clamped - Self::MIN) % Self::STEP)
    }

    /// Reads a query value. Whole numbers past either end saturate to that
    /// end; anything that isn't a whole number gives `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<i64>() {
            Ok(amount) => Some(Self::new(u64::try_from(amount).unwrap_or(0))),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Some(Self::new(u64::MAX)),
                IntErrorKind::NegOverflow => Some(Self::new(0)),
                _ => None,
            },
        }
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    pub fn label(&self) -> String {
        format_usd(self.0)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Guides whose starting price fits the budget, in catalog order.
pub fn affordable(budget: Budget) -> Vec<&'static CostGuide> {
    GUIDES.iter().filter(|g| g.min <= budget.amount()).collect()
}
