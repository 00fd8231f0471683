//! Featured-listing evaluation.
//!
//! Two separate questions, answered by the same engine: does a listing
//! qualify for featured placement at all (a six-criterion checklist with a
//! simple majority threshold), and how should already-featured listings be
//! ordered relative to each other (a weighted 0-100 ranking score). The gate
//! runs on seller drafts and tolerates missing data; the ranking score runs
//! only on store-resident listings.

mod config;
mod rules;

pub use config::FeaturedRubric;

use crate::marketplace::domain::{ListingDraft, Property};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The six checklist signals behind the featured gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeaturedCriterion {
    HighRoi,
    PricePoint,
    CashFlow,
    PhotoSet,
    Condition,
    CompleteDetails,
}

impl FeaturedCriterion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRoi => "High ROI",
            Self::PricePoint => "Good price point",
            Self::CashFlow => "High cash flow",
            Self::PhotoSet => "Multiple images",
            Self::Condition => "Good condition",
            Self::CompleteDetails => "Complete details",
        }
    }
}

/// One checklist signal with its verdict, kept for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    pub criterion: FeaturedCriterion,
    pub met: bool,
    pub notes: String,
}

/// Gate verdict broken down per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaBreakdown {
    pub outcomes: Vec<CriterionOutcome>,
    pub score: u8,
}

impl CriteriaBreakdown {
    pub fn met(&self) -> Vec<&CriterionOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.met).collect()
    }

    pub fn not_met(&self) -> Vec<&CriterionOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.met)
            .collect()
    }
}

/// Weighted factors of the ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingFactor {
    Roi,
    CashFlow,
    PricePoint,
    PhotoSet,
    Condition,
}

/// Contribution of one ranking factor, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub factor: RankingFactor,
    pub points: f32,
    pub notes: String,
}

/// Ranking output for a single listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    pub total: f32,
    pub bands: Vec<ScoreBand>,
}

/// Stateless evaluator applying the featured rubric.
#[derive(Debug, Clone, Default)]
pub struct FeaturedEngine {
    rubric: FeaturedRubric,
}

impl FeaturedEngine {
    pub fn new(rubric: FeaturedRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &FeaturedRubric {
        &self.rubric
    }

    /// Checklist breakdown for a draft. Missing optional fields fail their
    /// criterion; they never error.
    pub fn criteria(&self, draft: &ListingDraft) -> CriteriaBreakdown {
        let outcomes = rules::gate_criteria(draft, &self.rubric);
        let score = outcomes.iter().filter(|outcome| outcome.met).count() as u8;
        CriteriaBreakdown { outcomes, score }
    }

    /// The featured gate: true iff enough checklist criteria hold.
    pub fn qualifies(&self, draft: &ListingDraft) -> bool {
        let breakdown = self.criteria(draft);
        let featured = breakdown.score >= self.rubric.required_criteria;
        if featured {
            debug!(
                title = %draft.title,
                score = breakdown.score,
                "listing qualifies for featured placement"
            );
        }
        featured
    }

    /// Ranking score in [0, 100] for ordering featured listings. Assumes a
    /// store-resident listing; the clamp is defensive since the band maxima
    /// already sum to 100.
    pub fn ranking_score(&self, property: &Property) -> f32 {
        self.ranking(property).total
    }

    /// Ranking score with the per-band contributions.
    pub fn ranking(&self, property: &Property) -> RankingOutcome {
        let bands = rules::ranking_bands(property);
        let total: f32 = bands.iter().map(|band| band.points).sum();
        RankingOutcome {
            total: total.clamp(0.0, 100.0),
            bands,
        }
    }
}
