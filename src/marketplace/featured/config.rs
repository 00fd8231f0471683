/// Thresholds for the featured-listing gate.
///
/// These are marketing business rules, not tuning parameters: every boundary
/// is inclusive exactly as published, and the defaults are the production
/// values. Tests construct variants to exercise edge behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedRubric {
    /// Annual return on investment, percent.
    pub minimum_roi: f32,
    /// Inclusive bounds of the optimal investment price range, USD.
    pub price_floor: u32,
    pub price_ceiling: u32,
    /// Net monthly cash flow, USD.
    pub minimum_cash_flow: f32,
    /// Listings need a real photo set to merit placement.
    pub minimum_images: usize,
    /// A build year at or after this counts as "good condition" even without
    /// a tenant in place.
    pub recent_build_cutoff: u16,
    /// Description must be strictly longer than this to count as complete.
    pub description_floor: usize,
    /// Number of criteria (out of six) required to feature a listing.
    pub required_criteria: u8,
}

impl Default for FeaturedRubric {
    fn default() -> Self {
        Self {
            minimum_roi: 12.0,
            price_floor: 50_000,
            price_ceiling: 300_000,
            minimum_cash_flow: 1_000.0,
            minimum_images: 3,
            recent_build_cutoff: 2010,
            description_floor: 50,
            required_criteria: 3,
        }
    }
}
