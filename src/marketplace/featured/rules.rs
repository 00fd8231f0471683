use super::config::FeaturedRubric;
use super::{CriterionOutcome, FeaturedCriterion, RankingFactor, ScoreBand};
use crate::marketplace::domain::{ListingDraft, Property};

pub(crate) fn gate_criteria(draft: &ListingDraft, rubric: &FeaturedRubric) -> Vec<CriterionOutcome> {
    let mut outcomes = Vec::with_capacity(6);

    let roi_met = matches!(draft.roi, Some(roi) if roi >= rubric.minimum_roi);
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::HighRoi,
        met: roi_met,
        notes: match draft.roi {
            Some(roi) if roi_met => format!("ROI {roi}% meets minimum {}%", rubric.minimum_roi),
            Some(roi) => format!("ROI {roi}% below {}%", rubric.minimum_roi),
            None => "ROI not provided".to_string(),
        },
    });

    let price_met = matches!(
        draft.price,
        Some(price) if price >= rubric.price_floor && price <= rubric.price_ceiling
    );
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::PricePoint,
        met: price_met,
        notes: match draft.price {
            Some(price) if price_met => format!("price ${price} inside optimal range"),
            Some(price) => format!(
                "price ${price} outside ${}-${}",
                rubric.price_floor, rubric.price_ceiling
            ),
            None => "price not provided".to_string(),
        },
    });

    let cash_flow_met = matches!(draft.cash_flow, Some(flow) if flow >= rubric.minimum_cash_flow);
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::CashFlow,
        met: cash_flow_met,
        notes: match draft.cash_flow {
            Some(flow) if cash_flow_met => format!("cash flow ${flow}/mo meets minimum"),
            Some(flow) => format!("cash flow ${flow}/mo below ${}/mo", rubric.minimum_cash_flow),
            None => "cash flow not provided".to_string(),
        },
    });

    let images_met = draft.images.len() >= rubric.minimum_images;
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::PhotoSet,
        met: images_met,
        notes: format!(
            "{} of {} required images",
            draft.images.len(),
            rubric.minimum_images
        ),
    });

    let recently_built =
        matches!(draft.year_built, Some(year) if year >= rubric.recent_build_cutoff);
    let condition_met = draft.tenant_occupied || recently_built;
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::Condition,
        met: condition_met,
        notes: if draft.tenant_occupied {
            "tenant occupied".to_string()
        } else if recently_built {
            format!("built {}", draft.year_built.unwrap_or_default())
        } else {
            "no tenant and not recently built".to_string()
        },
    });

    let described = draft.description.len() > rubric.description_floor;
    let has_bedrooms = matches!(draft.bedrooms, Some(count) if count > 0);
    let has_bathrooms = matches!(draft.bathrooms, Some(count) if count > 0.0);
    let details_met = described && has_bedrooms && has_bathrooms;
    outcomes.push(CriterionOutcome {
        criterion: FeaturedCriterion::CompleteDetails,
        met: details_met,
        notes: if details_met {
            "description, bedrooms, and bathrooms present".to_string()
        } else {
            "missing description, bedroom, or bathroom details".to_string()
        },
    });

    outcomes
}

/// Weighted ranking bands for ordering listings that are already featured.
/// The band maxima sum to exactly 100; the caller clamps defensively.
pub(crate) fn ranking_bands(property: &Property) -> Vec<ScoreBand> {
    let mut bands = Vec::with_capacity(5);

    let roi = property.roi;
    let roi_points = if roi >= 15.0 {
        25.0
    } else if roi >= 12.0 {
        20.0
    } else if roi >= 10.0 {
        15.0
    } else {
        (roi / 10.0) * 10.0
    };
    bands.push(ScoreBand {
        factor: RankingFactor::Roi,
        points: roi_points,
        notes: format!("ROI {roi}%"),
    });

    let cash_flow = property.cash_flow;
    let cash_flow_points = if cash_flow >= 2_000.0 {
        25.0
    } else if cash_flow >= 1_000.0 {
        20.0
    } else if cash_flow >= 500.0 {
        15.0
    } else {
        (cash_flow / 500.0) * 10.0
    };
    bands.push(ScoreBand {
        factor: RankingFactor::CashFlow,
        points: cash_flow_points,
        notes: format!("${cash_flow}/mo net"),
    });

    let price = property.price;
    let price_points = if (70_000..=200_000).contains(&price) {
        20.0
    } else if (50_000..=300_000).contains(&price) {
        15.0
    } else if (30_000..=400_000).contains(&price) {
        10.0
    } else {
        5.0
    };
    bands.push(ScoreBand {
        factor: RankingFactor::PricePoint,
        points: price_points,
        notes: format!("asking ${price}"),
    });

    let image_count = property.images.len();
    let image_points = if image_count >= 5 {
        15.0
    } else if image_count >= 3 {
        12.0
    } else if image_count >= 2 {
        8.0
    } else {
        5.0
    };
    bands.push(ScoreBand {
        factor: RankingFactor::PhotoSet,
        points: image_points,
        notes: format!("{image_count} image(s)"),
    });

    // Condition bonuses stack: an occupied, recently built property earns both.
    let mut condition_points = 0.0;
    if property.tenant_occupied {
        condition_points += 10.0;
    }
    match property.features.year_built {
        Some(year) if year >= 2015 => condition_points += 5.0,
        Some(year) if year >= 2000 => condition_points += 3.0,
        _ => {}
    }
    bands.push(ScoreBand {
        factor: RankingFactor::Condition,
        points: condition_points,
        notes: match (property.tenant_occupied, property.features.year_built) {
            (true, Some(year)) => format!("tenant occupied, built {year}"),
            (true, None) => "tenant occupied".to_string(),
            (false, Some(year)) => format!("built {year}"),
            (false, None) => "vacant, build year unknown".to_string(),
        },
    });

    bands
}
