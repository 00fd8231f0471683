use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::info;

use super::domain::{
    ContactInfo, ListingDraft, Property, PropertyFeatures, PropertyId, PropertyStatus,
};
use super::featured::FeaturedEngine;

/// Image substituted when a seller submits no photos, so the catalog never
/// renders a listing without one.
pub const PLACEHOLDER_IMAGE: &str = "https://images.example.com/placeholder/house.jpg";

/// Fallback contact name when the seller leaves theirs blank.
const DEFAULT_CONTACT_NAME: &str = "Property Owner";

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_listing_id() -> PropertyId {
    let seq = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PropertyId(format!("listing-{}-{seq:04}", Utc::now().timestamp_millis()))
}

/// Error raised when a draft is too incomplete to become a listing. Missing
/// *optional* data never errors; only the fields every listing must carry.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("listing draft is missing a {0}")]
    MissingField(&'static str),
    #[error("price must be a positive amount")]
    InvalidPrice,
    #[error("square footage must be positive")]
    InvalidSqft,
}

/// Turns seller drafts into catalog-ready listings: assigns the id, stamps
/// the creation time, guarantees an image, snapshots contact details, and
/// runs the featured gate exactly once. The stored verdict is frozen; later
/// edits to the listing do not re-trigger it.
#[derive(Debug, Default)]
pub struct ListingIntake {
    engine: FeaturedEngine,
}

impl ListingIntake {
    pub fn new(engine: FeaturedEngine) -> Self {
        Self { engine }
    }

    pub fn build_listing(&self, draft: ListingDraft) -> Result<Property, IntakeError> {
        if draft.title.trim().is_empty() {
            return Err(IntakeError::MissingField("title"));
        }
        if draft.description.trim().is_empty() {
            return Err(IntakeError::MissingField("description"));
        }
        let price = draft.price.ok_or(IntakeError::MissingField("price"))?;
        if price == 0 {
            return Err(IntakeError::InvalidPrice);
        }
        let sqft = draft.sqft.ok_or(IntakeError::MissingField("square footage"))?;
        if sqft == 0 {
            return Err(IntakeError::InvalidSqft);
        }

        let featured = self.engine.qualifies(&draft);

        let images = if draft.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            draft.images
        };

        let property = Property {
            id: next_listing_id(),
            title: draft.title,
            property_type: draft.property_type,
            price,
            roi: draft.roi.unwrap_or(0.0),
            cash_flow: draft.cash_flow.unwrap_or(0.0),
            location: draft.location,
            features: PropertyFeatures {
                bedrooms: draft.bedrooms,
                bathrooms: draft.bathrooms,
                sqft,
                units: draft.units,
                year_built: draft.year_built,
                parking: draft.parking,
            },
            description: draft.description,
            images,
            status: PropertyStatus::Available,
            tenant_occupied: draft.tenant_occupied,
            highlights: draft.highlights,
            created_at: Utc::now(),
            closed_at: None,
            featured,
            contact: ContactInfo {
                name: draft
                    .contact_name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CONTACT_NAME.to_string()),
                email: draft.contact_email.unwrap_or_default(),
                phone: draft.contact_phone.unwrap_or_default(),
            },
        };

        info!(id = %property.id, featured, "listing created from draft");
        Ok(property)
    }
}
