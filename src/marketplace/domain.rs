use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Investment property category offered on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Duplex,
    MultiFamily,
    Apartment,
    Commercial,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SingleFamily,
            Self::Duplex,
            Self::MultiFamily,
            Self::Apartment,
            Self::Commercial,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleFamily => "Single Family",
            Self::Duplex => "Duplex",
            Self::MultiFamily => "Multi-Family",
            Self::Apartment => "Apartment",
            Self::Commercial => "Commercial",
        }
    }
}

/// Lifecycle state of a listing. Pending and Sold both count as closed deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Pending,
    Sold,
}

impl PropertyStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Pending => "Pending",
            Self::Sold => "Sold",
        }
    }

    /// Closed deals leave the buyer-facing catalog and stop accepting offers.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Pending | Self::Sold)
    }
}

/// Street address of a listed property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Physical attributes of a listing. Only square footage is mandatory;
/// commercial and land listings routinely omit the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<f32>,
    pub sqft: u32,
    pub units: Option<u8>,
    pub year_built: Option<u16>,
    pub parking: Option<u8>,
}

/// Lister contact details snapshotted at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A fully-formed catalog listing.
///
/// `featured` is decided once at intake and stored; catalog mutations never
/// recompute it. `closed_at` is stamped the first time the listing leaves the
/// Available state and is never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub property_type: PropertyType,
    pub price: u32,
    pub roi: f32,
    pub cash_flow: f32,
    pub location: Location,
    pub features: PropertyFeatures,
    pub description: String,
    pub images: Vec<String>,
    pub status: PropertyStatus,
    pub tenant_occupied: bool,
    pub highlights: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    pub featured: bool,
    pub contact: ContactInfo,
}

impl Property {
    /// Timestamp used to order closed deals: the close date when known,
    /// otherwise when the listing was created.
    pub fn closed_sort_key(&self) -> DateTime<Utc> {
        self.closed_at.unwrap_or(self.created_at)
    }
}

/// A listing candidate as submitted by a seller form, before intake fills in
/// identifiers, timestamps, and fallbacks. Numeric fields stay optional here:
/// the featured gate treats a missing value as a criterion that was not met,
/// never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<u32>,
    #[serde(default)]
    pub roi: Option<f32>,
    #[serde(default)]
    pub cash_flow: Option<f32>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<f32>,
    #[serde(default)]
    pub sqft: Option<u32>,
    #[serde(default)]
    pub units: Option<u8>,
    #[serde(default)]
    pub year_built: Option<u16>,
    #[serde(default)]
    pub parking: Option<u8>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tenant_occupied: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

impl Default for PropertyType {
    fn default() -> Self {
        Self::SingleFamily
    }
}

/// Re-projects a stored listing into draft shape so the featured rubric can
/// report its criteria breakdown on dashboards.
impl From<&Property> for ListingDraft {
    fn from(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            property_type: property.property_type,
            description: property.description.clone(),
            price: Some(property.price),
            roi: Some(property.roi),
            cash_flow: Some(property.cash_flow),
            location: property.location.clone(),
            bedrooms: property.features.bedrooms,
            bathrooms: property.features.bathrooms,
            sqft: Some(property.features.sqft),
            units: property.features.units,
            year_built: property.features.year_built,
            parking: property.features.parking,
            images: property.images.clone(),
            tenant_occupied: property.tenant_occupied,
            highlights: property.highlights.clone(),
            contact_name: Some(property.contact.name.clone()),
            contact_email: Some(property.contact.email.clone()),
            contact_phone: Some(property.contact.phone.clone()),
        }
    }
}
