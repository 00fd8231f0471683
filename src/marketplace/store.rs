use std::cmp::Ordering;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{Property, PropertyId, PropertyStatus, PropertyType};
use super::featured::FeaturedEngine;
use super::persistence::{ListingPersistence, PersistenceError};
use super::seed;

/// Storage key under which the whole catalog is persisted as one blob.
pub const CATALOG_KEY: &str = "properties";

/// Error enumeration for catalog mutations. Lookup misses are deliberately
/// not errors: status updates and deletes on unknown ids are no-ops, and
/// reads signal absence with `Option`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("listing {0} already exists")]
    DuplicateId(PropertyId),
    #[error("failed to serialize catalog snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Filters applied to the buyer-facing catalog view. Unset fields match
/// everything; the text search spans title, city, and street.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub property_type: Option<PropertyType>,
    pub city: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_bedrooms: Option<u8>,
    pub min_bathrooms: Option<f32>,
    pub min_roi: Option<f32>,
}

impl ListingQuery {
    fn matches(&self, property: &Property) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = property.title.to_lowercase().contains(&needle)
                || property.location.city.to_lowercase().contains(&needle)
                || property.location.street.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(kind) = self.property_type {
            if property.property_type != kind {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if !property.location.city.eq_ignore_ascii_case(city) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_bedrooms {
            if !matches!(property.features.bedrooms, Some(count) if count >= min) {
                return false;
            }
        }
        if let Some(min) = self.min_bathrooms {
            if !matches!(property.features.bathrooms, Some(count) if count >= min) {
                return false;
            }
        }
        if let Some(min) = self.min_roi {
            if property.roi < min {
                return false;
            }
        }
        true
    }
}

/// Sort orders offered on the listings page. The default puts featured
/// listings first, ranked by their featured score, with non-featured
/// listings trailing in recency order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    RoiHighLow,
}

/// The session-authoritative catalog of listings.
///
/// Holds the collection in memory in insertion order and writes the whole
/// serialized catalog through the persistence collaborator after every
/// mutation, so a later session restores the latest state. Derived views
/// re-filter and re-sort on every call; with catalog-sized N there is
/// nothing worth caching.
pub struct PropertyStore<P: ListingPersistence> {
    properties: Vec<Property>,
    persistence: P,
    key: String,
}

impl<P: ListingPersistence> PropertyStore<P> {
    /// Open the catalog under the default storage key.
    pub fn open(persistence: P) -> Self {
        Self::open_with_key(persistence, CATALOG_KEY)
    }

    /// Open the catalog, hydrating from the persisted snapshot when one
    /// exists. A missing, unreadable, or corrupt snapshot falls back to the
    /// seed catalog; corruption is logged, never surfaced to the caller.
    pub fn open_with_key(persistence: P, key: &str) -> Self {
        let properties = match persistence.load(key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Property>>(&blob) {
                Ok(stored) => {
                    info!(count = stored.len(), "restored catalog snapshot");
                    stored
                }
                Err(err) => {
                    warn!(%err, "discarding corrupt catalog snapshot, reseeding");
                    seed::seed_properties()
                }
            },
            Ok(None) => {
                info!("no catalog snapshot found, seeding initial listings");
                seed::seed_properties()
            }
            Err(err) => {
                warn!(%err, "catalog snapshot unreadable, reseeding");
                seed::seed_properties()
            }
        };

        Self {
            properties,
            persistence,
            key: key.to_string(),
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.properties)?;
        self.persistence.save(&self.key, &blob)?;
        Ok(())
    }

    /// Append a fully-formed listing. Ids must be unique within the catalog;
    /// a collision is rejected rather than silently shadowed. Note that two
    /// sessions writing through separate store instances still race at the
    /// snapshot level (last writer wins on the next load).
    pub fn add_property(&mut self, property: Property) -> Result<(), StoreError> {
        if self.properties.iter().any(|p| p.id == property.id) {
            return Err(StoreError::DuplicateId(property.id));
        }
        self.properties.push(property);
        self.persist()
    }

    /// Set a listing's status. The first transition into Pending or Sold
    /// stamps `closed_at`; later transitions, including back to Available,
    /// leave the original close date untouched. Unknown ids are a no-op.
    pub fn update_property_status(
        &mut self,
        id: &PropertyId,
        status: PropertyStatus,
    ) -> Result<(), StoreError> {
        let Some(property) = self.properties.iter_mut().find(|p| &p.id == id) else {
            return Ok(());
        };
        property.status = status;
        if status.is_closed() && property.closed_at.is_none() {
            property.closed_at = Some(Utc::now());
        }
        self.persist()
    }

    /// Remove a listing. Unknown ids are a no-op and skip the snapshot write.
    pub fn delete_property(&mut self, id: &PropertyId) -> Result<(), StoreError> {
        let before = self.properties.len();
        self.properties.retain(|p| &p.id != id);
        if self.properties.len() == before {
            return Ok(());
        }
        self.persist()
    }

    pub fn property_by_id(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| &p.id == id)
    }

    /// The full catalog in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Listings still on the market, in insertion order. Callers impose
    /// their own sort (see [`PropertyStore::search_available`]).
    pub fn available_properties(&self) -> Vec<Property> {
        self.properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Available)
            .cloned()
            .collect()
    }

    /// Closed deals (Pending or Sold), most recently closed first. Listings
    /// without a close date fall back to their creation date; ties keep the
    /// catalog's insertion order.
    pub fn closed_properties(&self) -> Vec<Property> {
        let mut closed: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.status.is_closed())
            .cloned()
            .collect();
        closed.sort_by(|a, b| b.closed_sort_key().cmp(&a.closed_sort_key()));
        closed
    }

    /// Filtered, sorted view of the available listings for the catalog page.
    pub fn search_available(
        &self,
        query: &ListingQuery,
        sort: SortOrder,
        engine: &FeaturedEngine,
    ) -> Vec<Property> {
        let mut results: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Available && query.matches(p))
            .cloned()
            .collect();

        match sort {
            SortOrder::Featured => results.sort_by(|a, b| match (a.featured, b.featured) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (true, true) => engine
                    .ranking_score(b)
                    .partial_cmp(&engine.ranking_score(a))
                    .unwrap_or(Ordering::Equal),
                (false, false) => b.created_at.cmp(&a.created_at),
            }),
            SortOrder::PriceLowHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHighLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::RoiHighLow => results.sort_by(|a, b| {
                b.roi.partial_cmp(&a.roi).unwrap_or(Ordering::Equal)
            }),
        }

        results
    }

    /// Distinct cities with available inventory, sorted for display.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .properties
            .iter()
            .filter(|p| p.status == PropertyStatus::Available)
            .map(|p| p.location.city.clone())
            .collect();
        cities.sort();
        cities.dedup();
        cities
    }
}
