use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::marketplace::domain::{
    ContactInfo, ListingDraft, Location, Property, PropertyFeatures, PropertyId, PropertyStatus,
    PropertyType,
};
use crate::marketplace::featured::FeaturedEngine;
use crate::marketplace::persistence::{ListingPersistence, PersistenceError};
use crate::marketplace::store::PropertyStore;

pub(super) fn engine() -> FeaturedEngine {
    FeaturedEngine::default()
}

pub(super) fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}

/// An Available listing with middling numbers; tests override what they need.
pub(super) fn property(id: &str) -> Property {
    Property {
        id: PropertyId(id.to_string()),
        title: format!("Test Listing {id}"),
        property_type: PropertyType::SingleFamily,
        price: 120_000,
        roi: 11.0,
        cash_flow: 800.0,
        location: Location {
            street: "100 Test St".to_string(),
            city: "Des Moines".to_string(),
            state: "IA".to_string(),
            zip: "50309".to_string(),
        },
        features: PropertyFeatures {
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            sqft: 1_400,
            units: None,
            year_built: Some(1995),
            parking: Some(1),
        },
        description: "A perfectly ordinary test listing with enough description text \
                      to clear the completeness threshold."
            .to_string(),
        images: vec!["https://images.example.com/test/front.jpg".to_string()],
        status: PropertyStatus::Available,
        tenant_occupied: false,
        highlights: Vec::new(),
        created_at: at(6, 1, 12),
        closed_at: None,
        featured: false,
        contact: ContactInfo {
            name: "Test Seller".to_string(),
            email: "seller@test.example".to_string(),
            phone: "515-555-0100".to_string(),
        },
    }
}

/// Draft meeting all six featured criteria (the 6/6 scenario: roi 15,
/// price 100k, cash flow 1500, four images, tenant occupied, full details).
pub(super) fn strong_draft() -> ListingDraft {
    ListingDraft {
        title: "Strong Listing".to_string(),
        property_type: PropertyType::SingleFamily,
        description: "Sixty-plus characters of description detailing this excellent \
                      cash-flowing rental property."
            .to_string(),
        price: Some(100_000),
        roi: Some(15.0),
        cash_flow: Some(1_500.0),
        location: Location::default(),
        bedrooms: Some(3),
        bathrooms: Some(2.0),
        sqft: Some(1_600),
        images: vec![
            "a.jpg".to_string(),
            "b.jpg".to_string(),
            "c.jpg".to_string(),
            "d.jpg".to_string(),
        ],
        tenant_occupied: true,
        ..ListingDraft::default()
    }
}

/// Draft failing every criterion (roi 5, price 500k, cash flow 200, one
/// image, vacant with no build year, thin details).
pub(super) fn weak_draft() -> ListingDraft {
    ListingDraft {
        title: "Weak Listing".to_string(),
        property_type: PropertyType::SingleFamily,
        description: "Short blurb.".to_string(),
        price: Some(500_000),
        roi: Some(5.0),
        cash_flow: Some(200.0),
        location: Location::default(),
        sqft: Some(1_000),
        images: vec!["a.jpg".to_string()],
        tenant_occupied: false,
        ..ListingDraft::default()
    }
}

/// Shared-map persistence fake so tests can inspect what the store wrote.
#[derive(Default, Clone)]
pub(super) struct MemoryPersistence {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPersistence {
    pub(super) fn with_blob(key: &str, blob: &str) -> Self {
        let store = Self::default();
        store
            .blobs
            .lock()
            .expect("blob mutex poisoned")
            .insert(key.to_string(), blob.to_string());
        store
    }

    pub(super) fn saved(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .expect("blob mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl ListingPersistence for MemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.saved(key))
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.blobs
            .lock()
            .expect("blob mutex poisoned")
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Persistence fake whose reads and writes always fail.
pub(super) struct BrokenPersistence;

impl ListingPersistence for BrokenPersistence {
    fn load(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Read(io::Error::new(
            io::ErrorKind::Other,
            "disk offline",
        )))
    }

    fn save(&self, _key: &str, _blob: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Write(io::Error::new(
            io::ErrorKind::Other,
            "disk offline",
        )))
    }
}

/// A store hydrated from an empty persisted snapshot (no seed data).
pub(super) fn empty_store() -> (PropertyStore<MemoryPersistence>, MemoryPersistence) {
    let persistence = MemoryPersistence::with_blob(crate::marketplace::store::CATALOG_KEY, "[]");
    let store = PropertyStore::open(persistence.clone());
    (store, persistence)
}

/// A store that fell back to the seed catalog.
pub(super) fn seeded_store() -> (PropertyStore<MemoryPersistence>, MemoryPersistence) {
    let persistence = MemoryPersistence::default();
    let store = PropertyStore::open(persistence.clone());
    (store, persistence)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
