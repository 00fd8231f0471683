//! End-to-end catalog lifecycle against real file-backed persistence:
//! seed on first open, restore on reopen, and close-date semantics across
//! sessions.

use listinghub::marketplace::{
    JsonFilePersistence, ListingDraft, ListingIntake, Location, PropertyId, PropertyStatus,
    PropertyStore,
};
use tempfile::TempDir;

fn storage() -> (TempDir, JsonFilePersistence) {
    let dir = TempDir::new().expect("temp dir");
    let persistence = JsonFilePersistence::new(dir.path());
    (dir, persistence)
}

fn draft(title: &str) -> ListingDraft {
    ListingDraft {
        title: title.to_string(),
        description: "A tenant-occupied rental acquired through the integration test \
                      suite, complete with photos and numbers."
            .to_string(),
        price: Some(125_000),
        roi: Some(13.0),
        cash_flow: Some(1_250.0),
        location: Location {
            street: "42 Integration Way".to_string(),
            city: "Ames".to_string(),
            state: "IA".to_string(),
            zip: "50010".to_string(),
        },
        bedrooms: Some(3),
        bathrooms: Some(1.5),
        sqft: Some(1_300),
        images: vec!["1.jpg".to_string(), "2.jpg".to_string(), "3.jpg".to_string()],
        tenant_occupied: true,
        ..ListingDraft::default()
    }
}

#[test]
fn first_open_seeds_then_reopen_restores() {
    let (_dir, persistence) = storage();

    let mut store = PropertyStore::open(persistence.clone());
    assert_eq!(store.len(), 6, "fresh catalog starts from the seed data");

    let intake = ListingIntake::default();
    let listing = intake.build_listing(draft("Persisted Rental")).expect("intake");
    let id = listing.id.clone();
    store.add_property(listing).expect("add");
    drop(store);

    let reopened = PropertyStore::open(persistence);
    assert_eq!(reopened.len(), 7);
    let restored = reopened.property_by_id(&id).expect("restored listing");
    assert_eq!(restored.title, "Persisted Rental");
    assert!(restored.featured, "featured verdict survives the round trip");
}

#[test]
fn close_date_survives_sessions_and_later_transitions() {
    let (_dir, persistence) = storage();

    let mut store = PropertyStore::open(persistence.clone());
    let id = PropertyId("seed-drake-duplex".to_string());
    store
        .update_property_status(&id, PropertyStatus::Pending)
        .expect("close");
    let closed_at = store
        .property_by_id(&id)
        .and_then(|p| p.closed_at)
        .expect("close date stamped");
    drop(store);

    let mut reopened = PropertyStore::open(persistence.clone());
    reopened
        .update_property_status(&id, PropertyStatus::Sold)
        .expect("sold transition");
    let listing = reopened.property_by_id(&id).expect("listing present");
    assert_eq!(listing.status, PropertyStatus::Sold);
    assert_eq!(listing.closed_at, Some(closed_at));

    // The freshly closed deal now leads the closed view.
    let closed = reopened.closed_properties();
    assert_eq!(closed[0].id, id);
}

#[test]
fn deleted_listings_stay_gone_after_reopen() {
    let (_dir, persistence) = storage();

    let mut store = PropertyStore::open(persistence.clone());
    let id = PropertyId("seed-starter-bungalow".to_string());
    store.delete_property(&id).expect("delete");
    drop(store);

    let reopened = PropertyStore::open(persistence);
    assert_eq!(reopened.len(), 5);
    assert!(reopened.property_by_id(&id).is_none());
}

#[test]
fn corrupt_snapshot_file_reseeds_without_error() {
    let (dir, persistence) = storage();
    std::fs::write(dir.path().join("properties.json"), b"\x00garbage")
        .expect("write corrupt snapshot");

    let store = PropertyStore::open(persistence);
    assert_eq!(store.len(), 6, "corruption falls back to the seed catalog");
}
