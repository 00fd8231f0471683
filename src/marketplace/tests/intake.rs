use super::common::*;
use crate::marketplace::domain::PropertyStatus;
use crate::marketplace::intake::{IntakeError, ListingIntake, PLACEHOLDER_IMAGE};

fn intake() -> ListingIntake {
    ListingIntake::default()
}

#[test]
fn draft_without_images_gets_the_placeholder() {
    let mut draft = strong_draft();
    draft.images = Vec::new();

    let listing = intake().build_listing(draft).expect("listing builds");
    assert_eq!(listing.images, vec![PLACEHOLDER_IMAGE.to_string()]);
}

#[test]
fn submitted_images_are_kept_verbatim() {
    let draft = strong_draft();
    let expected = draft.images.clone();

    let listing = intake().build_listing(draft).expect("listing builds");
    assert_eq!(listing.images, expected);
}

#[test]
fn new_listings_start_available_and_unclosed() {
    let listing = intake()
        .build_listing(strong_draft())
        .expect("listing builds");
    assert_eq!(listing.status, PropertyStatus::Available);
    assert!(listing.closed_at.is_none());
}

#[test]
fn featured_verdict_matches_the_gate() {
    let engine = engine();

    let strong = intake()
        .build_listing(strong_draft())
        .expect("listing builds");
    assert_eq!(strong.featured, engine.qualifies(&strong_draft()));
    assert!(strong.featured);

    let weak = intake().build_listing(weak_draft()).expect("listing builds");
    assert!(!weak.featured);
}

#[test]
fn missing_required_fields_are_rejected() {
    let mut no_title = strong_draft();
    no_title.title = "  ".to_string();
    assert!(matches!(
        intake().build_listing(no_title),
        Err(IntakeError::MissingField("title"))
    ));

    let mut no_description = strong_draft();
    no_description.description = String::new();
    assert!(matches!(
        intake().build_listing(no_description),
        Err(IntakeError::MissingField("description"))
    ));

    let mut no_price = strong_draft();
    no_price.price = None;
    assert!(matches!(
        intake().build_listing(no_price),
        Err(IntakeError::MissingField("price"))
    ));

    let mut no_sqft = strong_draft();
    no_sqft.sqft = None;
    assert!(matches!(
        intake().build_listing(no_sqft),
        Err(IntakeError::MissingField("square footage"))
    ));
}

#[test]
fn zero_price_and_sqft_are_invalid() {
    let mut zero_price = strong_draft();
    zero_price.price = Some(0);
    assert!(matches!(
        intake().build_listing(zero_price),
        Err(IntakeError::InvalidPrice)
    ));

    let mut zero_sqft = strong_draft();
    zero_sqft.sqft = Some(0);
    assert!(matches!(
        intake().build_listing(zero_sqft),
        Err(IntakeError::InvalidSqft)
    ));
}

#[test]
fn missing_numerics_default_to_zero_not_errors() {
    let mut draft = strong_draft();
    draft.roi = None;
    draft.cash_flow = None;

    let listing = intake().build_listing(draft).expect("listing builds");
    assert_eq!(listing.roi, 0.0);
    assert_eq!(listing.cash_flow, 0.0);
}

#[test]
fn blank_contact_name_falls_back() {
    let mut draft = strong_draft();
    draft.contact_name = Some("   ".to_string());
    draft.contact_email = None;
    draft.contact_phone = Some("515-555-0199".to_string());

    let listing = intake().build_listing(draft).expect("listing builds");
    assert_eq!(listing.contact.name, "Property Owner");
    assert_eq!(listing.contact.email, "");
    assert_eq!(listing.contact.phone, "515-555-0199");
}

#[test]
fn consecutive_drafts_get_distinct_ids() {
    let intake = intake();
    let first = intake
        .build_listing(strong_draft())
        .expect("listing builds");
    let second = intake
        .build_listing(strong_draft())
        .expect("listing builds");
    assert_ne!(first.id, second.id);
}
