use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ListingDraft, PropertyId, PropertyStatus};
use super::featured::FeaturedEngine;
use super::intake::{IntakeError, ListingIntake};
use super::persistence::ListingPersistence;
use super::store::{ListingQuery, PropertyStore, SortOrder, StoreError};

/// Shared state for the catalog endpoints. The mutex serializes mutations
/// from concurrent requests; within one store instance there is no finer
/// grained coordination to do.
pub struct CatalogState<P: ListingPersistence> {
    pub store: Mutex<PropertyStore<P>>,
    pub engine: FeaturedEngine,
    pub intake: ListingIntake,
}

impl<P: ListingPersistence> CatalogState<P> {
    pub fn new(store: PropertyStore<P>) -> Self {
        Self {
            store: Mutex::new(store),
            engine: FeaturedEngine::default(),
            intake: ListingIntake::default(),
        }
    }
}

// Query-string fields are kept flat: serde_urlencoded cannot drive a
// flattened struct with non-string fields.
#[derive(Debug, Deserialize)]
struct CatalogQuery {
    #[serde(default)]
    sort: Option<SortOrder>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    property_type: Option<super::domain::PropertyType>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    min_price: Option<u32>,
    #[serde(default)]
    max_price: Option<u32>,
    #[serde(default)]
    min_bedrooms: Option<u8>,
    #[serde(default)]
    min_bathrooms: Option<f32>,
    #[serde(default)]
    min_roi: Option<f32>,
}

impl CatalogQuery {
    fn filters(&self) -> ListingQuery {
        ListingQuery {
            search: self.search.clone(),
            property_type: self.property_type,
            city: self.city.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            min_roi: self.min_roi,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatusChange {
    status: PropertyStatus,
}

/// Router builder exposing the catalog over HTTP.
pub fn catalog_router<P: ListingPersistence + 'static>(state: Arc<CatalogState<P>>) -> Router {
    Router::new()
        .route(
            "/api/v1/listings",
            get(list_handler::<P>).post(create_handler::<P>),
        )
        .route("/api/v1/listings/closed", get(closed_handler::<P>))
        .route(
            "/api/v1/listings/:listing_id",
            get(lookup_handler::<P>).delete(delete_handler::<P>),
        )
        .route(
            "/api/v1/listings/:listing_id/status",
            put(status_handler::<P>),
        )
        .route(
            "/api/v1/listings/:listing_id/criteria",
            get(criteria_handler::<P>),
        )
        .with_state(state)
}

fn lock_error() -> Response {
    let payload = json!({ "error": "catalog unavailable" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

async fn list_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    Query(query): Query<CatalogQuery>,
) -> Response {
    let Ok(store) = state.store.lock() else {
        return lock_error();
    };
    let listings = store.search_available(
        &query.filters(),
        query.sort.unwrap_or_default(),
        &state.engine,
    );
    (StatusCode::OK, axum::Json(listings)).into_response()
}

async fn closed_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
) -> Response {
    let Ok(store) = state.store.lock() else {
        return lock_error();
    };
    (StatusCode::OK, axum::Json(store.closed_properties())).into_response()
}

async fn create_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    axum::Json(draft): axum::Json<ListingDraft>,
) -> Response {
    let property = match state.intake.build_listing(draft) {
        Ok(property) => property,
        Err(err @ IntakeError::MissingField(_))
        | Err(err @ IntakeError::InvalidPrice)
        | Err(err @ IntakeError::InvalidSqft) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let Ok(mut store) = state.store.lock() else {
        return lock_error();
    };
    match store.add_property(property.clone()) {
        Ok(()) => (StatusCode::CREATED, axum::Json(property)).into_response(),
        Err(StoreError::DuplicateId(id)) => {
            let payload = json!({ "error": format!("listing {id} already exists") });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

async fn lookup_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    Path(listing_id): Path<String>,
) -> Response {
    let Ok(store) = state.store.lock() else {
        return lock_error();
    };
    match store.property_by_id(&PropertyId(listing_id)) {
        Some(property) => (StatusCode::OK, axum::Json(property.clone())).into_response(),
        None => not_found(),
    }
}

async fn criteria_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    Path(listing_id): Path<String>,
) -> Response {
    let Ok(store) = state.store.lock() else {
        return lock_error();
    };
    match store.property_by_id(&PropertyId(listing_id)) {
        Some(property) => {
            let breakdown = state.engine.criteria(&ListingDraft::from(property));
            let ranking = state.engine.ranking(property);
            let payload = json!({
                "criteria": breakdown,
                "ranking": ranking,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => not_found(),
    }
}

async fn status_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    Path(listing_id): Path<String>,
    axum::Json(change): axum::Json<StatusChange>,
) -> Response {
    let id = PropertyId(listing_id);
    let Ok(mut store) = state.store.lock() else {
        return lock_error();
    };
    if store.property_by_id(&id).is_none() {
        return not_found();
    }
    match store.update_property_status(&id, change.status) {
        Ok(()) => {
            let updated = store.property_by_id(&id).cloned();
            (StatusCode::OK, axum::Json(updated)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

async fn delete_handler<P: ListingPersistence>(
    State(state): State<Arc<CatalogState<P>>>,
    Path(listing_id): Path<String>,
) -> Response {
    let Ok(mut store) = state.store.lock() else {
        return lock_error();
    };
    match store.delete_property(&PropertyId(listing_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn not_found() -> Response {
    let payload = json!({ "error": "listing not found" });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
