//! The marketplace core: listing domain model, featured evaluation, intake,
//! and the session-local property catalog with its persistence collaborator.

pub mod domain;
pub mod export;
pub mod featured;
pub mod intake;
pub mod persistence;
pub mod router;
pub mod seed;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactInfo, ListingDraft, Location, Property, PropertyFeatures, PropertyId, PropertyStatus,
    PropertyType,
};
pub use export::{write_catalog_csv, ExportError};
pub use featured::{
    CriteriaBreakdown, CriterionOutcome, FeaturedCriterion, FeaturedEngine, FeaturedRubric,
    RankingFactor, RankingOutcome, ScoreBand,
};
pub use intake::{IntakeError, ListingIntake, PLACEHOLDER_IMAGE};
pub use persistence::{JsonFilePersistence, ListingPersistence, PersistenceError};
pub use router::{catalog_router, CatalogState};
pub use seed::seed_properties;
pub use store::{ListingQuery, PropertyStore, SortOrder, StoreError, CATALOG_KEY};
