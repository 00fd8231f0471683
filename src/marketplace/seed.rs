//! Initial catalog used whenever no persisted snapshot exists (first launch,
//! or recovery after a corrupt snapshot). Featured flags here were produced
//! by the standard rubric and must stay consistent with it.

use chrono::{DateTime, TimeZone, Utc};

use super::domain::{
    ContactInfo, Location, Property, PropertyFeatures, PropertyId, PropertyStatus, PropertyType,
};

fn seeded_at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId("seed-drake-duplex".to_string()),
            title: "Renovated Duplex Near Drake University".to_string(),
            property_type: PropertyType::Duplex,
            price: 185_000,
            roi: 14.2,
            cash_flow: 1_650.0,
            location: Location {
                street: "1215 34th St".to_string(),
                city: "Des Moines".to_string(),
                state: "IA".to_string(),
                zip: "50311".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: Some(4),
                bathrooms: Some(2.0),
                sqft: 2_100,
                units: Some(2),
                year_built: Some(2012),
                parking: Some(2),
            },
            description: "Fully renovated side-by-side duplex two blocks from campus, \
                          both units leased through next summer with long-term tenants."
                .to_string(),
            images: vec![
                "https://images.example.com/drake-duplex/front.jpg".to_string(),
                "https://images.example.com/drake-duplex/kitchen.jpg".to_string(),
                "https://images.example.com/drake-duplex/living.jpg".to_string(),
                "https://images.example.com/drake-duplex/bath.jpg".to_string(),
                "https://images.example.com/drake-duplex/yard.jpg".to_string(),
            ],
            status: PropertyStatus::Available,
            tenant_occupied: true,
            highlights: vec![
                "Both units leased".to_string(),
                "New roof 2023".to_string(),
                "Walk to campus".to_string(),
            ],
            created_at: seeded_at(2025, 6, 2, 14),
            closed_at: None,
            featured: true,
            contact: ContactInfo {
                name: "Prairie Door Realty".to_string(),
                email: "listings@prairiedoor.example".to_string(),
                phone: "515-555-0142".to_string(),
            },
        },
        Property {
            id: PropertyId("seed-turnkey-sfr".to_string()),
            title: "Turnkey Single Family Rental".to_string(),
            property_type: PropertyType::SingleFamily,
            price: 142_500,
            roi: 12.8,
            cash_flow: 1_150.0,
            location: Location {
                street: "807 Oakland Ave".to_string(),
                city: "Cedar Rapids".to_string(),
                state: "IA".to_string(),
                zip: "52402".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: Some(3),
                bathrooms: Some(1.5),
                sqft: 1_480,
                units: None,
                year_built: Some(2005),
                parking: Some(1),
            },
            description: "Three-bedroom ranch with a paying tenant in place, fresh paint, \
                          and updated mechanicals. Managed locally for the past five years."
                .to_string(),
            images: vec![
                "https://images.example.com/oakland-sfr/front.jpg".to_string(),
                "https://images.example.com/oakland-sfr/kitchen.jpg".to_string(),
                "https://images.example.com/oakland-sfr/bedroom.jpg".to_string(),
                "https://images.example.com/oakland-sfr/garage.jpg".to_string(),
            ],
            status: PropertyStatus::Available,
            tenant_occupied: true,
            highlights: vec![
                "Tenant in place".to_string(),
                "New furnace 2024".to_string(),
            ],
            created_at: seeded_at(2025, 6, 17, 9),
            closed_at: None,
            featured: true,
            contact: ContactInfo {
                name: "Prairie Door Realty".to_string(),
                email: "listings@prairiedoor.example".to_string(),
                phone: "515-555-0142".to_string(),
            },
        },
        Property {
            id: PropertyId("seed-value-add-fourplex".to_string()),
            title: "Value-Add Fourplex on the East Side".to_string(),
            property_type: PropertyType::MultiFamily,
            price: 365_000,
            roi: 9.5,
            cash_flow: 2_100.0,
            location: Location {
                street: "412 E Locust St".to_string(),
                city: "Davenport".to_string(),
                state: "IA".to_string(),
                zip: "52803".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: Some(8),
                bathrooms: Some(4.0),
                sqft: 4_400,
                units: Some(4),
                year_built: Some(1978),
                parking: Some(4),
            },
            description: "Brick fourplex with below-market rents and deferred cosmetics. \
                          Strong upside for an owner willing to reposition unit by unit."
                .to_string(),
            images: vec![
                "https://images.example.com/locust-fourplex/front.jpg".to_string(),
                "https://images.example.com/locust-fourplex/unit-a.jpg".to_string(),
            ],
            status: PropertyStatus::Available,
            tenant_occupied: false,
            highlights: vec![
                "Below-market rents".to_string(),
                "Separate utilities".to_string(),
            ],
            created_at: seeded_at(2025, 7, 1, 16),
            closed_at: None,
            featured: false,
            contact: ContactInfo {
                name: "River Bend Investments".to_string(),
                email: "deals@riverbend.example".to_string(),
                phone: "563-555-0188".to_string(),
            },
        },
        Property {
            id: PropertyId("seed-downtown-storefront".to_string()),
            title: "Downtown Commercial Storefront".to_string(),
            property_type: PropertyType::Commercial,
            price: 275_000,
            roi: 8.2,
            cash_flow: 900.0,
            location: Location {
                street: "119 Main St".to_string(),
                city: "Iowa City".to_string(),
                state: "IA".to_string(),
                zip: "52240".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: None,
                bathrooms: None,
                sqft: 2_800,
                units: Some(1),
                year_built: Some(1994),
                parking: None,
            },
            description: "Street-level retail with a national-brand tenant on a triple-net \
                          lease running through 2028. Hands-off hold in a walkable corridor."
                .to_string(),
            images: vec![
                "https://images.example.com/main-storefront/facade.jpg".to_string(),
                "https://images.example.com/main-storefront/interior.jpg".to_string(),
                "https://images.example.com/main-storefront/corner.jpg".to_string(),
            ],
            status: PropertyStatus::Available,
            tenant_occupied: true,
            highlights: vec!["NNN lease".to_string(), "National tenant".to_string()],
            created_at: seeded_at(2025, 7, 9, 11),
            closed_at: None,
            featured: true,
            contact: ContactInfo {
                name: "River Bend Investments".to_string(),
                email: "deals@riverbend.example".to_string(),
                phone: "563-555-0188".to_string(),
            },
        },
        Property {
            id: PropertyId("seed-starter-bungalow".to_string()),
            title: "Starter Bungalow".to_string(),
            property_type: PropertyType::SingleFamily,
            price: 89_900,
            roi: 11.0,
            cash_flow: 750.0,
            location: Location {
                street: "318 Baltimore St".to_string(),
                city: "Waterloo".to_string(),
                state: "IA".to_string(),
                zip: "50701".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: Some(2),
                bathrooms: Some(1.0),
                sqft: 960,
                units: None,
                year_built: Some(1962),
                parking: Some(1),
            },
            description: "Two-bedroom bungalow priced to move. Solid bones, newer water \
                          heater, and a fenced yard on a quiet block near the park."
                .to_string(),
            images: vec!["https://images.example.com/baltimore-bungalow/front.jpg".to_string()],
            status: PropertyStatus::Sold,
            tenant_occupied: false,
            highlights: vec!["Fenced yard".to_string()],
            created_at: seeded_at(2025, 5, 20, 10),
            closed_at: Some(seeded_at(2025, 7, 18, 15)),
            featured: false,
            contact: ContactInfo {
                name: "Cedar Valley Homes".to_string(),
                email: "sales@cedarvalley.example".to_string(),
                phone: "319-555-0119".to_string(),
            },
        },
        Property {
            id: PropertyId("seed-garden-apartments".to_string()),
            title: "Garden Apartment Block".to_string(),
            property_type: PropertyType::Apartment,
            price: 298_000,
            roi: 13.5,
            cash_flow: 2_400.0,
            location: Location {
                street: "2304 Mount Vernon Rd".to_string(),
                city: "Cedar Rapids".to_string(),
                state: "IA".to_string(),
                zip: "52403".to_string(),
            },
            features: PropertyFeatures {
                bedrooms: None,
                bathrooms: None,
                sqft: 5_200,
                units: Some(6),
                year_built: Some(2016),
                parking: Some(8),
            },
            description: "Six-unit garden-style building, fully occupied with staggered \
                          leases. Professionally managed and cash flowing from day one."
                .to_string(),
            images: vec![
                "https://images.example.com/garden-block/exterior.jpg".to_string(),
                "https://images.example.com/garden-block/courtyard.jpg".to_string(),
                "https://images.example.com/garden-block/unit.jpg".to_string(),
                "https://images.example.com/garden-block/parking.jpg".to_string(),
                "https://images.example.com/garden-block/laundry.jpg".to_string(),
                "https://images.example.com/garden-block/aerial.jpg".to_string(),
            ],
            status: PropertyStatus::Pending,
            tenant_occupied: true,
            highlights: vec![
                "Fully occupied".to_string(),
                "Built 2016".to_string(),
                "On-site laundry".to_string(),
            ],
            created_at: seeded_at(2025, 6, 25, 13),
            closed_at: Some(seeded_at(2025, 8, 2, 9)),
            featured: true,
            contact: ContactInfo {
                name: "Cedar Valley Homes".to_string(),
                email: "sales@cedarvalley.example".to_string(),
                phone: "319-555-0119".to_string(),
            },
        },
    ]
}
