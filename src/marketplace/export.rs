use std::io;

use super::domain::Property;

/// Error raised while writing the catalog export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write catalog csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush catalog csv: {0}")]
    Io(#[from] io::Error),
}

/// Write the catalog as a flat CSV snapshot, one row per listing, for
/// offline review. Optional fields render as empty cells.
pub fn write_catalog_csv<W: io::Write>(
    properties: &[Property],
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "id",
        "title",
        "type",
        "status",
        "price",
        "roi",
        "cash_flow",
        "city",
        "state",
        "sqft",
        "images",
        "featured",
        "created_at",
        "closed_at",
    ])?;

    for property in properties {
        csv_writer.write_record([
            property.id.0.as_str(),
            property.title.as_str(),
            property.property_type.label(),
            property.status.label(),
            &property.price.to_string(),
            &property.roi.to_string(),
            &property.cash_flow.to_string(),
            property.location.city.as_str(),
            property.location.state.as_str(),
            &property.features.sqft.to_string(),
            &property.images.len().to_string(),
            &property.featured.to_string(),
            &property.created_at.to_rfc3339(),
            &property
                .closed_at
                .map(|closed| closed.to_rfc3339())
                .unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::seed::seed_properties;

    #[test]
    fn export_emits_header_and_one_row_per_listing() {
        let properties = seed_properties();
        let mut buffer = Vec::new();

        write_catalog_csv(&properties, &mut buffer).expect("export succeeds");

        let text = String::from_utf8(buffer).expect("utf8 output");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), properties.len() + 1);
        assert!(lines[0].starts_with("id,title,type,status"));
        assert!(lines[1].contains("seed-drake-duplex"));
    }

    #[test]
    fn export_leaves_close_date_empty_for_open_listings() {
        let properties: Vec<_> = seed_properties()
            .into_iter()
            .filter(|p| p.closed_at.is_none())
            .collect();
        let mut buffer = Vec::new();

        write_catalog_csv(&properties, &mut buffer).expect("export succeeds");

        let text = String::from_utf8(buffer).expect("utf8 output");
        for line in text.lines().skip(1) {
            assert!(line.ends_with(','), "close date cell should be empty: {line}");
        }
    }
}
