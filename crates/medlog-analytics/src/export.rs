//! Exporter: flatten the two-level store into medication rows.

use medlog_core::config::StoreConfig;
use medlog_core::row::MedicationRow;
use medlog_store::{DocumentStore, Result};
use tracing::debug;

const FIELD_MEDICATION_NAME: &str = "medicationName";
const FIELD_DOSAGE: &str = "dosage";
const FIELD_TIMESTAMP: &str = "timestamp";

/// Flatten every log entry under every entity into one row per entry.
///
/// Enumerates the entity collection, then each entity's
/// `{logs}/{entity_id}/{entries}` sub-collection. Only the entity's id is
/// used from the entity document. Missing entry fields stay `None` and
/// never drop a row; row order follows store enumeration order. Store
/// failures propagate — the caller terminates the run.
pub async fn export_medication_rows(
    store: &dyn DocumentStore,
    layout: &StoreConfig,
) -> Result<Vec<MedicationRow>> {
    let mut rows = Vec::new();

    let entities = store.list_documents(&layout.entities_collection).await?;
    for entity in &entities {
        let entries_path = format!(
            "{}/{}/{}",
            layout.logs_collection, entity.id, layout.entries_subcollection
        );
        for entry in store.list_documents(&entries_path).await? {
            rows.push(MedicationRow {
                pet_id: entity.id.clone(),
                medication_name: entry.text_field(FIELD_MEDICATION_NAME),
                dosage: entry.text_field(FIELD_DOSAGE),
                timestamp: entry.timestamp_field(FIELD_TIMESTAMP),
            });
        }
    }

    debug!(
        entities = entities.len(),
        rows = rows.len(),
        "export complete"
    );
    Ok(rows)
}
