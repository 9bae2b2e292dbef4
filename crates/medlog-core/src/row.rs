use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One flattened medication-log record: the owning entity id joined with a
/// single log entry's fields.
///
/// Optional fields stay `None` when absent in the store; a row is never
/// dropped for missing data. Dosage is kept as text because the store holds
/// it as either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationRow {
    pub pet_id: String,
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}
