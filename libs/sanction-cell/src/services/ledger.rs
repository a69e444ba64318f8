// libs/sanction-cell/src/services/ledger.rs
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use shared_database::MemoryTable;
use shared_utils::ids::TimeBasedIds;

use crate::models::{Sanction, SanctionError, SanctionType};

/// Append-only record of sanctions, oldest first.
pub struct SanctionLedger {
    table: MemoryTable<Sanction>,
    ids: TimeBasedIds,
}

impl Default for SanctionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SanctionLedger {
    pub fn new() -> Self {
        Self::with_sanctions(Vec::new())
    }

    pub fn with_sanctions(sanctions: Vec<Sanction>) -> Self {
        Self {
            table: MemoryTable::with_rows("sanctions", sanctions),
            ids: TimeBasedIds::new(),
        }
    }

    /// Ledger seeded with the demo warning for José García.
    pub fn demo() -> Self {
        Self::with_sanctions(vec![Sanction {
            id: "san1".to_string(),
            patient_id: "5".to_string(),
            patient_name: "José García".to_string(),
            reason: "No asistió a 2 citas consecutivas sin avisar".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap_or_default(),
            sanction_type: SanctionType::Warning,
        }])
    }

    /// Record a sanction dated today (UTC).
    ///
    /// The id (`san<n>`) and patient id (`patient<n>`) share one time-based value.
    pub fn add_sanction(
        &self,
        patient_name: &str,
        reason: &str,
        sanction_type: Option<SanctionType>,
    ) -> Result<Sanction, SanctionError> {
        if patient_name.is_empty() || reason.is_empty() {
            warn!("Sanction rejected: patient name and reason are required");
            return Err(SanctionError::ValidationError(
                "Patient name and reason are required".to_string(),
            ));
        }

        let sanction = self.table.replace(|rows| {
            let mut value = self.ids.next_value();
            while rows.iter().any(|existing| existing.id == format!("san{}", value)) {
                value = self.ids.next_value();
            }

            let sanction = Sanction {
                id: format!("san{}", value),
                patient_id: format!("patient{}", value),
                patient_name: patient_name.to_string(),
                reason: reason.to_string(),
                date: Utc::now().date_naive(),
                sanction_type: sanction_type.unwrap_or_default(),
            };
            rows.push(sanction.clone());
            Ok::<_, SanctionError>(sanction)
        })?;

        info!(
            "Sanction {} ({}) recorded for {}",
            sanction.id, sanction.sanction_type, sanction.patient_name
        );
        Ok(sanction)
    }

    pub fn list_sanctions(&self) -> Vec<Sanction> {
        self.table.snapshot().as_ref().clone()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
