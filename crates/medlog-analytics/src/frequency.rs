//! Usage-frequency aggregation over flattened rows.

use medlog_core::row::MedicationRow;
use std::collections::HashMap;

/// Display label for rows with no recorded medication name.
pub const UNRECORDED_LABEL: &str = "(unrecorded)";

/// Occurrence counts per distinct medication name, plus a bucket for
/// entries whose name is absent.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    named: HashMap<String, u32>,
    unrecorded: u32,
}

impl FrequencyTable {
    pub fn from_rows(rows: &[MedicationRow]) -> Self {
        let mut table = Self::default();
        for row in rows {
            match &row.medication_name {
                Some(name) => *table.named.entry(name.clone()).or_insert(0) += 1,
                None => table.unrecorded += 1,
            }
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.unrecorded == 0
    }

    /// Total number of counted rows.
    pub fn total(&self) -> u32 {
        self.named.values().sum::<u32>() + self.unrecorded
    }

    /// Number of distinct buckets, counting the unrecorded one if occupied.
    pub fn distinct(&self) -> usize {
        self.named.len() + usize::from(self.unrecorded > 0)
    }

    /// Ranked counts, most frequent first.
    ///
    /// Store enumeration order is not stable across runs, so ties are
    /// broken deterministically instead of by first-seen order: names sort
    /// lexically, and the unrecorded bucket sorts after named buckets of
    /// equal count.
    pub fn ranked(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .named
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        if self.unrecorded > 0 {
            let at = ranked
                .iter()
                .position(|(_, count)| *count < self.unrecorded)
                .unwrap_or(ranked.len());
            ranked.insert(at, (UNRECORDED_LABEL.to_string(), self.unrecorded));
        }
        ranked
    }
}
