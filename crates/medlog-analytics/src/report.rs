//! Plain-text ranked summary.

use crate::frequency::FrequencyTable;

/// Exact message printed when the exported table has no rows.
pub const NO_DATA_MESSAGE: &str = "No medication data to analyze.";

/// Render the ranked usage summary. `limit` caps the number of listed
/// medications; `None` lists them all.
pub fn render_summary(table: &FrequencyTable, limit: Option<usize>) -> String {
    if table.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let ranked = table.ranked();
    let shown = limit.unwrap_or(ranked.len()).min(ranked.len());
    let name_width = ranked[..shown]
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "Most common medications ({} entries, {} distinct):\n",
        table.total(),
        table.distinct()
    ));
    for (rank, (name, count)) in ranked[..shown].iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<name_width$}  {}\n",
            rank + 1,
            name,
            count
        ));
    }
    if shown < ranked.len() {
        out.push_str(&format!("... and {} more\n", ranked.len() - shown));
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use medlog_core::row::MedicationRow;

    fn table(names: &[Option<&str>]) -> FrequencyTable {
        let rows: Vec<MedicationRow> = names
            .iter()
            .map(|name| MedicationRow {
                pet_id: "pet-1".into(),
                medication_name: name.map(String::from),
                dosage: None,
                timestamp: None,
            })
            .collect();
        FrequencyTable::from_rows(&rows)
    }

    #[test]
    fn empty_table_prints_exactly_the_no_data_message() {
        assert_eq!(render_summary(&table(&[]), None), NO_DATA_MESSAGE);
    }

    #[test]
    fn ranking_lists_higher_counts_first() {
        let summary = render_summary(&table(&[Some("A"), Some("A"), Some("B")]), None);
        let a = summary.find("A").unwrap();
        let b = summary.find("B").unwrap();
        assert!(a < b, "A must be listed before B:\n{summary}");
        assert!(summary.contains("3 entries, 2 distinct"));
    }

    #[test]
    fn limit_truncates_and_reports_the_remainder() {
        let summary = render_summary(&table(&[Some("A"), Some("A"), Some("B"), Some("C")]), Some(1));
        assert!(summary.contains('A'));
        assert!(!summary.contains('B'));
        assert!(summary.contains("... and 2 more"));
    }

    #[test]
    fn unrecorded_bucket_is_labelled() {
        let summary = render_summary(&table(&[None, None, Some("A")]), None);
        assert!(summary.contains("(unrecorded)"));
    }
}
