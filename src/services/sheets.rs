use chrono::DateTime;

use crate::types::db::{donation, enquiry};

/// Setting keys holding the spreadsheet targets for form submissions.
pub const ENQUIRIES_SHEET_KEY: &str = "google_sheet_enquiries";
pub const DONATIONS_SHEET_KEY: &str = "google_sheet_donations";

/// Destination parsed from a `"<spreadsheet id>|<sheet name>"` setting value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetTarget {
    pub spreadsheet_id: String,
    pub sheet_name: String,
}

impl SheetTarget {
    /// Parse a configured target. The sheet name defaults to "Sheet1"; an
    /// empty or missing spreadsheet id means the integration is unset.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.splitn(2, '|');
        let spreadsheet_id = parts.next().unwrap_or("").trim();
        if spreadsheet_id.is_empty() {
            return None;
        }
        let sheet_name = match parts.next().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Sheet1",
        };
        Some(Self {
            spreadsheet_id: spreadsheet_id.to_string(),
            sheet_name: sheet_name.to_string(),
        })
    }
}

/// Whether a Sheets credential is configured. The hosted deployment ships
/// with the integration disabled; appends become no-ops.
pub fn is_connected() -> bool {
    false
}

/// Append rows to the configured sheet.
///
/// Must never fail the caller's write path: problems are logged and
/// swallowed, matching the submission endpoints' fire-and-forget use.
pub async fn append_rows(target: &SheetTarget, rows: Vec<Vec<String>>) {
    if !is_connected() {
        tracing::info!(
            spreadsheet_id = %target.spreadsheet_id,
            sheet_name = %target.sheet_name,
            rows = rows.len(),
            "Google Sheets integration not configured, skipping append"
        );
    }
}

/// Append a submission to the sheet configured by `setting_value`, if any.
pub async fn try_append(setting_value: Option<&str>, rows: Vec<Vec<String>>) {
    let Some(target) = setting_value.and_then(SheetTarget::parse) else {
        return;
    };
    append_rows(&target, rows).await;
}

fn timestamp_rfc3339(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

/// Row appended for a visitor enquiry.
pub fn enquiry_row(record: &enquiry::Model) -> Vec<String> {
    vec![
        record.name.clone(),
        record.email.clone(),
        record.message.clone().unwrap_or_default(),
        timestamp_rfc3339(record.created_at),
    ]
}

/// Row appended for a donation.
pub fn donation_row(record: &donation::Model) -> Vec<String> {
    vec![
        record.name.clone(),
        record.email.clone(),
        record.amount.clone(),
        record.message.clone().unwrap_or_default(),
        timestamp_rfc3339(record.created_at),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_and_sheet_name() {
        let target = SheetTarget::parse("abc123|Submissions").expect("target");
        assert_eq!(target.spreadsheet_id, "abc123");
        assert_eq!(target.sheet_name, "Submissions");
    }

    #[test]
    fn sheet_name_defaults_to_sheet1() {
        assert_eq!(
            SheetTarget::parse("abc123").expect("target").sheet_name,
            "Sheet1"
        );
        assert_eq!(
            SheetTarget::parse("abc123|  ").expect("target").sheet_name,
            "Sheet1"
        );
    }

    #[test]
    fn empty_id_means_unset() {
        assert_eq!(SheetTarget::parse(""), None);
        assert_eq!(SheetTarget::parse("  |Sheet2"), None);
    }

    #[test]
    fn parts_are_trimmed() {
        let target = SheetTarget::parse(" abc123 | My Sheet ").expect("target");
        assert_eq!(target.spreadsheet_id, "abc123");
        assert_eq!(target.sheet_name, "My Sheet");
    }

    #[test]
    fn enquiry_row_shape() {
        let record = enquiry::Model {
            id: 1,
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            message: None,
            created_at: 1_750_000_000,
        };
        let row = enquiry_row(&record);
        assert_eq!(row.len(), 4);
        assert_eq!(row[2], "");
        assert!(row[3].starts_with("2025-"));
    }
}
