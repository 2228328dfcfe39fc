//! Form validation and normalization for visitor drafts.

use thiserror::Error;

use super::model::{parse_visit_day, VisitorDraft};
use super::search::digits;

/// Country calling code prepended to local phone numbers.
pub const COUNTRY_CODE: &str = "55";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitorValidationError {
    #[error("visitor name is required")]
    EmptyName,

    #[error("invalid visit date: {0:?}")]
    InvalidVisitDate(String),
}

/// Reduces a phone to digits and prefixes the country code when missing.
/// Returns `None` when nothing is left.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits = digits(raw);
    if digits.is_empty() {
        None
    } else if digits.starts_with(COUNTRY_CODE) {
        Some(digits)
    } else {
        Some(format!("{COUNTRY_CODE}{digits}"))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl VisitorDraft {
    /// Validates required fields and returns the normalized draft that gets
    /// persisted: trimmed name, `YYYY-MM-DD` date, normalized phone, blank
    /// optionals dropped.
    pub fn validate(self) -> Result<VisitorDraft, VisitorValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(VisitorValidationError::EmptyName);
        }

        let day = parse_visit_day(&self.visit_date)
            .ok_or_else(|| VisitorValidationError::InvalidVisitDate(self.visit_date.clone()))?;

        Ok(VisitorDraft {
            name,
            visit_date: day.format("%Y-%m-%d").to_string(),
            phone: self.phone.as_deref().and_then(normalize_phone),
            email: non_blank(self.email),
            notes: non_blank(self.notes),
            is_member: self.is_member,
        })
    }
}
