//! Search predicate for visitor lists.
//!
//! A committed query is routed to exactly one field: letters search names,
//! digits search phones and anything containing `@` searches e-mails. The
//! routes never fall back to each other.

use unicode_normalization::UnicodeNormalization;

use super::model::Visitor;

/// Lowercases and strips combining diacritical marks (U+0300..=U+036F) after
/// canonical decomposition, so "José" folds to "jose".
pub fn fold(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Keeps only ASCII digits.
pub fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty query, every record passes.
    Everything,
    /// Folded query matched as a prefix of any word of the folded name.
    Name(String),
    /// Folded query matched as a prefix of the folded e-mail.
    Email(String),
    /// Query digits matched as a prefix of the phone digits.
    Phone(String),
}

impl SearchQuery {
    pub fn parse(committed: &str) -> Self {
        let raw = committed.trim();
        if raw.is_empty() {
            return SearchQuery::Everything;
        }

        let q = fold(raw);
        let has_number = q.chars().any(|c| c.is_ascii_digit());
        let is_email_search = committed.contains('@');

        if is_email_search {
            SearchQuery::Email(q)
        } else if has_number {
            SearchQuery::Phone(digits(&q))
        } else {
            SearchQuery::Name(q)
        }
    }

    pub fn is_everything(&self) -> bool {
        matches!(self, SearchQuery::Everything)
    }

    pub fn matches(&self, visitor: &Visitor) -> bool {
        match self {
            SearchQuery::Everything => true,
            SearchQuery::Name(q) => {
                if visitor.name.is_empty() {
                    return false;
                }
                fold(&visitor.name).split(' ').any(|word| word.starts_with(q.as_str()))
            }
            SearchQuery::Email(q) => match visitor.email.as_deref() {
                Some(email) if !email.is_empty() => fold(email).starts_with(q.as_str()),
                _ => false,
            },
            SearchQuery::Phone(q) => match visitor.phone.as_deref() {
                Some(phone) if !phone.is_empty() => digits(phone).starts_with(q.as_str()),
                _ => false,
            },
        }
    }
}
