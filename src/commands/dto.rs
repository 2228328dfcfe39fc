use serde::{Deserialize, Serialize};

use ec_app::usecases::{FollowupOutcome, VisitorListSession};
use ec_core::visitor::followup::display_visit_date;
use ec_core::{FollowupStatus, Visitor, VisitorPage};

/// Visitor row as shown by list and detail views.
///
/// Separates the presentation shape from the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorDto {
    pub id: String,
    pub name: String,
    pub visit_date: String,
    /// `dd/mm/yyyy`
    pub visit_date_display: String,
    pub followup_status: FollowupStatus,
    pub followup_label: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub is_member: bool,
    pub archived: bool,
}

impl From<&Visitor> for VisitorDto {
    fn from(visitor: &Visitor) -> Self {
        Self {
            id: visitor.id.to_string(),
            name: visitor.name.clone(),
            visit_date: visitor.visit_date.clone(),
            visit_date_display: display_visit_date(visitor),
            followup_status: visitor.followup_status,
            followup_label: visitor.followup_status.label().to_string(),
            phone: visitor.phone.clone(),
            email: visitor.email.clone(),
            notes: visitor.notes.clone(),
            is_member: visitor.is_member,
            archived: visitor.archived,
        }
    }
}

/// One rendered page of a visitor list with the state that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorPageDto {
    pub items: Vec<VisitorDto>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub search: String,
    pub status_filter: String,
    pub show_archived: bool,
}

impl VisitorPageDto {
    pub fn from_session(page: &VisitorPage, session: &VisitorListSession) -> Self {
        let pagination = &page.pagination;
        Self {
            items: page.items.iter().map(VisitorDto::from).collect(),
            current_page: pagination.current_page,
            total_pages: pagination.total_pages,
            total_items: pagination.total_items,
            items_per_page: pagination.items_per_page,
            has_next: pagination.has_next(),
            has_prev: pagination.has_prev(),
            search: session.committed_search(),
            status_filter: session.status_filter().label().to_string(),
            show_archived: session.show_archived(),
        }
    }

    /// `Página 1 de 2 • 11 visitantes`
    pub fn summary_line(&self) -> String {
        format!(
            "Página {} de {} • {} visitantes",
            self.current_page, self.total_pages, self.total_items
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupDto {
    pub visitor_id: String,
    pub followup_status: FollowupStatus,
    /// WhatsApp deep link, absent when the visitor has no phone.
    pub whatsapp_url: Option<String>,
}

impl FollowupDto {
    pub fn started(visitor: &Visitor, outcome: FollowupOutcome) -> Self {
        let whatsapp_url = match outcome {
            FollowupOutcome::LinkOpened { url } => Some(url),
            FollowupOutcome::MissingPhone => None,
        };
        Self {
            visitor_id: visitor.id.to_string(),
            followup_status: FollowupStatus::InProgress,
            whatsapp_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_core::VisitorId;

    #[test]
    fn test_visitor_dto_formats_date_and_label() {
        let visitor = Visitor {
            id: VisitorId::from("v1"),
            name: "Ana".to_string(),
            visit_date: "2025-03-09".to_string(),
            followup_status: FollowupStatus::InProgress,
            phone: None,
            email: None,
            notes: None,
            is_member: false,
            archived: false,
            created_at_ms: 0,
            updated_at_ms: 0,
        };

        let dto = VisitorDto::from(&visitor);

        assert_eq!(dto.visit_date_display, "09/03/2025");
        assert_eq!(dto.followup_label, "Em andamento");
    }
}
