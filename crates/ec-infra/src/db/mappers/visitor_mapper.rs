use anyhow::{anyhow, Result};
use ec_core::{ChurchId, FollowupStatus, Visitor, VisitorId};

use crate::db::models::VisitorRow;
use crate::db::ports::{InsertMapper, RowMapper};

pub struct VisitorRowMapper;

/// A visitor together with the church that owns it. Rows always carry the
/// tenant, the domain record does not.
impl<'a> InsertMapper<(&'a ChurchId, &'a Visitor), VisitorRow> for VisitorRowMapper {
    fn to_row(&self, (church_id, visitor): (&'a ChurchId, &'a Visitor)) -> Result<VisitorRow> {
        Ok(VisitorRow {
            id: visitor.id.as_str().to_string(),
            church_id: church_id.as_str().to_string(),
            name: visitor.name.clone(),
            visit_date: visitor.visit_date.clone(),
            followup_status: visitor.followup_status.as_str().to_string(),
            phone: visitor.phone.clone(),
            email: visitor.email.clone(),
            notes: visitor.notes.clone(),
            is_member: visitor.is_member,
            archived: visitor.archived,
            created_at_ms: visitor.created_at_ms,
            updated_at_ms: visitor.updated_at_ms,
        })
    }
}

impl RowMapper<VisitorRow, Visitor> for VisitorRowMapper {
    fn to_domain(&self, row: &VisitorRow) -> Result<Visitor> {
        let followup_status = row
            .followup_status
            .parse::<FollowupStatus>()
            .map_err(|e| anyhow!("visitor {}: {}", row.id, e))?;

        Ok(Visitor {
            id: VisitorId::from(row.id.as_str()),
            name: row.name.clone(),
            visit_date: row.visit_date.clone(),
            followup_status,
            phone: row.phone.clone(),
            email: row.email.clone(),
            notes: row.notes.clone(),
            is_member: row.is_member,
            archived: row.archived,
            created_at_ms: row.created_at_ms,
            updated_at_ms: row.updated_at_ms,
        })
    }
}
