use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use ec_core::ports::{VisitorRepositoryError, VisitorRepositoryPort};
use ec_core::{ChurchId, FollowupStatus, Visitor, VisitorId};

use crate::db::models::VisitorRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::visitors::dsl;

pub struct DieselVisitorRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselVisitorRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

fn storage(e: impl std::fmt::Display) -> VisitorRepositoryError {
    VisitorRepositoryError::Storage(e.to_string())
}

#[async_trait]
impl<E, M> VisitorRepositoryPort for DieselVisitorRepository<E, M>
where
    E: DbExecutor,
    M: for<'a> InsertMapper<(&'a ChurchId, &'a Visitor), VisitorRow>
        + RowMapper<VisitorRow, Visitor>
        + Send
        + Sync,
{
    async fn list_by_archived(
        &self,
        church_id: &ChurchId,
        archived: bool,
    ) -> Result<Vec<Visitor>, VisitorRepositoryError> {
        let church = church_id.as_str().to_string();
        let visitors = self
            .executor
            .run(|conn| {
                let rows = dsl::visitors
                    .filter(dsl::church_id.eq(&church))
                    .filter(dsl::archived.eq(archived))
                    .order(dsl::visit_date.desc())
                    .select(VisitorRow::as_select())
                    .load::<VisitorRow>(conn)?;

                let mut visitors = Vec::with_capacity(rows.len());
                for row in &rows {
                    visitors.push(self.mapper.to_domain(row)?);
                }
                Ok(visitors)
            })
            .map_err(storage)?;

        debug!(church_id = %church_id, archived, count = visitors.len(), "Loaded visitors");
        Ok(visitors)
    }

    async fn find_by_id(
        &self,
        church_id: &ChurchId,
        visitor_id: &VisitorId,
    ) -> Result<Option<Visitor>, VisitorRepositoryError> {
        let church = church_id.as_str().to_string();
        let id = visitor_id.as_str().to_string();
        self.executor
            .run(|conn| {
                let row = dsl::visitors
                    .filter(dsl::church_id.eq(&church))
                    .filter(dsl::id.eq(&id))
                    .select(VisitorRow::as_select())
                    .first::<VisitorRow>(conn)
                    .optional()?;

                row.map(|r| self.mapper.to_domain(&r)).transpose()
            })
            .map_err(storage)
    }

    async fn save(
        &self,
        church_id: &ChurchId,
        visitor: &Visitor,
    ) -> Result<(), VisitorRepositoryError> {
        let row = self.mapper.to_row((church_id, visitor)).map_err(storage)?;

        self.executor
            .run(move |conn| {
                diesel::insert_into(dsl::visitors)
                    .values(&row)
                    .on_conflict(dsl::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(storage)
    }

    async fn set_archived(
        &self,
        church_id: &ChurchId,
        visitor_id: &VisitorId,
        archived: bool,
        updated_at_ms: i64,
    ) -> Result<(), VisitorRepositoryError> {
        let church = church_id.as_str().to_string();
        let id = visitor_id.as_str().to_string();
        let affected = self
            .executor
            .run(|conn| {
                let target = dsl::visitors
                    .filter(dsl::church_id.eq(&church))
                    .filter(dsl::id.eq(&id));
                Ok(diesel::update(target)
                    .set((
                        dsl::archived.eq(archived),
                        dsl::updated_at_ms.eq(updated_at_ms),
                    ))
                    .execute(conn)?)
            })
            .map_err(storage)?;

        if affected == 0 {
            return Err(VisitorRepositoryError::NotFound(visitor_id.to_string()));
        }

        Ok(())
    }

    async fn set_followup_status(
        &self,
        church_id: &ChurchId,
        visitor_id: &VisitorId,
        status: FollowupStatus,
        updated_at_ms: i64,
    ) -> Result<(), VisitorRepositoryError> {
        let church = church_id.as_str().to_string();
        let id = visitor_id.as_str().to_string();
        let affected = self
            .executor
            .run(|conn| {
                let target = dsl::visitors
                    .filter(dsl::church_id.eq(&church))
                    .filter(dsl::id.eq(&id));
                Ok(diesel::update(target)
                    .set((
                        dsl::followup_status.eq(status.as_str()),
                        dsl::updated_at_ms.eq(updated_at_ms),
                    ))
                    .execute(conn)?)
            })
            .map_err(storage)?;

        if affected == 0 {
            return Err(VisitorRepositoryError::NotFound(visitor_id.to_string()));
        }

        Ok(())
    }
}
