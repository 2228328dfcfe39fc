//! Visitor commands: list, register, edit, archive and follow-up.
//!
//! Each command opens a root span, calls use cases through
//! `runtime.usecases()`, reports the outcome to the user through the
//! notification port and returns a DTO.

use anyhow::anyhow;
use ec_app::usecases::{FollowupOutcome, SessionOptions, UpsertVisitorError};
use ec_core::{StatusFilter, Visitor, VisitorDraft, VisitorId};
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{FollowupDto, VisitorDto, VisitorPageDto};
use crate::commands::map_err;

#[derive(Debug, Clone, Default)]
pub struct ListVisitorsQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub page: usize,
    pub archived: bool,
}

/// Field-by-field edits. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct VisitorEdits {
    pub name: Option<String>,
    pub visit_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub is_member: Option<bool>,
}

impl VisitorEdits {
    fn apply_to(self, visitor: &Visitor) -> VisitorDraft {
        VisitorDraft {
            name: self.name.unwrap_or_else(|| visitor.name.clone()),
            visit_date: self.visit_date.unwrap_or_else(|| visitor.visit_date.clone()),
            phone: self.phone.or_else(|| visitor.phone.clone()),
            email: self.email.or_else(|| visitor.email.clone()),
            notes: self.notes.or_else(|| visitor.notes.clone()),
            is_member: self.is_member.unwrap_or(visitor.is_member),
        }
    }
}

pub async fn list_visitors(
    runtime: &AppRuntime,
    query: ListVisitorsQuery,
) -> Result<VisitorPageDto, String> {
    let span = info_span!(
        "command.visitors.list",
        archived = query.archived,
        status = %query.status,
        page = query.page
    );

    async move {
        let settings = runtime
            .usecases()
            .get_settings()
            .execute()
            .await
            .map_err(map_err)?;

        let session = runtime
            .usecases()
            .visitor_list_session(SessionOptions::from(&settings.visitors));

        if query.archived {
            session.toggle_archived().await.map_err(map_err)?;
        } else {
            session.reload().await.map_err(map_err)?;
        }

        if let Some(search) = query.search {
            session.commit_search_now(search);
        }
        session.set_status_filter(query.status);
        session.set_page(query.page);

        let page = session.view();
        Ok(VisitorPageDto::from_session(&page, &session))
    }
    .instrument(span)
    .await
}

pub async fn register_visitor(
    runtime: &AppRuntime,
    draft: VisitorDraft,
) -> Result<VisitorDto, String> {
    let span = info_span!("command.visitors.register");
    save_visitor(runtime, draft, None, "Visitante registrado com sucesso")
        .instrument(span)
        .await
}

pub async fn edit_visitor(
    runtime: &AppRuntime,
    id: VisitorId,
    edits: VisitorEdits,
) -> Result<VisitorDto, String> {
    let span = info_span!("command.visitors.edit", visitor_id = %id);

    async move {
        let stored = find_visitor(runtime, &id).await.map_err(map_err)?;
        let draft = edits.apply_to(&stored);
        save_visitor(runtime, draft, Some(id), "Visitante atualizado com sucesso").await
    }
    .instrument(span)
    .await
}

async fn save_visitor(
    runtime: &AppRuntime,
    draft: VisitorDraft,
    existing: Option<VisitorId>,
    success_message: &str,
) -> Result<VisitorDto, String> {
    let notifier = &runtime.deps.notifier;

    match runtime.usecases().upsert_visitor().execute(draft, existing).await {
        Ok(visitor) => {
            notifier.success(success_message);
            Ok(VisitorDto::from(&visitor))
        }
        Err(UpsertVisitorError::Validation(e)) => {
            notifier.warning("Preencha o nome e a data da visita");
            Err(map_err(e.into()))
        }
        Err(e) => {
            notifier.error("Erro ao salvar visitante. Tente novamente.");
            Err(map_err(e.into()))
        }
    }
}

pub async fn set_visitor_archived(
    runtime: &AppRuntime,
    id: VisitorId,
    archived: bool,
) -> Result<(), String> {
    let span = info_span!("command.visitors.set_archived", visitor_id = %id, archived);
    let notifier = &runtime.deps.notifier;

    let result = runtime
        .usecases()
        .set_visitor_archived()
        .execute(&id, archived)
        .instrument(span)
        .await;

    match (result, archived) {
        (Ok(()), true) => {
            notifier.success("Visitante arquivado com sucesso");
            Ok(())
        }
        (Ok(()), false) => {
            notifier.success("Visitante restaurado com sucesso");
            Ok(())
        }
        (Err(e), true) => {
            notifier.error("Erro ao arquivar visitante");
            Err(map_err(e))
        }
        (Err(e), false) => {
            notifier.error("Erro ao restaurar visitante");
            Err(map_err(e))
        }
    }
}

pub async fn start_followup(runtime: &AppRuntime, id: VisitorId) -> Result<FollowupDto, String> {
    let span = info_span!("command.visitors.start_followup", visitor_id = %id);
    let notifier = &runtime.deps.notifier;

    async move {
        let visitor = find_visitor(runtime, &id).await.map_err(|e| {
            notifier.error("Erro ao iniciar follow-up.");
            map_err(e)
        })?;

        match runtime.usecases().start_followup().execute(&visitor).await {
            Ok(outcome) => {
                if outcome == FollowupOutcome::MissingPhone {
                    notifier.warning("Este visitante não possui telefone cadastrado.");
                }
                Ok(FollowupDto::started(&visitor, outcome))
            }
            Err(e) => {
                notifier.error("Erro ao iniciar follow-up.");
                Err(map_err(e.into()))
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn finish_followup(runtime: &AppRuntime, id: VisitorId) -> Result<(), String> {
    let span = info_span!("command.visitors.finish_followup", visitor_id = %id);
    let notifier = &runtime.deps.notifier;

    async move {
        let result = match find_visitor(runtime, &id).await {
            Ok(visitor) => runtime
                .usecases()
                .finish_followup()
                .execute(&id)
                .await
                .map(|()| visitor),
            Err(e) => Err(e),
        };

        match result {
            Ok(visitor) => {
                notifier.success(&format!("Follow-up de {} concluído!", visitor.name));
                Ok(())
            }
            Err(e) => {
                notifier.error("Erro ao finalizar follow-up.");
                Err(map_err(e))
            }
        }
    }
    .instrument(span)
    .await
}

async fn find_visitor(runtime: &AppRuntime, id: &VisitorId) -> anyhow::Result<Visitor> {
    runtime
        .deps
        .visitor_repo
        .find_by_id(runtime.church_id(), id)
        .await?
        .ok_or_else(|| anyhow!("visitor not found: {}", id))
}
