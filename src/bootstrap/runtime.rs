//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired `AppDeps` and the tenant the process serves.
//! Commands call `runtime.usecases().xxx()` to get use case instances with
//! their ports already attached.

use ec_app::usecases::{
    FinishFollowup, GetSettings, ListVisitors, SessionOptions, SetVisitorArchived, StartFollowup,
    UpsertVisitor, VisitorListSession,
};
use ec_app::AppDeps;
use ec_core::ChurchId;

pub struct AppRuntime {
    pub deps: AppDeps,
    church_id: ChurchId,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, church_id: ChurchId) -> Self {
        Self { deps, church_id }
    }

    pub fn church_id(&self) -> &ChurchId {
        &self.church_id
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn list_visitors(&self) -> ListVisitors {
        ListVisitors::new(
            self.runtime.deps.visitor_repo.clone(),
            self.runtime.church_id.clone(),
        )
    }

    /// A fresh list session on the active partition. Call `reload` before
    /// reading from it.
    pub fn visitor_list_session(&self, options: SessionOptions) -> VisitorListSession {
        VisitorListSession::new(
            self.list_visitors(),
            self.runtime.deps.notifier.clone(),
            options,
        )
    }

    pub fn upsert_visitor(&self) -> UpsertVisitor {
        UpsertVisitor::new(
            self.runtime.deps.visitor_repo.clone(),
            self.runtime.deps.clock.clone(),
            self.runtime.church_id.clone(),
        )
    }

    pub fn set_visitor_archived(&self) -> SetVisitorArchived {
        SetVisitorArchived::new(
            self.runtime.deps.visitor_repo.clone(),
            self.runtime.deps.clock.clone(),
            self.runtime.church_id.clone(),
        )
    }

    pub fn start_followup(&self) -> StartFollowup {
        StartFollowup::new(
            self.runtime.deps.visitor_repo.clone(),
            self.runtime.deps.link_opener.clone(),
            self.runtime.deps.clock.clone(),
            self.runtime.church_id.clone(),
        )
    }

    pub fn finish_followup(&self) -> FinishFollowup {
        FinishFollowup::new(
            self.runtime.deps.visitor_repo.clone(),
            self.runtime.deps.clock.clone(),
            self.runtime.church_id.clone(),
        )
    }
}
