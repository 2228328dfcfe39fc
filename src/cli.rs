//! Command-line surface.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ec_core::{StatusFilter, VisitorDraft, VisitorId};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{VisitorDto, VisitorPageDto};
use crate::commands::visitors::{self, ListVisitorsQuery, VisitorEdits};

#[derive(Debug, Parser)]
#[command(name = "ecclesia", version, about = "Registro e acompanhamento de visitantes")]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true, env = "ECCLESIA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Visitors(VisitorsCommand),
}

#[derive(Debug, Subcommand)]
pub enum VisitorsCommand {
    /// Show one page of visitors
    List {
        /// Name words, an e-mail fragment (contains `@`) or phone digits
        #[arg(long)]
        search: Option<String>,

        /// all, pendente, em_andamento or concluido
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// List archived visitors instead of active ones
        #[arg(long)]
        archived: bool,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Register a new visitor
    Add {
        name: String,

        /// Visit date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Already a church member
        #[arg(long)]
        member: bool,
    },
    /// Change fields of an existing visitor
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        member: Option<bool>,
    },
    Archive {
        id: String,
    },
    Unarchive {
        id: String,
    },
    /// Mark as in progress and print the WhatsApp greeting link
    Followup {
        id: String,
    },
    /// Mark the follow-up as done
    Finish {
        id: String,
    },
}

pub async fn execute(runtime: &AppRuntime, command: Command) -> Result<()> {
    match command {
        Command::Visitors(cmd) => execute_visitors(runtime, cmd).await,
    }
}

async fn execute_visitors(runtime: &AppRuntime, command: VisitorsCommand) -> Result<()> {
    match command {
        VisitorsCommand::List {
            search,
            status,
            page,
            archived,
            json,
        } => {
            let query = ListVisitorsQuery {
                search,
                status,
                page,
                archived,
            };
            let page = visitors::list_visitors(runtime, query)
                .await
                .map_err(anyhow::Error::msg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print!("{}", render_page(&page));
            }
        }
        VisitorsCommand::Add {
            name,
            date,
            phone,
            email,
            notes,
            member,
        } => {
            let draft = VisitorDraft {
                name,
                visit_date: date.unwrap_or_else(today),
                phone,
                email,
                notes,
                is_member: member,
            };
            let visitor = visitors::register_visitor(runtime, draft)
                .await
                .map_err(anyhow::Error::msg)?;
            println!("{}", render_row(&visitor));
        }
        VisitorsCommand::Edit {
            id,
            name,
            date,
            phone,
            email,
            notes,
            member,
        } => {
            let edits = VisitorEdits {
                name,
                visit_date: date,
                phone,
                email,
                notes,
                is_member: member,
            };
            let visitor = visitors::edit_visitor(runtime, VisitorId::from(id), edits)
                .await
                .map_err(anyhow::Error::msg)?;
            println!("{}", render_row(&visitor));
        }
        VisitorsCommand::Archive { id } => {
            visitors::set_visitor_archived(runtime, VisitorId::from(id), true)
                .await
                .map_err(anyhow::Error::msg)?;
        }
        VisitorsCommand::Unarchive { id } => {
            visitors::set_visitor_archived(runtime, VisitorId::from(id), false)
                .await
                .map_err(anyhow::Error::msg)?;
        }
        VisitorsCommand::Followup { id } => {
            visitors::start_followup(runtime, VisitorId::from(id))
                .await
                .map_err(anyhow::Error::msg)?;
        }
        VisitorsCommand::Finish { id } => {
            visitors::finish_followup(runtime, VisitorId::from(id))
                .await
                .map_err(anyhow::Error::msg)?;
        }
    }
    Ok(())
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn render_row(visitor: &VisitorDto) -> String {
    let mut row = format!(
        "{}  {}  {}  {}",
        visitor.id, visitor.visit_date_display, visitor.followup_label, visitor.name
    );
    if visitor.is_member {
        row.push_str("  (membro)");
    }
    row
}

/// Rows followed by the pagination line.
pub fn render_page(page: &VisitorPageDto) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("Nenhum visitante encontrado\n");
    }
    for visitor in &page.items {
        let _ = writeln!(out, "{}", render_row(visitor));
    }
    let _ = writeln!(out, "{}", page.summary_line());
    out
}
