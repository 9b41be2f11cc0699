//! Discipline command handlers, including roster assignment.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use stevne_core::{Discipline, DisciplineDraft, DisciplineFilter, DisciplineSortKey, EntityId, Meet};

use crate::cli::{DisciplineSort, DisciplinesArgs, DisciplinesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DisciplineRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Result type")]
    result_type: String,
    #[tabled(rename = "Participants")]
    participants: usize,
}

impl From<&Arc<Discipline>> for DisciplineRow {
    fn from(d: &Arc<Discipline>) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            result_type: d.result_type.clone(),
            participants: d.participant_ids.len(),
        }
    }
}

fn detail(d: &Arc<Discipline>) -> String {
    [
        format!("ID:          {}", d.id),
        format!("Name:        {}", d.name),
        format!("Result type: {}", d.result_type),
        format!("Roster size: {}", d.participant_ids.len()),
    ]
    .join("\n")
}

#[derive(Serialize, Tabled)]
struct RosterMember {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

fn sort_key(sort: DisciplineSort) -> DisciplineSortKey {
    match sort {
        DisciplineSort::Name => DisciplineSortKey::Name,
        DisciplineSort::ResultType => DisciplineSortKey::ResultType,
    }
}

async fn find(meet: &Meet, id: &str) -> Result<Arc<Discipline>, CliError> {
    meet.disciplines().load().await?;
    let id = EntityId::from(id);
    meet.disciplines()
        .get(&id)
        .ok_or_else(|| util::not_found("discipline", &id))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    meet: &Meet,
    args: DisciplinesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DisciplinesCommand::List {
            result_type,
            sort,
            view: view_args,
        } => {
            meet.disciplines().load().await?;

            let mut view = meet.discipline_view();
            if let Some(rt) = result_type {
                view.set_filter(Some(DisciplineFilter::ByResultType(rt)));
            }
            if let Some(search) = view_args.search {
                view.set_search(search);
            }
            if let Some(sort) = sort {
                view.set_sort(sort_key(sort), util::direction(view_args.desc));
            }

            let out = output::render_list(
                &global.output,
                view.view(),
                |d| DisciplineRow::from(d),
                |d| d.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DisciplinesCommand::Add { name, result_type } => {
            let mut draft = DisciplineDraft::default();
            draft.set_field("navn", &name)?;
            draft.set_field("resultattype", &result_type)?;

            let created = meet.disciplines().create(&draft).await?;
            output::success(
                &format!("Discipline {} created with ID {}", created.name, created.id),
                global,
            );
            let out = output::render_single(&global.output, &created, detail, |d| {
                d.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DisciplinesCommand::Delete { id } => {
            let existing = find(meet, &id).await?;
            util::confirm(
                &format!("Delete discipline {} ({})?", existing.name, existing.id),
                global.yes,
            )?;
            meet.disciplines().delete(&existing.id).await?;
            output::success(&format!("Discipline {} deleted", existing.id), global);
            Ok(())
        }

        DisciplinesCommand::Roster { id } => {
            let (participants, disciplines) =
                tokio::join!(meet.participants().load(), meet.disciplines().load());
            participants?;
            disciplines?;

            let id = EntityId::from(id);
            let discipline = meet
                .disciplines()
                .get(&id)
                .ok_or_else(|| util::not_found("discipline", &id))?;
            let names = meet.roster_names(&id)?;

            let members: Vec<RosterMember> = discipline
                .participant_ids
                .iter()
                .zip(names)
                .map(|(pid, name)| RosterMember {
                    id: pid.to_string(),
                    name,
                })
                .collect();

            let out = output::render_list(
                &global.output,
                &members,
                |m| RosterMember {
                    id: m.id.clone(),
                    name: m.name.clone(),
                },
                |m| m.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DisciplinesCommand::Assign { id, participants } => {
            let (loaded_participants, loaded_disciplines) =
                tokio::join!(meet.participants().load(), meet.disciplines().load());
            loaded_participants?;
            loaded_disciplines?;

            let discipline_id = EntityId::from(id);
            if meet.disciplines().get(&discipline_id).is_none() {
                return Err(util::not_found("discipline", &discipline_id));
            }

            let mut editor = meet.roster_editor();
            editor.open(discipline_id.clone());
            for pid in participants.into_iter().map(EntityId::from) {
                if meet.participants().get(&pid).is_none() {
                    return Err(util::not_found("participant", &pid));
                }
                if !editor.is_selected(&pid) {
                    editor.toggle(pid);
                }
            }

            let count = editor.selection().count();
            editor.submit().await?;
            output::success(
                &format!("Added {count} participant(s) to discipline {discipline_id}"),
                global,
            );
            Ok(())
        }
    }
}
