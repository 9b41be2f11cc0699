//! Participant command handlers.

use std::sync::Arc;

use tabled::Tabled;

use stevne_core::{EntityId, Meet, Participant, ParticipantFilter, ParticipantSortKey};

use crate::cli::{GlobalOpts, ParticipantSort, ParticipantsArgs, ParticipantsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ParticipantRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Club")]
    club: String,
}

impl From<&Arc<Participant>> for ParticipantRow {
    fn from(p: &Arc<Participant>) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            gender: gender_label(p),
            age: p.age,
            club: p.club.clone(),
        }
    }
}

fn gender_label(p: &Participant) -> String {
    match p.gender {
        Some(g) => g.to_string(),
        None if p.raw_gender.is_empty() => "-".into(),
        None => p.raw_gender.clone(),
    }
}

fn detail(p: &Arc<Participant>) -> String {
    [
        format!("ID:     {}", p.id),
        format!("Name:   {}", p.name),
        format!("Gender: {}", gender_label(p)),
        format!("Age:    {}", p.age),
        format!("Club:   {}", p.club),
    ]
    .join("\n")
}

fn sort_key(sort: ParticipantSort) -> ParticipantSortKey {
    match sort {
        ParticipantSort::Name => ParticipantSortKey::Name,
        ParticipantSort::Age => ParticipantSortKey::Age,
        ParticipantSort::Club => ParticipantSortKey::Club,
    }
}

async fn find(meet: &Meet, id: &str) -> Result<Arc<Participant>, CliError> {
    meet.participants().load().await?;
    let id = EntityId::from(id);
    meet.participants()
        .get(&id)
        .ok_or_else(|| util::not_found("participant", &id))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    meet: &Meet,
    args: ParticipantsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ParticipantsCommand::List {
            gender,
            club,
            sort,
            view: view_args,
        } => {
            meet.participants().load().await?;

            let mut view = meet.participant_view();
            if let Some(g) = gender {
                view.set_filter(Some(ParticipantFilter::ByGender(util::gender(g))));
            } else if let Some(club) = club {
                view.set_filter(Some(ParticipantFilter::ByClub(club)));
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
                |p| ParticipantRow::from(p),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ParticipantsCommand::Get { id } => {
            let p = find(meet, &id).await?;
            let out = output::render_single(&global.output, &p, detail, |p| p.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ParticipantsCommand::Add {
            name,
            gender,
            age,
            club,
        } => {
            let mut form = meet.form();
            form.open(None);
            form.set_field("navn", &name)?;
            form.set_field("kon", util::gender(gender).as_wire())?;
            form.set_field("alder", &age.to_string())?;
            form.set_field("klub", &club)?;

            let created = form.submit().await?;
            output::success(
                &format!("Participant {} created with ID {}", created.name, created.id),
                global,
            );
            let out = output::render_single(&global.output, &created, detail, |p| {
                p.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ParticipantsCommand::Edit {
            id,
            name,
            gender,
            age,
            club,
        } => {
            let existing = find(meet, &id).await?;

            let mut form = meet.form();
            form.open(Some(&existing));
            if let Some(name) = name {
                form.set_field("navn", &name)?;
            }
            if let Some(g) = gender {
                form.set_field("kon", util::gender(g).as_wire())?;
            }
            if let Some(age) = age {
                form.set_field("alder", &age.to_string())?;
            }
            if let Some(club) = club {
                form.set_field("klub", &club)?;
            }

            let updated = form.submit().await?;
            output::success(&format!("Participant {} updated", updated.id), global);
            Ok(())
        }

        ParticipantsCommand::Delete { id } => {
            let existing = find(meet, &id).await?;
            util::confirm(
                &format!("Delete participant {} ({})?", existing.name, existing.id),
                global.yes,
            )?;
            meet.participants().delete(&existing.id).await?;
            output::success(&format!("Participant {} deleted", existing.id), global);
            Ok(())
        }
    }
}
