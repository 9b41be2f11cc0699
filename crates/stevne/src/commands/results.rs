//! Result command handlers.

use tabled::Tabled;
use tracing::warn;

use stevne_core::{EntityId, JoinedResult, Meet, ResultFilter, ResultSortKey};

use crate::cli::{GlobalOpts, ResultSort, ResultsArgs, ResultsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Participant")]
    participant: String,
    #[tabled(rename = "Discipline")]
    discipline: String,
    #[tabled(rename = "Type")]
    result_type: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&JoinedResult> for ResultRow {
    fn from(r: &JoinedResult) -> Self {
        Self {
            id: r.id.to_string(),
            date: r.date.clone(),
            participant: r.participant.clone(),
            discipline: r.discipline.clone(),
            result_type: r.result_type.clone(),
            value: r.value.clone(),
        }
    }
}

fn sort_key(sort: ResultSort) -> ResultSortKey {
    match sort {
        ResultSort::Value => ResultSortKey::Value,
        ResultSort::Date => ResultSortKey::Date,
    }
}

fn filter(
    participant: Option<String>,
    discipline: Option<String>,
    result_type: Option<String>,
) -> Option<ResultFilter> {
    if let Some(id) = participant {
        Some(ResultFilter::ByParticipant(EntityId::from(id)))
    } else if let Some(id) = discipline {
        Some(ResultFilter::ByDiscipline(EntityId::from(id)))
    } else {
        result_type.map(ResultFilter::ByResultType)
    }
}

pub async fn handle(meet: &Meet, args: ResultsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ResultsCommand::List {
            participant,
            discipline,
            result_type,
            sort,
            view: view_args,
        } => {
            let (results, participants, disciplines) = tokio::join!(
                meet.results().load(),
                meet.participants().load(),
                meet.disciplines().load(),
            );
            results?;
            // Missing names fall back to the unknown labels.
            for (kind, loaded) in [("participants", participants), ("disciplines", disciplines)] {
                if let Err(e) = loaded {
                    warn!(error = %e, "could not load {kind}; names will be missing");
                }
            }

            let mut view = meet.result_view();
            view.set_filter(filter(participant, discipline, result_type));
            if let Some(search) = view_args.search {
                view.set_search(search);
            }
            if let Some(sort) = sort {
                view.set_sort(sort_key(sort), util::direction(view_args.desc));
            }

            let joined = meet.join(view.view());
            let out = output::render_list(&global.output, &joined, |r| ResultRow::from(r), |r| {
                r.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
