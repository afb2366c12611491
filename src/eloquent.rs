use log::{debug, info, warn};

use eloquent_core::session::Session;
use eloquent_core::*;
use snafu::{prelude::*, Snafu};

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::args::Args;

mod io_common;
mod io_json;
mod io_text;
mod prompt;

#[derive(Debug, Snafu)]
pub enum EloquentError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile { source: io::Error, path: String },
    #[snafu(display("Error writing file {path}"))]
    WritingFile { source: io::Error, path: String },
    #[snafu(display("Error parsing JSON in {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error producing JSON output"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Idea {lineno} has no name"))]
    EmptyName { lineno: usize },
    #[snafu(display("Idea {lineno}: cannot read the cost {cost:?}"))]
    InvalidCost { lineno: usize, cost: String },
    #[snafu(display("Invalid session: {source}"))]
    InvalidSession { source: SessionErrors },
    #[snafu(display("Error while reading the answers"))]
    Prompt { source: io::Error },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

type EloquentResult<T> = Result<T, EloquentError>;

/// An idea as read from an input file, before it joins a session.
#[derive(PartialEq, Debug, Clone)]
pub struct ParsedIdea {
    /// The position in the input (line number for text files, entry number
    /// for JSON), starting at 1.
    pub lineno: usize,
    pub name: String,
    pub cost: Option<f64>,
}

pub mod session_file {
    use crate::eloquent::*;
    use serde::{Deserialize, Serialize};

    /// An idea, as stored in a session file.
    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct StoredIdea {
        pub id: u32,
        pub name: String,
        pub elo: f64,
        pub comparisons: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cost: Option<f64>,
    }

    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct SessionFile {
        pub ideas: Vec<StoredIdea>,
        /// Missing in older files, where it is derived from the ideas.
        #[serde(
            rename = "totalComparisons",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub total_comparisons: Option<u64>,
    }

    /// An idea in the JSON input format.
    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct InputIdea {
        pub name: String,
        #[serde(default)]
        pub cost: Option<f64>,
    }

    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct RankingEntry {
        pub rank: u32,
        pub id: u32,
        pub name: String,
        pub elo: f64,
        pub comparisons: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cost: Option<f64>,
    }

    #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct RankingSummary {
        #[serde(rename = "totalComparisons")]
        pub total_comparisons: u64,
        pub ranking: Vec<RankingEntry>,
    }

    impl SessionFile {
        pub fn from_session(session: &Session) -> SessionFile {
            SessionFile {
                ideas: session
                    .ideas()
                    .iter()
                    .map(|idea| StoredIdea {
                        id: idea.id().0,
                        name: idea.name().to_string(),
                        elo: idea.elo(),
                        comparisons: idea.comparisons(),
                        cost: idea.cost(),
                    })
                    .collect(),
                total_comparisons: Some(session.total_comparisons()),
            }
        }

        pub fn to_session(&self) -> EloquentResult<Session> {
            let ideas: Vec<Idea> = self
                .ideas
                .iter()
                .map(|si| Idea::restore(IdeaId(si.id), &si.name, si.elo, si.comparisons, si.cost))
                .collect();
            match self.total_comparisons {
                Some(total) => Session::from_saved(ideas, total),
                None => Session::from_ideas(ideas),
            }
            .context(InvalidSessionSnafu {})
        }
    }

    impl RankingSummary {
        pub fn from_session(session: &Session) -> RankingSummary {
            RankingSummary {
                total_comparisons: session.total_comparisons(),
                ranking: session
                    .ranking()
                    .into_iter()
                    .map(|r| RankingEntry {
                        rank: r.rank,
                        id: r.id.0,
                        name: r.name,
                        elo: r.elo,
                        comparisons: r.comparisons,
                        cost: r.cost,
                    })
                    .collect(),
            }
        }
    }
}

/// Checks the ideas read from an input. Names are trimmed and may not be empty.
fn validate_ideas(parsed: &[ParsedIdea]) -> EloquentResult<Vec<ParsedIdea>> {
    let mut res: Vec<ParsedIdea> = Vec::with_capacity(parsed.len());
    for pi in parsed.iter() {
        let name = pi.name.trim();
        ensure!(!name.is_empty(), EmptyNameSnafu { lineno: pi.lineno });
        if let Some(cost) = pi.cost {
            ensure!(
                cost.is_finite(),
                InvalidCostSnafu {
                    lineno: pi.lineno,
                    cost: cost.to_string()
                }
            );
        }
        res.push(ParsedIdea {
            lineno: pi.lineno,
            name: name.to_string(),
            cost: pi.cost,
        });
    }
    Ok(res)
}

/// Adds the ideas that are not in the session yet. Returns how many were added.
fn add_new_ideas(session: &mut Session, ideas: &[ParsedIdea]) -> EloquentResult<usize> {
    let mut names: HashSet<String> = session
        .ideas()
        .iter()
        .map(|idea| idea.name().to_string())
        .collect();
    let mut added = 0;
    for pi in ideas.iter() {
        if !names.insert(pi.name.clone()) {
            warn!(
                "add_new_ideas: skipping idea {}: {:?} is already in the session",
                pi.lineno, pi.name
            );
            continue;
        }
        session
            .add_idea(&pi.name, pi.cost)
            .context(InvalidSessionSnafu {})?;
        added += 1;
    }
    Ok(added)
}

fn read_input(path: &str, input_type: &str) -> EloquentResult<Vec<ParsedIdea>> {
    info!("Attempting to read ideas from {:?} ({})", path, input_type);
    let parsed = match input_type {
        "text" => io_text::read_text_ideas(path)?,
        "json" => io_json::read_json_ideas(path)?,
        x => whatever!("Input type not implemented {:?}", x),
    };
    validate_ideas(&parsed)
}

fn load_session(state_path: &Option<String>) -> EloquentResult<Session> {
    match state_path {
        Some(p) if Path::new(p).exists() => io_json::read_session(p),
        Some(p) => {
            info!("No session found at {:?}, starting a new one", p);
            Ok(Session::new())
        }
        None => Ok(Session::new()),
    }
}

/// Writes the ranking as a table, best idea first.
pub fn write_ranking_table<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "{:>4}  {:>8}  {:>5}  name", "rank", "elo", "comps")?;
    for r in session.ranking() {
        let cost = match r.cost {
            Some(c) => format!(" (cost: {})", c),
            None => "".to_string(),
        };
        writeln!(
            out,
            "{:>4}  {:>8.1}  {:>5}  {}{}",
            r.rank, r.elo, r.comparisons, r.name, cost
        )?;
    }
    Ok(())
}

fn write_summary(session: &Session, out_path: &Option<String>) -> EloquentResult<()> {
    match out_path.as_deref() {
        None | Some("") => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_ranking_table(session, &mut handle).context(WritingFileSnafu {
                path: "stdout".to_string(),
            })
        }
        Some(p) => {
            let summary = session_file::RankingSummary::from_session(session);
            let pretty = serde_json::to_string_pretty(&summary).context(WritingJsonSnafu {})?;
            if p == "stdout" {
                println!("{}", pretty);
                Ok(())
            } else {
                io_common::write_file(p, &pretty)
            }
        }
    }
}

/// Asks for comparisons, then saves the session to `state` (if set). The
/// session is saved even when the comparisons stopped on an error, so that
/// the answers given so far are kept.
fn compare_and_save<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    rounds: Option<u32>,
    state: Option<&str>,
) -> EloquentResult<u32> {
    let res = if session.len() < 2 {
        warn!("At least two ideas are needed to compare anything");
        Ok(0)
    } else if rounds == Some(0) {
        Ok(0)
    } else {
        prompt::run_comparisons(session, input, output, rounds)
    };
    if let Err(e) = &res {
        warn!("Comparisons stopped early: {}", e);
    }
    if let Some(state) = state {
        io_json::write_session(state, session)?;
    }
    res
}

pub fn run_ranking(args: &Args) -> EloquentResult<()> {
    let mut session = load_session(&args.state)?;

    if let Some(input) = &args.input {
        let input_type = args.input_type.as_deref().unwrap_or("text");
        let parsed = read_input(input, input_type)?;
        let added = add_new_ideas(&mut session, &parsed)?;
        info!(
            "Added {} new ideas out of {} read from {}",
            added,
            parsed.len(),
            io_common::simplify_file_name(input)
        );
    }
    debug!("run_ranking: session {:?}", session);

    let done = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut output = stdout.lock();
        compare_and_save(
            &mut session,
            &mut input,
            &mut output,
            args.rounds,
            args.state.as_deref(),
        )?
    };
    info!(
        "Recorded {} comparisons ({} in total)",
        done,
        session.total_comparisons()
    );

    write_summary(&session, &args.out)
}
