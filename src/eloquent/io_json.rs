// Primitives for the JSON files: idea lists and sessions.

use crate::eloquent::{
    io_common::{read_file, write_file},
    session_file::{InputIdea, SessionFile},
    *,
};

pub fn read_json_ideas(path: &str) -> EloquentResult<Vec<ParsedIdea>> {
    let contents = read_file(path)?;
    let inputs: Vec<InputIdea> =
        serde_json::from_str(&contents).context(ParsingJsonSnafu { path })?;
    Ok(inputs
        .into_iter()
        .enumerate()
        .map(|(idx, ii)| ParsedIdea {
            lineno: idx + 1,
            name: ii.name,
            cost: ii.cost,
        })
        .collect())
}

pub fn read_session(path: &str) -> EloquentResult<Session> {
    let contents = read_file(path)?;
    let sf: SessionFile = serde_json::from_str(&contents).context(ParsingJsonSnafu { path })?;
    info!("Read {} ideas from session {:?}", sf.ideas.len(), path);
    sf.to_session()
}

pub fn write_session(path: &str, session: &Session) -> EloquentResult<()> {
    let sf = SessionFile::from_session(session);
    let pretty = serde_json::to_string_pretty(&sf).context(WritingJsonSnafu {})?;
    info!("Saving {} ideas to session {:?}", sf.ideas.len(), path);
    write_file(path, &pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> String {
        let p: PathBuf = [
            std::env::temp_dir(),
            PathBuf::from(format!("eloquent-{}-{}", std::process::id(), name)),
        ]
        .iter()
        .collect();
        p.display().to_string()
    }

    #[test]
    fn session_round_trip_on_disk() {
        let _ = env_logger::try_init();
        let path = temp_path("session.json");
        let mut session = Session::new();
        let a = session.add_idea("a", Some(1.5)).unwrap();
        let b = session.add_idea("b", None).unwrap();
        session.compare(a, b, Preference::First).unwrap();

        write_session(&path, &session).unwrap();
        let restored = read_session(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(restored.ideas(), session.ideas());
        assert_eq!(restored.total_comparisons(), 1);
    }

    #[test]
    fn json_ideas() {
        let path = temp_path("ideas.json");
        fs::write(&path, r#"[{"name": "a", "cost": 3}, {"name": "b"}]"#).unwrap();
        let ideas = read_json_ideas(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].cost, Some(3.0));
        assert_eq!(ideas[1].lineno, 2);
        assert_eq!(ideas[1].cost, None);
    }

    #[test]
    fn broken_json() {
        let path = temp_path("broken.json");
        fs::write(&path, "{not json").unwrap();
        let res = read_session(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(EloquentError::ParsingJson { .. })));
    }

    #[test]
    fn missing_file() {
        let res = read_json_ideas(&temp_path("does-not-exist.json"));
        assert!(matches!(res, Err(EloquentError::OpeningFile { .. })));
    }
}
