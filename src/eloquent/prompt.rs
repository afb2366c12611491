// Asking the user to choose between two ideas.

use std::io::BufRead;

use crate::eloquent::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
enum Answer {
    Prefer(Preference),
    Quit,
}

fn parse_answer(s: &str) -> Option<Answer> {
    match s.trim() {
        "1" => Some(Answer::Prefer(Preference::First)),
        "2" => Some(Answer::Prefer(Preference::Second)),
        "=" => Some(Answer::Prefer(Preference::NoPreference)),
        "q" | "Q" => Some(Answer::Quit),
        _ => None,
    }
}

fn describe(idea: &Idea) -> String {
    match idea.cost() {
        Some(c) => format!("{} (cost: {})", idea.name(), c),
        None => idea.name().to_string(),
    }
}

// None when the input is exhausted.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> EloquentResult<Option<Answer>> {
    loop {
        write!(output, "> ").context(PromptSnafu {})?;
        output.flush().context(PromptSnafu {})?;
        let mut line = String::new();
        if input.read_line(&mut line).context(PromptSnafu {})? == 0 {
            return Ok(None);
        }
        match parse_answer(&line) {
            Some(answer) => return Ok(Some(answer)),
            None => {
                debug!("read_answer: unknown answer {:?}", line);
                writeln!(output, "Please answer 1, 2, = or q").context(PromptSnafu {})?;
            }
        }
    }
}

/// Asks for comparisons until `rounds` is reached (if set), the user quits, or
/// the input ends. Returns the number of comparisons recorded.
pub fn run_comparisons<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    rounds: Option<u32>,
) -> EloquentResult<u32> {
    let mut done: u32 = 0;
    while rounds.map_or(true, |r| done < r) {
        let (first, second) = match session.next_pair() {
            Some(p) => p,
            None => break,
        };
        let (first_desc, second_desc) = match (session.get(first), session.get(second)) {
            (Some(a), Some(b)) => (describe(a), describe(b)),
            _ => whatever!("Ideas {} and {} are not in the session", first, second),
        };
        writeln!(output).context(PromptSnafu {})?;
        writeln!(output, "Which do you prefer? (1, 2, = or q)").context(PromptSnafu {})?;
        writeln!(output, "  [1] {}", first_desc).context(PromptSnafu {})?;
        writeln!(output, "  [2] {}", second_desc).context(PromptSnafu {})?;

        match read_answer(input, output)? {
            Some(Answer::Prefer(preference)) => {
                session
                    .compare(first, second, preference)
                    .context(InvalidSessionSnafu {})?;
                done += 1;
            }
            Some(Answer::Quit) | None => break,
        }
    }
    Ok(done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session_of(names: &[&str]) -> Session {
        let mut session = Session::new();
        for n in names {
            session.add_idea(n, None).unwrap();
        }
        session
    }

    fn run(session: &mut Session, answers: &str, rounds: Option<u32>) -> (u32, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        let done = run_comparisons(session, &mut input, &mut output, rounds).unwrap();
        (done, String::from_utf8(output).unwrap())
    }

    #[test]
    fn answers() {
        assert_eq!(parse_answer("1\n"), Some(Answer::Prefer(Preference::First)));
        assert_eq!(parse_answer(" 2 "), Some(Answer::Prefer(Preference::Second)));
        assert_eq!(parse_answer("="), Some(Answer::Prefer(Preference::NoPreference)));
        assert_eq!(parse_answer("q"), Some(Answer::Quit));
        assert_eq!(parse_answer("3"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn stops_at_end_of_input() {
        let _ = env_logger::try_init();
        let mut session = session_of(&["a", "b", "c"]);
        let (done, out) = run(&mut session, "1\n2\n", None);
        assert_eq!(done, 2);
        assert_eq!(session.total_comparisons(), 2);
        assert!(out.contains("[1] a"));
        assert!(out.contains("[2] b"));
    }

    #[test]
    fn stops_after_rounds() {
        let mut session = session_of(&["a", "b", "c"]);
        let (done, _) = run(&mut session, "1\n1\n1\n1\n", Some(3));
        assert_eq!(done, 3);
        assert_eq!(session.total_comparisons(), 3);
    }

    #[test]
    fn stops_on_quit() {
        let mut session = session_of(&["a", "b"]);
        let (done, _) = run(&mut session, "=\nq\n1\n", None);
        assert_eq!(done, 1);
        let a = &session.ideas()[0];
        assert_eq!(a.elo(), 1000.0);
        assert_eq!(a.comparisons(), 1);
    }

    #[test]
    fn asks_again_on_unknown_answer() {
        let mut session = session_of(&["a", "b"]);
        let (done, out) = run(&mut session, "maybe\n2\n", Some(1));
        assert_eq!(done, 1);
        assert!(out.contains("Please answer"));
        assert_eq!(session.ideas()[1].elo(), 1016.0);
    }

    #[test]
    fn nothing_to_compare() {
        let mut session = session_of(&["alone"]);
        let (done, out) = run(&mut session, "1\n", None);
        assert_eq!(done, 0);
        assert!(out.is_empty());
    }
}
