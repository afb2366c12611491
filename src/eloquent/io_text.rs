// Primitives for reading plain text lists of ideas.

use crate::eloquent::{io_common::parse_cost, io_common::read_file, *};

const COST_DELIMITER: char = ';';

pub fn read_text_ideas(path: &str) -> EloquentResult<Vec<ParsedIdea>> {
    let contents = read_file(path)?;
    parse_text_ideas(&contents)
}

// Only a number (or nothing) after the last semicolon is read as a cost, so
// that names may contain semicolons.
fn has_cost_suffix(suffix: &str) -> bool {
    let trimmed = suffix.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

/// One idea per line, with an optional cost after the last semicolon.
/// Empty lines and lines starting with '#' are ignored.
pub fn parse_text_ideas(contents: &str) -> EloquentResult<Vec<ParsedIdea>> {
    let mut res: Vec<ParsedIdea> = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, cost) = match line.rsplit_once(COST_DELIMITER) {
            Some((name, cost)) if has_cost_suffix(cost) => (name, parse_cost(lineno, cost)?),
            _ => (line, None),
        };
        debug!("parse_text_ideas: line {}: {:?} {:?}", lineno, name, cost);
        res.push(ParsedIdea {
            lineno,
            name: name.trim().to_string(),
            cost,
        });
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_costs() {
        let contents = "# my list\n\nFix the bike ; 40\n  Start a garden  \nTrip; 1e3\n";
        let ideas = parse_text_ideas(contents).unwrap();
        let summary: Vec<(usize, &str, Option<f64>)> = ideas
            .iter()
            .map(|pi| (pi.lineno, pi.name.as_str(), pi.cost))
            .collect();
        assert_eq!(
            summary,
            vec![
                (3, "Fix the bike", Some(40.0)),
                (4, "Start a garden", None),
                (5, "Trip", Some(1000.0)),
            ]
        );
    }

    #[test]
    fn bad_cost_reports_line() {
        let res = parse_text_ideas("ok\nforever ; inf\n");
        assert!(matches!(
            res,
            Err(EloquentError::InvalidCost { lineno: 2, .. })
        ));
    }

    #[test]
    fn empty_names_are_kept_for_validation() {
        let ideas = parse_text_ideas(" ; 5\n").unwrap();
        assert_eq!(ideas[0].name, "");
        assert_eq!(ideas[0].cost, Some(5.0));
    }

    #[test]
    fn semicolons_in_names() {
        let contents = "Fish; chips\nFish; chips; 12\nTea; or coffee;\n";
        let ideas = parse_text_ideas(contents).unwrap();
        let summary: Vec<(&str, Option<f64>)> = ideas
            .iter()
            .map(|pi| (pi.name.as_str(), pi.cost))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Fish; chips", None),
                ("Fish; chips", Some(12.0)),
                ("Tea; or coffee", None),
            ]
        );
    }
}
