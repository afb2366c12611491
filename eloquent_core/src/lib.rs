/*!
Ranking a list of ideas through pairwise comparisons.

Each comparison asks which of two ideas is preferred. The answer moves the
[Elo ratings](https://en.wikipedia.org/wiki/Elo_rating_system) of both
ideas, and sorting by rating gives the ranking.

```
use eloquent_core::factory::create_idea;
use eloquent_core::{update_ratings, Preference};

let mut tea = create_idea("Tea", None);
let mut coffee = create_idea("Coffee", None);

update_ratings(&mut tea, &mut coffee, Preference::First);

assert_eq!(tea.elo(), 1016.0);
assert_eq!(coffee.elo(), 984.0);
assert_eq!(tea.comparisons(), 1);
```

For a whole list of ideas, see [`session::Session`].
*/
mod config;
pub mod factory;
pub mod manual;
pub mod session;

use log::debug;

pub use crate::config::*;

/// The largest change of rating a single comparison can cause.
pub const K_FACTOR: f64 = 32.0;

/// The probability that an idea rated `rating` is preferred over one rated
/// `other`, under the logistic model.
pub fn expectation(rating: f64, other: f64) -> f64 {
    let elo_diff = other - rating;
    1.0 / (1.0 + 10.0_f64.powf(elo_diff / 400.0))
}

/// The outcome of a comparison, from the point of view of the first idea.
pub fn win_score(preference: Preference) -> f64 {
    match preference {
        Preference::First => 1.0,
        Preference::Second => 0.0,
        Preference::NoPreference => 0.5,
    }
}

/// The new ratings of two ideas rated `first` and `second`, after a
/// comparison that ended with `preference`.
///
/// The ratings are not bounded: after many comparisons they may become
/// arbitrarily large or negative.
pub fn rate(first: f64, second: f64, preference: Preference) -> (f64, f64) {
    let expectation_first = expectation(first, second);
    let expectation_second = expectation(second, first);

    // The second idea sees the mirrored outcome. This equals 1 - score_first
    // only as long as preferences stay symmetric.
    let score_first = win_score(preference);
    let score_second = win_score(preference.swap_sides());

    (
        first + K_FACTOR * (score_first - expectation_first),
        second + K_FACTOR * (score_second - expectation_second),
    )
}

/// Applies the outcome of one comparison to both ideas.
///
/// Both ratings are updated from the values they had before the call, and
/// both comparison counters go up by one.
pub fn update_ratings(first: &mut Idea, second: &mut Idea, preference: Preference) {
    let (elo_first, elo_second) = rate(first.elo, second.elo, preference);
    debug!(
        "update_ratings: {} {:.2} -> {:.2}, {} {:.2} -> {:.2} ({:?})",
        first.id(),
        first.elo,
        elo_first,
        second.id(),
        second.elo,
        elo_second,
        preference
    );

    first.elo = elo_first;
    second.elo = elo_second;

    // A restored idea may already sit at the top of the counter.
    first.comparisons = first.comparisons.saturating_add(1);
    second.comparisons = second.comparisons.saturating_add(1);
}
