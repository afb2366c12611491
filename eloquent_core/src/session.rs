use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, info};

pub use crate::config::*;
use crate::factory::IdGenerator;
use crate::update_ratings;

/// A list of ideas being ranked, along with the identifiers for new ones.
///
/// ```
/// use eloquent_core::session::Session;
/// use eloquent_core::{Preference, SessionErrors};
///
/// let mut session = Session::new();
/// session.add_idea("Write a novel", None)?;
/// session.add_idea("Learn the piano", Some(400.0))?;
///
/// while let Some((first, second)) = session.next_pair() {
///     session.compare(first, second, Preference::First)?;
///     if session.total_comparisons() >= 3 {
///         break;
///     }
/// }
///
/// let ranking = session.ranking();
/// assert_eq!(ranking.len(), 2);
/// assert_eq!(ranking[0].rank, 1);
/// # Ok::<(), SessionErrors>(())
/// ```
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Session {
    ids: IdGenerator,
    ideas: Vec<Idea>,
    last_pair: Option<(IdeaId, IdeaId)>,
    // Kept apart from the per-idea counters, which leave with removed ideas.
    total_comparisons: u64,
}

impl Session {
    pub fn new() -> Session {
        Session {
            ids: IdGenerator::new(),
            ideas: Vec::new(),
            last_pair: None,
            total_comparisons: 0,
        }
    }

    /// Restores a session from previously saved ideas.
    ///
    /// New ideas will get identifiers above all the restored ones. The total
    /// number of comparisons is derived from the ideas' own counters.
    pub fn from_ideas(ideas: Vec<Idea>) -> Result<Session, SessionErrors> {
        let counted: u64 = ideas
            .iter()
            .map(|idea| u64::from(idea.comparisons()))
            .sum::<u64>()
            / 2;
        Session::from_saved(ideas, counted)
    }

    /// Restores a session from previously saved ideas and the total number of
    /// comparisons it recorded.
    pub fn from_saved(ideas: Vec<Idea>, total_comparisons: u64) -> Result<Session, SessionErrors> {
        let mut seen: HashSet<IdeaId> = HashSet::new();
        for idea in ideas.iter() {
            if !seen.insert(idea.id()) {
                return Err(SessionErrors::DuplicateIdea(idea.id()));
            }
        }
        info!("Restoring session with {} ideas", ideas.len());
        Ok(Session {
            ids: IdGenerator::resuming_after(&seen),
            ideas,
            last_pair: None,
            total_comparisons,
        })
    }

    pub fn add_idea(&mut self, name: &str, cost: Option<f64>) -> Result<IdeaId, SessionErrors> {
        let idea = self
            .ids
            .create_idea(name, cost)
            .ok_or(SessionErrors::IdsExhausted)?;
        let id = idea.id();
        info!("Adding idea {}: {}", id, name);
        self.ideas.push(idea);
        Ok(id)
    }

    pub fn remove_idea(&mut self, id: IdeaId) -> Result<Idea, SessionErrors> {
        let idx = self.position(id)?;
        if matches!(self.last_pair, Some((a, b)) if a == id || b == id) {
            self.last_pair = None;
        }
        info!("Removing idea {}", id);
        Ok(self.ideas.remove(idx))
    }

    pub fn get(&self, id: IdeaId) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id() == id)
    }

    /// The ideas, in the order they were added.
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// The number of comparisons recorded so far, including those of ideas
    /// that were removed since.
    pub fn total_comparisons(&self) -> u64 {
        self.total_comparisons
    }

    /// Records the outcome of comparing two ideas of this session.
    pub fn compare(
        &mut self,
        first: IdeaId,
        second: IdeaId,
        preference: Preference,
    ) -> Result<(), SessionErrors> {
        if first == second {
            return Err(SessionErrors::SameIdea(first));
        }
        let first_idx = self.position(first)?;
        let second_idx = self.position(second)?;
        let (first_idea, second_idea) = pair_mut(&mut self.ideas, first_idx, second_idx);
        update_ratings(first_idea, second_idea, preference);
        self.last_pair = Some((first, second));
        self.total_comparisons = self.total_comparisons.saturating_add(1);
        Ok(())
    }

    /// Picks the next two ideas to compare.
    ///
    /// The least compared idea goes first. Its opponent is the least compared
    /// of the others, and then the one with the closest rating. The pair that
    /// was just compared is only proposed again when there is no other choice.
    pub fn next_pair(&self) -> Option<(IdeaId, IdeaId)> {
        if self.ideas.len() < 2 {
            return None;
        }
        let first = self
            .ideas
            .iter()
            .min_by_key(|idea| (idea.comparisons(), idea.id()))?;

        let mut opponents: Vec<&Idea> = self
            .ideas
            .iter()
            .filter(|idea| idea.id() != first.id())
            .collect();
        opponents.sort_by(|a, b| {
            a.comparisons()
                .cmp(&b.comparisons())
                .then_with(|| {
                    let gap_a = (a.elo() - first.elo()).abs();
                    let gap_b = (b.elo() - first.elo()).abs();
                    gap_a.partial_cmp(&gap_b).unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.id().cmp(&b.id()))
        });

        let is_last = |other: IdeaId| match self.last_pair {
            Some((a, b)) => (a == first.id() && b == other) || (a == other && b == first.id()),
            None => false,
        };
        let second = opponents
            .iter()
            .find(|idea| !is_last(idea.id()))
            .or_else(|| opponents.first())?;
        debug!("next_pair: {} vs {}", first.id(), second.id());
        Some((first.id(), second.id()))
    }

    /// The ideas from the highest rated to the lowest.
    ///
    /// Ideas with equal ratings share the same rank and are listed by
    /// identifier, and the next rank skips accordingly (1, 2, 2, 4).
    pub fn ranking(&self) -> Vec<RankedIdea> {
        let mut sorted: Vec<&Idea> = self.ideas.iter().collect();
        sorted.sort_by(|a, b| {
            b.elo()
                .partial_cmp(&a.elo())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id().cmp(&b.id()))
        });

        let mut res: Vec<RankedIdea> = Vec::with_capacity(sorted.len());
        for (idx, idea) in sorted.iter().enumerate() {
            let rank = match res.last() {
                Some(prev) if prev.elo == idea.elo() => prev.rank,
                _ => idx as u32 + 1,
            };
            res.push(RankedIdea {
                rank,
                id: idea.id(),
                name: idea.name().to_string(),
                elo: idea.elo(),
                comparisons: idea.comparisons(),
                cost: idea.cost(),
            });
        }
        res
    }

    fn position(&self, id: IdeaId) -> Result<usize, SessionErrors> {
        self.ideas
            .iter()
            .position(|idea| idea.id() == id)
            .ok_or(SessionErrors::UnknownIdea(id))
    }
}

// Requires i != j.
fn pair_mut(ideas: &mut [Idea], i: usize, j: usize) -> (&mut Idea, &mut Idea) {
    if i < j {
        let (left, right) = ideas.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = ideas.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
