use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

pub use crate::config::*;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

/// Creates a new idea with the next identifier of the process-wide counter.
///
/// The counter starts at 0 and is never reset, so every idea created through
/// this function gets a distinct identifier, in increasing order of creation.
/// The name is not checked: rejecting empty names is up to the caller.
///
/// ```
/// use eloquent_core::factory::create_idea;
///
/// let first = create_idea("Learn to juggle", None);
/// let second = create_idea("Plant a tree", Some(15.0));
///
/// assert!(first.id() < second.id());
/// assert_eq!(first.elo(), 1000.0);
/// assert_eq!(second.cost(), Some(15.0));
/// ```
pub fn create_idea(name: &str, cost: Option<f64>) -> Idea {
    let id = IdeaId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
    debug!("create_idea: {} -> {:?}", id, name);
    Idea::new(id, name, cost)
}

/// A source of identifiers owned by the caller.
///
/// It gives the same guarantees as [`create_idea`] but without shared state,
/// which is what a [`Session`](crate::session::Session) uses. Once the last
/// identifier (`u32::MAX`) has been handed out, the generator is exhausted and
/// returns `None`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct IdGenerator {
    // None once exhausted.
    next_id: Option<u32>,
}

impl Default for IdGenerator {
    fn default() -> IdGenerator {
        IdGenerator::new()
    }
}

impl IdGenerator {
    pub fn new() -> IdGenerator {
        IdGenerator { next_id: Some(0) }
    }

    /// A generator that never hands out any of the given identifiers.
    pub fn resuming_after<'a, I>(ids: I) -> IdGenerator
    where
        I: IntoIterator<Item = &'a IdeaId>,
    {
        let next_id = match ids.into_iter().max() {
            Some(id) => id.0.checked_add(1),
            None => Some(0),
        };
        IdGenerator { next_id }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_id.is_none()
    }

    pub fn next_id(&mut self) -> Option<IdeaId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        Some(IdeaId(id))
    }

    pub fn create_idea(&mut self, name: &str, cost: Option<f64>) -> Option<Idea> {
        self.next_id().map(|id| Idea::new(id, name, cost))
    }
}
