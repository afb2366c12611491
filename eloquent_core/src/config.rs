// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The rating given to every idea when it is created.
pub const INITIAL_ELO: f64 = 1000.0;

/// The identifier of an idea.
///
/// Identifiers are handed out by the factory and are never reused within
/// a process (or within a session when using an explicit generator).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct IdeaId(pub u32);

impl Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single item being ranked.
///
/// The identifier, the rating and the comparison count can only be changed by
/// this crate. Use the factory functions to create new ideas.
#[derive(PartialEq, Debug, Clone)]
pub struct Idea {
    id: IdeaId,
    name: String,
    pub(crate) elo: f64,
    pub(crate) comparisons: u32,
    cost: Option<f64>,
}

impl Idea {
    pub(crate) fn new(id: IdeaId, name: &str, cost: Option<f64>) -> Idea {
        Idea {
            id,
            name: name.to_string(),
            elo: INITIAL_ELO,
            comparisons: 0,
            cost,
        }
    }

    /// Rebuilds an idea that was saved earlier, with its rating and its history.
    ///
    /// This is meant for reloading sessions. Fresh ideas should come from
    /// the factory.
    pub fn restore(
        id: IdeaId,
        name: &str,
        elo: f64,
        comparisons: u32,
        cost: Option<f64>,
    ) -> Idea {
        Idea {
            id,
            name: name.to_string(),
            elo,
            comparisons,
            cost,
        }
    }

    pub fn id(&self) -> IdeaId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elo(&self) -> f64 {
        self.elo
    }

    /// The number of comparisons this idea took part in.
    pub fn comparisons(&self) -> u32 {
        self.comparisons
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }
}

/// When prompted to choose between two ideas: is the first one preferred, the
/// second one, or neither?
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Preference {
    First,
    Second,
    NoPreference,
}

impl Preference {
    /// The same judgement, seen from the other idea.
    pub fn swap_sides(self) -> Preference {
        match self {
            Preference::First => Preference::Second,
            Preference::Second => Preference::First,
            Preference::NoPreference => Preference::NoPreference,
        }
    }
}

// ******** Output data structures *********

/// One line of a ranking.
#[derive(PartialEq, Debug, Clone)]
pub struct RankedIdea {
    /// Starts at 1. Ideas with exactly the same rating share a rank.
    pub rank: u32,
    pub id: IdeaId,
    pub name: String,
    pub elo: f64,
    pub comparisons: u32,
    pub cost: Option<f64>,
}

/// Errors raised when a session is asked to do something with ideas it
/// does not hold.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SessionErrors {
    UnknownIdea(IdeaId),
    SameIdea(IdeaId),
    DuplicateIdea(IdeaId),
    /// Every identifier has been handed out already.
    IdsExhausted,
}

impl Error for SessionErrors {}

impl Display for SessionErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionErrors::UnknownIdea(id) => write!(f, "no idea with id {} in this session", id),
            SessionErrors::SameIdea(id) => write!(f, "idea {} cannot be compared to itself", id),
            SessionErrors::DuplicateIdea(id) => {
                write!(f, "idea id {} appears more than once", id)
            }
            SessionErrors::IdsExhausted => write!(f, "no identifier is left for a new idea"),
        }
    }
}
