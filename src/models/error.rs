//! Errors raised by the scoring core and by roster loading.

/// Caller-input errors from score, ranking and champion operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoringError {
    /// No match collection was supplied (an empty one is fine).
    MissingMatches,
    /// No player collection was supplied (an empty one is fine).
    MissingPlayers,
    /// Penalty points below zero.
    NegativePenalty(i32),
}

/// Coarse classification of a [`ScoringError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MissingRequiredCollection,
    InvalidNegativeValue,
}

impl ScoringError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoringError::MissingMatches | ScoringError::MissingPlayers => {
                ErrorKind::MissingRequiredCollection
            }
            ScoringError::NegativePenalty(_) => ErrorKind::InvalidNegativeValue,
        }
    }
}

impl std::fmt::Display for ScoringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringError::MissingMatches => write!(f, "The list of matches cannot be missing"),
            ScoringError::MissingPlayers => write!(f, "The list of players cannot be missing"),
            ScoringError::NegativePenalty(p) => {
                write!(f, "Penalty points cannot be negative (got {})", p)
            }
        }
    }
}

impl std::error::Error for ScoringError {}

/// Errors while reading a roster file.
#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    /// A match code other than W, D or L.
    InvalidOutcome(char),
    /// A player name that is empty after trimming.
    EmptyName,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "Could not read roster: {}", e),
            RosterError::Json(e) => write!(f, "Invalid JSON roster: {}", e),
            RosterError::Csv(e) => write!(f, "Invalid CSV roster: {}", e),
            RosterError::InvalidOutcome(c) => {
                write!(f, "Unknown match code '{}' (expected W, D or L)", c)
            }
            RosterError::EmptyName => write!(f, "Player name cannot be empty"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(e) => Some(e),
            RosterError::Json(e) => Some(e),
            RosterError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::Json(e)
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}
