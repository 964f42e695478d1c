pub mod election;

pub use election::{Ballot, Election};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElectionError {
    #[error("election has no candidates")]
    NoCandidates,
    #[error("duplicate candidate: {0}")]
    DuplicateCandidate(String),
    #[error("ballot for {voter} ranks unknown candidate: {candidate}")]
    UnknownCandidate { voter: String, candidate: String },
    #[error("ballot for {voter} ranks {candidate} more than once")]
    DuplicateRanking { voter: String, candidate: String },
}

pub type Result<T> = std::result::Result<T, ElectionError>;
