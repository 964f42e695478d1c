use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ElectionError, Result};

/// A single voter's ranked preferences, most preferred first.
///
/// A ballot may rank any subset of the candidate slate, including none at all
/// (an abstention). Once every ranked candidate has been eliminated the ballot
/// is exhausted and stops counting toward the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub voter: String,
    pub preferences: Vec<String>,
}

impl Ballot {
    pub fn new(voter: impl Into<String>, preferences: Vec<String>) -> Ballot {
        Ballot {
            voter: voter.into(),
            preferences,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.preferences.is_empty()
    }

    /// The highest-ranked candidate still on the ballot, if any.
    pub fn first_preference(&self) -> Option<&str> {
        self.preferences.first().map(String::as_str)
    }
}

/// An election configuration: the candidate slate plus every ballot cast.
///
/// Candidate order is significant for display and for the order in which tied
/// or eliminated candidates are reported; it does not affect who wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub candidates: Vec<String>,
    pub ballots: Vec<Ballot>,
}

impl Election {
    pub fn new(candidates: Vec<String>, ballots: Vec<Ballot>) -> Election {
        Election {
            candidates,
            ballots,
        }
    }

    /// Checks the well-formedness preconditions: a non-empty slate of unique
    /// candidates, and ballots that only rank known candidates, each at most
    /// once.
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }

        let mut slate = HashSet::new();
        for candidate in &self.candidates {
            if !slate.insert(candidate.as_str()) {
                return Err(ElectionError::DuplicateCandidate(candidate.clone()));
            }
        }

        for ballot in &self.ballots {
            let mut ranked = HashSet::new();
            for preference in &ballot.preferences {
                if !slate.contains(preference.as_str()) {
                    return Err(ElectionError::UnknownCandidate {
                        voter: ballot.voter.clone(),
                        candidate: preference.clone(),
                    });
                }
                if !ranked.insert(preference.as_str()) {
                    return Err(ElectionError::DuplicateRanking {
                        voter: ballot.voter.clone(),
                        candidate: preference.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds the next round's state with `eliminated` removed from the slate
    /// and filtered out of every ballot. The relative order of the surviving
    /// candidates and preferences is preserved; `self` is left untouched.
    pub fn without_candidates(&self, eliminated: &[String]) -> Election {
        let candidates = self
            .candidates
            .iter()
            .filter(|&c| !eliminated.contains(c))
            .cloned()
            .collect();

        let ballots = self
            .ballots
            .iter()
            .map(|ballot| {
                let preferences = ballot
                    .preferences
                    .iter()
                    .filter(|&p| !eliminated.contains(p))
                    .cloned()
                    .collect();
                Ballot::new(ballot.voter.clone(), preferences)
            })
            .collect();

        Election::new(candidates, ballots)
    }
}
