//! Instant-runoff tabulation.
//!
//! Each round counts first preferences among the active candidates. A
//! candidate holding a strict majority wins outright; an even split across
//! every active candidate is a tie; otherwise the candidates sharing the
//! lowest count are eliminated, their ballots transfer to the voters' next
//! surviving preference, and another round is counted.

use crate::model::{Ballot, Election, Result};
use itertools::Itertools;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a single tabulation round.
///
/// `Winner` and `Tie` are terminal; `Elimination` leads to another round with
/// the named candidates removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoundOutcome {
    Winner { winner: String },
    Tie { winners: Vec<String> },
    Elimination { eliminated: Vec<String> },
}

impl RoundOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::Elimination { .. })
    }
}

/// First-preference counts for one round.
///
/// Every active candidate has an entry, zero-vote candidates included, and
/// iteration follows the candidate slate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTally {
    candidates: Vec<String>,
    counts: Vec<usize>,
}

impl RoundTally {
    /// Counts each non-exhausted ballot toward its first preference.
    pub fn count(candidates: &[String], ballots: &[Ballot]) -> RoundTally {
        let firsts: HashMap<&str, usize> =
            ballots.iter().filter_map(Ballot::first_preference).counts();

        let counts = candidates
            .iter()
            .map(|candidate| firsts.get(candidate.as_str()).copied().unwrap_or(0))
            .collect();

        RoundTally {
            candidates: candidates.to_vec(),
            counts,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn get(&self, candidate: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c == candidate)
            .map(|i| self.counts[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.candidates
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Number of ballots that counted this round. Exhausted ballots are not
    /// part of the total and so never move the threshold.
    pub fn total_votes(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Strict majority: more than half of the votes counted this round.
    /// Exactly half is not enough.
    pub fn threshold(&self) -> usize {
        self.total_votes() / 2 + 1
    }

    pub fn is_split_equally(&self) -> bool {
        self.counts.iter().all_equal()
    }

    /// The candidates sharing the lowest count, in slate order.
    pub fn last_place(&self) -> Vec<String> {
        let min = match self.counts.iter().min() {
            Some(&min) => min,
            None => return Vec::new(),
        };
        self.iter()
            .filter(|&(_, count)| count == min)
            .map(|(candidate, _)| candidate.to_string())
            .collect()
    }
}

impl Serialize for RoundTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.candidates.len()))?;
        for (candidate, count) in self.iter() {
            map.serialize_entry(candidate, &count)?;
        }
        map.end()
    }
}

/// One completed round: the tally that was counted and the outcome drawn
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub tally: RoundTally,
    pub outcome: RoundOutcome,
}

/// Scores a single round and classifies it as a win, a tie, or an
/// elimination. Fails fast on malformed input; see [`Election::validate`].
pub fn evaluate_round(election: &Election) -> Result<RoundOutcome> {
    election.validate()?;
    let tally = RoundTally::count(&election.candidates, &election.ballots);
    Ok(classify(&tally))
}

/// Runs the election round by round until a winner or tie is reached,
/// keeping each round's tally. The returned sequence is never empty, its
/// last outcome is terminal, and every earlier outcome is an elimination.
pub fn tabulate(election: &Election) -> Result<Vec<Round>> {
    election.validate()?;

    let mut rounds = Vec::new();
    let mut current = election.clone();

    loop {
        let tally = RoundTally::count(&current.candidates, &current.ballots);
        let outcome = classify(&tally);

        let next = match &outcome {
            RoundOutcome::Elimination { eliminated } => {
                Some(current.without_candidates(eliminated))
            }
            _ => None,
        };
        rounds.push(Round { tally, outcome });

        match next {
            Some(election) => current = election,
            None => return Ok(rounds),
        }
    }
}

/// Runs the election and returns just the outcome of each round.
pub fn run_election(election: &Election) -> Result<Vec<RoundOutcome>> {
    let rounds = tabulate(election)?;
    Ok(rounds.into_iter().map(|round| round.outcome).collect())
}

fn classify(tally: &RoundTally) -> RoundOutcome {
    let mut over_threshold = candidates_over_threshold(tally);
    match over_threshold.len() {
        1 => {
            return RoundOutcome::Winner {
                winner: over_threshold.swap_remove(0),
            }
        }
        // Two candidates can only clear the bar together under a looser
        // ceil(n/2) quota, where an exact 50/50 split counts both as
        // "winners". The strict threshold admits at most one majority, so
        // this guard is normally dead; it stays so a relaxed quota could
        // never crown two winners silently.
        2 => {
            return RoundOutcome::Tie {
                winners: over_threshold,
            }
        }
        _ => {}
    }

    if tally.is_split_equally() {
        return RoundOutcome::Tie {
            winners: tally.candidates().to_vec(),
        };
    }

    RoundOutcome::Elimination {
        eliminated: tally.last_place(),
    }
}

fn candidates_over_threshold(tally: &RoundTally) -> Vec<String> {
    let threshold = tally.threshold();
    tally
        .iter()
        .filter(|&(_, count)| count >= threshold)
        .map(|(candidate, _)| candidate.to_string())
        .collect()
}
