//! Round-by-round election reports built on top of the tabulator.

use crate::model::{Election, Result};
use crate::tabulator::{self, RoundOutcome, RoundTally};
use serde::Serialize;

/// One tabulation round as it appears in a report. Rounds are numbered
/// from 1.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub round: usize,
    pub tally: RoundTally,
    pub outcome: RoundOutcome,
}

/// How the election ended. `winner` is set for a decisive result, `tied`
/// lists the surviving candidates otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub winner: Option<String>,
    pub tied: Vec<String>,
    #[serde(rename = "totalRounds")]
    pub total_rounds: usize,
    #[serde(rename = "totalBallots")]
    pub total_ballots: usize,
}

/// Full election report: the slate, every round's tally and outcome, and a
/// summary of the final result.
#[derive(Debug, Clone, Serialize)]
pub struct ElectionReport {
    pub candidates: Vec<String>,
    #[serde(rename = "ballotCount")]
    pub ballot_count: usize,
    pub results: Vec<RoundResult>,
    pub summary: ResultSummary,
}

/// Runs the election and assembles the full report.
pub fn generate_report(election: &Election) -> Result<ElectionReport> {
    let rounds = tabulator::tabulate(election)?;

    let (winner, tied) = match rounds.last().map(|round| &round.outcome) {
        Some(RoundOutcome::Winner { winner }) => (Some(winner.clone()), Vec::new()),
        Some(RoundOutcome::Tie { winners }) => (None, winners.clone()),
        _ => (None, Vec::new()),
    };

    let summary = ResultSummary {
        winner,
        tied,
        total_rounds: rounds.len(),
        total_ballots: election.ballots.len(),
    };

    let results = rounds
        .into_iter()
        .enumerate()
        .map(|(i, round)| RoundResult {
            round: i + 1,
            tally: round.tally,
            outcome: round.outcome,
        })
        .collect();

    Ok(ElectionReport {
        candidates: election.candidates.clone(),
        ballot_count: election.ballots.len(),
        results,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ballot;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn ballot(voter: &str, preferences: &[&str]) -> Ballot {
        Ballot::new(voter, strings(preferences))
    }

    fn sample_election() -> Election {
        Election::new(
            strings(&["A", "B", "C"]),
            vec![
                ballot("v1", &["A"]),
                ballot("v2", &["A"]),
                ballot("v3", &["B"]),
                ballot("v4", &["B"]),
                ballot("v5", &["C", "A"]),
            ],
        )
    }

    #[test]
    fn report_numbers_rounds_from_one() {
        let report = generate_report(&sample_election()).unwrap();
        let numbers: Vec<usize> = report.results.iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn decisive_election_summarizes_the_winner() {
        let report = generate_report(&sample_election()).unwrap();
        assert_eq!(report.summary.winner, Some("A".to_string()));
        assert!(report.summary.tied.is_empty());
        assert_eq!(report.summary.total_rounds, 2);
        assert_eq!(report.summary.total_ballots, 5);
        assert_eq!(report.ballot_count, 5);
    }

    #[test]
    fn tied_election_summarizes_the_survivors() {
        let election = Election::new(
            strings(&["A", "B"]),
            vec![ballot("v1", &["A"]), ballot("v2", &["B"])],
        );
        let report = generate_report(&election).unwrap();
        assert_eq!(report.summary.winner, None);
        assert_eq!(report.summary.tied, strings(&["A", "B"]));
    }

    #[test]
    fn report_serializes_with_external_field_names() {
        let report = generate_report(&sample_election()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["ballotCount"], 5);
        assert_eq!(value["summary"]["totalRounds"], 2);
        assert_eq!(value["results"][0]["tally"]["A"], 2);
        assert_eq!(value["results"][0]["outcome"]["kind"], "elimination");
    }
}
