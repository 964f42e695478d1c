//! Single-winner instant-runoff (ranked-choice) tabulation.
//!
//! Voters rank the candidates they care about, most preferred first. Each
//! round counts first preferences; a strict majority wins, an even split
//! ties, and otherwise the last-place candidates are eliminated and their
//! ballots transfer to the next surviving preference.
//!
//! ```
//! use instant_runoff::model::{Ballot, Election};
//! use instant_runoff::tabulator::{run_election, RoundOutcome};
//!
//! let election = Election::new(
//!     vec!["Spain".to_string(), "Cyprus".to_string()],
//!     vec![
//!         Ballot::new("Dylan", vec!["Cyprus".to_string()]),
//!         Ballot::new("Emily", vec!["Spain".to_string()]),
//!         Ballot::new("Tom", vec!["Spain".to_string()]),
//!     ],
//! );
//!
//! let outcomes = run_election(&election).unwrap();
//! assert_eq!(
//!     outcomes,
//!     vec![RoundOutcome::Winner { winner: "Spain".to_string() }]
//! );
//! ```

pub mod model;
pub mod report;
pub mod tabulator;

pub use model::{Ballot, Election, ElectionError};
pub use tabulator::{evaluate_round, run_election, RoundOutcome, RoundTally};
