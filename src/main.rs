use clap::{Parser, Subcommand};
use colored::Colorize;
use instant_runoff::model::Election;
use instant_runoff::report::{self, ElectionReport};
use instant_runoff::tabulator::RoundOutcome;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about an election.
    Info {
        /// Election JSON file.
        election_file: PathBuf,
    },
    /// Tabulate an election and print the round-by-round results.
    Tabulate {
        /// Election JSON file.
        election_file: PathBuf,
        /// Emit the full report as JSON instead of formatted text.
        #[clap(long)]
        json: bool,
    },
}

fn main() {
    let opts = Opts::parse();

    let result = match opts.command {
        Command::Info { election_file } => info(&election_file),
        Command::Tabulate {
            election_file,
            json,
        } => tabulate(&election_file, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn load_election(path: &Path) -> Result<Election, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let election: Election = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    election.validate()?;
    Ok(election)
}

fn info(election_file: &Path) -> Result<(), Box<dyn Error>> {
    let election = load_election(election_file)?;

    println!("📋 {}", election_file.display().to_string().bright_cyan());
    println!(
        "  candidates: {}",
        election.candidates.len().to_string().bright_yellow()
    );
    for candidate in &election.candidates {
        println!("    - {}", candidate);
    }

    let abstentions = election
        .ballots
        .iter()
        .filter(|ballot| ballot.is_exhausted())
        .count();
    println!(
        "  ballots: {}",
        election.ballots.len().to_string().bright_yellow()
    );
    if abstentions > 0 {
        println!("  abstentions: {}", abstentions.to_string().bright_yellow());
    }

    Ok(())
}

fn tabulate(election_file: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let election = load_election(election_file)?;
    let report = report::generate_report(&election)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ElectionReport) {
    println!(
        "🗳️ Tabulating {} ballots across {} candidates",
        report.ballot_count.to_string().bright_cyan(),
        report.candidates.len().to_string().bright_cyan()
    );

    for round in &report.results {
        println!("Round {}", round.round.to_string().bold());
        for (candidate, count) in round.tally.iter() {
            println!("  {:<24} {}", candidate, count);
        }
        match &round.outcome {
            RoundOutcome::Winner { winner } => {
                println!("  🏆 Winner: {}", winner.bright_green().bold());
            }
            RoundOutcome::Tie { winners } => {
                println!("  🤝 Tie: {}", winners.join(", ").bright_yellow());
            }
            RoundOutcome::Elimination { eliminated } => {
                println!("  Eliminated: {}", eliminated.join(", ").red());
            }
        }
    }
}
