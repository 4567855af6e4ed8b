//! Main entry point for the pairing binary
//!
//! Wires the file-backed stores, the system clock and the log notifier into
//! a coordinator and runs one command against it.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use pairing::{
    config::{Args, Command, Settings},
    services::{JsonFileStore, LogNotifier, SystemClock},
    Clock, CompletionSignal, CompletionTracker, Coordinator, HistoryStore,
};
use shared::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let settings = Settings::from_args(&args)?;
    logging::init_tracing(Some(&settings.log_level));
    logging::log_startup(&format!("pairing (data in {})", settings.data_dir.display()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let history = HistoryStore::open(JsonFileStore::new(settings.history_path()), clock.clone()).await;
    let tracker = CompletionTracker::open(JsonFileStore::new(settings.completions_path()), clock).await;
    let coordinator = Coordinator::new(history, tracker, LogNotifier);

    if let Err(e) = run(&coordinator, args.command).await {
        logging::log_error("Command", &e);
        return Err(e);
    }
    Ok(())
}

async fn run(
    coordinator: &Coordinator<JsonFileStore, JsonFileStore, LogNotifier>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Pair { group, members } => {
            if members.len() < 2 {
                println!("Not enough members to create pairs. Need at least 2 members!");
                return Ok(());
            }
            let report = coordinator
                .run_pairing(&group.id, &members)
                .await
                .context("Failed to create pairings")?;
            println!("{report}");
        }
        Command::Complete {
            group,
            actor,
            mentioned,
            evidence,
        } => {
            let signal = CompletionSignal {
                actor,
                mentioned,
                evidence,
            };
            let receipt = coordinator
                .submit_completion(&group.id, &signal)
                .await
                .context("Failed to record completion")?;
            println!("{receipt}");
        }
        Command::Leaderboard { group, limit } => {
            let board = coordinator.ranked_leaderboard(&group.id, limit).await;
            println!("{board}");
        }
        Command::Stats { group, member } => {
            let stats = coordinator.stats_for(&group.id, &member).await;
            println!("{member}: {stats}");
        }
        Command::Partner { group, member } => match coordinator.current_cycle_partner(&group.id, &member).await {
            Some(partner) => println!("{member} is paired with {partner} this week"),
            None => println!("{member} has no partner this week"),
        },
    }
    Ok(())
}
