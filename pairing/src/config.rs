//! Command-line arguments and runtime settings

use clap::{Args as ClapArgs, Parser, Subcommand};
use shared::{GroupId, MemberId};
use std::path::PathBuf;

use crate::error::{PairingError, PairingResult};

pub const HISTORY_FILE: &str = "pairing-history.json";
pub const COMPLETIONS_FILE: &str = "completions.json";
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Pair group members each week and track their completions
#[derive(Parser, Debug)]
#[command(name = "pairing")]
#[command(about = "Pairs group members each cycle and tracks completions between partners")]
pub struct Args {
    /// Directory holding the pairing history and completion documents
    #[arg(long, env = "PAIRING_DATA_DIR", default_value = "./data", global = true)]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PAIRING_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a pairing round for the given members
    Pair {
        #[command(flatten)]
        group: GroupArg,

        /// Eligible member (repeat for each member)
        #[arg(long = "member", required = true)]
        members: Vec<MemberId>,
    },

    /// Submit a completion signal from one member naming partners
    Complete {
        #[command(flatten)]
        group: GroupArg,

        /// Member posting the evidence
        #[arg(long)]
        actor: MemberId,

        /// Member named in the post (repeat for each mention)
        #[arg(long = "mention", required = true)]
        mentioned: Vec<MemberId>,

        /// Reference to the evidence, e.g. a message id
        #[arg(long)]
        evidence: String,
    },

    /// Show the completion leaderboard
    Leaderboard {
        #[command(flatten)]
        group: GroupArg,

        /// Number of entries to show
        #[arg(long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: usize,
    },

    /// Show completion counts for one member
    Stats {
        #[command(flatten)]
        group: GroupArg,

        #[arg(long)]
        member: MemberId,
    },

    /// Show a member's partner for the current cycle
    Partner {
        #[command(flatten)]
        group: GroupArg,

        #[arg(long)]
        member: MemberId,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GroupArg {
    /// Group the command applies to
    #[arg(long = "group", env = "PAIRING_GROUP")]
    pub id: GroupId,
}

/// Settings derived from the arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    const LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn from_args(args: &Args) -> PairingResult<Self> {
        let log_level = args.log_level.trim().to_ascii_lowercase();
        if !Self::LEVELS.contains(&log_level.as_str()) {
            return Err(PairingError::config(format!("Unknown log level: {}", args.log_level)));
        }
        if args.data_dir.is_file() {
            return Err(PairingError::config(format!(
                "Data directory {} is a file",
                args.data_dir.display()
            )));
        }

        Ok(Self {
            data_dir: args.data_dir.clone(),
            log_level,
        })
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    pub fn completions_path(&self) -> PathBuf {
        self.data_dir.join(COMPLETIONS_FILE)
    }
}
