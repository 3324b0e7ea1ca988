use std::path::PathBuf;

use clap::{Parser, Subcommand};
use study_core::model::{AnswerOption, MAX_STUDY_HOURS, MIN_STUDY_HOURS};

#[derive(Debug, Parser)]
#[command(name = "study", version, about = "Smart study assistant")]
pub struct Cli {
    /// Reference data file (subjects, questions, resources, starter progress).
    #[arg(long, global = true, env = "STUDY_DATA", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Start with empty progress instead of the bundled starter values.
    #[arg(long, global = true)]
    pub no_starter: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the welcome screen.
    Home,
    /// Create a study plan and list the matching resources.
    Plan {
        #[arg(long)]
        name: String,
        /// Subject to focus on; repeat for several.
        #[arg(long = "subject", value_name = "SUBJECT")]
        subjects: Vec<String>,
        #[arg(
            long,
            default_value_t = 2,
            value_parser = clap::value_parser!(u32).range(i64::from(MIN_STUDY_HOURS)..=i64::from(MAX_STUDY_HOURS))
        )]
        hours: u32,
        #[arg(long, default_value = "")]
        goal: String,
    },
    /// Take a quiz. Answers not given with --answer are read from stdin.
    Quiz {
        subject: String,
        /// Answer for the next question (1-4 or "Option N"); repeat in order.
        #[arg(long = "answer", value_name = "N")]
        answers: Vec<AnswerOption>,
    },
    /// Show completion bars and score history.
    Progress {
        /// Limit the score history to one subject.
        #[arg(long)]
        subject: Option<String>,
        /// Print the full snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List study resources.
    Resources {
        #[arg(long)]
        subject: Option<String>,
    },
}
