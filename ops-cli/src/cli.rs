//! Command-line arguments for the `caredesk` terminal

use std::path::PathBuf;

use auth_identity::Role;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use scheduling_service::parse_day;

#[derive(Parser, Debug)]
#[command(name = "caredesk")]
#[command(version, about = "CareDesk front-desk terminal", long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or TOML)
    #[arg(short, long, global = true, env = "CAREDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the simulated delays
    #[arg(long, global = true)]
    pub instant: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// -v for debug, -vv for trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Sign in with a role and show its menu
    Login {
        #[arg(long)]
        role: Role,
    },

    /// Check whether a provider is already booked at a slot
    CheckConflict {
        #[arg(long, value_parser = parse_day)]
        date: NaiveDate,
        /// Slot label, e.g. "10:00 AM"
        #[arg(long)]
        time: String,
        #[arg(long)]
        provider: String,
    },

    /// List free slots for a provider on a day
    Slots {
        #[arg(long, value_parser = parse_day)]
        date: NaiveDate,
        #[arg(long)]
        provider: String,
    },

    /// Book an appointment
    Book {
        /// Patient id, e.g. P-1001
        #[arg(long)]
        patient: String,
        #[arg(long, value_parser = parse_day)]
        date: NaiveDate,
        #[arg(long)]
        time: String,
        #[arg(long)]
        provider: String,
        #[arg(long = "type")]
        visit_type: String,
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Register a new patient step by step
    Onboard,

    /// Search the patient directory
    Patients {
        /// Name or id fragment; lists everyone when omitted
        term: Option<String>,
    },

    /// Ask the assistant a question
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show the sidebar menu for a role
    Menu {
        #[arg(long)]
        role: Role,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::CheckConflict { .. } => "check-conflict",
            Command::Slots { .. } => "slots",
            Command::Book { .. } => "book",
            Command::Onboard => "onboard",
            Command::Patients { .. } => "patients",
            Command::Chat { .. } => "chat",
            Command::Menu { .. } => "menu",
        }
    }
}

impl Cli {
    /// Log level implied by `-v`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_conflict_args() {
        let cli = Cli::try_parse_from([
            "caredesk",
            "check-conflict",
            "--date",
            "2025-05-25",
            "--time",
            "10:00 AM",
            "--provider",
            "Dr. Sarah Johnson",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::CheckConflict {
                date: NaiveDate::from_ymd_opt(2025, 5, 25).unwrap(),
                time: "10:00 AM".to_string(),
                provider: "Dr. Sarah Johnson".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = Cli::try_parse_from([
            "caredesk", "slots", "--date", "25/05/2025", "--provider", "Dr. Sarah Johnson",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_role_parsing() {
        let cli = Cli::try_parse_from(["caredesk", "login", "--role", "Receptionist"]).unwrap();
        assert_eq!(cli.command, Command::Login { role: Role::Receptionist });

        assert!(Cli::try_parse_from(["caredesk", "menu", "--role", "janitor"]).is_err());
    }

    #[test]
    fn test_chat_joins_words_and_globals() {
        let cli = Cli::try_parse_from(["caredesk", "chat", "office", "hours?", "--instant", "-vv"]).unwrap();
        assert!(cli.instant);
        assert_eq!(cli.log_level_override(), Some("trace"));
        assert_eq!(
            cli.command,
            Command::Chat {
                message: vec!["office".to_string(), "hours?".to_string()],
            }
        );
    }

    #[test]
    fn test_patients_term_optional() {
        let cli = Cli::try_parse_from(["caredesk", "patients"]).unwrap();
        assert_eq!(cli.command, Command::Patients { term: None });
    }
}
