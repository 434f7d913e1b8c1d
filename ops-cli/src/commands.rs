//! Command dispatch for the `caredesk` binary

use anyhow::Result;
use chat_assistant::Intent;
use colored::Colorize;
use config_engine::{CareDeskConfig, ConfigLoader, DelaySettings};
use error_common::{CareDeskError, Notification};
use scheduling_service::{ConflictStatus, SlotKey};

use crate::app::{App, BookingRequest};
use crate::cli::{Cli, Command};
use crate::{onboard, output};

/// Resolve configuration from `--config`, the environment and the global flags
pub fn load_config(cli: &Cli) -> Result<CareDeskConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path).require_file();
    }
    let mut config = loader.load().map_err(CareDeskError::from)?;

    if cli.instant {
        config.delays = DelaySettings::instant();
    }
    if let Some(level) = cli.log_level_override() {
        config.logging.log_level = level.to_string();
    }
    Ok(config)
}

pub async fn run(cli: Cli, config: CareDeskConfig) -> Result<()> {
    let json = cli.json;
    tracing::debug!(command = cli.command.name(), json, "dispatching command");
    let mut app = App::new(config);

    match cli.command {
        Command::Login { role } => {
            let menu = app.login(role).await?;
            let session = app.session().current().await.map_err(CareDeskError::from)?;
            if json {
                return output::print_json(&session);
            }
            output::print_notification(&Notification::success(
                "Signed in",
                format!("Welcome, {}", role.label()),
            ));
            output::print_menu(&menu);
        }

        Command::Menu { role } => {
            let menu = app.menu(role);
            if json {
                return output::print_json(&menu);
            }
            println!("{}", role.label().bold());
            output::print_menu(&menu);
        }

        Command::CheckConflict { date, time, provider } => {
            let status = app.check_conflict(SlotKey::new(date, time, provider)).await;
            if json {
                return output::print_json(&status);
            }
            output::print_conflict(&status);
            if let ConflictStatus::Conflict(slot) = status {
                let open = app.open_slots(&slot.provider, slot.date);
                output::print_slots(&slot.provider, &slot.day_label(), &open);
            }
        }

        Command::Slots { date, provider } => {
            let open = app.open_slots(&provider, date);
            if json {
                return output::print_json(&open);
            }
            output::print_slots(&provider, &date.to_string(), &open);
        }

        Command::Book {
            patient,
            date,
            time,
            provider,
            visit_type,
            reason,
        } => {
            let confirmation = app
                .book(BookingRequest {
                    patient_id: patient,
                    date,
                    time,
                    provider,
                    visit_type,
                    reason,
                })
                .await?;
            if json {
                return output::print_json(&confirmation);
            }
            output::print_notification(&confirmation.notification);
            println!("  Reference {}", confirmation.reference.to_string().dimmed());
        }

        Command::Onboard => {
            let wizard = app.onboarding_wizard();
            match onboard::run(wizard).await? {
                Some(outcome) if json => return output::print_json(&outcome),
                Some(outcome) => {
                    output::print_notification(&outcome.notification);
                    println!("  Registration {}", outcome.registration_id.to_string().dimmed());
                }
                None => output::print_notification(&Notification::info(
                    "Onboarding cancelled",
                    "Nothing was saved",
                )),
            }
        }

        Command::Patients { term } => {
            let patients = app.patients(term.as_deref()).await?;
            if json {
                return output::print_json(&patients);
            }
            output::print_patients(&patients);
        }

        Command::Chat { message } => {
            let message = message.join(" ");
            let reply = app.chat(&message).await?;
            if json {
                return output::print_json(&reply);
            }
            let label = if reply.intent == Intent::Emergency {
                "Assistant".red().bold()
            } else {
                "Assistant".cyan().bold()
            };
            println!("{label}: {}", reply.text);
        }
    }

    Ok(())
}
