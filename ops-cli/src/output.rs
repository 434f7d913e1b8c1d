//! Terminal rendering

use auth_identity::NavItem;
use colored::{ColoredString, Colorize};
use error_common::{Notification, NotificationKind};
use scheduling_service::{ConflictStatus, Patient};

fn badge(kind: NotificationKind) -> ColoredString {
    match kind {
        NotificationKind::Success => "✔".green().bold(),
        NotificationKind::Warning => "!".yellow().bold(),
        NotificationKind::Error => "✖".red().bold(),
        NotificationKind::Info => "i".cyan().bold(),
    }
}

pub fn print_notification(notification: &Notification) {
    let line = format!(
        "{} {} {}",
        badge(notification.kind),
        notification.title.bold(),
        notification.message
    );
    match notification.kind {
        NotificationKind::Error | NotificationKind::Warning => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn print_conflict(status: &ConflictStatus) {
    let Some(banner) = status.banner() else {
        println!("{}", "Pick a date, time and provider to check availability".dimmed());
        return;
    };
    if status.has_conflict() {
        println!("{} {}", badge(NotificationKind::Warning), banner.yellow());
    } else {
        println!("{} {}", badge(NotificationKind::Success), banner.green());
    }
}

pub fn print_menu(items: &[NavItem]) {
    for item in items {
        println!("  {:<18} {}", item.label.bold(), item.path.dimmed());
    }
}

pub fn patient_row(patient: &Patient) -> String {
    format!(
        "{:<8} {:<20} {}  {:<15} {}",
        patient.id, patient.name, patient.date_of_birth, patient.phone, patient.email
    )
}

pub fn print_patients(patients: &[Patient]) {
    println!("{}", format!("{:<8} {:<20} {:<10}  {:<15} {}", "ID", "Name", "Born", "Phone", "Email").bold());
    for patient in patients {
        println!("{}", patient_row(patient));
    }
}

pub fn print_slots(provider: &str, day: &str, slots: &[&str]) {
    if slots.is_empty() {
        println!("{} has no open slots on {day}", provider.bold());
        return;
    }
    println!("Open slots for {} on {day}:", provider.bold());
    for chunk in slots.chunks(4) {
        println!("  {}", chunk.join("   "));
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
