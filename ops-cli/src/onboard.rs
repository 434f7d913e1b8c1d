//! Interactive onboarding wizard

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use error_common::CareDeskError;
use workflow_engine::{
    BasicInfo, ConsentInfo, InsuranceInfo, MedicalHistory, Navigator, OnboardingWizard, StepForm, StepId,
    SubmitOutcome, WizardAction,
};

/// Navigator that reports the redirect on the terminal
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    pub visited: Vec<String>,
}

impl Navigator for TerminalNavigator {
    fn navigate_to(&mut self, path: &str) {
        println!("{} {}", "→".cyan(), path.bold());
        self.visited.push(path.to_string());
    }
}

fn text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn yes(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn date(theme: &ColorfulTheme, prompt: &str, initial: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
    let initial = initial.map(|d| d.to_string()).unwrap_or_default();
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() || input.trim().parse::<NaiveDate>().is_ok() {
                Ok(())
            } else {
                Err("Use YYYY-MM-DD".to_string())
            }
        })
        .interact_text()?;
    Ok(raw.trim().parse::<NaiveDate>().ok())
}

fn prompt_basic(theme: &ColorfulTheme, current: BasicInfo) -> Result<BasicInfo> {
    Ok(BasicInfo {
        first_name: text(theme, "First name", &current.first_name)?,
        last_name: text(theme, "Last name", &current.last_name)?,
        date_of_birth: date(theme, "Date of birth (YYYY-MM-DD)", current.date_of_birth)?,
        gender: text(theme, "Gender", &current.gender)?,
        phone: text(theme, "Phone", &current.phone)?,
        email: text(theme, "Email", &current.email)?,
        address: text(theme, "Address", &current.address)?,
    })
}

fn prompt_history(theme: &ColorfulTheme, current: MedicalHistory) -> Result<MedicalHistory> {
    Ok(MedicalHistory {
        allergies: text(theme, "Allergies", &current.allergies)?,
        current_medications: text(theme, "Current medications", &current.current_medications)?,
        chronic_conditions: text(theme, "Chronic conditions", &current.chronic_conditions)?,
        past_surgeries: text(theme, "Past surgeries", &current.past_surgeries)?,
        family_history: text(theme, "Family history", &current.family_history)?,
    })
}

fn prompt_insurance(theme: &ColorfulTheme, current: InsuranceInfo) -> Result<InsuranceInfo> {
    Ok(InsuranceInfo {
        provider: text(theme, "Insurance provider", &current.provider)?,
        policy_number: text(theme, "Policy number", &current.policy_number)?,
        group_number: text(theme, "Group number", &current.group_number)?,
        policy_holder: text(theme, "Policy holder", &current.policy_holder)?,
        relationship_to_holder: text(theme, "Relationship to policy holder", &current.relationship_to_holder)?,
    })
}

fn prompt_consent(theme: &ColorfulTheme, current: ConsentInfo) -> Result<ConsentInfo> {
    Ok(ConsentInfo {
        consent_to_treatment: yes(theme, "I consent to treatment", current.consent_to_treatment)?,
        privacy_acknowledged: yes(theme, "I acknowledge the HIPAA privacy notice", current.privacy_acknowledged)?,
        financial_responsibility: yes(
            theme,
            "I accept financial responsibility",
            current.financial_responsibility,
        )?,
        signature: text(theme, "Signature (full name)", &current.signature)?,
    })
}

/// Prompt for the current step and feed the answers to the reducer
fn fill_step(theme: &ColorfulTheme, wizard: &mut OnboardingWizard) -> Result<()> {
    let state = wizard.state();
    let action = match wizard.current_step() {
        StepId::BasicInfo => WizardAction::UpdateBasicInfo(prompt_basic(theme, state.basic_info().cloned().unwrap_or_default())?),
        StepId::MedicalHistory => {
            WizardAction::UpdateMedicalHistory(prompt_history(theme, state.medical_history().cloned().unwrap_or_default())?)
        }
        StepId::Insurance => {
            WizardAction::UpdateInsurance(prompt_insurance(theme, state.insurance().cloned().unwrap_or_default())?)
        }
        StepId::Consent => WizardAction::UpdateConsent(prompt_consent(theme, state.consent().cloned().unwrap_or_default())?),
    };
    wizard.dispatch(action);
    Ok(())
}

fn print_issues(wizard: &OnboardingWizard) {
    let state = wizard.state();
    let today = state.today;
    let issues = match wizard.current_step() {
        StepId::BasicInfo => state.basic_info().map(|d| d.issues(today)),
        StepId::MedicalHistory => state.medical_history().map(|d| d.issues(today)),
        StepId::Insurance => state.insurance().map(|d| d.issues(today)),
        StepId::Consent => state.consent().map(|d| d.issues(today)),
    }
    .unwrap_or_default();

    for issue in issues {
        println!("  {} {}", "✖".red(), issue.message);
    }
}

fn print_header(wizard: &OnboardingWizard) {
    let step = wizard.current_step();
    println!();
    println!(
        "{} {} {}",
        format!("Step {} of {}", step.index() + 1, StepId::ALL.len()).dimmed(),
        step.title().bold(),
        format!("({}%)", wizard.progress_percent()).dimmed()
    );
}

/// Walk the four steps until the user submits or quits
///
/// Returns `None` when the user abandons the wizard.
pub async fn run(mut wizard: OnboardingWizard) -> Result<Option<SubmitOutcome>> {
    let theme = ColorfulTheme::default();

    loop {
        print_header(&wizard);
        fill_step(&theme, &mut wizard)?;

        if !wizard.is_current_step_complete() {
            print_issues(&wizard);
        }

        let forward = if wizard.is_last_step() { "Complete onboarding" } else { "Next" };
        let choices = [forward, "Edit this step", "Back", "Quit"];
        let choice = Select::with_theme(&theme)
            .with_prompt("Continue")
            .items(&choices[..])
            .default(0)
            .interact()?;

        match choice {
            0 if wizard.is_last_step() => {
                if !wizard.can_submit() {
                    for (step, complete) in wizard.completion_map() {
                        if !complete {
                            println!("  {} {} is incomplete", "✖".red(), step.title());
                        }
                    }
                    continue;
                }
                let mut navigator = TerminalNavigator::default();
                let outcome = wizard.submit(&mut navigator).await.map_err(CareDeskError::from)?;
                return Ok(Some(outcome));
            }
            0 => {
                if let Err(err) = wizard.try_next() {
                    println!("  {} {}", "✖".red(), err);
                }
            }
            1 => {}
            2 => {
                wizard.previous();
            }
            _ => return Ok(None),
        }
    }
}
