//! Patient conversations against the default script

use std::time::Duration;

use chat_assistant::{Assistant, AssistantError, Intent, RuleBook, FALLBACK_RESPONSE};
use error_common::CareDeskError;

#[test]
fn test_common_questions_reach_their_topic() {
    let mut assistant = Assistant::default();
    let cases = [
        ("I need a refill on my prescription", Intent::Refill),
        ("Are my lab results back?", Intent::TestResults),
        ("How do I pay my bill?", Intent::Billing),
        ("Is my insurance accepted?", Intent::Insurance),
        ("What are your hours on Saturday?", Intent::OfficeHours),
        ("Thank you!", Intent::Thanks),
        ("Good morning", Intent::Greeting),
        ("I can't breathe", Intent::Emergency),
    ];
    for (message, expected) in cases {
        assert_eq!(assistant.reply(message).unwrap().intent, expected, "{message}");
    }
    assert_eq!(assistant.transcript().len(), cases.len());
}

#[test]
fn test_emergency_with_typographic_apostrophe() {
    let mut assistant = Assistant::default();
    assert_eq!(assistant.reply("I can\u{2019}t breathe").unwrap().intent, Intent::Emergency);
    assert_eq!(assistant.reply("I can't breathe").unwrap().intent, Intent::Emergency);
}

#[test]
fn test_unknown_question_gets_fallback() {
    let mut assistant = Assistant::default();
    let reply = assistant.reply("Do you validate parking?").unwrap();
    assert_eq!(reply.intent, Intent::Fallback);
    assert_eq!(reply.text, FALLBACK_RESPONSE);
}

#[test]
fn test_replies_do_not_depend_on_history() {
    let mut fresh = Assistant::default();
    let mut chatty = Assistant::default();
    for message in ["hello", "billing", "refill", "hours"] {
        chatty.reply(message).unwrap();
    }
    assert_eq!(
        fresh.reply("when are lab results ready").unwrap(),
        chatty.reply("when are lab results ready").unwrap()
    );
}

#[test]
fn test_every_default_rule_is_reachable() {
    let book = RuleBook::default_rules();
    for rule in book.rules() {
        let keyword = match &rule.matcher {
            chat_assistant::Matcher::AnyKeyword(keywords) | chat_assistant::Matcher::AllKeywords(keywords) => {
                keywords.join(" ")
            }
        };
        assert_eq!(book.answer(&keyword).0, rule.intent, "{keyword}");
    }
}

#[tokio::test]
async fn test_respond_waits_then_answers() {
    let mut assistant = Assistant::default().with_typing_delay(Duration::from_millis(5));
    let reply = assistant.respond("schedule a visit").await.unwrap();
    assert_eq!(reply.intent, Intent::Appointment);

    let err: CareDeskError = assistant.respond("").await.unwrap_err().into();
    assert!(matches!(err, CareDeskError::AssistantError(_)));
    assert_eq!(
        assistant.respond(" ").await,
        Err(AssistantError::EmptyMessage)
    );
}
