//! Keyword rules for the scripted assistant
//!
//! Rules are tried in order and the first match answers. There is no
//! conversation state: the same input always gets the same reply.

use serde::{Deserialize, Serialize};

/// How a rule decides whether it applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "keywords", rename_all = "snake_case")]
pub enum Matcher {
    /// At least one keyword present
    AnyKeyword(Vec<String>),
    /// Every keyword present
    AllKeywords(Vec<String>),
}

impl Matcher {
    pub fn any(keywords: &[&str]) -> Self {
        Matcher::AnyKeyword(keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    pub fn all(keywords: &[&str]) -> Self {
        Matcher::AllKeywords(keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    /// `normalized` must come from [`normalize`]
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::AnyKeyword(keywords) => keywords.iter().any(|k| contains_phrase(normalized, k)),
            Matcher::AllKeywords(keywords) => {
                !keywords.is_empty() && keywords.iter().all(|k| contains_phrase(normalized, k))
            }
        }
    }
}

/// Lowercase, punctuation to spaces, single-spaced, padded with one space each side
///
/// Typographic single quotes count as apostrophes, so "can’t" matches "can't".
pub fn normalize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            c if c.is_alphanumeric() || c == '\'' => c,
            _ => ' ',
        })
        .flat_map(char::to_lowercase)
        .collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    format!(" {} ", words.join(" "))
}

/// Whole-word (or whole-phrase) containment
fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    let phrase = phrase.trim();
    !phrase.is_empty() && normalized.contains(&format!(" {phrase} "))
}

/// Topic a rule answers, reported alongside the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Emergency,
    Appointment,
    Refill,
    TestResults,
    Billing,
    Insurance,
    OfficeHours,
    Greeting,
    Thanks,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub intent: Intent,
    pub matcher: Matcher,
    pub response: String,
}

impl Rule {
    pub fn new(intent: Intent, matcher: Matcher, response: impl Into<String>) -> Self {
        Self {
            intent,
            matcher,
            response: response.into(),
        }
    }
}

/// Ordered rule list with a fallback answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    rules: Vec<Rule>,
    fallback: String,
}

pub const FALLBACK_RESPONSE: &str = "I'm not sure I understood that. I can help with appointments, prescription refills, test results, billing, insurance and office hours. For anything else, please call the front desk at (555) 010-2000.";

impl RuleBook {
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Front desk script; emergencies are checked first
    pub fn default_rules() -> Self {
        let rules = vec![
            Rule::new(
                Intent::Emergency,
                Matcher::any(&["emergency", "chest pain", "can't breathe", "cannot breathe", "911", "overdose", "unconscious"]),
                "If this is a medical emergency, call 911 or go to the nearest emergency room immediately.",
            ),
            Rule::new(
                Intent::Appointment,
                Matcher::any(&["appointment", "appointments", "schedule", "book", "reschedule", "cancel"]),
                "I can help with appointments. You can book, reschedule or cancel from the Appointments page, or tell me the provider and the day that works for you.",
            ),
            Rule::new(
                Intent::Refill,
                Matcher::any(&["refill", "prescription", "prescriptions", "medication", "medications", "pharmacy"]),
                "Refill requests are sent to your provider for review and usually take 1-2 business days. Please have your pharmacy details ready.",
            ),
            Rule::new(
                Intent::TestResults,
                Matcher::any(&["results", "result", "lab", "labs", "test", "tests", "bloodwork"]),
                "Test results are posted once your provider has reviewed them, typically within 3-5 business days. You will be notified when they are available.",
            ),
            Rule::new(
                Intent::Billing,
                Matcher::any(&["bill", "billing", "invoice", "payment", "pay", "balance", "charge"]),
                "For billing questions you can review your statements on the Billing page or reach our billing office at (555) 010-2100, Monday to Friday.",
            ),
            Rule::new(
                Intent::Insurance,
                Matcher::any(&["insurance", "coverage", "copay", "deductible", "covered"]),
                "We accept most major insurance plans. Bring your insurance card to every visit; the front desk can verify your coverage before your appointment.",
            ),
            Rule::new(
                Intent::OfficeHours,
                Matcher::any(&["hours", "open", "closed", "location", "address", "directions"]),
                "We are open Monday to Friday, 8:00 AM to 6:00 PM, and Saturday 9:00 AM to 1:00 PM.",
            ),
            Rule::new(
                Intent::Greeting,
                Matcher::any(&["hello", "hi", "hey", "good morning", "good afternoon", "good evening"]),
                "Hello! I'm the CareDesk assistant. How can I help you today?",
            ),
            Rule::new(
                Intent::Thanks,
                Matcher::any(&["thanks", "thank you", "thx", "appreciate"]),
                "You're welcome! Is there anything else I can help with?",
            ),
        ];
        Self::new(rules, FALLBACK_RESPONSE)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// First rule matching the input, if any
    pub fn first_match(&self, input: &str) -> Option<&Rule> {
        let normalized = normalize(input);
        self.rules.iter().find(|rule| rule.matcher.matches(&normalized))
    }

    /// Response for the input, falling back when no rule matches
    pub fn answer(&self, input: &str) -> (Intent, &str) {
        match self.first_match(input) {
            Some(rule) => (rule.intent, rule.response.as_str()),
            None => (Intent::Fallback, self.fallback.as_str()),
        }
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Hi!  Can I   BOOK?"), " hi can i book ");
        assert_eq!(normalize(""), "  ");
    }

    #[test]
    fn test_normalize_folds_curly_quotes_and_unicode_case() {
        assert_eq!(normalize("I can\u{2019}t BREATHE"), " i can't breathe ");
        assert_eq!(normalize("\u{2018}Ärztin\u{2019}"), " 'ärztin' ");
        assert!(Matcher::any(&["ÄRZTIN"]).matches(&normalize("Ich brauche eine ÄRZTIN")));
    }

    #[test]
    fn test_whole_word_matching() {
        let book = RuleBook::default_rules();
        // "this" must not trigger the "hi" greeting
        assert_eq!(book.answer("what is this").0, Intent::Fallback);
        assert_eq!(book.answer("hi there").0, Intent::Greeting);
    }

    #[test]
    fn test_phrase_keywords() {
        let book = RuleBook::default_rules();
        assert_eq!(book.answer("I have chest pain").0, Intent::Emergency);
        assert_eq!(book.answer("chest and pain").0, Intent::Fallback);
    }

    #[test]
    fn test_order_decides_between_topics() {
        let book = RuleBook::default_rules();
        assert_eq!(book.answer("Hello, I need to book an appointment").0, Intent::Appointment);
        assert_eq!(book.answer("emergency appointment please").0, Intent::Emergency);
    }

    #[test]
    fn test_all_keywords_matcher() {
        let matcher = Matcher::all(&["lab", "results"]);
        assert!(matcher.matches(&normalize("are my lab results in")));
        assert!(!matcher.matches(&normalize("lab hours")));
        assert!(!Matcher::AllKeywords(Vec::new()).matches(&normalize("anything")));
    }

    #[test]
    fn test_custom_book() {
        let book = RuleBook::new(
            vec![Rule::new(Intent::OfficeHours, Matcher::any(&["parking"]), "Parking is free.")],
            "Sorry?",
        );
        assert_eq!(book.answer("Where is PARKING"), (Intent::OfficeHours, "Parking is free."));
        assert_eq!(book.answer("hello"), (Intent::Fallback, "Sorry?"));
    }
}
