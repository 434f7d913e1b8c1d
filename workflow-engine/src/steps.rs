//! The four onboarding steps and their per-step validation rules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Onboarding steps in their fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepId {
    BasicInfo,
    MedicalHistory,
    Insurance,
    Consent,
}

impl StepId {
    pub const ALL: [StepId; 4] = [
        StepId::BasicInfo,
        StepId::MedicalHistory,
        StepId::Insurance,
        StepId::Consent,
    ];

    /// Key used in the completion map
    pub fn key(self) -> &'static str {
        match self {
            StepId::BasicInfo => "basicInfo",
            StepId::MedicalHistory => "medicalHistory",
            StepId::Insurance => "insurance",
            StepId::Consent => "consent",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StepId::BasicInfo => "Basic Information",
            StepId::MedicalHistory => "Medical History",
            StepId::Insurance => "Insurance",
            StepId::Consent => "Consent",
        }
    }

    /// Zero-based position
    pub fn index(self) -> usize {
        match self {
            StepId::BasicInfo => 0,
            StepId::MedicalHistory => 1,
            StepId::Insurance => 2,
            StepId::Consent => 3,
        }
    }

    pub fn next(self) -> Option<StepId> {
        match self {
            StepId::BasicInfo => Some(StepId::MedicalHistory),
            StepId::MedicalHistory => Some(StepId::Insurance),
            StepId::Insurance => Some(StepId::Consent),
            StepId::Consent => None,
        }
    }

    pub fn previous(self) -> Option<StepId> {
        match self {
            StepId::BasicInfo => None,
            StepId::MedicalHistory => Some(StepId::BasicInfo),
            StepId::Insurance => Some(StepId::MedicalHistory),
            StepId::Consent => Some(StepId::Insurance),
        }
    }

    pub fn from_key(key: &str) -> Option<StepId> {
        StepId::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// One failed rule on a step form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation rules a step's data must satisfy before the step counts as complete
pub trait StepForm {
    /// Every rule the data currently breaks; empty when valid
    fn issues(&self, today: NaiveDate) -> Vec<FieldIssue>;

    fn is_valid(&self, today: NaiveDate) -> bool {
        self.issues(today).is_empty()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(issues: &mut Vec<FieldIssue>, field: &'static str, value: &str, label: &str) {
    if blank(value) {
        issues.push(FieldIssue::new(field, format!("{label} is required")));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl BasicInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl StepForm for BasicInfo {
    fn issues(&self, today: NaiveDate) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "first_name", &self.first_name, "First name");
        require(&mut issues, "last_name", &self.last_name, "Last name");

        match self.date_of_birth {
            None => issues.push(FieldIssue::new("date_of_birth", "Date of birth is required")),
            Some(dob) if dob > today => {
                issues.push(FieldIssue::new("date_of_birth", "Date of birth cannot be in the future"))
            }
            Some(_) => {}
        }

        require(&mut issues, "gender", &self.gender, "Gender");

        if self.phone.chars().filter(char::is_ascii_digit).count() < 10 {
            issues.push(FieldIssue::new("phone", "Phone number must have at least 10 digits"));
        }

        if !looks_like_email(&self.email) {
            issues.push(FieldIssue::new("email", "Enter a valid email address"));
        }

        require(&mut issues, "address", &self.address, "Address");
        issues
    }
}

/// Every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub allergies: String,
    pub current_medications: String,
    pub chronic_conditions: String,
    pub past_surgeries: String,
    pub family_history: String,
}

impl StepForm for MedicalHistory {
    fn issues(&self, _today: NaiveDate) -> Vec<FieldIssue> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInfo {
    pub provider: String,
    pub policy_number: String,
    pub group_number: String,
    pub policy_holder: String,
    pub relationship_to_holder: String,
}

impl StepForm for InsuranceInfo {
    fn issues(&self, _today: NaiveDate) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        require(&mut issues, "provider", &self.provider, "Insurance provider");
        require(&mut issues, "policy_number", &self.policy_number, "Policy number");
        require(&mut issues, "group_number", &self.group_number, "Group number");
        require(&mut issues, "policy_holder", &self.policy_holder, "Policy holder");
        require(
            &mut issues,
            "relationship_to_holder",
            &self.relationship_to_holder,
            "Relationship to policy holder",
        );
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentInfo {
    pub consent_to_treatment: bool,
    pub privacy_acknowledged: bool,
    pub financial_responsibility: bool,
    pub signature: String,
}

impl StepForm for ConsentInfo {
    fn issues(&self, _today: NaiveDate) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if !self.consent_to_treatment {
            issues.push(FieldIssue::new("consent_to_treatment", "Consent to treatment is required"));
        }
        if !self.privacy_acknowledged {
            issues.push(FieldIssue::new("privacy_acknowledged", "HIPAA privacy notice must be acknowledged"));
        }
        if !self.financial_responsibility {
            issues.push(FieldIssue::new(
                "financial_responsibility",
                "Financial responsibility must be accepted",
            ));
        }
        require(&mut issues, "signature", &self.signature, "Signature");
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn valid_basic() -> BasicInfo {
        BasicInfo {
            first_name: "Maria".to_string(),
            last_name: "Lopez".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1991, 2, 14),
            gender: "female".to_string(),
            phone: "(555) 987-6543".to_string(),
            email: "maria.lopez@example.com".to_string(),
            address: "12 Elm St, Springfield".to_string(),
        }
    }

    #[test]
    fn test_step_order_is_linear() {
        assert_eq!(StepId::BasicInfo.previous(), None);
        assert_eq!(StepId::Consent.next(), None);
        for pair in StepId::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
            assert_eq!(pair[0].index() + 1, pair[1].index());
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for step in StepId::ALL {
            assert_eq!(StepId::from_key(step.key()), Some(step));
        }
        assert_eq!(StepId::from_key("billing"), None);
    }

    #[test]
    fn test_valid_basic_info() {
        assert!(valid_basic().is_valid(today()));
        assert_eq!(valid_basic().full_name(), "Maria Lopez");
    }

    #[test]
    fn test_basic_info_rules() {
        let empty = BasicInfo::default();
        let fields: Vec<_> = empty.issues(today()).into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            ["first_name", "last_name", "date_of_birth", "gender", "phone", "email", "address"]
        );

        let mut future = valid_basic();
        future.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1);
        assert_eq!(future.issues(today())[0].field, "date_of_birth");

        let mut short_phone = valid_basic();
        short_phone.phone = "555-1234".to_string();
        assert!(!short_phone.is_valid(today()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b@c.co"));
        assert!(!looks_like_email("plain"));
    }

    #[test]
    fn test_medical_history_always_valid() {
        assert!(MedicalHistory::default().is_valid(today()));
    }

    #[test]
    fn test_insurance_requires_every_field() {
        assert_eq!(InsuranceInfo::default().issues(today()).len(), 5);
    }

    #[test]
    fn test_consent_requires_all_boxes_and_signature() {
        let mut consent = ConsentInfo {
            consent_to_treatment: true,
            privacy_acknowledged: true,
            financial_responsibility: true,
            signature: "Maria Lopez".to_string(),
        };
        assert!(consent.is_valid(today()));

        consent.privacy_acknowledged = false;
        assert_eq!(consent.issues(today())[0].field, "privacy_acknowledged");
    }
}
