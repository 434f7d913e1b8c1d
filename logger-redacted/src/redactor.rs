use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+1[-.\s]?)?\(?\b[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref PATIENT_ID_REGEX: Regex = Regex::new(r"\bP-\d{3,}\b").unwrap();
}

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub enabled: bool,
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub redact_patient_ids: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            redact_emails: true,
            redact_phones: true,
            redact_ssn: true,
            redact_patient_ids: true,
            hash_for_correlation: false,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    pub fn with_custom_pattern(mut self, pattern: Regex, replacement: impl Into<String>) -> Self {
        self.custom_patterns.push((pattern, replacement.into()));
        self
    }
}

/// PII redactor for log messages
#[derive(Debug, Clone, Default)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        if !self.config.enabled {
            return text.to_string();
        }

        let mut result = text.to_string();

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        // SSNs before phones; the phone pattern would otherwise eat part of one
        if self.config.redact_ssn {
            result = self.redact_ssn(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        if self.config.redact_patient_ids {
            result = self.redact_patient_ids(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX.replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if self.config.hash_for_correlation {
                format!("EMAIL[{}]", self.hash_value(email))
            } else {
                match email.split_once('@') {
                    Some((local, domain)) => format!(
                        "{}***@{}***",
                        local.chars().next().unwrap_or('*'),
                        domain.chars().next().unwrap_or('*')
                    ),
                    None => "***@***".to_string(),
                }
            }
        }).to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("PHONE[{}]", self.hash_value(&caps[0]))
            } else {
                "(***) ***-****".to_string()
            }
        }).to_string()
    }

    fn redact_ssn(&self, text: &str) -> String {
        SSN_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("SSN[{}]", self.hash_value(&caps[0]))
            } else {
                "***-**-****".to_string()
            }
        }).to_string()
    }

    fn redact_patient_ids(&self, text: &str) -> String {
        PATIENT_ID_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("PATIENT[{}]", self.hash_value(&caps[0]))
            } else {
                "P-****".to_string()
            }
        }).to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::STANDARD.encode(&result[..8]) // first 8 bytes keep the tag short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> PiiRedactor {
        PiiRedactor::new(RedactionConfig::default())
    }

    #[test]
    fn test_email_redaction() {
        let redacted = plain().redact("Patient emma.t@example.com registered");
        assert!(redacted.contains("e***@e***"));
        assert!(!redacted.contains("emma.t"));
    }

    #[test]
    fn test_phone_redaction() {
        let redacted = plain().redact("Call back at (555) 123-4567");
        assert!(redacted.contains("(***) ***-****"));
    }

    #[test]
    fn test_ssn_is_not_mistaken_for_phone() {
        let redacted = plain().redact("SSN 123-45-6789 on file");
        assert_eq!(redacted, "SSN ***-**-**** on file");
    }

    #[test]
    fn test_patient_id_redaction() {
        let redacted = plain().redact("Booked P-1001 with Dr. Sarah Johnson");
        assert_eq!(redacted, "Booked P-**** with Dr. Sarah Johnson");
    }

    #[test]
    fn test_hashes_are_stable_for_correlation() {
        let redactor = PiiRedactor::new(RedactionConfig {
            hash_for_correlation: true,
            ..Default::default()
        });
        let first = redactor.redact("P-1001");
        let second = redactor.redact("P-1001");
        assert!(first.starts_with("PATIENT["));
        assert_eq!(first, second);
        assert_ne!(first, redactor.redact("P-1002"));
    }

    #[test]
    fn test_disabled_redaction_passes_through() {
        let redactor = PiiRedactor::new(RedactionConfig {
            enabled: false,
            ..Default::default()
        });
        assert_eq!(redactor.redact("P-1001 (555) 123-4567"), "P-1001 (555) 123-4567");
    }

    #[test]
    fn test_custom_pattern() {
        let redactor = PiiRedactor::new(
            RedactionConfig::default()
                .with_custom_pattern(Regex::new(r"\bMRN\d+").unwrap(), "MRN[REDACTED]"),
        );
        assert_eq!(redactor.redact("chart MRN123456"), "chart MRN[REDACTED]");
    }
}
