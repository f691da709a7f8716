//! Submission record and the form it is built from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::MAX_QUIZ_SCORE;

/// Form field names, as used by the `name` attributes of `#employer-form`
pub mod fields {
    pub const COMPANY_NAME: &str = "companyName";
    pub const YOUR_NAME: &str = "yourName";
    pub const YOUR_ROLE: &str = "yourRole";
    pub const WHY_HIRE: &str = "whyHire";
    pub const COMPANY_CULTURE: &str = "companyCulture";
    pub const SALARY_RANGE: &str = "salaryRange";
    pub const SPECIAL_PERKS: &str = "specialPerks";
    pub const REMOTE_WORK: &str = "remoteWork";
    pub const COFFEE_BREAKS: &str = "coffeeBreaks";

    pub const ALL: [&str; 9] = [
        COMPANY_NAME,
        YOUR_NAME,
        YOUR_ROLE,
        WHY_HIRE,
        COMPANY_CULTURE,
        SALARY_RANGE,
        SPECIAL_PERKS,
        REMOTE_WORK,
        COFFEE_BREAKS,
    ];
}

/// Employer-supplied part of a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PitchForm {
    pub company_name: String,
    pub contact_name: String,
    pub contact_role: String,
    pub why_hire: String,
    pub company_culture: String,
    pub salary_range: Option<String>,
    pub special_perks: Option<String>,
    pub remote_work: bool,
    pub unlimited_coffee: bool,
}

impl PitchForm {
    /// Build from a field lookup. Missing text fields become empty strings;
    /// blank optional fields become `None`. Nothing is validated.
    pub fn from_fields<F>(field: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| field(name).unwrap_or_default();
        let optional = |name: &str| field(name).filter(|v| !v.trim().is_empty());

        Self {
            company_name: text(fields::COMPANY_NAME),
            contact_name: text(fields::YOUR_NAME),
            contact_role: text(fields::YOUR_ROLE),
            why_hire: text(fields::WHY_HIRE),
            company_culture: text(fields::COMPANY_CULTURE),
            salary_range: optional(fields::SALARY_RANGE),
            special_perks: optional(fields::SPECIAL_PERKS),
            remote_work: field(fields::REMOTE_WORK).as_deref() == Some("yes"),
            unlimited_coffee: field(fields::COFFEE_BREAKS).as_deref() == Some("unlimited"),
        }
    }
}

/// One persisted pitch. Field names match the page's LocalStorage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Creation time in ms since the epoch; unique within the collection
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub quiz_score: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(rename = "yourName", default, deserialize_with = "null_as_empty")]
    pub contact_name: String,
    #[serde(rename = "yourRole", default, deserialize_with = "null_as_empty")]
    pub contact_role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub why_hire: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company_culture: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub special_perks: Option<String>,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(rename = "coffeeBreaks", default)]
    pub unlimited_coffee: bool,
}

impl SubmissionRecord {
    /// Stamp a pitch with the quiz score and creation time
    pub fn new(form: PitchForm, quiz_score: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis(),
            timestamp: now,
            quiz_score: quiz_score.min(MAX_QUIZ_SCORE),
            company_name: form.company_name,
            contact_name: form.contact_name,
            contact_role: form.contact_role,
            why_hire: form.why_hire,
            company_culture: form.company_culture,
            salary_range: form.salary_range,
            special_perks: form.special_perks,
            remote_work: form.remote_work,
            unlimited_coffee: form.unlimited_coffee,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn form_fields() -> HashMap<&'static str, String> {
        HashMap::from([
            (fields::COMPANY_NAME, "Acme".to_string()),
            (fields::YOUR_NAME, "Jo".to_string()),
            (fields::YOUR_ROLE, "CTO".to_string()),
            (fields::WHY_HIRE, "Great code".to_string()),
            (fields::COMPANY_CULTURE, "Chill".to_string()),
            (fields::SALARY_RANGE, "".to_string()),
            (fields::SPECIAL_PERKS, "Nap pods".to_string()),
            (fields::REMOTE_WORK, "yes".to_string()),
            (fields::COFFEE_BREAKS, "limited".to_string()),
        ])
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-04T10:20:30.456Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_form_from_fields() {
        let map = form_fields();
        let form = PitchForm::from_fields(|name| map.get(name).cloned());
        assert_eq!(form.company_name, "Acme");
        assert_eq!(form.contact_role, "CTO");
        assert_eq!(form.salary_range, None);
        assert_eq!(form.special_perks.as_deref(), Some("Nap pods"));
        assert!(form.remote_work);
        assert!(!form.unlimited_coffee);
    }

    #[test]
    fn test_form_missing_fields_pass_through_empty() {
        let form = PitchForm::from_fields(|_| None);
        assert_eq!(form, PitchForm::default());
    }

    #[test]
    fn test_record_new_uses_time_as_id() {
        let record = SubmissionRecord::new(PitchForm::default(), 30, now());
        assert_eq!(record.id, now().timestamp_millis());
        assert_eq!(record.timestamp, now());
        assert_eq!(record.quiz_score, 30);
    }

    #[test]
    fn test_record_clamps_score() {
        let record = SubmissionRecord::new(PitchForm::default(), 80, now());
        assert_eq!(record.quiz_score, MAX_QUIZ_SCORE);
    }

    #[test]
    fn test_json_field_names() {
        let map = form_fields();
        let form = PitchForm::from_fields(|name| map.get(name).cloned());
        let json = serde_json::to_value(SubmissionRecord::new(form, 42, now())).unwrap();
        for key in [
            "id",
            "timestamp",
            "quizScore",
            "companyName",
            "yourName",
            "yourRole",
            "whyHire",
            "companyCulture",
            "salaryRange",
            "specialPerks",
            "remoteWork",
            "coffeeBreaks",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["coffeeBreaks"], false);
        assert_eq!(json["remoteWork"], true);
    }

    #[test]
    fn test_reads_page_written_record() {
        // Shape written by the plain-JS version of the page
        let json = r#"{
            "id": 1741083630456,
            "timestamp": "2025-03-04T10:20:30.456Z",
            "quizScore": 38,
            "companyName": "Acme",
            "yourName": "Jo",
            "yourRole": "CTO",
            "whyHire": "Great code",
            "companyCulture": null,
            "salaryRange": "",
            "specialPerks": null,
            "remoteWork": false,
            "coffeeBreaks": true
        }"#;
        let record: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp, now());
        assert_eq!(record.company_culture, "");
        assert_eq!(record.salary_range.as_deref(), Some(""));
        assert!(record.unlimited_coffee);
    }
}
