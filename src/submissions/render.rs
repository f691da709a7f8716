//! Submission list projection

use std::fmt::{Display, Write};

use chrono::{Local, TimeZone};

use super::record::SubmissionRecord;
use crate::html::escape_html;
use crate::quiz::Tier;
use crate::score_percentage;

pub const EMPTY_TITLE: &str = "No applications yet!";
pub const EMPTY_BODY: &str = "Employers haven't discovered your awesomeness yet. Give them time! 😉";

/// Display data derived from one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCard {
    pub id: i64,
    pub company_name: String,
    /// `M/D/YYYY` in the viewer's time zone
    pub date: String,
    /// `Name (Role)`
    pub contact: String,
    /// Salary range or "Not specified"
    pub salary: String,
    pub remote: &'static str,
    pub coffee: &'static str,
    pub why_hire: String,
    pub company_culture: String,
    /// Only present when the employer filled it in
    pub special_perks: Option<String>,
    pub score_percentage: u32,
    pub tier: Tier,
}

impl From<&SubmissionRecord> for SubmissionCard {
    fn from(record: &SubmissionRecord) -> Self {
        Self::in_time_zone(record, &Local)
    }
}

impl SubmissionCard {
    /// Card with the date taken as the calendar day in `tz`
    pub fn in_time_zone<Tz: TimeZone>(record: &SubmissionRecord, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        let percentage = score_percentage(record.quiz_score);
        let salary = record
            .salary_range
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Not specified")
            .to_string();

        Self {
            id: record.id,
            company_name: record.company_name.clone(),
            date: record
                .timestamp
                .with_timezone(tz)
                .format("%-m/%-d/%Y")
                .to_string(),
            contact: format!("{} ({})", record.contact_name, record.contact_role),
            salary,
            remote: if record.remote_work { "✅ Yes" } else { "❌ No" },
            coffee: if record.unlimited_coffee {
                "☕ Unlimited"
            } else {
                "⏰ Limited"
            },
            why_hire: record.why_hire.clone(),
            company_culture: record.company_culture.clone(),
            special_perks: record.special_perks.clone().filter(|p| !p.is_empty()),
            score_percentage: percentage,
            tier: Tier::for_badge(percentage),
        }
    }
}

/// One entry of the submissions list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCard {
    /// Shown alone when there are no submissions
    Placeholder {
        title: &'static str,
        body: &'static str,
    },
    Submission(SubmissionCard),
}

/// Cards for `submissions`, in the same (newest-first) order
pub fn render(submissions: &[SubmissionRecord]) -> Vec<DisplayCard> {
    if submissions.is_empty() {
        return vec![DisplayCard::Placeholder {
            title: EMPTY_TITLE,
            body: EMPTY_BODY,
        }];
    }
    submissions
        .iter()
        .map(|r| DisplayCard::Submission(SubmissionCard::from(r)))
        .collect()
}

/// Markup for `#submissions-list`. Employer text is escaped.
pub fn render_html(cards: &[DisplayCard]) -> String {
    let mut html = String::new();
    for card in cards {
        match card {
            DisplayCard::Placeholder { title, body } => {
                let _ = write!(
                    html,
                    "<div class=\"no-submissions\"><h3>{}</h3><p>{}</p></div>",
                    escape_html(title),
                    escape_html(body)
                );
            }
            DisplayCard::Submission(card) => write_card(&mut html, card),
        }
    }
    html
}

fn write_card(html: &mut String, card: &SubmissionCard) {
    let _ = write!(
        html,
        "<div class=\"submission-card\">\
         <div class=\"submission-header\">\
         <div class=\"company-name\">{}</div>\
         <div class=\"submission-date\">{}</div>\
         </div>\
         <div class=\"submission-info\">",
        escape_html(&card.company_name),
        card.date
    );
    for (label, value) in [
        ("Contact:", card.contact.as_str()),
        ("Salary:", card.salary.as_str()),
        ("Remote:", card.remote),
        ("Coffee:", card.coffee),
    ] {
        let _ = write!(
            html,
            "<div class=\"info-row\"><div class=\"info-label\">{}</div><div class=\"info-value\">{}</div></div>",
            label,
            escape_html(value)
        );
    }
    html.push_str("</div>");

    write_text_block(html, "Why they want to hire me:", &card.why_hire);
    write_text_block(html, "Their company culture:", &card.company_culture);
    if let Some(perks) = &card.special_perks {
        write_text_block(html, "Special perks:", perks);
    }

    let _ = write!(
        html,
        "<div class=\"compatibility-score\"><span>Compatibility Score:</span>\
         <div class=\"score-badge {}\">{}%</div></div></div>",
        card.tier.badge_class(),
        card.score_percentage
    );
}

fn write_text_block(html: &mut String, heading: &str, text: &str) {
    let _ = write!(
        html,
        "<div class=\"submission-text\"><strong>{}</strong><br>\"{}\"</div>",
        heading,
        escape_html(text)
    );
}
