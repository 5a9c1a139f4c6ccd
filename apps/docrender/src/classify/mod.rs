//! Role classifier — assigns a semantic role to every line of a document.
//!
//! Classification is total: every line gets exactly one role, and lines that
//! no heuristic claims degrade to plain body text. Output has the same length
//! and order as the input.

pub mod patterns;
pub(crate) mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::patterns::{section_keyword, strip_bullet};
use crate::classify::rules::{rules_for, LineContext};
use crate::models::document::{ClassifiedLine, DocumentType, Role};

/// Length cutoffs used by the heuristics, in characters.
///
/// The defaults are carried-over magic numbers with no documented derivation.
/// They are exposed so product can tune them, not because they are known-good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    /// Resume: a keyword line shorter than this is a section header.
    pub section_header_max_len: usize,
    /// Resume: a line with a comma shorter than this is a sub-header.
    pub sub_header_max_len: usize,
    /// Cover letter: a first line shorter than this is the title.
    pub title_max_len: usize,
    /// Cover letter: a closing phrase line must be shorter than this.
    pub closing_max_len: usize,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            section_header_max_len: 50,
            sub_header_max_len: 60,
            title_max_len: 50,
            closing_max_len: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    thresholds: ClassifierThresholds,
}

impl Classifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classifies `lines` in order. Never fails.
    pub fn classify<S: AsRef<str>>(&self, lines: &[S], doc_type: DocumentType) -> Vec<ClassifiedLine> {
        let rules = rules_for(doc_type);
        let fallback = Role::default_for(doc_type);
        let mut active_section: Option<&'static str> = None;

        let classified: Vec<ClassifiedLine> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let text = line.as_ref().trim();
                let ctx = LineContext {
                    text,
                    lower: text.to_lowercase(),
                    index,
                    char_len: text.chars().count(),
                    section_active: active_section.is_some(),
                    bulleted: strip_bullet(text).is_some(),
                };

                let role = rules
                    .iter()
                    .find(|rule| (rule.matches)(&ctx, &self.thresholds))
                    .map_or(fallback, |rule| rule.role);

                if role == Role::SectionHeader {
                    active_section = section_keyword(&ctx.lower);
                }

                let text = match role {
                    Role::Bullet => strip_bullet(text).unwrap_or(text),
                    _ => text,
                };

                ClassifiedLine {
                    text: text.to_string(),
                    role,
                    section: active_section.map(str::to_string),
                }
            })
            .collect();

        debug!(
            doc_type = %doc_type,
            lines = classified.len(),
            roles = ?role_counts(&classified),
            "Classification complete"
        );
        classified
    }
}

/// Classifies with the default thresholds.
pub fn classify<S: AsRef<str>>(lines: &[S], doc_type: DocumentType) -> Vec<ClassifiedLine> {
    Classifier::default().classify(lines, doc_type)
}

fn role_counts(lines: &[ClassifiedLine]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for line in lines {
        *counts.entry(format!("{:?}", line.role)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(lines: &[&str], doc_type: DocumentType) -> Vec<Role> {
        classify(lines, doc_type).into_iter().map(|l| l.role).collect()
    }

    // ── resume ──────────────────────────────────────────────────────────────

    #[test]
    fn test_resume_reference_scenario() {
        let lines = [
            "JOHN DOE",
            "john@x.com",
            "EXPERIENCE",
            "Engineer at Acme, 2020-2022",
            "- Built things",
        ];
        assert_eq!(
            roles(&lines, DocumentType::Resume),
            vec![
                Role::Name,
                Role::ContactInfo,
                Role::SectionHeader,
                Role::SubHeader,
                Role::Bullet
            ]
        );
    }

    #[test]
    fn test_bullet_marker_is_stripped() {
        let out = classify(&["Jane Roe", "SKILLS", "•   Rust and Go"], DocumentType::Resume);
        assert_eq!(out[2].role, Role::Bullet);
        assert_eq!(out[2].text, "Rust and Go");
    }

    #[test]
    fn test_name_only_on_first_line() {
        let out = roles(&["Summary Of Work", "John Doe"], DocumentType::Resume);
        assert_eq!(out[0], Role::Name);
        assert_eq!(out[1], Role::Body);
    }

    #[test]
    fn test_lowercase_first_line_is_not_a_name() {
        let out = roles(&["results-driven engineer"], DocumentType::Resume);
        assert_eq!(out, vec![Role::Body]);
    }

    #[test]
    fn test_sub_header_requires_active_section() {
        let out = roles(&["Jane Roe", "Acme Inc, Remote"], DocumentType::Resume);
        assert_eq!(out[1], Role::Body);

        let out = roles(&["Jane Roe", "Education", "Stanford University"], DocumentType::Resume);
        assert_eq!(out[2], Role::SubHeader);
    }

    #[test]
    fn test_long_keyword_line_is_body_unless_colon_or_upper() {
        let prose = "I bring over ten years of experience building distributed systems at scale";
        let out = roles(&["Jane Roe", prose], DocumentType::Resume);
        assert_eq!(out[1], Role::Body);

        let with_colon = format!("{prose}:");
        let out = roles(&["Jane Roe", with_colon.as_str()], DocumentType::Resume);
        assert_eq!(out[1], Role::SectionHeader);
    }

    #[test]
    fn test_long_upper_case_keyword_line_is_section_header() {
        let shouted = "TECHNICAL SKILLS AND DISTRIBUTED SYSTEMS ENGINEERING EXPERTISE";
        assert!(shouted.chars().count() >= 50);
        assert!(!shouted.ends_with(':'));
        let out = roles(&["Jane Roe", shouted], DocumentType::Resume);
        assert_eq!(out[1], Role::SectionHeader);

        let calm = "Technical skills and distributed systems engineering expertise";
        let out = roles(&["Jane Roe", calm], DocumentType::Resume);
        assert_eq!(out[1], Role::Body);
    }

    #[test]
    fn test_month_line_in_section_is_sub_header() {
        let out = roles(&["Jane Roe", "Experience", "June 2021 – Acme"], DocumentType::Resume);
        assert_eq!(out[2], Role::SubHeader);

        let out = roles(&["Jane Roe", "June 2021 – Acme"], DocumentType::Resume);
        assert_eq!(out[1], Role::Body);
    }

    #[test]
    fn test_portfolio_line_is_contact() {
        let out = roles(&["Jane Roe", "Portfolio: janeroe.design"], DocumentType::Resume);
        assert_eq!(out[1], Role::ContactInfo);
    }

    #[test]
    fn test_contact_wins_over_section_header() {
        let out = roles(&["Jane Roe", "Contact: jane@roe.dev"], DocumentType::Resume);
        assert_eq!(out[1], Role::ContactInfo);
    }

    #[test]
    fn test_header_rules_outrank_bullet_rule() {
        let out = classify(
            &["Jane Roe", "EXPERIENCE", "- Engineer at Acme Inc, 2020-2022", "* SKILLS", "- Shipped it"],
            DocumentType::Resume,
        );
        assert_eq!(out[2].role, Role::SubHeader);
        assert_eq!(out[2].text, "- Engineer at Acme Inc, 2020-2022");
        assert_eq!(out[3].role, Role::SectionHeader);
        assert_eq!(out[3].text, "* SKILLS");
        assert_eq!(out[3].section.as_deref(), Some("skills"));
        assert_eq!(out[4].role, Role::Bullet);
        assert_eq!(out[4].text, "Shipped it");
    }

    #[test]
    fn test_marker_only_line_keeps_text_as_body() {
        let out = classify(&["Jane Roe", "-"], DocumentType::Resume);
        assert_eq!(out[1].role, Role::Body);
        assert_eq!(out[1].text, "-");
    }

    #[test]
    fn test_section_tracks_latest_header() {
        let out = classify(
            &["Jane Roe", "Skills", "- Rust", "Projects", "- docrender"],
            DocumentType::Resume,
        );
        assert_eq!(out[0].section, None);
        assert_eq!(out[1].section.as_deref(), Some("skills"));
        assert_eq!(out[2].section.as_deref(), Some("skills"));
        assert_eq!(out[4].section.as_deref(), Some("projects"));
    }

    #[test]
    fn test_custom_thresholds_change_outcome() {
        let classifier = Classifier::new(ClassifierThresholds {
            section_header_max_len: 5,
            ..ClassifierThresholds::default()
        });
        let out = classifier.classify(&["Jane Roe", "Work Experience"], DocumentType::Resume);
        assert_eq!(out[1].role, Role::Body);
    }

    // ── cover letter ────────────────────────────────────────────────────────

    #[test]
    fn test_cover_letter_reference_scenario() {
        let lines = [
            "Cover Letter",
            "January 1, 2024",
            "Dear Hiring Manager,",
            "I am excited...",
            "Sincerely,",
        ];
        assert_eq!(
            roles(&lines, DocumentType::CoverLetter),
            vec![
                Role::Title,
                Role::Date,
                Role::Salutation,
                Role::Paragraph,
                Role::Closing
            ]
        );
    }

    #[test]
    fn test_cover_letter_contact_and_numeric_dates() {
        let out = roles(
            &["Application", "2024-03-01", "jane@roe.dev | 555-123-4567", "03/01/2024"],
            DocumentType::CoverLetter,
        );
        assert_eq!(out, vec![Role::Title, Role::Date, Role::ContactInfo, Role::Date]);
    }

    #[test]
    fn test_long_closing_phrase_is_paragraph() {
        let line = "Thank you for considering my application for this role.";
        let out = roles(&["Cover Letter", line], DocumentType::CoverLetter);
        assert_eq!(out[1], Role::Paragraph);
    }

    #[test]
    fn test_cover_letter_lines_have_no_section() {
        let out = classify(&["Cover Letter", "Experience"], DocumentType::CoverLetter);
        assert!(out.iter().all(|l| l.section.is_none()));
    }

    // ── totality ────────────────────────────────────────────────────────────

    #[test]
    fn test_every_line_gets_a_native_role() {
        let lines = [
            "",
            "   ",
            "🙂🙂🙂",
            "*",
            "1234567",
            "ÉDUCATION",
            "dear",
            "regards",
            "a,b",
        ];
        for doc_type in [DocumentType::Resume, DocumentType::CoverLetter] {
            let out = classify(&lines, doc_type);
            assert_eq!(out.len(), lines.len());
            assert!(out.iter().all(|l| l.role.belongs_to(doc_type)));
        }
    }

    #[test]
    fn test_accepts_owned_strings() {
        let lines = vec!["JANE ROE".to_string(), "Skills".to_string()];
        let out = classify(&lines, DocumentType::Resume);
        assert_eq!(out[0].role, Role::Name);
    }
}
