//! Text detectors used by the classification rules.
//!
//! Regexes are compiled once on first use and shared read-only across threads.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+")
        .expect("BUG: invalid EMAIL_RE regex literal")
});

/// `ddd[-.]?ddd[-.]?dddd`, `(ddd) ddd-dddd`, optionally prefixed with `+1`.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?(?:\(\d{3}\)\s*\d{3}[-.\s]?\d{4}|\b\d{3}[-.]?\d{3}[-.]?\d{4}\b)")
        .expect("BUG: invalid PHONE_RE regex literal")
});

/// House number, one to three capitalized words, street suffix.
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b\d{1,5}\s+(?:[A-Z][A-Za-z.]*\s+){1,3}",
        r"(?i:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|way|place|pl)\b",
    ))
    .expect("BUG: invalid ADDRESS_RE regex literal")
});

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december",
        r"|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\b",
    ))
    .expect("BUG: invalid MONTH_RE regex literal")
});

/// `YYYY - YYYY`, `YYYY–present`, `YYYY to current`.
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{4}\s*(?:-|–|—|to)\s*(?:\d{4}|present|current)\b")
        .expect("BUG: invalid DATE_RANGE_RE regex literal")
});

static ORGANIZATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:inc|llc|ltd|corp|corporation|company|university|college|institute",
        r"|school|academy|labs|technologies|group|foundation)\b",
    ))
    .expect("BUG: invalid ORGANIZATION_RE regex literal")
});

/// `January 1, 2024`, `Jan. 1st 2024`, `1 January 2024`, `01/15/2024`, `2024-01-15`.
static LETTER_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    const MONTHS: &str = "(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)";
    Regex::new(&format!(
        r"(?i)\b{MONTHS}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b|\b\d{{1,2}}\s+{MONTHS}\s+\d{{4}}\b|\b\d{{1,2}}/\d{{1,2}}/\d{{4}}\b|\b\d{{4}}-\d{{2}}-\d{{2}}\b"
    ))
    .expect("BUG: invalid LETTER_DATE_RE regex literal")
});

const PROFILE_MARKERS: &[&str] = &["linkedin.com", "github.com", "portfolio"];

/// Section keywords in lookup order. The first one found names the section.
pub const SECTION_KEYWORDS: &[&str] = &[
    "summary",
    "objective",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "awards",
    "references",
    "contact",
    "employment",
    "work history",
    "publications",
    "volunteer",
    "languages",
    "interests",
    "achievements",
    "profile",
    "qualifications",
    "leadership",
    "activities",
    "honors",
    "training",
    "courses",
];

pub const CLOSING_PHRASES: &[&str] = &[
    "sincerely",
    "best regards",
    "kind regards",
    "warm regards",
    "regards",
    "respectfully",
    "thank you",
    "yours truly",
    "yours faithfully",
    "best wishes",
    "cordially",
];

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

// ────────────────────────────────────────────────────────────────────────────
// Detectors
// ────────────────────────────────────────────────────────────────────────────

/// Email, phone number, street address, or a profile link.
pub fn is_contact_info(text: &str, lower: &str) -> bool {
    EMAIL_RE.is_match(text)
        || PHONE_RE.is_match(text)
        || ADDRESS_RE.is_match(text)
        || PROFILE_MARKERS.iter().any(|m| lower.contains(m))
}

pub fn contains_month(text: &str) -> bool {
    MONTH_RE.is_match(text)
}

pub fn contains_date_range(text: &str) -> bool {
    DATE_RANGE_RE.is_match(text)
}

pub fn contains_organization(text: &str) -> bool {
    ORGANIZATION_RE.is_match(text)
}

pub fn contains_letter_date(text: &str) -> bool {
    LETTER_DATE_RE.is_match(text)
}

/// First section keyword contained in the lower-cased line.
pub fn section_keyword(lower: &str) -> Option<&'static str> {
    SECTION_KEYWORDS.iter().copied().find(|kw| lower.contains(kw))
}

pub fn contains_closing_phrase(lower: &str) -> bool {
    CLOSING_PHRASES.iter().any(|p| lower.contains(p))
}

/// Text after a leading bullet marker, if the line has one and something follows it.
pub fn strip_bullet(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(BULLET_MARKERS)?.trim_start();
    (!rest.is_empty()).then_some(rest)
}

/// Has at least one letter and no lower-case letters.
pub fn is_all_upper(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// Every word starts with an upper-case letter and the rest of its letters are
/// lower-case. A letter following a non-letter (`-`, `'`, `.`) starts a new part
/// and must be upper-case too, so `Mary-Jane O'Neil` qualifies.
pub fn is_title_case(text: &str) -> bool {
    if !text.chars().any(char::is_alphabetic) {
        return false;
    }
    text.split_whitespace().all(|word| {
        let mut prev_alpha = false;
        word.chars().all(|c| {
            let ok = if !c.is_alphabetic() {
                true
            } else if prev_alpha {
                !c.is_uppercase()
            } else {
                !c.is_lowercase()
            };
            prev_alpha = c.is_alphabetic();
            ok
        })
    })
}
