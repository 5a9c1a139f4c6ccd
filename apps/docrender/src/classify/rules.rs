//! Ordered rule tables. For each line, the first rule whose predicate holds
//! assigns the role; lines no rule claims fall back to `Body` / `Paragraph`.

use crate::classify::patterns::{
    contains_closing_phrase, contains_date_range, contains_letter_date, contains_month,
    contains_organization, is_all_upper, is_contact_info, is_title_case, section_keyword,
};
use crate::classify::ClassifierThresholds;
use crate::models::document::{DocumentType, Role};

/// Everything a rule may look at for one line.
pub(crate) struct LineContext<'a> {
    pub text: &'a str,
    pub lower: String,
    pub index: usize,
    /// Length in Unicode scalar values.
    pub char_len: usize,
    /// A resume section header has been seen earlier in the document.
    pub section_active: bool,
    /// Line starts with a bullet marker followed by content. Only consulted by
    /// the `Bullet` rule, so a marked line can still be a header.
    pub bulleted: bool,
}

type Predicate = fn(&LineContext<'_>, &ClassifierThresholds) -> bool;

pub(crate) struct Rule {
    pub role: Role,
    pub matches: Predicate,
}

pub(crate) const RESUME_RULES: &[Rule] = &[
    Rule {
        role: Role::Name,
        matches: is_name,
    },
    Rule {
        role: Role::ContactInfo,
        matches: is_contact,
    },
    Rule {
        role: Role::SectionHeader,
        matches: is_section_header,
    },
    Rule {
        role: Role::SubHeader,
        matches: is_sub_header,
    },
    Rule {
        role: Role::Bullet,
        matches: is_bullet,
    },
];

pub(crate) const COVER_LETTER_RULES: &[Rule] = &[
    Rule {
        role: Role::Title,
        matches: is_title,
    },
    Rule {
        role: Role::Date,
        matches: is_date,
    },
    Rule {
        role: Role::ContactInfo,
        matches: is_contact,
    },
    Rule {
        role: Role::Salutation,
        matches: is_salutation,
    },
    Rule {
        role: Role::Closing,
        matches: is_closing,
    },
];

pub(crate) fn rules_for(doc_type: DocumentType) -> &'static [Rule] {
    match doc_type {
        DocumentType::Resume => RESUME_RULES,
        DocumentType::CoverLetter => COVER_LETTER_RULES,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume predicates
// ────────────────────────────────────────────────────────────────────────────

fn is_name(ctx: &LineContext<'_>, _: &ClassifierThresholds) -> bool {
    ctx.index == 0 && (is_all_upper(ctx.text) || is_title_case(ctx.text))
}

fn is_contact(ctx: &LineContext<'_>, _: &ClassifierThresholds) -> bool {
    is_contact_info(ctx.text, &ctx.lower)
}

fn is_section_header(ctx: &LineContext<'_>, t: &ClassifierThresholds) -> bool {
    section_keyword(&ctx.lower).is_some()
        && (ctx.char_len < t.section_header_max_len
            || ctx.text.ends_with(':')
            || is_all_upper(ctx.text))
}

fn is_sub_header(ctx: &LineContext<'_>, t: &ClassifierThresholds) -> bool {
    ctx.section_active
        && (contains_month(ctx.text)
            || contains_date_range(ctx.text)
            || contains_organization(ctx.text)
            || (ctx.char_len < t.sub_header_max_len && ctx.text.contains(',')))
}

fn is_bullet(ctx: &LineContext<'_>, _: &ClassifierThresholds) -> bool {
    ctx.bulleted
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter predicates
// ────────────────────────────────────────────────────────────────────────────

fn is_title(ctx: &LineContext<'_>, t: &ClassifierThresholds) -> bool {
    ctx.index == 0 && (ctx.lower.contains("cover letter") || ctx.char_len < t.title_max_len)
}

fn is_date(ctx: &LineContext<'_>, _: &ClassifierThresholds) -> bool {
    contains_letter_date(ctx.text)
}

fn is_salutation(ctx: &LineContext<'_>, _: &ClassifierThresholds) -> bool {
    ctx.lower.starts_with("dear ") || ctx.lower.contains("hiring manager")
}

fn is_closing(ctx: &LineContext<'_>, t: &ClassifierThresholds) -> bool {
    ctx.char_len < t.closing_max_len && contains_closing_phrase(&ctx.lower)
}
