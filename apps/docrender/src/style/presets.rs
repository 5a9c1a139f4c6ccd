//! Preset tables, one per document type.

use crate::models::document::Role;
use crate::models::style::{Alignment, Rgb, StylePreset};

/// Near-black body text.
pub const TEXT: Rgb = Rgb::new(0x1A, 0x1A, 0x1A);
/// Dark blue for section headers.
pub const ACCENT: Rgb = Rgb::new(0x1F, 0x4E, 0x79);
/// Mid grey for contact lines and dates.
pub const SECONDARY: Rgb = Rgb::new(0x59, 0x59, 0x59);

const BASE: StylePreset = StylePreset {
    font_size_pt: 10.0,
    bold: false,
    color: TEXT,
    alignment: Alignment::Left,
    indent_pt: 0.0,
    spacing_before_pt: 0.0,
    spacing_after_pt: 0.0,
    underline: false,
};

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

const RESUME_NAME: StylePreset = StylePreset {
    font_size_pt: 20.0,
    bold: true,
    alignment: Alignment::Center,
    spacing_after_pt: 4.0,
    ..BASE
};

const RESUME_CONTACT: StylePreset = StylePreset {
    font_size_pt: 9.0,
    color: SECONDARY,
    alignment: Alignment::Center,
    spacing_after_pt: 2.0,
    ..BASE
};

const RESUME_SECTION_HEADER: StylePreset = StylePreset {
    font_size_pt: 12.0,
    bold: true,
    color: ACCENT,
    spacing_before_pt: 12.0,
    spacing_after_pt: 4.0,
    underline: true,
    ..BASE
};

const RESUME_SUB_HEADER: StylePreset = StylePreset {
    font_size_pt: 10.5,
    bold: true,
    spacing_before_pt: 4.0,
    spacing_after_pt: 2.0,
    ..BASE
};

const RESUME_BULLET: StylePreset = StylePreset {
    indent_pt: 14.0,
    spacing_after_pt: 2.0,
    ..BASE
};

const RESUME_BODY: StylePreset = StylePreset {
    spacing_after_pt: 4.0,
    ..BASE
};

pub(crate) fn resume(role: Role) -> StylePreset {
    match role {
        Role::Name | Role::Title => RESUME_NAME,
        Role::ContactInfo | Role::Date => RESUME_CONTACT,
        Role::SectionHeader => RESUME_SECTION_HEADER,
        Role::SubHeader => RESUME_SUB_HEADER,
        Role::Bullet => RESUME_BULLET,
        Role::Body | Role::Salutation | Role::Closing | Role::Paragraph => RESUME_BODY,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

const LETTER_TITLE: StylePreset = StylePreset {
    font_size_pt: 16.0,
    bold: true,
    alignment: Alignment::Center,
    spacing_after_pt: 12.0,
    ..BASE
};

const LETTER_DATE: StylePreset = StylePreset {
    font_size_pt: 9.5,
    color: SECONDARY,
    spacing_after_pt: 12.0,
    ..BASE
};

const LETTER_CONTACT: StylePreset = StylePreset {
    font_size_pt: 9.5,
    color: SECONDARY,
    spacing_after_pt: 2.0,
    ..BASE
};

const LETTER_SALUTATION: StylePreset = StylePreset {
    font_size_pt: 11.0,
    spacing_before_pt: 6.0,
    spacing_after_pt: 8.0,
    ..BASE
};

const LETTER_CLOSING: StylePreset = StylePreset {
    font_size_pt: 11.0,
    spacing_before_pt: 12.0,
    spacing_after_pt: 24.0,
    ..BASE
};

const LETTER_PARAGRAPH: StylePreset = StylePreset {
    font_size_pt: 11.0,
    spacing_after_pt: 10.0,
    ..BASE
};

const LETTER_EMPHASIS: StylePreset = StylePreset {
    bold: true,
    ..LETTER_PARAGRAPH
};

const LETTER_INDENTED: StylePreset = StylePreset {
    indent_pt: 14.0,
    ..LETTER_PARAGRAPH
};

pub(crate) fn cover_letter(role: Role) -> StylePreset {
    match role {
        Role::Title | Role::Name => LETTER_TITLE,
        Role::Date => LETTER_DATE,
        Role::ContactInfo => LETTER_CONTACT,
        Role::Salutation => LETTER_SALUTATION,
        Role::Closing => LETTER_CLOSING,
        Role::Paragraph | Role::Body => LETTER_PARAGRAPH,
        Role::SectionHeader | Role::SubHeader => LETTER_EMPHASIS,
        Role::Bullet => LETTER_INDENTED,
    }
}
