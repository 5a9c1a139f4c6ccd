//! Style resolver — pure lookup from `(role, document type)` to a preset.
//!
//! Total over every pair: roles that belong to the other document type map to
//! the closest native preset, so a lookup can never come back empty.

pub mod presets;

use crate::models::document::{ClassifiedLine, DocumentType, Role, StyledLine};
use crate::models::style::StylePreset;

pub use presets::{ACCENT, SECONDARY, TEXT};

pub fn resolve_style(role: Role, doc_type: DocumentType) -> StylePreset {
    match doc_type {
        DocumentType::Resume => presets::resume(role),
        DocumentType::CoverLetter => presets::cover_letter(role),
    }
}

/// Attaches a resolved style to every classified line, preserving order.
pub fn style_lines(lines: Vec<ClassifiedLine>, doc_type: DocumentType) -> Vec<StyledLine> {
    lines
        .into_iter()
        .map(|line| {
            let style = resolve_style(line.role, doc_type);
            StyledLine::new(line, style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::Alignment;

    const BOTH: [DocumentType; 2] = [DocumentType::Resume, DocumentType::CoverLetter];

    #[test]
    fn test_every_pair_resolves_to_a_sane_preset() {
        for doc_type in BOTH {
            for role in Role::ALL {
                let style = resolve_style(role, doc_type);
                assert!(style.font_size_pt > 0.0, "{role:?}/{doc_type}");
                assert!(style.indent_pt >= 0.0);
                assert!(style.spacing_before_pt >= 0.0);
                assert!(style.spacing_after_pt >= 0.0);
            }
        }
    }

    #[test]
    fn test_name_and_title_are_largest_bold_centered() {
        for (role, doc_type) in [
            (Role::Name, DocumentType::Resume),
            (Role::Title, DocumentType::CoverLetter),
        ] {
            let top = resolve_style(role, doc_type);
            assert!(top.bold);
            assert_eq!(top.alignment, Alignment::Center);
            for other in Role::ALL.iter().filter(|r| r.belongs_to(doc_type) && **r != role) {
                assert!(
                    top.font_size_pt > resolve_style(*other, doc_type).font_size_pt,
                    "{role:?} should be larger than {other:?}"
                );
            }
        }
    }

    #[test]
    fn test_section_header_style() {
        let header = resolve_style(Role::SectionHeader, DocumentType::Resume);
        let body = resolve_style(Role::Body, DocumentType::Resume);
        assert!(header.bold);
        assert!(header.underline);
        assert_eq!(header.color, ACCENT);
        assert!(header.spacing_before_pt > body.spacing_before_pt);
    }

    #[test]
    fn test_contact_and_date_are_small_and_secondary() {
        let body = resolve_style(Role::Body, DocumentType::Resume);
        let contact = resolve_style(Role::ContactInfo, DocumentType::Resume);
        assert!(contact.font_size_pt < body.font_size_pt);
        assert_eq!(contact.color, SECONDARY);

        let paragraph = resolve_style(Role::Paragraph, DocumentType::CoverLetter);
        let date = resolve_style(Role::Date, DocumentType::CoverLetter);
        assert!(date.font_size_pt < paragraph.font_size_pt);
        assert_eq!(date.color, SECONDARY);
    }

    #[test]
    fn test_bullets_indented_not_bold() {
        let bullet = resolve_style(Role::Bullet, DocumentType::Resume);
        assert!(bullet.indent_pt > 0.0);
        assert!(!bullet.bold);
    }

    #[test]
    fn test_foreign_roles_borrow_native_presets() {
        assert_eq!(
            resolve_style(Role::Title, DocumentType::Resume),
            resolve_style(Role::Name, DocumentType::Resume)
        );
        assert_eq!(
            resolve_style(Role::Body, DocumentType::CoverLetter),
            resolve_style(Role::Paragraph, DocumentType::CoverLetter)
        );
    }

    #[test]
    fn test_style_lines_preserves_order_and_text() {
        let classified = vec![
            ClassifiedLine {
                text: "JANE ROE".into(),
                role: Role::Name,
                section: None,
            },
            ClassifiedLine {
                text: "Built it".into(),
                role: Role::Bullet,
                section: Some("experience".into()),
            },
        ];
        let styled = style_lines(classified, DocumentType::Resume);
        assert_eq!(styled.len(), 2);
        assert_eq!(styled[0].text, "JANE ROE");
        assert_eq!(styled[1].role, Role::Bullet);
        assert_eq!(styled[1].section.as_deref(), Some("experience"));
        assert_eq!(styled[1].style, resolve_style(Role::Bullet, DocumentType::Resume));
    }
}
