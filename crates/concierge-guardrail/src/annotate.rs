//! Soft-annotation tier. Every operation here is idempotent: applying it to
//! its own output changes nothing.

use crate::messages::{DISCLOSURE_LABEL, QUALIFIER_LINE};
use crate::patterns::{self, annotation};

/// Whether the first line already carries the disclosure label.
pub fn has_label(text: &str) -> bool {
    text.lines()
        .next()
        .is_some_and(|first| first.trim().starts_with(DISCLOSURE_LABEL))
}

/// Whether some line is exactly the qualifier.
pub fn has_qualifier(text: &str) -> bool {
    text.lines().any(|line| line.trim() == QUALIFIER_LINE)
}

/// Prepend the disclosure label as its own first line. `None` when present.
pub fn ensure_label(text: &str) -> Option<String> {
    if has_label(text) {
        return None;
    }
    Some(format!("{DISCLOSURE_LABEL}\n{text}"))
}

/// Insert the qualifier immediately after the first line. `None` when an
/// identical line already exists.
pub fn ensure_qualifier(text: &str) -> Option<String> {
    if has_qualifier(text) {
        return None;
    }
    Some(match text.split_once('\n') {
        Some((first, rest)) => format!("{first}\n{QUALIFIER_LINE}\n{rest}"),
        None => format!("{text}\n{QUALIFIER_LINE}"),
    })
}

/// Topic rule id of the first sentence that is both brand-adjacent and about
/// warranty, policy, pricing or returns.
pub fn sensitive_claim(text: &str) -> Option<&'static str> {
    let brand = annotation::brand_patterns();
    let topics = annotation::topic_patterns();
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != QUALIFIER_LINE.trim_end_matches('.'))
        .find_map(|sentence| {
            patterns::first_match(&brand, sentence)?;
            patterns::first_match(&topics, sentence)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_goes_on_its_own_first_line() {
        let out = ensure_label("Hello there.").unwrap();
        assert_eq!(out, format!("{DISCLOSURE_LABEL}\nHello there."));
        assert!(ensure_label(&out).is_none());
    }

    #[test]
    fn qualifier_lands_after_first_line() {
        let text = format!("{DISCLOSURE_LABEL}\nOur warranty covers the action.\nMore text.");
        let out = ensure_qualifier(&text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], DISCLOSURE_LABEL);
        assert_eq!(lines[1], QUALIFIER_LINE);
        assert_eq!(lines[2], "Our warranty covers the action.");
        assert!(ensure_qualifier(&out).is_none());
    }

    #[test]
    fn claims_need_brand_and_topic_in_one_sentence() {
        assert_eq!(
            sensitive_claim("We offer a lifetime warranty on every action."),
            Some("annotation.warranty")
        );
        assert_eq!(sensitive_claim("Most makers offer a warranty."), None);
        assert_eq!(sensitive_claim("We love game shooting. Returns are common."), None);
        assert_eq!(
            sensitive_claim("The Apex can be returned? No, but Apex returns are accepted within 14 days"),
            Some("annotation.returns")
        );
    }

    #[test]
    fn qualifier_line_is_not_itself_a_claim() {
        assert_eq!(sensitive_claim(QUALIFIER_LINE), None);
    }
}
