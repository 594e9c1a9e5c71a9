//! PlantUML output validation (§4.4 "Output validity"), grounded on
//! `uml_validate.py`'s `validate_plantuml`: collects every violation rather
//! than stopping at the first.

use regex::Regex;
use std::sync::OnceLock;

const MAX_LEN: usize = 200_000;
const DISALLOWED: &[&str] = &["!include", "!includeurl", "!pragma", "!unquoted"];

fn disallowed_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        DISALLOWED
            .iter()
            .map(|kw| Regex::new(&format!(r"(?mi)^\s*{}", regex::escape(kw))).unwrap())
            .collect()
    })
}

/// Validate PlantUML text, returning `(ok, errors)`. Empty/whitespace-only
/// text short-circuits with a single error; otherwise every violation is
/// collected.
pub fn validate_plantuml(text: &str) -> (bool, Vec<String>) {
    if text.trim().is_empty() {
        return (false, vec!["empty PlantUML text".to_string()]);
    }

    let mut errors = Vec::new();
    if !text.contains("@startuml") {
        errors.push("missing @startuml".to_string());
    }
    if !text.contains("@enduml") {
        errors.push("missing @enduml".to_string());
    }
    for (pattern, keyword) in disallowed_patterns().iter().zip(DISALLOWED) {
        if pattern.is_match(text) {
            errors.push(format!("disallowed directive found: {keyword}"));
        }
    }
    if text.len() > MAX_LEN {
        errors.push("PlantUML text too large".to_string());
    }

    (errors.is_empty(), errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_short_circuits() {
        let (ok, errors) = validate_plantuml("   \n  ");
        assert!(!ok);
        assert_eq!(errors, vec!["empty PlantUML text".to_string()]);
    }

    #[test]
    fn collects_every_violation() {
        let text = "class Order {}\n!include evil.puml\n";
        let (ok, errors) = validate_plantuml(text);
        assert!(!ok);
        assert!(errors.contains(&"missing @startuml".to_string()));
        assert!(errors.contains(&"missing @enduml".to_string()));
        assert!(errors.iter().any(|e| e.contains("!include")));
    }

    #[test]
    fn valid_text_passes() {
        let text = "@startuml\nclass Order {}\n@enduml\n";
        let (ok, errors) = validate_plantuml(text);
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn oversized_text_rejected() {
        let text = format!("@startuml\n{}\n@enduml\n", "x".repeat(MAX_LEN + 1));
        let (ok, errors) = validate_plantuml(&text);
        assert!(!ok);
        assert!(errors.iter().any(|e| e.contains("too large")));
    }
}
