//! The fixed set of registered `LanguageAdapter`s, selected by language tag
//! (§4.5: "Only registered adapters are reachable"). Grounded on
//! `original_source/backend/parse-core/registry.py`'s adapter lookup,
//! generalized from Java-only to the full registered set.

use cir_java::JavaAdapter;
use cir_lang::LanguageAdapter;
use cir_python::PythonAdapter;

/// Look up the adapter registered for `language`, or `None` if no adapter
/// is registered under that tag.
pub fn adapter_for(language: &str) -> Option<Box<dyn LanguageAdapter>> {
    match language {
        "java" => Some(Box::new(JavaAdapter::new())),
        "python" => Some(Box::new(PythonAdapter::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_languages_resolve() {
        assert!(adapter_for("java").is_some());
        assert!(adapter_for("python").is_some());
    }

    #[test]
    fn unregistered_languages_are_absent() {
        assert!(adapter_for("typescript").is_none());
        assert!(adapter_for("javascript").is_none());
        assert!(adapter_for("cobol").is_none());
    }
}
