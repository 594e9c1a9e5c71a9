//! Language detection (§4.5.a): extension lookup first, then a fixed
//! keyword-hint scoring heuristic. Grounded directly on
//! `original_source/backend/parse-core/detect.py`'s `_EXT`/`_score`/
//! `detect_language`.

use regex::Regex;
use std::sync::OnceLock;

/// Result of a language-detection attempt (§4.5.a).
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub language: String,
    pub confidence: f64,
    pub source: &'static str,
}

const EXTENSIONS: &[(&str, &str)] = &[
    (".py", "python"),
    (".java", "java"),
    (".ts", "typescript"),
    (".tsx", "typescript"),
    (".js", "javascript"),
];

fn extension_language(filename: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(ext, _)| filename.ends_with(ext))
        .map(|(_, lang)| *lang)
}

const JAVA_HINTS: &[&str] = &[
    r"\bclass\s+\w+",
    r"\binterface\s+\w+",
    r"\bpublic\b",
    r"\bprivate\b",
    r"\bprotected\b",
    r"\bpackage\s+\w+",
    r"\bimport\s+java\.",
    r"\bvoid\s+\w+\s*\(",
    r"System\.out\.println",
    r"new\s+\w+\s*\(",
    r"\bpublic\s+static\s+void\s+main\s*\(",
    r"\bSystem\.err\.println",
    r"@\w+",
    r"\bextends\s+\w+",
    r"\bimplements\s+\w+",
    r"\bthrows\s+\w+",
    r"\btry\s*\{",
    r"\bcatch\s*\(",
    r"\bfinally\s*\{",
    r"<\w+>",
    r"List<\w+>",
    r"Map<\w+,\s*\w+>",
];

const PY_HINTS: &[&str] = &[
    r"\bdef\b",
    r"\bclass\b",
    r"\bimport\b",
    r"\bself\b",
    r"__init__\s*\(",
    r"print\s*\(",
    r":\s*\n",
    r"if\s+__name__\s*==\s*['\x22]__main__['\x22]",
    r"lambda\s+",
    r"\basync\s+def\b",
    r"\bawait\b",
    r"@\w+",
    r"\btry\s*:\s*\n",
    r"\bexcept\s+\w+\s*:\s*\n",
    r"\bwith\s+\w+",
    r"\bfrom\s+\w+\s+import\b",
    r"f['\x22]",
    r"print\s*\(f['\x22]",
    r"\bself\.",
    r"__main__",
    r"\blen\s*\(",
];

const TS_HINTS: &[&str] = &[
    r"\binterface\s+\w+",
    r"\bimplements\b",
    r"\bexport\b",
    r"\bimport\s+\{?\w+",
    r"\bclass\s+\w+",
    r"\bextends\s+\w+",
    r"\bconstructor\s*\(",
    r"\bfunction\s+\w+",
    r"=>\s*\{",
    r"console\.log",
    r"\btype\s+\w+\s*=",
    r"\benum\s+\w+",
    r":\s*\w+",
    r"\bPromise<\w+>",
    r"@\w+",
    r"\breadonly\b",
    r"\bprivate\b",
    r"\bpublic\b",
    r"\bprotected\b",
    r"\bget\s+\w+",
    r"\bset\s+\w+",
    r"\bnamespace\s+\w+",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).expect("hint pattern compiles")).collect()
}

fn java_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(JAVA_HINTS))
}

fn python_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(PY_HINTS))
}

fn typescript_patterns() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(TS_HINTS))
}

/// Hit-count to confidence scaling (§4.5.a): saturates at 1.0 by 10 hits,
/// scales linearly from 0.6 across 6-9 hits, linearly from 0 below that.
fn score(patterns: &[Regex], text: &str) -> f64 {
    let hits = patterns.iter().filter(|p| p.is_match(text)).count();
    let conf = if hits >= 10 {
        1.0
    } else if hits >= 6 {
        0.6 + (hits - 6) as f64 * (0.4 / 4.0)
    } else {
        hits as f64 * (0.6 / 6.0)
    };
    (conf.min(1.0) * 100.0).round() / 100.0
}

/// Detect a source's language: explicit extension match first, falling
/// back to keyword-hint scoring over python/java/typescript candidates.
pub fn detect_language(code: &str, filename: Option<&str>) -> Detection {
    if let Some(name) = filename {
        if let Some(lang) = extension_language(name) {
            return Detection {
                language: lang.to_string(),
                confidence: 0.95,
                source: "extension",
            };
        }
    }

    let candidates = [
        ("python", score(python_patterns(), code)),
        ("java", score(java_patterns(), code)),
        ("typescript", score(typescript_patterns(), code)),
    ];

    // First-encountered wins ties, matching Python's `max(..., key=...)`.
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }

    if best.1 >= 0.6 {
        Detection {
            language: best.0.to_string(),
            confidence: best.1,
            source: "heuristic",
        }
    } else {
        Detection {
            language: "unknown".to_string(),
            confidence: 0.0,
            source: "none",
        }
    }
}
