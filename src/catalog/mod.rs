//! Static rule and content tables — the auditable data behind the pipeline
//!
//! Three fixed catalogs, all loaded once and never mutated:
//!
//! - the **suspicious pattern set** the classifier runs against pasted text
//! - the **topic keyword table** mapping each [`Topic`] to its trigger words
//! - the **question catalog** the generator draws comprehension checks from
//!
//! Keeping these as declarative tables (rather than branching logic) means
//! every rule can be read, reviewed, and unit-tested on its own.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

// ─── Topics ─────────────────────────────────────────────────────────

/// A programming-concept category used to route comprehension questions
/// to learning modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Loops,
    Arrays,
    Recursion,
    Algorithms,
}

impl Topic {
    /// All topics, in fixed table order. Detection output follows this order.
    pub const ALL: [Topic; 4] = [
        Topic::Loops,
        Topic::Arrays,
        Topic::Recursion,
        Topic::Algorithms,
    ];

    /// Stable topic identifier, doubling as the learning-module routing key.
    pub fn id(&self) -> &'static str {
        match self {
            Topic::Loops => "loops",
            Topic::Arrays => "arrays",
            Topic::Recursion => "recursion",
            Topic::Algorithms => "algorithms",
        }
    }

    /// Case-insensitive keywords whose presence anywhere in the code
    /// counts as a hit for this topic. No weighting, no frequency counting.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Loops => &[
                "for", "while", "forEach", "map", "reduce", "filter", "iteration", "iterate",
            ],
            Topic::Arrays => &[
                "array", "push", "pop", "slice", "splice", "indexOf", "includes", "sort",
            ],
            Topic::Recursion => &[
                "recursive", "recursion", "factorial", "fibonacci", "base case", "call stack",
            ],
            Topic::Algorithms => &[
                "algorithm", "sort", "search", "binary", "merge", "quick", "bubble", "O(n)",
            ],
        }
    }

    /// The compiled keyword alternation for this topic.
    pub fn keyword_pattern(&self) -> &'static Regex {
        let idx = Topic::ALL.iter().position(|t| t == self).unwrap_or(0);
        &TOPIC_PATTERNS[idx]
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One compiled alternation per topic, in [`Topic::ALL`] order.
///
/// Keywords are joined raw, without metacharacter escaping: `O(n)` therefore
/// compiles to a group matching the literal text `On`. That looseness is part
/// of the table's observable behavior and is kept as-is.
static TOPIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    Topic::ALL
        .iter()
        .map(|topic| {
            RegexBuilder::new(&topic.keywords().join("|"))
                .case_insensitive(true)
                .build()
                .expect("topic keyword alternation must compile")
        })
        .collect()
});

// ─── Suspicious Pattern Set ─────────────────────────────────────────

/// Ordered set of code shapes that mark a paste as likely external.
///
/// Order is cosmetic: the classifier ORs the results, so any single match
/// decides the outcome.
pub static SUSPICIOUS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Function body exceeding 100 characters between its braces
        r"function\s+\w+\s*\([^)]*\)\s*\{[^}]{100,}\}",
        // Import statement referencing a quoted module path
        r#"import\s+.*from\s+['"][^'"]+['"]"#,
        // Regex literal with 20+ characters between the slashes
        r"/[^/]{20,}/[gimsuvy]*",
        // Class declaration with optional single-level extends clause
        r"class\s+\w+\s*(extends\s+\w+)?\s*\{",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("suspicious pattern must compile"))
    .collect()
});

// ─── Question Catalog ───────────────────────────────────────────────

/// A fixed comprehension-question template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    /// Stable identifier, unique within the catalog.
    pub id: &'static str,
    /// Prompt text shown to the learner.
    pub prompt: &'static str,
    /// Human-readable topic label (display only).
    pub related_topic: &'static str,
    /// Learning-module routing key.
    pub module_id: &'static str,
}

pub const LOOP_Q1: QuestionTemplate = QuestionTemplate {
    id: "loop-q1",
    prompt: "What type of loop is used in this code, and why might it be the best choice here?",
    related_topic: "Loops & Iteration",
    module_id: "loops",
};

pub const LOOP_Q2: QuestionTemplate = QuestionTemplate {
    id: "loop-q2",
    prompt: "What would happen if you changed the loop condition? Explain the potential consequences.",
    related_topic: "Loop Conditions",
    module_id: "loops",
};

pub const ARRAY_Q1: QuestionTemplate = QuestionTemplate {
    id: "array-q1",
    prompt: "What array methods are being used? Explain what each one does.",
    related_topic: "Array Methods",
    module_id: "arrays",
};

pub const RECURSION_Q1: QuestionTemplate = QuestionTemplate {
    id: "recursion-q1",
    prompt: "Identify the base case and recursive case in this code. Why are both necessary?",
    related_topic: "Recursion",
    module_id: "recursion",
};

pub const GENERIC_Q1: QuestionTemplate = QuestionTemplate {
    id: "generic-q1",
    prompt: "Explain the main purpose of this code in your own words.",
    related_topic: "Code Understanding",
    module_id: "loops",
};

pub const GENERIC_Q2: QuestionTemplate = QuestionTemplate {
    id: "generic-q2",
    prompt: "What would you change if you needed to modify this code for a different use case?",
    related_topic: "Code Adaptation",
    module_id: "loops",
};

/// The full catalog, for audit and lookup.
pub const QUESTION_CATALOG: [QuestionTemplate; 6] = [
    LOOP_Q1,
    LOOP_Q2,
    ARRAY_Q1,
    RECURSION_Q1,
    GENERIC_Q1,
    GENERIC_Q2,
];

/// Look a template up by its stable id.
pub fn question_by_id(id: &str) -> Option<&'static QuestionTemplate> {
    QUESTION_CATALOG.iter().find(|q| q.id == id)
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(SUSPICIOUS_PATTERNS.len(), 4);
        for topic in Topic::ALL {
            // Force the lazy build
            let _ = topic.keyword_pattern();
        }
    }

    #[test]
    fn test_topic_ids_are_stable() {
        let ids: Vec<_> = Topic::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["loops", "arrays", "recursion", "algorithms"]);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        assert!(Topic::Loops.keyword_pattern().is_match("WHILE (true)"));
        assert!(Topic::Recursion.keyword_pattern().is_match("FACTORIAL"));
    }

    #[test]
    fn test_big_o_keyword_matches_unescaped() {
        // "O(n)" compiles as O followed by a group capturing n, so the
        // literal text it matches is "On" (case-insensitive).
        assert!(Topic::Algorithms.keyword_pattern().is_match("on"));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = QUESTION_CATALOG.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), QUESTION_CATALOG.len());
    }

    #[test]
    fn test_question_lookup() {
        assert!(question_by_id("loop-q1").is_some());
        assert!(question_by_id("missing-q").is_none());
    }

    #[test]
    fn test_import_pattern_matches() {
        let code = r#"import { thing } from 'some-package';"#;
        assert!(SUSPICIOUS_PATTERNS[1].is_match(code));
    }

    #[test]
    fn test_class_pattern_matches_with_extends() {
        assert!(SUSPICIOUS_PATTERNS[3].is_match("class Dog extends Animal {"));
        assert!(SUSPICIOUS_PATTERNS[3].is_match("class Dog {"));
    }

    #[test]
    fn test_single_complete_function_matches_no_pattern() {
        let code = "function add(a, b) {\n  return a + b;\n}";
        assert!(SUSPICIOUS_PATTERNS.iter().all(|p| !p.is_match(code)));
    }
}
