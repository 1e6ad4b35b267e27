//! Topic detector — keyword-table scan
//!
//! Scans pasted text against each topic's keyword alternation and returns
//! every topic that matches. Topics are not mutually exclusive; a paste
//! about merge sort will routinely hit `loops`, `arrays`, and `algorithms`
//! at once. A single keyword occurrence is enough — no weighting.

use crate::catalog::Topic;

/// The set of topics the code relates to, in fixed table order.
pub fn detect_topics(code: &str) -> Vec<Topic> {
    Topic::ALL
        .iter()
        .copied()
        .filter(|topic| topic.keyword_pattern().is_match(code))
        .collect()
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_detects_nothing() {
        assert!(detect_topics("").is_empty());
    }

    #[test]
    fn test_loop_keyword_detects_loops() {
        let topics = detect_topics("while (count < 5) { count++; }");
        assert!(topics.contains(&Topic::Loops));
    }

    #[test]
    fn test_multiple_topics_can_match() {
        let code = "recursive merge sort over an array";
        let topics = detect_topics(code);
        assert!(topics.contains(&Topic::Arrays));
        assert!(topics.contains(&Topic::Recursion));
        assert!(topics.contains(&Topic::Algorithms));
    }

    #[test]
    fn test_case_insensitive() {
        let topics = detect_topics("FACTORIAL(5)");
        assert!(topics.contains(&Topic::Recursion));
    }

    #[test]
    fn test_output_follows_table_order() {
        let code = "algorithm to iterate a recursive array";
        let topics = detect_topics(code);
        assert_eq!(
            topics,
            vec![Topic::Loops, Topic::Arrays, Topic::Recursion, Topic::Algorithms]
        );
    }

    #[test]
    fn test_substring_keywords_match_inside_words() {
        // "for" inside "format" still counts; the table matches raw
        // substrings, not word boundaries
        let topics = detect_topics("format()");
        assert!(topics.contains(&Topic::Loops));
    }
}
