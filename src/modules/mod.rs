//! Learning-module registry
//!
//! The fixed set of learning modules that comprehension questions route to.
//! The guard only ever uses module ids as opaque routing keys; this registry
//! is what makes those keys resolvable, and it carries the display metadata
//! the application shell needs. Also hosts the multiple-choice quiz grader
//! for the modules' built-in quizzes. No progress tracking lives here.

use serde::Serialize;

// ─── Registry ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// A unit of learning content, referenced by id from generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningModule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub difficulty: Difficulty,
}

/// Every module the engine can route to.
pub const MODULES: [LearningModule; 4] = [
    LearningModule {
        id: "loops",
        title: "Loops & Iteration",
        description: "Master for loops, while loops, and iteration patterns",
        icon: "🔄",
        difficulty: Difficulty::Beginner,
    },
    LearningModule {
        id: "arrays",
        title: "Arrays & Data Structures",
        description: "Learn to store and manipulate collections of data",
        icon: "📊",
        difficulty: Difficulty::Beginner,
    },
    LearningModule {
        id: "recursion",
        title: "Recursion",
        description: "Understand functions that call themselves",
        icon: "🔁",
        difficulty: Difficulty::Intermediate,
    },
    LearningModule {
        id: "algorithms",
        title: "Algorithms & Patterns",
        description: "Learn common coding patterns and problem-solving techniques",
        icon: "⚡",
        difficulty: Difficulty::Advanced,
    },
];

/// Look a module up by its routing key.
pub fn find_module(id: &str) -> Option<&'static LearningModule> {
    MODULES.iter().find(|m| m.id == id)
}

pub fn module_exists(id: &str) -> bool {
    find_module(id).is_some()
}

// ─── Quiz Grading ───────────────────────────────────────────────────

/// A multiple-choice question from a module quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the correct choice.
    pub correct_answer: usize,
    pub explanation: &'static str,
}

/// Result of grading one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub percent: f64,
}

/// Grade answers position-by-position against the quiz questions.
///
/// Total over mismatched lengths: missing answers count as wrong, extra
/// answers are ignored. An empty quiz scores 0%.
pub fn grade_quiz(questions: &[QuizQuestion], answers: &[usize]) -> QuizScore {
    let total = questions.len();
    let correct = questions
        .iter()
        .zip(answers.iter())
        .filter(|(q, &a)| q.correct_answer == a)
        .count();
    let percent = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };

    QuizScore {
        correct,
        total,
        percent,
    }
}

/// The for-loop module quiz.
pub const FOR_LOOP_QUIZ: [QuizQuestion; 2] = [
    QuizQuestion {
        id: "q1",
        question: "What does i++ do in a for loop?",
        options: &[
            "Decreases i by 1",
            "Increases i by 1",
            "Multiplies i by 2",
            "Sets i to 0",
        ],
        correct_answer: 1,
        explanation: "i++ is shorthand for i = i + 1, which increases i by 1 after each iteration.",
    },
    QuizQuestion {
        id: "q2",
        question: "How many times will this loop run? for(let i = 0; i < 3; i++)",
        options: &["2 times", "3 times", "4 times", "Infinite times"],
        correct_answer: 1,
        explanation: "The loop runs for i = 0, 1, 2 (3 times total) and stops when i becomes 3.",
    },
];

/// The recursion module quiz.
pub const RECURSION_QUIZ: [QuizQuestion; 1] = [QuizQuestion {
    id: "rq1",
    question: "What happens if a recursive function has no base case?",
    options: &[
        "It returns undefined",
        "It runs forever (stack overflow)",
        "It returns 0",
        "It throws a syntax error",
    ],
    correct_answer: 1,
    explanation: "Without a base case, the function keeps calling itself until the call stack overflows.",
}];

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::QUESTION_CATALOG;

    #[test]
    fn test_registry_ids_unique() {
        let mut ids: Vec<_> = MODULES.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MODULES.len());
    }

    #[test]
    fn test_every_catalog_module_id_resolves() {
        for template in QUESTION_CATALOG {
            assert!(
                module_exists(template.module_id),
                "question {} routes to unknown module {}",
                template.id,
                template.module_id
            );
        }
    }

    #[test]
    fn test_find_module() {
        assert_eq!(find_module("recursion").unwrap().difficulty, Difficulty::Intermediate);
        assert!(find_module("calculus").is_none());
    }

    #[test]
    fn test_grade_perfect_quiz() {
        let score = grade_quiz(&FOR_LOOP_QUIZ, &[1, 1]);
        assert_eq!(score.correct, 2);
        assert_eq!(score.percent, 100.0);
    }

    #[test]
    fn test_grade_partial_quiz() {
        let score = grade_quiz(&FOR_LOOP_QUIZ, &[1, 0]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.percent, 50.0);
    }

    #[test]
    fn test_missing_answers_count_as_wrong() {
        let score = grade_quiz(&FOR_LOOP_QUIZ, &[1]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 2);
    }

    #[test]
    fn test_extra_answers_ignored() {
        let score = grade_quiz(&RECURSION_QUIZ, &[1, 3, 2]);
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 1);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let score = grade_quiz(&[], &[]);
        assert_eq!(score.percent, 0.0);
    }
}
