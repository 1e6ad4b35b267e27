//! Scripted assistant — deterministic string-matching responder
//!
//! The reply engine behind the application's help panel. Not an inference
//! system: replies come from fixed branches keyed on substrings of the
//! learner's message, optionally enriched with a shallow scan of their
//! current editor code. One branch carries a learning-module redirect that
//! the shell is expected to act on. Rendering, typing animation, and
//! message history are shell concerns and do not live here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LOOP_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for\s*\(|while\s*\(").expect("loop shape must compile"));

static FUNCTION_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"function\s+\w+|const\s+\w+\s*=\s*\(").expect("function shape must compile")
});

static ARRAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*\]").expect("array shape must compile"));

/// A canned reply, possibly carrying a module redirect for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Markdown-ish reply text.
    pub content: String,
    /// Learning module the shell should navigate to, when set.
    pub redirect_module: Option<String>,
}

impl AssistantReply {
    fn plain(content: String) -> Self {
        Self {
            content,
            redirect_module: None,
        }
    }
}

/// Produce the scripted reply for a learner message and their current code.
///
/// Branches are checked in fixed order on the lowercased message; the first
/// hit wins. Always returns a reply.
pub fn respond(message: &str, code: &str) -> AssistantReply {
    let lower = message.to_lowercase();

    if lower.contains("explain") && !code.is_empty() {
        return AssistantReply::plain(format!(
            "Looking at your code, here's what I notice:\n\n{}\n\nWould you like me to explain any specific part in more detail?",
            analyze_code(code)
        ));
    }

    if lower.contains("bug") || lower.contains("issue") {
        return AssistantReply::plain(format!(
            "Let me analyze your code for potential issues...\n\n{}\n\nWould you like help fixing any of these?",
            find_issues(code)
        ));
    }

    if lower.contains("improve") || lower.contains("better") {
        return AssistantReply::plain(format!(
            "Here are some suggestions to improve your code:\n\n{}\n\nShall I show you how to implement any of these?",
            suggest_improvements(code)
        ));
    }

    if lower.contains("loop") || lower.contains("confused") || lower.contains("don't understand") {
        return AssistantReply {
            content: "Great question about loops! I notice you might benefit from our learning module.\n\n\
                      **For Loop**: Best when you know how many iterations\n\
                      **While Loop**: Best when the condition is dynamic\n\n\
                      🎯 **Redirecting you to the Loops module** for a deeper understanding!"
                .to_string(),
            redirect_module: Some("loops".to_string()),
        };
    }

    if lower.contains("array") {
        return AssistantReply::plain(
            "Arrays are fundamental! Here's a quick overview:\n\n\
             **Creating**: `const arr = [1, 2, 3]`\n\
             **Accessing**: `arr[0]` (first element)\n\
             **Methods**: `.push()`, `.map()`, `.filter()`, `.reduce()`\n\n\
             💡 Click **\"Learn Arrays\"** below to master this topic!"
                .to_string(),
        );
    }

    AssistantReply::plain(format!(
        "I understand you're asking about \"{}\". Based on your current code context, I'd suggest:\n\n\
         1. Break down the problem into smaller steps\n\
         2. Test each part independently\n\
         3. Use console.log() to debug\n\n\
         Is there a specific part you'd like me to elaborate on?",
        message
    ))
}

/// One bullet per structural feature found in the code.
fn analyze_code(code: &str) -> String {
    let mut analysis = String::new();

    if FUNCTION_SHAPE.is_match(code) {
        analysis.push_str("• You have function definitions - good for organizing code!\n");
    }
    if LOOP_SHAPE.is_match(code) {
        analysis.push_str("• I see loops being used for iteration\n");
    }
    if ARRAY_SHAPE.is_match(code) {
        analysis.push_str("• Arrays are being used to store collections\n");
    }
    if analysis.is_empty() {
        analysis.push_str("• The code appears to be a starting point. Try adding some logic!");
    }

    analysis
}

/// Shallow lint for the handful of beginner mistakes the assistant knows.
fn find_issues(code: &str) -> String {
    let mut issues: Vec<&str> = Vec::new();

    if code.contains("var ") {
        issues.push("⚠️ Consider using `const` or `let` instead of `var` for better scoping");
    }
    if code.contains("==") && !code.contains("===") {
        issues.push("⚠️ Use `===` for strict equality checks");
    }
    if code.trim().is_empty() {
        issues.push("📝 Your code editor is empty. Start by writing some code!");
    }

    if issues.is_empty() {
        "✅ No obvious issues found! Your code looks clean.".to_string()
    } else {
        issues.join("\n")
    }
}

fn suggest_improvements(code: &str) -> String {
    let mut suggestions: Vec<&str> = Vec::new();

    if code.contains("console.log") {
        suggestions.push("💡 Consider using a logging library for production");
    }
    if code.len() > 50 && !code.contains("//") {
        suggestions.push("💡 Add comments to explain complex logic");
    }
    suggestions.push("💡 Consider breaking large functions into smaller ones");
    suggestions.push("💡 Use descriptive variable names for clarity");

    suggestions.join("\n")
}

// ─── Tests ──────────────────────────────────────────────────────────
