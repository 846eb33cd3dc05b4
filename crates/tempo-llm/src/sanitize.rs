//! Heuristic cleanup of model answers.
//!
//! Reasoning models wrap or precede their final answer with `<think>` blocks
//! and prose. [`sanitize_response`] strips markup and, when the remainder still
//! reads like an explanation, recovers the last terse line.

use std::sync::LazyLock;

use regex::Regex;

/// Closed reasoning blocks, possibly spanning lines.
static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid regex"));

/// Any remaining XML-like tag.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Answers longer than this many characters are treated as explanations.
const MAX_ANSWER_CHARS: usize = 50;

/// A recovered line must be shorter than this many characters.
const MAX_LINE_CHARS: usize = 20;

/// Words that mark an answer as explanatory.
const EXPLANATORY_WORDS: [&str; 5] = ["step", "analyze", "break", "classify", "category"];

/// Words that disqualify a candidate line.
const REJECTED_LINE_WORDS: [&str; 3] = ["step", "analyze", "break"];

/// Clean a raw model answer down to its label-bearing text.
///
/// Pure and network-free. Returns an empty string when nothing is left.
#[must_use]
pub fn sanitize_response(raw: &str) -> String {
    let mut cleaned = raw.trim().to_string();

    if cleaned.contains("<think>") {
        cleaned = THINK_BLOCK.replace_all(&cleaned, "").trim().to_string();
    }
    cleaned = TAG.replace_all(&cleaned, "").trim().to_string();

    if looks_explanatory(&cleaned) {
        if let Some(line) = cleaned.lines().rev().map(str::trim).find(|l| is_terse_line(l)) {
            cleaned = line.to_string();
        }
    }

    cleaned
}

fn looks_explanatory(text: &str) -> bool {
    if text.chars().count() > MAX_ANSWER_CHARS {
        return true;
    }
    let lower = text.to_lowercase();
    EXPLANATORY_WORDS.iter().any(|word| lower.contains(word))
}

fn is_terse_line(line: &str) -> bool {
    if line.is_empty() || line.chars().count() >= MAX_LINE_CHARS {
        return false;
    }
    let lower = line.to_lowercase();
    !REJECTED_LINE_WORDS.iter().any(|word| lower.contains(word))
}
