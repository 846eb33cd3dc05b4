//! Resolution of free-text model answers against a vocabulary.
//!
//! Three tiers are tried in order, and the first tier with any hit wins:
//!
//! 1. **Exact**: the trimmed answer equals a label.
//! 2. **Case-insensitive**: equal after lowercasing both sides.
//! 3. **Partial**: the lowercased answer contains a label or a label contains
//!    the answer.
//!
//! Within a tier the first label in vocabulary order wins. This tie-break is
//! behavior-relevant at tier 3, where an answer such as `"Work and Study"`
//! contains several labels.

use serde::Serialize;
use tempo_core::entities::Vocabulary;

/// Which matching tier produced a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    CaseInsensitive,
    Partial,
}

impl MatchTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case-insensitive",
            Self::Partial => "partial",
        }
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vocabulary label chosen for a raw answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMatch<'v> {
    pub label: &'v str,
    pub tier: MatchTier,
}

/// Resolve `raw` to a label of `vocabulary`, or `None` if no tier matches.
///
/// An answer that is blank after trimming never matches.
#[must_use]
pub fn resolve_label<'v>(raw: &str, vocabulary: &'v Vocabulary) -> Option<LabelMatch<'v>> {
    let answer = raw.trim();
    if answer.is_empty() {
        return None;
    }

    if let Some(label) = vocabulary.iter().find(|label| *label == answer) {
        return Some(LabelMatch {
            label,
            tier: MatchTier::Exact,
        });
    }

    let answer_lower = answer.to_lowercase();
    let lowered: Vec<(&str, String)> = vocabulary
        .iter()
        .map(|label| (label, label.to_lowercase()))
        .collect();

    if let Some((label, _)) = lowered.iter().find(|(_, lower)| *lower == answer_lower) {
        return Some(LabelMatch {
            label: *label,
            tier: MatchTier::CaseInsensitive,
        });
    }

    lowered
        .iter()
        .find(|(_, lower)| answer_lower.contains(lower.as_str()) || lower.contains(&answer_lower))
        .map(|(label, _)| LabelMatch {
            label: *label,
            tier: MatchTier::Partial,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn work_study() -> Vocabulary {
        Vocabulary::new(["Work", "Study"])
    }

    #[rstest]
    #[case::exact("Work", "Work", MatchTier::Exact)]
    #[case::exact_after_trim("  Study\n", "Study", MatchTier::Exact)]
    #[case::lowercase("work", "Work", MatchTier::CaseInsensitive)]
    #[case::uppercase("STUDY", "Study", MatchTier::CaseInsensitive)]
    #[case::answer_contains_label("I think Work is correct", "Work", MatchTier::Partial)]
    #[case::label_contains_answer("Stud", "Study", MatchTier::Partial)]
    #[case::first_in_order_wins("Study or Work", "Work", MatchTier::Partial)]
    fn resolves(#[case] raw: &str, #[case] label: &str, #[case] tier: MatchTier) {
        let vocabulary = work_study();
        assert_eq!(
            resolve_label(raw, &vocabulary),
            Some(LabelMatch { label, tier })
        );
    }

    #[rstest]
    #[case::unrelated("Leisure")]
    #[case::empty("")]
    #[case::blank("   ")]
    fn unresolved(#[case] raw: &str) {
        assert_eq!(resolve_label(raw, &work_study()), None);
    }

    #[test]
    fn empty_vocabulary_never_matches() {
        assert_eq!(resolve_label("Work", &Vocabulary::default()), None);
    }

    #[test]
    fn exact_beats_earlier_case_insensitive_label() {
        let vocabulary = Vocabulary::new(["work", "Work"]);
        let resolved = resolve_label("Work", &vocabulary).unwrap();
        assert_eq!(resolved.label, "Work");
        assert_eq!(resolved.tier, MatchTier::Exact);
    }

    #[test]
    fn case_insensitive_beats_earlier_partial_label() {
        let vocabulary = Vocabulary::new(["Deep Work", "Work"]);
        let resolved = resolve_label("WORK", &vocabulary).unwrap();
        assert_eq!(resolved.label, "Work");
        assert_eq!(resolved.tier, MatchTier::CaseInsensitive);
    }

    #[test]
    fn cjk_labels_match_by_containment() {
        let vocabulary = Vocabulary::new(["工作", "学习", "娱乐"]);
        let resolved = resolve_label("分类：学习", &vocabulary).unwrap();
        assert_eq!(resolved.label, "学习");
        assert_eq!(resolved.tier, MatchTier::Partial);
    }
}
