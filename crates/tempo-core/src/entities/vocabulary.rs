use serde::{Deserialize, Serialize};

/// Ordered set of allowed labels for one attribute.
///
/// Labels are unique and non-empty; construction drops blanks and later
/// duplicates while keeping store-declared order. An empty vocabulary means
/// the attribute cannot be classified this run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if label.is_empty() || unique.contains(&label) {
                continue;
            }
            unique.push(label);
        }
        Self { labels: unique }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.labels
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_order_and_drops_blanks_and_duplicates() {
        let vocab = Vocabulary::new(["Work", "", "Study", "Work", "Rest"]);
        assert_eq!(vocab.labels(), ["Work", "Study", "Rest"]);
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("Study"));
        assert!(!vocab.contains("study"));
    }

    #[test]
    fn empty_vocabulary_is_valid() {
        let vocab = Vocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab, Vocabulary::default());
    }

    #[test]
    fn serializes_as_plain_list() {
        let vocab: Vocabulary = ["工作", "学习"].into_iter().collect();
        assert_eq!(serde_json::to_string(&vocab).unwrap(), r#"["工作","学习"]"#);
    }

    #[test]
    fn deserializing_drops_blanks_and_duplicates() {
        let vocab: Vocabulary = serde_json::from_str(r#"["Work","","Work","Study"]"#).unwrap();
        assert_eq!(vocab.labels(), ["Work", "Study"]);
    }
}
