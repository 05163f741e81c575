use serde::{Deserialize, Serialize};

use dass_core::models::Subscale;

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub subscale: Subscale,
    pub prompt: String,
}

/// Ordered response options shared by every question.
///
/// An option's score is its 0-based position, so the first label always
/// scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    labels: Vec<String>,
}

impl OptionSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Highest score an option can carry. `None` for an empty set.
    pub fn max_score(&self) -> Option<u32> {
        self.labels.len().checked_sub(1).map(|n| n as u32)
    }

    pub fn label(&self, score: u32) -> Option<&str> {
        self.labels.get(score as usize).map(String::as_str)
    }

    /// Score of the option with this label (case-insensitive).
    pub fn score_of(&self, label: &str) -> Option<u32> {
        let label = label.trim();
        self.labels
            .iter()
            .position(|l| l.eq_ignore_ascii_case(label))
            .map(|i| i as u32)
    }

    /// `(label, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i as u32))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// The ordered questions of an instrument together with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub options: OptionSet,
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Subscale tag of each question, in bank order.
    pub fn subscales(&self) -> impl Iterator<Item = Subscale> + '_ {
        self.questions.iter().map(|q| q.subscale)
    }

    /// Number of questions tagged with `subscale`.
    pub fn count_for(&self, subscale: Subscale) -> usize {
        self.subscales().filter(|s| *s == subscale).count()
    }
}
