use serde::{Deserialize, Serialize};

/// A single user review from `reviews/<appid>.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Review body
    #[serde(default)]
    pub review: String,

    /// Whether the reviewer recommends the game
    #[serde(default)]
    pub voted_up: bool,

    /// Number of "helpful" votes, when the export carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes_helpful: Option<u64>,
}

impl Review {
    pub fn new(review: impl Into<String>, voted_up: bool, votes_helpful: Option<u64>) -> Self {
        Self {
            review: review.into(),
            voted_up,
            votes_helpful,
        }
    }
}

/// Both layouts of a per-game review file.
///
/// The split layout needs both keys; a file with only one of them is not a
/// review file the dashboard understands.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReviewFile {
    Split {
        positive: Vec<Review>,
        negative: Vec<Review>,
    },
    Flat(Vec<Review>),
}

impl ReviewFile {
    /// Flattens the file into one list, positive reviews first
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            ReviewFile::Split { mut positive, negative } => {
                positive.extend(negative);
                positive
            }
            ReviewFile::Flat(reviews) => reviews,
        }
    }
}

impl Default for ReviewFile {
    fn default() -> Self {
        ReviewFile::Flat(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_split_layout_flattens_positive_first() {
        let file: ReviewFile = serde_json::from_value(json!({
            "positive": [{ "review": "great", "voted_up": true, "votes_helpful": 3 }],
            "negative": [{ "review": "bad", "voted_up": false }]
        }))
        .unwrap();

        let reviews = file.into_reviews();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0], Review::new("great", true, Some(3)));
        assert_eq!(reviews[1], Review::new("bad", false, None));
    }

    #[test]
    fn test_flat_layout() {
        let file: ReviewFile = serde_json::from_value(json!([
            { "review": "ok", "voted_up": true }
        ]))
        .unwrap();
        assert_eq!(file.into_reviews(), vec![Review::new("ok", true, None)]);
    }

    #[test]
    fn test_half_split_layout_is_rejected() {
        let result = serde_json::from_value::<ReviewFile>(json!({ "positive": [] }));
        assert!(result.is_err());
    }
}
