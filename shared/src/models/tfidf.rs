use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reviews::Sentiment;

/// `tfidf_results.json`: appid key to the keyword lists for that game
pub type TfidfMap = HashMap<String, TfidfResult>;

/// One keyword with its TF-IDF weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub word: String,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Distinctive words of a game's recommended and not-recommended reviews
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TfidfResult {
    #[serde(default)]
    pub recommended: Vec<Keyword>,
    #[serde(default)]
    pub not_recommended: Vec<Keyword>,
}

impl TfidfResult {
    pub fn keywords(&self, sentiment: Sentiment) -> &[Keyword] {
        match sentiment {
            Sentiment::Recommended => &self.recommended,
            Sentiment::NotRecommended => &self.not_recommended,
        }
    }
}
