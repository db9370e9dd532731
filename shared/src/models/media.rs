use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `headers.json`: appid key to header image URL
pub type HeaderMap = HashMap<String, String>;

/// `wordclouds.json`: appid key to the pair of wordcloud images
pub type WordcloudMap = HashMap<String, Wordcloud>;

/// Wordcloud images rendered from positive and negative reviews
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wordcloud {
    #[serde(default)]
    pub positive: Option<String>,
    #[serde(default)]
    pub negative: Option<String>,
}

impl Wordcloud {
    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none()
    }
}
