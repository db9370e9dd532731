//! File names and decoders for the static dataset directory.
//!
//! Required datasets fail loudly. Reviews and TF-IDF results are optional:
//! a missing or unreadable file decodes to an empty default.

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::game::{AppId, Game};
use crate::models::media::{HeaderMap, WordcloudMap};
use crate::models::review::{Review, ReviewFile};
use crate::models::tfidf::TfidfMap;
use crate::tags::{GameTagMap, GameTagsFile};

pub const GAMES_FILE: &str = "games_cleaned.json";
pub const HEADERS_FILE: &str = "headers.json";
pub const WORDCLOUDS_FILE: &str = "wordclouds.json";
pub const GENRES_FILE: &str = "genres.json";
pub const GAME_TAGS_FILE: &str = "game_tags.json";
pub const TFIDF_FILE: &str = "tfidf_results.json";

/// Relative path of a game's review file
pub fn review_file(appid: AppId) -> String {
    format!("reviews/{}.json", appid)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_games(body: &str) -> Result<Vec<Game>> {
    decode(body)
}

pub fn decode_headers(body: &str) -> Result<HeaderMap> {
    decode(body)
}

pub fn decode_wordclouds(body: &str) -> Result<WordcloudMap> {
    decode(body)
}

pub fn decode_genres(body: &str) -> Result<Vec<String>> {
    decode(body)
}

/// Accepts both layouts of `game_tags.json`
pub fn decode_game_tags(body: &str) -> Result<GameTagMap> {
    decode::<GameTagsFile>(body).map(GameTagsFile::into_map)
}

pub fn decode_reviews(body: &str) -> Result<Vec<Review>> {
    decode::<ReviewFile>(body).map(ReviewFile::into_reviews)
}

pub fn decode_tfidf(body: &str) -> Result<TfidfMap> {
    decode(body)
}

/// Reviews from an optional body; no body or a bad body gives no reviews
pub fn reviews_or_default(body: Option<&str>) -> Vec<Review> {
    match body.map(decode_reviews) {
        Some(Ok(reviews)) => reviews,
        Some(Err(e)) => {
            warn!("Ignoring unreadable review file: {}", e);
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// TF-IDF map from an optional body; no body or a bad body gives `None`
pub fn tfidf_or_default(body: Option<&str>) -> Option<TfidfMap> {
    match body.map(decode_tfidf) {
        Some(Ok(map)) => Some(map),
        Some(Err(e)) => {
            warn!("Ignoring unreadable TF-IDF results: {}", e);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharedError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_review_file_path() {
        assert_eq!(review_file(AppId(570)), "reviews/570.json");
    }

    #[test]
    fn test_required_dataset_errors_surface() {
        let err = decode_games("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, SharedError::Decode(_)));
    }

    #[test_log::test]
    fn test_optional_datasets_default() {
        assert!(reviews_or_default(None).is_empty());
        assert!(reviews_or_default(Some("<html>404</html>")).is_empty());
        assert!(tfidf_or_default(Some("not json")).is_none());
        assert!(tfidf_or_default(None).is_none());
    }

    #[test]
    fn test_optional_datasets_decode() {
        let reviews = reviews_or_default(Some(r#"{"positive": [{"review": "a", "voted_up": true}], "negative": []}"#));
        assert_eq!(reviews.len(), 1);

        let tfidf = tfidf_or_default(Some(
            r#"{"570": {"recommended": [{"word": "fun", "score": 0.4}], "not_recommended": []}}"#,
        ))
        .unwrap();
        assert_eq!(tfidf["570"].recommended[0].word, "fun");
    }

    #[test]
    fn test_genres_and_media_decode() {
        assert_eq!(decode_genres(r#"["Action", "RPG"]"#).unwrap().len(), 2);
        let headers = decode_headers(r#"{"10": "https://cdn/10.jpg"}"#).unwrap();
        assert_eq!(headers["10"], "https://cdn/10.jpg");
        let clouds = decode_wordclouds(r#"{"10": {"positive": "p.png"}}"#).unwrap();
        assert_eq!(clouds["10"].negative, None);
    }
}
