use futures::join;
use gloo_net::http::Request;
use log::{debug, warn};
use shared::datasets::{
    decode_game_tags, decode_games, decode_genres, decode_headers, decode_wordclouds, review_file,
    reviews_or_default, tfidf_or_default, GAMES_FILE, GAME_TAGS_FILE, GENRES_FILE, HEADERS_FILE,
    TFIDF_FILE, WORDCLOUDS_FILE,
};
use shared::{dedupe_by_appid, AppId, Catalog, Game, Review, SharedError, TfidfResult, Wordcloud};

use crate::api::cache::DATASET_CACHE;
use crate::api::data_url;

/// Fetches a dataset body through the in-memory cache
async fn fetch_text(path: &str) -> shared::Result<String> {
    let url = data_url(path);
    let request_url = url.clone();
    DATASET_CACHE
        .get_or_fetch(&url, || async move {
            let response = Request::get(&request_url)
                .send()
                .await
                .map_err(|e| SharedError::Fetch(format!("{}: {}", request_url, e)))?;

            response_error(&request_url, response.status())?;

            response
                .text()
                .await
                .map_err(|e| SharedError::Fetch(format!("{}: {}", request_url, e)))
        })
        .await
}

/// Maps a non-success HTTP status to an error
pub(crate) fn response_error(url: &str, status: u16) -> shared::Result<()> {
    match status {
        200..=299 => Ok(()),
        404 => Err(SharedError::NotFound(url.to_string())),
        _ => Err(SharedError::Fetch(format!("{}: HTTP {}", url, status))),
    }
}

/// Fetches and decodes a dataset the view cannot render without
async fn fetch_required<T>(path: &str, decode: fn(&str) -> shared::Result<T>) -> Result<T, String> {
    let body = fetch_text(path).await.map_err(|e| format!("Failed to load {}: {}", path, e))?;
    let value = decode(&body).map_err(|e| format!("Failed to parse {}: {}", path, e))?;
    debug!("Loaded {}", path);
    Ok(value)
}

/// Fetches a dataset the view can do without
async fn fetch_optional(path: &str) -> Option<String> {
    match fetch_text(path).await {
        Ok(body) => Some(body),
        Err(SharedError::NotFound(url)) => {
            debug!("No dataset at {}, using default", url);
            None
        }
        Err(e) => {
            warn!("Optional dataset unavailable, using default: {}", e);
            None
        }
    }
}

/// Loads the five datasets of the list view concurrently
pub async fn load_catalog() -> Result<Catalog, String> {
    debug!("Loading catalog datasets");

    let (games, headers, wordclouds, genres, game_tags) = join!(
        fetch_required(GAMES_FILE, decode_games),
        fetch_required(HEADERS_FILE, decode_headers),
        fetch_required(WORDCLOUDS_FILE, decode_wordclouds),
        fetch_required(GENRES_FILE, decode_genres),
        fetch_required(GAME_TAGS_FILE, decode_game_tags),
    );

    let catalog = Catalog::new(games?, headers?, wordclouds?, genres?, game_tags?);
    debug!("Catalog ready with {} games", catalog.len());
    Ok(catalog)
}

/// Everything the detail view shows for one game
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameDetailData {
    /// `None` when the catalog has no such appid
    pub game: Option<Game>,
    pub header: Option<String>,
    pub wordcloud: Option<Wordcloud>,
    pub reviews: Vec<Review>,
    pub tfidf: Option<TfidfResult>,
}

/// Loads the detail-view datasets concurrently. Reviews and TF-IDF results
/// fall back to empty defaults when they cannot be fetched or decoded.
pub async fn load_game_detail(appid: AppId) -> Result<GameDetailData, String> {
    debug!("Loading detail datasets for game {}", appid);

    let reviews_path = review_file(appid);
    let (games, headers, wordclouds, reviews, tfidf) = join!(
        fetch_required(GAMES_FILE, decode_games),
        fetch_required(HEADERS_FILE, decode_headers),
        fetch_required(WORDCLOUDS_FILE, decode_wordclouds),
        fetch_optional(&reviews_path),
        fetch_optional(TFIDF_FILE),
    );

    let key = appid.key();
    let game = dedupe_by_appid(games?).into_iter().find(|game| game.appid == appid);
    let header = headers?.remove(&key);
    let wordcloud = wordclouds?.remove(&key);
    let reviews = reviews_or_default(reviews.as_deref());
    let tfidf = tfidf_or_default(tfidf.as_deref()).and_then(|mut map| map.remove(&key));

    debug!("Game {}: found={}, {} reviews", appid, game.is_some(), reviews.len());
    Ok(GameDetailData {
        game,
        header,
        wordcloud,
        reviews,
        tfidf,
    })
}
