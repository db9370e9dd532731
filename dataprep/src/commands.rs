use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use log::{info, warn};
use shared::datasets::{
    decode_games, decode_genres, decode_headers, decode_reviews, decode_tfidf, decode_wordclouds,
    GAMES_FILE, GAME_TAGS_FILE, GENRES_FILE, HEADERS_FILE, TFIDF_FILE, WORDCLOUDS_FILE,
};
use shared::genres::{collect_genres, missing_genres};
use shared::tags::{normalize_tag_name, GameTag, GameTagsFile};

use crate::store::DataDir;

/// Outcome of `sync-genres`
#[derive(Debug, Clone, PartialEq)]
pub struct GenreSync {
    /// Distinct genres used by the catalog
    pub used: usize,
    /// Used genres absent from the old genre list
    pub missing: Vec<String>,
    pub written: bool,
}

/// Rebuilds `genres.json` from the genres the catalog actually uses
pub fn sync_genres(dir: &DataDir, dry_run: bool) -> Result<GenreSync> {
    let games = decode_games(&dir.read_text(GAMES_FILE)?).context("Failed to parse games catalog")?;
    let used = collect_genres(&games);
    info!("{} genres used by {} games", used.len(), games.len());

    let listed = match dir.read_optional(GENRES_FILE)? {
        Some(body) => decode_genres(&body).context("Failed to parse genre list")?,
        None => Vec::new(),
    };

    let missing: Vec<String> = missing_genres(&used, &listed).into_iter().map(str::to_string).collect();
    if missing.is_empty() {
        info!("Genre list covers every genre in the catalog");
    } else {
        for genre in &missing {
            warn!("Genre missing from {}: {}", GENRES_FILE, genre);
        }
    }

    let written = !dry_run;
    if written {
        let sorted: Vec<&String> = used.iter().collect();
        dir.write_json(GENRES_FILE, &sorted)?;
        info!("Wrote {} genres to {}", sorted.len(), GENRES_FILE);
    }

    Ok(GenreSync {
        used: used.len(),
        missing,
        written,
    })
}

/// Outcome of `normalize-tags`
#[derive(Debug, Clone, PartialEq)]
pub struct TagNormalization {
    pub entries: usize,
    /// Tag names and score keys that were renamed
    pub renamed: usize,
    pub written: bool,
}

fn count_renames(entry: &GameTag) -> usize {
    entry
        .tags
        .iter()
        .chain(entry.scores.keys())
        .filter(|name| normalize_tag_name(name) != **name)
        .count()
}

/// Rewrites `game_tags.json` keyed by appid with display tag names
pub fn normalize_tags(dir: &DataDir, dry_run: bool) -> Result<TagNormalization> {
    let file: GameTagsFile = serde_json::from_str(&dir.read_text(GAME_TAGS_FILE)?)
        .context("Failed to parse game tags")?;

    let renamed = match &file {
        GameTagsFile::Keyed(map) => map.values().map(count_renames).sum(),
        GameTagsFile::List(entries) => entries
            .iter()
            .filter(|entry| entry.appid.is_some())
            .map(count_renames)
            .sum(),
    };

    let map = file.into_map();
    info!("{} tag entries, {} names renamed", map.len(), renamed);

    let written = !dry_run;
    if written {
        dir.write_json(GAME_TAGS_FILE, &map)?;
        info!("Wrote normalized {}", GAME_TAGS_FILE);
    }

    Ok(TagNormalization {
        entries: map.len(),
        renamed,
        written,
    })
}

/// Outcome of `check`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub games: usize,
    pub duplicate_appids: usize,
    pub games_without_header: usize,
    pub games_without_wordcloud: usize,
    pub genres_missing_from_list: usize,
    pub tagged_games: usize,
    pub review_files: usize,
    pub unreadable_review_files: usize,
    /// `None` when there is no TF-IDF file
    pub tfidf_games: Option<usize>,
}

/// Loads every dataset with the dashboard's own decoders and reports gaps
pub fn check(dir: &DataDir) -> Result<CheckReport> {
    let games = decode_games(&dir.read_text(GAMES_FILE)?).context("Failed to parse games catalog")?;
    let headers = decode_headers(&dir.read_text(HEADERS_FILE)?).context("Failed to parse header map")?;
    let wordclouds = decode_wordclouds(&dir.read_text(WORDCLOUDS_FILE)?).context("Failed to parse wordcloud map")?;
    let genres = decode_genres(&dir.read_text(GENRES_FILE)?).context("Failed to parse genre list")?;
    let tags = shared::datasets::decode_game_tags(&dir.read_text(GAME_TAGS_FILE)?)
        .context("Failed to parse game tags")?;

    let mut report = CheckReport {
        games: games.len(),
        tagged_games: tags.len(),
        ..CheckReport::default()
    };

    let mut seen = HashSet::new();
    for game in &games {
        if !seen.insert(game.appid) {
            report.duplicate_appids += 1;
            continue;
        }
        let key = game.appid.key();
        if !headers.contains_key(&key) {
            report.games_without_header += 1;
        }
        if !wordclouds.contains_key(&key) {
            report.games_without_wordcloud += 1;
        }
    }

    let used = collect_genres(&games);
    report.genres_missing_from_list = missing_genres(&used, &genres).len();

    for (appid, path) in dir.review_files()? {
        report.review_files += 1;
        let body = fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?;
        if let Err(e) = decode_reviews(&body) {
            warn!("Review file for {} is unreadable: {}", appid, e);
            report.unreadable_review_files += 1;
        }
    }

    report.tfidf_games = match dir.read_optional(TFIDF_FILE)? {
        Some(body) => Some(decode_tfidf(&body).context("Failed to parse TF-IDF results")?.len()),
        None => None,
    };

    info!(
        "{} games ({} duplicate), {} without header, {} without wordcloud",
        report.games, report.duplicate_appids, report.games_without_header, report.games_without_wordcloud
    );
    info!(
        "{} tagged games, {} review files ({} unreadable), {} genres missing from list",
        report.tagged_games, report.review_files, report.unreadable_review_files, report.genres_missing_from_list
    );
    match report.tfidf_games {
        Some(count) => info!("TF-IDF results for {} games", count),
        None => warn!("No {} found", TFIDF_FILE),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn data_dir() -> (TempDir, DataDir) {
        let tmp = TempDir::new().unwrap();
        let dir = DataDir::new(tmp.path());
        (tmp, dir)
    }

    fn write(dir: &DataDir, file: &str, value: Value) {
        if let Some(parent) = dir.path(file).parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(dir.path(file), value.to_string()).unwrap();
    }

    fn read(dir: &DataDir, file: &str) -> Value {
        serde_json::from_str(&fs::read_to_string(dir.path(file)).unwrap()).unwrap()
    }

    fn seed_catalog(dir: &DataDir) {
        write(dir, GAMES_FILE, json!([
            { "appid": 1, "name": "A", "price": "¥ 100", "genres": ["RPG", "Action"] },
            { "appid": 2, "name": "B", "price": null, "genres": "Indie, アドベンチャー" },
            { "appid": 1, "name": "A again", "genres": [] }
        ]));
    }

    #[test]
    fn test_sync_genres_rewrites_sorted_list() {
        let (_tmp, dir) = data_dir();
        seed_catalog(&dir);
        write(&dir, GENRES_FILE, json!(["Action", "Sports"]));

        let result = sync_genres(&dir, false).unwrap();
        assert_eq!(result.used, 4);
        assert_eq!(result.missing, vec!["Indie", "RPG", "アドベンチャー"]);
        assert!(result.written);

        assert_eq!(read(&dir, GENRES_FILE), json!(["Action", "Indie", "RPG", "アドベンチャー"]));
        let raw = fs::read_to_string(dir.path(GENRES_FILE)).unwrap();
        assert!(raw.contains("アドベンチャー"));
    }

    #[test]
    fn test_sync_genres_dry_run_leaves_file() {
        let (_tmp, dir) = data_dir();
        seed_catalog(&dir);

        let result = sync_genres(&dir, true).unwrap();
        assert!(!result.written);
        assert_eq!(result.missing.len(), 4);
        assert!(!dir.path(GENRES_FILE).exists());
    }

    #[test]
    fn test_normalize_tags_from_list_layout() {
        let (_tmp, dir) = data_dir();
        write(&dir, GAME_TAGS_FILE, json!([
            { "appid": 10, "tags": ["game_mechanics", "Story"], "scores": { "game_mechanics": 0.9 } },
            { "tags": ["music"] }
        ]));

        let result = normalize_tags(&dir, false).unwrap();
        assert_eq!(result, TagNormalization { entries: 1, renamed: 2, written: true });

        let written = read(&dir, GAME_TAGS_FILE);
        assert_eq!(written["10"]["tags"], json!(["Game Mechanics", "Story"]));
        assert_eq!(written["10"]["scores"], json!({ "Game Mechanics": 0.9 }));
        assert_eq!(written["10"]["appid"], json!(10));
    }

    #[test]
    fn test_check_reports_gaps() {
        let (_tmp, dir) = data_dir();
        seed_catalog(&dir);
        write(&dir, HEADERS_FILE, json!({ "1": "https://cdn/1.jpg" }));
        write(&dir, WORDCLOUDS_FILE, json!({}));
        write(&dir, GENRES_FILE, json!(["RPG", "Action", "Indie"]));
        write(&dir, GAME_TAGS_FILE, json!({ "1": { "tags": ["Story"] } }));
        write(&dir, "reviews/1.json", json!([{ "review": "ok", "voted_up": true }]));
        write(&dir, "reviews/2.json", json!({ "positive": [] }));
        write(&dir, "reviews/readme.json", json!({}));

        let report = check(&dir).unwrap();
        assert_eq!(
            report,
            CheckReport {
                games: 3,
                duplicate_appids: 1,
                games_without_header: 1,
                games_without_wordcloud: 2,
                genres_missing_from_list: 1,
                tagged_games: 1,
                review_files: 2,
                unreadable_review_files: 1,
                tfidf_games: None,
            }
        );
    }

    #[test]
    fn test_check_requires_catalog() {
        let (_tmp, dir) = data_dir();
        let err = check(&dir).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
