use std::collections::HashSet;

use log::debug;

use crate::models::game::{AppId, Game};
use crate::models::media::{HeaderMap, Wordcloud, WordcloudMap};
use crate::tags::{GameTag, GameTagMap};

/// Drops repeated appids, keeping the first occurrence and the original order
pub fn dedupe_by_appid(games: Vec<Game>) -> Vec<Game> {
    let mut seen = HashSet::with_capacity(games.len());
    games.into_iter().filter(|game| seen.insert(game.appid)).collect()
}

/// Everything the list view joins on appid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    games: Vec<Game>,
    headers: HeaderMap,
    wordclouds: WordcloudMap,
    genres: Vec<String>,
    game_tags: GameTagMap,
}

impl Catalog {
    pub fn new(
        games: Vec<Game>,
        headers: HeaderMap,
        wordclouds: WordcloudMap,
        genres: Vec<String>,
        game_tags: GameTagMap,
    ) -> Self {
        let total = games.len();
        let games = dedupe_by_appid(games);
        if games.len() != total {
            debug!("Dropped {} duplicate catalog entries", total - games.len());
        }
        Self {
            games,
            headers,
            wordclouds,
            genres,
            game_tags,
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Genre picker options, as listed in `genres.json`
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn game(&self, appid: AppId) -> Option<&Game> {
        self.games.iter().find(|game| game.appid == appid)
    }

    pub fn header(&self, appid: AppId) -> Option<&str> {
        self.headers.get(&appid.key()).map(String::as_str)
    }

    pub fn wordcloud(&self, appid: AppId) -> Option<&Wordcloud> {
        self.wordclouds.get(&appid.key())
    }

    pub fn tags(&self, appid: AppId) -> Option<&GameTag> {
        self.game_tags.get(&appid.key())
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn game(appid: u64, name: &str) -> Game {
        Game::new(appid, name, None, &[])
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let games = vec![game(1, "first"), game(2, "other"), game(1, "second")];
        let deduped = dedupe_by_appid(games);

        let names: Vec<&str> = deduped.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["first", "other"]);
    }

    #[test]
    fn test_catalog_lookups() {
        let mut headers = HeaderMap::new();
        headers.insert("570".to_string(), "https://cdn/570.jpg".to_string());
        let mut tags = GameTagMap::new();
        tags.insert(
            "570".to_string(),
            GameTag {
                tags: vec!["Community".to_string()],
                ..GameTag::default()
            },
        );

        let catalog = Catalog::new(
            vec![game(570, "Dota 2"), game(570, "Dota 2 (dup)"), game(730, "CS2")],
            headers,
            WordcloudMap::new(),
            vec!["Action".to_string()],
            tags,
        );

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.game(AppId(570)).map(|g| g.name.as_str()), Some("Dota 2"));
        assert_eq!(catalog.header(AppId(570)), Some("https://cdn/570.jpg"));
        assert_eq!(catalog.header(AppId(730)), None);
        assert!(catalog.tags(AppId(570)).is_some());
        assert!(catalog.wordcloud(AppId(570)).is_none());
        assert_eq!(catalog.genres(), &["Action".to_string()]);
    }

    proptest! {
        #[test]
        fn prop_dedupe_is_unique_and_ordered(ids in proptest::collection::vec(0u64..20, 0..60)) {
            let games: Vec<Game> = ids.iter().enumerate()
                .map(|(i, id)| game(*id, &i.to_string()))
                .collect();
            let deduped = dedupe_by_appid(games);

            let mut seen = HashSet::new();
            for g in &deduped {
                prop_assert!(seen.insert(g.appid));
                let first_index = ids.iter().position(|id| *id == g.appid.0).unwrap();
                prop_assert_eq!(g.name.clone(), first_index.to_string());
            }
            let distinct: HashSet<u64> = ids.iter().copied().collect();
            prop_assert_eq!(deduped.len(), distinct.len());
        }
    }
}
