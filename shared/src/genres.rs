use std::collections::BTreeSet;

use crate::models::game::Game;

/// Every genre used by at least one game, sorted
pub fn collect_genres(games: &[Game]) -> BTreeSet<String> {
    games
        .iter()
        .flat_map(|game| game.genres.iter().cloned())
        .collect()
}

/// Genres games use that the genre list does not offer
pub fn missing_genres<'a>(used: &'a BTreeSet<String>, listed: &[String]) -> Vec<&'a str> {
    used.iter()
        .filter(|genre| !listed.contains(genre))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_and_diff() {
        let games = vec![
            Game::new(1u64, "a", None, &["RPG", "Action"]),
            Game::new(2u64, "b", None, &["Action", "Indie"]),
            Game::new(3u64, "c", None, &[]),
        ];
        let used = collect_genres(&games);
        assert_eq!(used.iter().map(String::as_str).collect::<Vec<_>>(), vec!["Action", "Indie", "RPG"]);

        let listed = vec!["Action".to_string(), "Sports".to_string()];
        assert_eq!(missing_genres(&used, &listed), vec!["Indie", "RPG"]);
    }
}
