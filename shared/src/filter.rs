//! List-view filtering and sorting over the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::SharedError;
use crate::models::game::Game;
use crate::price::PriceBound;
use crate::tags::GameTag;

/// Ordering of the game grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceSort {
    /// Catalog order
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl PriceSort {
    pub const ALL: [PriceSort; 3] = [PriceSort::None, PriceSort::PriceAsc, PriceSort::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSort::None => "none",
            PriceSort::PriceAsc => "price-asc",
            PriceSort::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceSort::None => "ソートなし",
            PriceSort::PriceAsc => "価格: 安い順",
            PriceSort::PriceDesc => "価格: 高い順",
        }
    }
}

impl fmt::Display for PriceSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceSort {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| SharedError::Validation(format!("unknown sort mode '{}'", s)))
    }
}

/// Filter and sort state of the list view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub min_price: PriceBound,
    pub max_price: PriceBound,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub sort: PriceSort,
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

impl CatalogFilter {
    pub fn set_min_price_input(&mut self, input: &str) {
        self.min_price = PriceBound::new(input);
    }

    pub fn set_max_price_input(&mut self, input: &str) {
        self.max_price = PriceBound::new(input);
    }

    pub fn toggle_genre(&mut self, genre: &str) {
        toggle(&mut self.genres, genre);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag);
    }

    pub fn remove_genre(&mut self, genre: &str) {
        self.genres.retain(|g| g != genre);
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn clear(&mut self) {
        *self = CatalogFilter::default();
    }

    pub fn is_active(&self) -> bool {
        self.min_price.has_input() || self.max_price.has_input() || !self.genres.is_empty() || !self.tags.is_empty()
    }

    /// True when both bounds are set and nothing can satisfy them
    pub fn price_range_inverted(&self) -> bool {
        matches!((self.min_price.value(), self.max_price.value()), (Some(min), Some(max)) if min > max)
    }

    /// Predicate for one game. A game without a tag entry is never excluded by the tag filter.
    pub fn matches(&self, game: &Game, tags: Option<&GameTag>) -> bool {
        let price = game.price_value();
        if !self.min_price.admits_above(price) || !self.max_price.admits_below(price) {
            return false;
        }

        if !self.genres.is_empty() && !self.genres.iter().any(|g| game.genres.contains(g)) {
            return false;
        }

        if !self.tags.is_empty() {
            if let Some(tags) = tags {
                if !tags.has_any(&self.tags) {
                    return false;
                }
            }
        }

        true
    }

    /// Matching games in display order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Game> {
        let mut games: Vec<&Game> = catalog
            .games()
            .iter()
            .filter(|game| self.matches(game, catalog.tags(game.appid)))
            .collect();

        match self.sort {
            PriceSort::None => {}
            PriceSort::PriceAsc => games.sort_by_key(|game| game.price_value()),
            PriceSort::PriceDesc => games.sort_by(|a, b| b.price_value().cmp(&a.price_value())),
        }

        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::{HeaderMap, WordcloudMap};
    use crate::tags::GameTagMap;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    fn tagged(tags: &[&str]) -> GameTag {
        GameTag {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..GameTag::default()
        }
    }

    #[fixture]
    fn catalog() -> Catalog {
        let games = vec![
            Game::new(1u64, "Free Shooter", None, &["Action", "Free To Play"]),
            Game::new(2u64, "Indie Puzzle", Some("¥ 980"), &["Indie", "Puzzle"]),
            Game::new(3u64, "Big RPG", Some("¥ 7,980"), &["RPG", "Action"]),
            Game::new(4u64, "Cozy Sim", Some("¥ 980"), &["Simulation"]),
            Game::new(5u64, "Untagged Indie", Some("¥ 1,500"), &["Indie"]),
        ];
        let mut tags = GameTagMap::new();
        tags.insert("1".to_string(), tagged(&["Community", "Player Skill"]));
        tags.insert("2".to_string(), tagged(&["Story", "Music"]));
        tags.insert("3".to_string(), tagged(&["Story", "Graphics"]));
        tags.insert("4".to_string(), tagged(&["Immersion"]));
        Catalog::new(games, HeaderMap::new(), WordcloudMap::new(), Vec::new(), tags)
    }

    fn ids(games: &[&Game]) -> Vec<u64> {
        games.iter().map(|g| g.appid.0).collect()
    }

    #[rstest]
    fn test_no_filter_keeps_catalog_order(catalog: Catalog) {
        let filter = CatalogFilter::default();
        assert_eq!(ids(&filter.apply(&catalog)), vec![1, 2, 3, 4, 5]);
        assert!(!filter.is_active());
    }

    #[rstest]
    #[case("1000", "", vec![3, 5])]
    #[case("", "980", vec![1, 2, 4])]
    #[case("980", "1500", vec![2, 4, 5])]
    #[case("0", "0", vec![1])]
    #[case("980.5", "", vec![3, 5])]
    #[case("", "979.9", vec![1])]
    #[case("", "-1", vec![])]
    #[case("-5", "", vec![1, 2, 3, 4, 5])]
    fn test_price_range(
        catalog: Catalog,
        #[case] min: &str,
        #[case] max: &str,
        #[case] expected: Vec<u64>,
    ) {
        let mut filter = CatalogFilter::default();
        filter.set_min_price_input(min);
        filter.set_max_price_input(max);
        assert_eq!(ids(&filter.apply(&catalog)), expected);
    }

    #[test]
    fn test_fractional_min_excludes_lower_whole_price() {
        let games = vec![
            Game::new(1u64, "Free", None, &[]),
            Game::new(2u64, "Twelve", Some("¥ 12"), &[]),
            Game::new(3u64, "Thirteen", Some("¥ 13"), &[]),
        ];
        let catalog = Catalog::new(games, HeaderMap::new(), WordcloudMap::new(), Vec::new(), GameTagMap::new());

        let mut filter = CatalogFilter::default();
        filter.set_min_price_input("12.7");
        assert_eq!(ids(&filter.apply(&catalog)), vec![3]);

        filter.set_min_price_input("");
        filter.set_max_price_input("-1");
        assert!(filter.apply(&catalog).is_empty());
        assert!(filter.is_active());
    }

    #[rstest]
    fn test_genre_filter_is_any_of(catalog: Catalog) {
        let mut filter = CatalogFilter::default();
        filter.toggle_genre("Puzzle");
        filter.toggle_genre("RPG");
        assert_eq!(ids(&filter.apply(&catalog)), vec![2, 3]);
    }

    #[rstest]
    fn test_tag_filter_passes_untagged_games(catalog: Catalog) {
        let mut filter = CatalogFilter::default();
        filter.toggle_tag("Story");
        assert_eq!(ids(&filter.apply(&catalog)), vec![2, 3, 5]);
    }

    #[rstest]
    fn test_filters_combine(catalog: Catalog) {
        let mut filter = CatalogFilter::default();
        filter.toggle_genre("Indie");
        filter.toggle_tag("Music");
        filter.set_max_price_input("1000");
        assert_eq!(ids(&filter.apply(&catalog)), vec![2]);
    }

    #[rstest]
    fn test_price_sort_is_stable(catalog: Catalog) {
        let mut filter = CatalogFilter {
            sort: PriceSort::PriceAsc,
            ..CatalogFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog)), vec![1, 2, 4, 5, 3]);

        filter.sort = PriceSort::PriceDesc;
        assert_eq!(ids(&filter.apply(&catalog)), vec![3, 5, 2, 4, 1]);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut filter = CatalogFilter::default();
        filter.toggle_genre("Action");
        filter.toggle_genre("RPG");
        filter.toggle_genre("Action");
        assert_eq!(filter.genres, vec!["RPG".to_string()]);

        filter.toggle_tag("Mods");
        filter.remove_tag("Mods");
        filter.remove_genre("RPG");
        assert!(!filter.is_active());
    }

    #[test]
    fn test_price_inputs_and_clear() {
        let mut filter = CatalogFilter::default();
        filter.set_min_price_input("2000");
        filter.set_max_price_input("1000");
        assert!(filter.price_range_inverted());

        filter.set_max_price_input("");
        assert_eq!(filter.max_price.value(), None);
        assert!(!filter.price_range_inverted());

        filter.clear();
        assert_eq!(filter, CatalogFilter::default());
    }

    #[test]
    fn test_sort_round_trips_through_str() {
        for sort in PriceSort::ALL {
            assert_eq!(sort.as_str().parse::<PriceSort>().unwrap(), sort);
        }
        assert!("cheapest".parse::<PriceSort>().is_err());
        assert_eq!(serde_json::to_string(&PriceSort::PriceDesc).unwrap(), "\"price-desc\"");
    }

    proptest! {
        #[test]
        fn prop_ascending_sort_is_stable(prices in proptest::collection::vec(0u64..5, 0..40)) {
            let games: Vec<Game> = prices.iter().enumerate()
                .map(|(i, p)| Game::new(i as u64, i.to_string(), Some(p.to_string().as_str()), &[]))
                .collect();
            let catalog = Catalog::new(games, HeaderMap::new(), WordcloudMap::new(), Vec::new(), GameTagMap::new());
            let filter = CatalogFilter { sort: PriceSort::PriceAsc, ..CatalogFilter::default() };

            let sorted = filter.apply(&catalog);
            for pair in sorted.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.price_value() <= b.price_value());
                if a.price_value() == b.price_value() {
                    prop_assert!(a.appid < b.appid);
                }
            }
        }
    }
}
