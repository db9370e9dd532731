pub mod models {
    pub mod game;
    pub mod media;
    pub mod review;
    pub mod tfidf;
}

pub mod catalog;
pub mod datasets;
pub mod error;
pub mod filter;
pub mod genres;
pub mod highlight;
pub mod price;
pub mod reviews;
pub mod tags;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    game::{AppId, Game, Genres},
    media::{HeaderMap, Wordcloud, WordcloudMap},
    review::{Review, ReviewFile},
    tfidf::{Keyword, TfidfMap, TfidfResult},
};

pub use catalog::{dedupe_by_appid, Catalog};
pub use filter::{CatalogFilter, PriceSort};
pub use highlight::{highlight, Segment};
pub use price::{format_price, parse_price, PriceBound, FREE_LABEL};
pub use reviews::{ReviewFilter, ReviewOrder, ReviewPage, ReviewQuery, Sentiment, REVIEW_PAGE_SIZE};
pub use tags::{GameTag, GameTagMap, PlayTag};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_from_datasets() {
        let games = datasets::decode_games(
            r#"[
                {"appid": 570, "name": "Dota 2", "price": null, "genres": "Action, Free To Play"},
                {"appid": 730, "name": "Counter-Strike 2", "price": "", "genres": ["Action"]},
                {"appid": 570, "name": "Dota 2", "price": null, "genres": []}
            ]"#,
        )
        .unwrap();
        let tags = datasets::decode_game_tags(r#"[{"appid": 570, "tags": ["community"]}]"#).unwrap();

        let catalog = Catalog::new(games, HeaderMap::new(), WordcloudMap::new(), Vec::new(), tags);
        assert_eq!(catalog.len(), 2);

        let mut filter = CatalogFilter::default();
        filter.toggle_tag(PlayTag::Community.display_name());
        filter.toggle_genre("Free To Play");
        let names: Vec<&str> = filter.apply(&catalog).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Dota 2"]);
    }
}
