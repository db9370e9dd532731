//! Detail-view review browsing: keyword search, sentiment filter, ordering
//! and "show more" paging over one game's reviews.

use serde::{Deserialize, Serialize};

use crate::models::review::Review;

/// Reviews shown per page
pub const REVIEW_PAGE_SIZE: usize = 5;

/// Which side of the recommendation vote a review or keyword belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Recommended,
    NotRecommended,
}

impl Sentiment {
    pub fn of(review: &Review) -> Sentiment {
        if review.voted_up {
            Sentiment::Recommended
        } else {
            Sentiment::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Recommended => "👍 推奨",
            Sentiment::NotRecommended => "👎 非推奨",
        }
    }
}

/// Restricts reviews to one side of the vote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl ReviewFilter {
    fn admits(&self, review: &Review) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Only(sentiment) => Sentiment::of(review) == *sentiment,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOrder {
    /// File order
    #[default]
    Newest,
    RecommendedFirst,
    NotRecommendedFirst,
}

/// Browsing state for one game's reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    pub keyword: Option<String>,
    pub filter: ReviewFilter,
    pub order: ReviewOrder,
    pub display_count: usize,
    page_size: usize,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self::with_page_size(REVIEW_PAGE_SIZE)
    }
}

impl ReviewQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            keyword: None,
            filter: ReviewFilter::All,
            order: ReviewOrder::Newest,
            display_count: page_size,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Clicking a keyword chip. Selecting the current keyword again clears it;
    /// either way the filter switches to the keyword's side and paging resets.
    pub fn select_keyword(&mut self, word: &str, sentiment: Sentiment) {
        if self.keyword.as_deref() == Some(word) {
            self.keyword = None;
        } else {
            self.keyword = Some(word.to_string());
        }
        self.filter = ReviewFilter::Only(sentiment);
        self.display_count = self.page_size;
    }

    pub fn reset(&mut self) {
        self.keyword = None;
        self.filter = ReviewFilter::All;
        self.display_count = self.page_size;
    }

    pub fn set_order(&mut self, order: ReviewOrder) {
        self.order = order;
    }

    pub fn show_more(&mut self) {
        self.display_count += self.page_size;
    }

    pub fn collapse(&mut self) {
        self.display_count = self.page_size;
    }

    fn matches(&self, review: &Review, keyword: Option<&str>) -> bool {
        if let Some(keyword) = keyword {
            if !review.review.to_lowercase().contains(keyword) {
                return false;
            }
        }
        self.filter.admits(review)
    }

    /// Runs the query over a game's reviews
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> ReviewPage<'a> {
        let keyword = self.keyword.as_ref().map(|k| k.to_lowercase());
        let mut matched: Vec<&Review> = reviews
            .iter()
            .filter(|review| self.matches(review, keyword.as_deref()))
            .collect();

        match self.order {
            ReviewOrder::Newest => {}
            ReviewOrder::RecommendedFirst => matched.sort_by_key(|review| !review.voted_up),
            ReviewOrder::NotRecommendedFirst => matched.sort_by_key(|review| review.voted_up),
        }

        ReviewPage {
            matched,
            total: reviews.len(),
            display_count: self.display_count,
            page_size: self.page_size,
        }
    }
}

/// Result of a [`ReviewQuery`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPage<'a> {
    matched: Vec<&'a Review>,
    total: usize,
    display_count: usize,
    page_size: usize,
}

impl<'a> ReviewPage<'a> {
    /// The reviews to render
    pub fn displayed(&self) -> &[&'a Review] {
        let end = self.display_count.min(self.matched.len());
        &self.matched[..end]
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Number of reviews before filtering
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.display_count < self.matched.len()
    }

    /// Everything is shown and there is more than one page to fold away
    pub fn can_collapse(&self) -> bool {
        !self.has_more() && self.matched.len() > self.page_size
    }
}
