//! Text helpers shared by the views.

/// Tags shown on a game card before collapsing the rest into `+N`
pub const CARD_TAG_LIMIT: usize = 3;

/// Dropdown button caption for a multi-select
pub fn selection_label(selected: usize) -> String {
    if selected == 0 {
        "選択".to_string()
    } else {
        format!("{}個", selected)
    }
}

pub fn result_count_label(count: usize) -> String {
    format!("{} 件のゲームが見つかりました", count)
}

/// Splits a tag list into the tags shown on a card and the overflow count
pub fn tag_preview(tags: &[String], limit: usize) -> (&[String], Option<usize>) {
    if tags.len() > limit {
        (&tags[..limit], Some(tags.len() - limit))
    } else {
        (tags, None)
    }
}

pub fn review_count_label(matched: usize, total: usize) -> String {
    format!("レビュー ({}/{}件)", matched, total)
}

pub fn helpful_votes_label(votes: u64) -> String {
    format!("👍 {}人が役立つと評価", votes)
}

pub fn show_more_label(shown: usize, matched: usize) -> String {
    format!("もっと見る ({}/{})", shown, matched)
}
