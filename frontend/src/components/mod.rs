pub mod chip_list;
pub mod filter_panel;
pub mod game_card;
pub mod highlighted_text;
pub mod keyword_panel;
pub mod multi_select;
pub mod review_list;
pub mod status;
pub mod title_bar;
pub mod wordcloud_panel;
