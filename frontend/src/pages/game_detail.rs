use std::rc::Rc;

use log::debug;
use shared::{format_price, AppId, ReviewQuery, Sentiment};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::datasets::{load_game_detail, GameDetailData};
use crate::components::keyword_panel::KeywordPanel;
use crate::components::review_list::ReviewList;
use crate::components::status::{Loading, MessagePanel};
use crate::components::title_bar::TitleBar;
use crate::components::wordcloud_panel::WordcloudPanel;
use crate::config::Config;
use crate::state::LoadGeneration;

#[derive(Properties, PartialEq)]
pub struct GameDetailProps {
    pub appid: AppId,
}

#[function_component(GameDetail)]
pub fn game_detail(props: &GameDetailProps) -> Html {
    let detail = use_state(|| None::<Rc<GameDetailData>>);
    let error = use_state(|| None::<String>);
    let query = use_state(|| ReviewQuery::with_page_size(Config::get().review_page_size));
    let generation = use_mut_ref(LoadGeneration::default);

    // Reload whenever the route points at another game
    {
        let detail = detail.clone();
        let error = error.clone();
        let query = query.clone();
        let generation = generation.clone();

        use_effect_with(props.appid, move |appid| {
            let appid = *appid;
            let ticket = generation.borrow_mut().begin();
            detail.set(None);
            error.set(None);
            query.set(ReviewQuery::with_page_size(Config::get().review_page_size));

            spawn_local(async move {
                let result = load_game_detail(appid).await;
                // The route may have moved on to another game meanwhile
                if !generation.borrow().is_current(ticket) {
                    debug!("Dropping stale detail load for game {}", appid);
                    return;
                }
                match result {
                    Ok(loaded) => detail.set(Some(Rc::new(loaded))),
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    }

    if let Some(error_msg) = &*error {
        return html! {
            <MessagePanel message="データを読み込めませんでした" detail={error_msg.clone()} show_back={true} />
        };
    }

    let Some(data) = (*detail).clone() else {
        return html! { <Loading /> };
    };

    let Some(game) = data.game.clone() else {
        return html! { <MessagePanel message="ゲームが見つかりません" show_back={true} /> };
    };

    let on_query = {
        let query = query.clone();
        Callback::from(move |next: ReviewQuery| query.set(next))
    };

    let on_select_keyword = {
        let query = query.clone();
        Callback::from(move |(word, sentiment): (String, Sentiment)| {
            let mut next = (*query).clone();
            next.select_keyword(&word, sentiment);
            query.set(next);
        })
    };

    let on_reset_keyword = {
        let query = query.clone();
        Callback::from(move |_: ()| {
            let mut next = (*query).clone();
            next.reset();
            query.set(next);
        })
    };

    let reviews = Rc::new(data.reviews.clone());

    html! {
        <>
            <TitleBar title={game.name.clone()} show_back={true} />

            <div class="max-w-6xl mx-auto p-6">
                <div class="bg-white rounded-lg shadow-md overflow-hidden mb-6">
                    if let Some(header) = &data.header {
                        <img src={header.clone()} alt={game.name.clone()} class="w-full h-64 object-cover" />
                    }
                    <div class="p-6">
                        <p class="text-lg font-semibold mb-2">
                            {"価格: "}
                            <span class="text-green-600 text-xl">{format_price(game.price.as_deref())}</span>
                        </p>
                        <p class="text-sm text-gray-600">{format!("ジャンル: {}", game.genres.label())}</p>
                    </div>
                </div>

                if let Some(wordcloud) = &data.wordcloud {
                    <WordcloudPanel wordcloud={wordcloud.clone()} />
                }

                if let Some(tfidf) = &data.tfidf {
                    <KeywordPanel
                        tfidf={tfidf.clone()}
                        selected={query.keyword.clone()}
                        on_select={on_select_keyword}
                        on_reset={on_reset_keyword}
                    />
                }

                <ReviewList {reviews} query={(*query).clone()} {on_query} />
            </div>
        </>
    }
}
