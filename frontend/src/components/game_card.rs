use shared::{format_price, Game};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::view::{tag_preview, CARD_TAG_LIMIT};
use crate::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    #[prop_or_default]
    pub header: Option<String>,
    #[prop_or_default]
    pub tags: Vec<String>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let navigator = use_navigator();
    let appid = props.game.appid;

    let on_click = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::GameDetail { appid });
        }
    });

    let (shown_tags, hidden_tags) = tag_preview(&props.tags, CARD_TAG_LIMIT);

    html! {
        <div
            class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-xl transition cursor-pointer"
            onclick={on_click}
        >
            if let Some(header) = &props.header {
                <img src={header.clone()} alt={props.game.name.clone()} class="w-full h-40 object-cover" />
            } else {
                <div class="w-full h-40 bg-gray-300 flex items-center justify-center">
                    <span class="text-gray-600">{"No image"}</span>
                </div>
            }

            <div class="p-4">
                <h2 class="text-lg font-bold">{&props.game.name}</h2>
                <p class="text-sm text-gray-600 mb-2">{props.game.genres.label()}</p>

                if !shown_tags.is_empty() {
                    <div class="mb-2 flex flex-wrap gap-1">
                        {for shown_tags.iter().map(|tag| html! {
                            <span key={tag.clone()} class="inline-block bg-purple-100 text-purple-800 text-xs px-2 py-1 rounded">
                                {tag}
                            </span>
                        })}
                        if let Some(hidden) = hidden_tags {
                            <span class="inline-block text-xs text-gray-600">{format!("+{}", hidden)}</span>
                        }
                    </div>
                }

                <p class="text-sm font-semibold text-green-600">{format_price(props.game.price.as_deref())}</p>
            </div>
        </div>
    }
}
