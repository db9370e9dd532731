use std::rc::Rc;

use log::debug;
use shared::{Catalog, CatalogFilter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::datasets::load_catalog;
use crate::components::filter_panel::FilterPanel;
use crate::components::game_card::GameCard;
use crate::components::status::{Loading, MessagePanel};
use crate::components::title_bar::TitleBar;
use crate::state::{load_filter, save_filter};
use crate::view::result_count_label;

const TITLE: &str = "🎮 Steam Top Games Dashboard";

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_state(|| None::<Rc<Catalog>>);
    let error = use_state(|| None::<String>);
    let filter = use_state(load_filter);

    // Load all datasets on mount
    {
        let catalog = catalog.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_catalog().await {
                    Ok(loaded) => {
                        catalog.set(Some(Rc::new(loaded)));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }
            });
        });
    }

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: CatalogFilter| {
            debug!("Catalog filter changed: {:?}", next);
            save_filter(&next);
            filter.set(next);
        })
    };

    let body = if let Some(error_msg) = &*error {
        html! { <MessagePanel message="データを読み込めませんでした" detail={error_msg.clone()} /> }
    } else if let Some(catalog) = &*catalog {
        let games = filter.apply(catalog);
        html! {
            <div class="max-w-7xl mx-auto p-6">
                <FilterPanel
                    filter={(*filter).clone()}
                    genres={catalog.genres().to_vec()}
                    on_change={on_filter_change}
                />

                <p class="text-sm text-gray-600 mb-4">{result_count_label(games.len())}</p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {for games.iter().map(|game| {
                        let header = catalog.header(game.appid).map(str::to_string);
                        let tags = catalog.tags(game.appid).map(|t| t.tags.clone()).unwrap_or_default();
                        html! {
                            <GameCard key={game.appid.key()} game={(*game).clone()} {header} {tags} />
                        }
                    })}
                </div>
            </div>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <>
            <TitleBar title={TITLE} />
            {body}
        </>
    }
}
