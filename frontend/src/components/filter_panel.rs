use shared::{CatalogFilter, PlayTag, PriceSort};
use yew::prelude::*;

use crate::components::chip_list::{ChipColor, ChipList};
use crate::components::multi_select::MultiSelect;

#[derive(Properties, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub filter: CatalogFilter,
    /// Options of the genre dropdown
    pub genres: Vec<String>,
    pub on_change: Callback<CatalogFilter>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    // Every control edits a copy of the current filter and hands it back up.
    let update = |edit: fn(&mut CatalogFilter, String)| {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = filter.clone();
            edit(&mut next, value);
            on_change.emit(next);
        })
    };

    let on_min_price = update(|f, v| f.set_min_price_input(&v));
    let on_max_price = update(|f, v| f.set_max_price_input(&v));
    let on_toggle_genre = update(|f, v| f.toggle_genre(&v));
    let on_toggle_tag = update(|f, v| f.toggle_tag(&v));
    let on_remove_genre = update(|f, v| f.remove_genre(&v));
    let on_remove_tag = update(|f, v| f.remove_tag(&v));
    let on_sort = update(|f, v| f.sort = v.parse().unwrap_or_default());

    let input_value = |callback: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_sort_change = Callback::from(move |e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        on_sort.emit(select.value());
    });

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(CatalogFilter::default()))
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-bold">{"フィルター・ソート"}</h2>
                if props.filter.is_active() {
                    <button type="button" onclick={on_clear} class="text-sm text-gray-600 hover:text-gray-900">
                        {"クリア"}
                    </button>
                }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                <div>
                    <label class="block text-sm font-semibold mb-2">{"最低価格 (¥)"}</label>
                    <input
                        type="number"
                        min="0"
                        placeholder="0"
                        value={props.filter.min_price.text().to_string()}
                        oninput={input_value(on_min_price)}
                        class={input_class}
                    />
                </div>

                <div>
                    <label class="block text-sm font-semibold mb-2">{"最高価格 (¥)"}</label>
                    <input
                        type="number"
                        min="0"
                        placeholder="10000"
                        value={props.filter.max_price.text().to_string()}
                        oninput={input_value(on_max_price)}
                        class={input_class}
                    />
                </div>

                <MultiSelect
                    label="ジャンル"
                    options={props.genres.clone()}
                    selected={props.filter.genres.clone()}
                    on_toggle={on_toggle_genre}
                />

                <MultiSelect
                    label="プレイ体験"
                    options={PlayTag::display_names()}
                    selected={props.filter.tags.clone()}
                    on_toggle={on_toggle_tag}
                />

                <div>
                    <label class="block text-sm font-semibold mb-2">{"ソート"}</label>
                    <select onchange={on_sort_change} class={classes!(input_class, "text-sm")}>
                        {for PriceSort::ALL.iter().map(|sort| html! {
                            <option value={sort.as_str()} selected={*sort == props.filter.sort}>
                                {sort.label()}
                            </option>
                        })}
                    </select>
                </div>
            </div>

            if props.filter.price_range_inverted() {
                <p class="mt-2 text-xs text-red-600">{"最低価格が最高価格を上回っています"}</p>
            }

            <ChipList
                caption="選択ジャンル:"
                items={props.filter.genres.clone()}
                color={ChipColor::Blue}
                on_remove={on_remove_genre}
            />
            <ChipList
                caption="選択プレイ体験:"
                items={props.filter.tags.clone()}
                color={ChipColor::Purple}
                on_remove={on_remove_tag}
            />
        </div>
    }
}
