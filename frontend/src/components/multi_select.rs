use yew::prelude::*;

use crate::view::selection_label;

#[derive(Properties, Clone, PartialEq)]
pub struct MultiSelectProps {
    pub label: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
}

/// Dropdown of checkboxes; the list stays open while options are toggled
#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    let open = use_state(|| false);

    let on_button_click = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(!*open);
        })
    };

    html! {
        <div class="relative">
            <label class="block text-sm font-semibold mb-2">{&props.label}</label>
            <button
                type="button"
                onclick={on_button_click}
                class="w-full px-3 py-2 border border-gray-300 rounded-lg bg-white text-left flex justify-between items-center hover:bg-gray-50 text-sm"
            >
                <span>{selection_label(props.selected.len())}</span>
                <span class={classes!("transition", (*open).then_some("rotate-180"))}>{"▼"}</span>
            </button>

            if *open {
                <div class="absolute top-full left-0 right-0 mt-1 bg-white border border-gray-300 rounded-lg shadow-lg z-10 max-h-60 overflow-y-auto">
                    {for props.options.iter().map(|option| {
                        let checked = props.selected.contains(option);
                        let on_change = {
                            let on_toggle = props.on_toggle.clone();
                            let option = option.clone();
                            Callback::from(move |e: Event| {
                                e.stop_propagation();
                                on_toggle.emit(option.clone());
                            })
                        };
                        html! {
                            <label key={option.clone()} class="flex items-center px-4 py-2 hover:bg-gray-100 cursor-pointer text-sm">
                                <input
                                    type="checkbox"
                                    class="mr-2"
                                    {checked}
                                    onchange={on_change}
                                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                                />
                                {option}
                            </label>
                        }
                    })}
                </div>
            }
        </div>
    }
}
