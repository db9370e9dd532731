use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ChipColor {
    Blue,
    Purple,
}

impl ChipColor {
    fn classes(&self) -> (&'static str, &'static str) {
        match self {
            ChipColor::Blue => ("bg-blue-100 text-blue-800", "hover:text-blue-600"),
            ChipColor::Purple => ("bg-purple-100 text-purple-800", "hover:text-purple-600"),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ChipListProps {
    pub caption: String,
    pub items: Vec<String>,
    pub color: ChipColor,
    pub on_remove: Callback<String>,
}

/// Selected filter values with a remove button each
#[function_component(ChipList)]
pub fn chip_list(props: &ChipListProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    let (chip_class, button_class) = props.color.classes();

    html! {
        <div class="mt-4">
            <p class="text-xs text-gray-600 mb-2">{&props.caption}</p>
            <div class="flex flex-wrap gap-2">
                {for props.items.iter().map(|item| {
                    let on_click = {
                        let on_remove = props.on_remove.clone();
                        let item = item.clone();
                        Callback::from(move |_: MouseEvent| on_remove.emit(item.clone()))
                    };
                    html! {
                        <span key={item.clone()} class={classes!("inline-flex", "items-center", "gap-2", "px-3", "py-1", "rounded-full", "text-sm", chip_class)}>
                            {item}
                            <button type="button" onclick={on_click} class={button_class}>{"✕"}</button>
                        </span>
                    }
                })}
            </div>
        </div>
    }
}
