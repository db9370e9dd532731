use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct TitleBarProps {
    pub title: String,
    /// Shows a back arrow to the list view
    #[prop_or_default]
    pub show_back: bool,
}

#[function_component(TitleBar)]
pub fn title_bar(props: &TitleBarProps) -> Html {
    html! {
        <header class="bg-gray-900 text-white p-6 shadow-lg">
            <div class="max-w-6xl mx-auto flex items-center gap-4">
                if props.show_back {
                    <Link<Route> to={Route::Home} classes={classes!("text-2xl", "hover:text-gray-300", "transition")}>
                        {"←"}
                    </Link<Route>>
                }
                <h1 class={classes!("text-3xl", "font-bold", (!props.show_back).then_some("w-full text-center"))}>
                    {&props.title}
                </h1>
            </div>
        </header>
    }
}
