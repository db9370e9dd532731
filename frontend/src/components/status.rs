use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                <p class="mt-2 text-2xl text-gray-600">{"読み込み中..."}</p>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MessagePanelProps {
    pub message: String,
    #[prop_or_default]
    pub detail: Option<String>,
    /// Adds a button back to the list view
    #[prop_or_default]
    pub show_back: bool,
}

/// Centered notice used for errors and empty states
#[function_component(MessagePanel)]
pub fn message_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div class="max-w-6xl mx-auto p-6">
            if props.show_back {
                <Link<Route> to={Route::Home} classes={classes!("inline-block", "mb-6", "px-4", "py-2", "bg-blue-600", "text-white", "rounded-lg", "hover:bg-blue-700")}>
                    {"← トップに戻る"}
                </Link<Route>>
            }
            <div class="bg-white rounded-lg shadow-md p-6 text-center">
                <p class="text-gray-600">{&props.message}</p>
                if let Some(detail) = &props.detail {
                    <p class="mt-2 text-sm text-red-600">{detail}</p>
                }
            </div>
        </div>
    }
}
