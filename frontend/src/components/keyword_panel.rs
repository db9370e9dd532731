use shared::{Sentiment, TfidfResult};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct KeywordPanelProps {
    pub tfidf: TfidfResult,
    pub selected: Option<String>,
    pub on_select: Callback<(String, Sentiment)>,
    pub on_reset: Callback<()>,
}

/// TF-IDF keywords as toggle buttons that filter the review list
#[function_component(KeywordPanel)]
pub fn keyword_panel(props: &KeywordPanelProps) -> Html {
    let column = |sentiment: Sentiment, title: &'static str| {
        let (title_class, active, idle) = match sentiment {
            Sentiment::Recommended => ("text-green-700", "bg-green-600 text-white", "bg-green-100 text-green-800 hover:bg-green-200"),
            Sentiment::NotRecommended => ("text-red-700", "bg-red-600 text-white", "bg-red-100 text-red-800 hover:bg-red-200"),
        };

        html! {
            <div>
                <h3 class={classes!("text-lg", "font-semibold", "mb-3", title_class)}>{title}</h3>
                <div class="flex flex-wrap gap-2">
                    {for props.tfidf.keywords(sentiment).iter().map(|keyword| {
                        let is_selected = props.selected.as_deref() == Some(keyword.word.as_str());
                        let on_click = {
                            let on_select = props.on_select.clone();
                            let word = keyword.word.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit((word.clone(), sentiment)))
                        };
                        html! {
                            <button
                                key={keyword.word.clone()}
                                type="button"
                                onclick={on_click}
                                class={classes!(
                                    "px-3", "py-1", "rounded-full", "text-sm", "font-semibold", "transition",
                                    if is_selected { active } else { idle }
                                )}
                            >
                                {&keyword.word}
                            </button>
                        }
                    })}
                </div>
            </div>
        }
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h2 class="text-2xl font-bold mb-4">{"単語でレビューを検索"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {column(Sentiment::Recommended, "ポジティブキーワード")}
                {column(Sentiment::NotRecommended, "ネガティブキーワード")}
            </div>
            if props.selected.is_some() {
                <button
                    type="button"
                    onclick={on_reset}
                    class="mt-4 px-4 py-2 bg-gray-400 text-white rounded-lg hover:bg-gray-500 font-semibold"
                >
                    {"フィルターをリセット"}
                </button>
            }
        </div>
    }
}
