use shared::Wordcloud;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WordcloudPanelProps {
    pub wordcloud: Wordcloud,
}

#[function_component(WordcloudPanel)]
pub fn wordcloud_panel(props: &WordcloudPanelProps) -> Html {
    if props.wordcloud.is_empty() {
        return html! {};
    }

    let image = |src: &Option<String>, title: &'static str, color: &'static str| match src {
        Some(src) => html! {
            <div class="text-center">
                <h3 class={classes!("text-lg", "font-semibold", "mb-3", color)}>{title}</h3>
                <img src={src.clone()} alt={title} class="rounded-lg w-full" />
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 mb-6">
            <h2 class="text-2xl font-bold mb-4">{"レビュー分析"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {image(&props.wordcloud.positive, "ポジティブキーワード", "text-green-700")}
                {image(&props.wordcloud.negative, "ネガティブキーワード", "text-red-700")}
            </div>
        </div>
    }
}
