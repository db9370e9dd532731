use shared::highlight;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HighlightedTextProps {
    pub text: String,
    #[prop_or_default]
    pub keyword: Option<String>,
}

/// Review text with the selected keyword marked
#[function_component(HighlightedText)]
pub fn highlighted_text(props: &HighlightedTextProps) -> Html {
    let Some(keyword) = &props.keyword else {
        return html! { <>{&props.text}</> };
    };

    html! {
        <>
            {for highlight(&props.text, keyword).into_iter().map(|segment| {
                if segment.highlighted {
                    html! { <mark class="bg-yellow-300 font-bold">{segment.text}</mark> }
                } else {
                    html! { {segment.text} }
                }
            })}
        </>
    }
}
