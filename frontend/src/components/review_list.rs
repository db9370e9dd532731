use std::rc::Rc;

use shared::{Review, ReviewOrder, ReviewQuery, Sentiment};
use yew::prelude::*;

use crate::components::highlighted_text::HighlightedText;
use crate::view::{helpful_votes_label, review_count_label, show_more_label};

#[derive(Properties, Clone, PartialEq)]
pub struct ReviewListProps {
    pub reviews: Rc<Vec<Review>>,
    pub query: ReviewQuery,
    pub on_query: Callback<ReviewQuery>,
}

#[derive(Properties, Clone, PartialEq)]
struct ReviewCardProps {
    review: Review,
    keyword: Option<String>,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let sentiment = Sentiment::of(&props.review);
    let (card_class, badge_class) = match sentiment {
        Sentiment::Recommended => ("bg-green-50 border-green-500", "bg-green-200 text-green-800"),
        Sentiment::NotRecommended => ("bg-red-50 border-red-500", "bg-red-200 text-red-800"),
    };

    html! {
        <div class={classes!("p-4", "rounded-lg", "border-l-4", card_class)}>
            <div class="flex items-center justify-between mb-3">
                <span class={classes!("text-sm", "font-semibold", "px-3", "py-1", "rounded-full", badge_class)}>
                    {sentiment.label()}
                </span>
                if let Some(votes) = props.review.votes_helpful {
                    <span class="text-xs text-gray-500">{helpful_votes_label(votes)}</span>
                }
            </div>
            if !props.review.review.is_empty() {
                <p class="text-gray-700 text-sm leading-relaxed whitespace-pre-wrap break-words">
                    <HighlightedText text={props.review.review.clone()} keyword={props.keyword.clone()} />
                </p>
            }
        </div>
    }
}

#[function_component(ReviewList)]
pub fn review_list(props: &ReviewListProps) -> Html {
    if props.reviews.is_empty() {
        return html! {
            <div class="bg-white rounded-lg shadow-md p-6 text-center">
                <p class="text-gray-600">{"レビューはまだ登録されていません"}</p>
            </div>
        };
    }

    let page = props.query.apply(&props.reviews);

    // Each control hands an edited copy of the query back to the page.
    let edit = |change: fn(&mut ReviewQuery)| {
        let query = props.query.clone();
        let on_query = props.on_query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = query.clone();
            change(&mut next);
            on_query.emit(next);
        })
    };

    let order_button = |order: ReviewOrder, label: &'static str, active: &'static str| {
        let on_click = {
            let query = props.query.clone();
            let on_query = props.on_query.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = query.clone();
                next.set_order(order);
                on_query.emit(next);
            })
        };
        let class = if props.query.order == order {
            active
        } else {
            "bg-gray-200 text-gray-800 hover:bg-gray-300"
        };
        html! {
            <button type="button" onclick={on_click} class={classes!("px-4", "py-2", "rounded-lg", "font-semibold", "transition", class)}>
                {label}
            </button>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-2xl font-bold">
                    {review_count_label(page.matched_count(), page.total())}
                    if let Some(keyword) = &props.query.keyword {
                        <span class="text-sm text-gray-600 ml-2">{format!("「{}」を含む", keyword)}</span>
                    }
                </h2>
            </div>

            <div class="mb-4 flex gap-2 flex-wrap">
                {order_button(ReviewOrder::RecommendedFirst, "👍 推奨", "bg-green-600 text-white")}
                {order_button(ReviewOrder::NotRecommendedFirst, "👎 非推奨", "bg-red-600 text-white")}
            </div>

            <div class="space-y-4">
                {for page.displayed().iter().map(|review| html! {
                    <ReviewCard review={(*review).clone()} keyword={props.query.keyword.clone()} />
                })}
            </div>

            if page.has_more() {
                <button
                    type="button"
                    onclick={edit(ReviewQuery::show_more)}
                    class="w-full mt-6 px-4 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 font-semibold transition"
                >
                    {show_more_label(page.displayed().len(), page.matched_count())}
                </button>
            }

            if page.can_collapse() {
                <button
                    type="button"
                    onclick={edit(ReviewQuery::collapse)}
                    class="w-full mt-6 px-4 py-3 bg-purple-600 text-white rounded-lg hover:bg-slate-600 font-semibold transition"
                >
                    {"閉じる"}
                </button>
            }
        </div>
    }
}
