use yew::prelude::*;

use crate::components::status::MessagePanel;
use crate::components::title_bar::TitleBar;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <TitleBar title="404 - Page Not Found" show_back={true} />
            <MessagePanel message="The page you're looking for doesn't exist." show_back={true} />
        </>
    }
}
