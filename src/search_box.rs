use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub on_search: Callback<String>,
}

/// Hands whatever is in the field to `on_search`, untrimmed, even when empty.
#[function_component]
pub fn SearchBox(props: &SearchBoxProps) -> Html {
    let input = use_node_ref();

    let onclick = Callback::from({
        let input = input.clone();
        let cb = props.on_search.clone();
        move |e: MouseEvent| {
            e.prevent_default();
            let keywords = input
                .cast::<HtmlInputElement>()
                .map(|field| field.value())
                .unwrap_or_default();
            cb.emit(keywords);
        }
    });

    html! {
        <form class="search-box">
            <label for="search-terms">{"search by product, company, or keywords"}</label>
            <input type="text" name="search" id="search-terms" ref={input} />
            <button class="btn btn-primary" {onclick}>{"Search"}</button>
        </form>
    }
}
