use std::rc::Rc;

use common_data::{Coordinate, SearchResult};
use yew::prelude::*;

use crate::address::AddressTemplate;

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub results: Rc<Vec<SearchResult>>,
    pub on_select: Callback<Coordinate>,
}

/// One card per result. Clicking a card asks for the map to fly to it.
#[function_component]
pub fn SearchResultsContainer(props: &SearchResultsProps) -> Html {
    let cards = props.results.iter().enumerate().map(|(i, result)| {
        let onclick = Callback::from({
            let cb = props.on_select.clone();
            let coordinate = result.coordinate();
            move |_: MouseEvent| cb.emit(coordinate)
        });

        html! {
            <div class="card result-card" key={format!("{i}-{}", result.product.id)} {onclick}>
                <div class="card-body">
                    <h5 class="card-title">{&result.company.trade_name}</h5>
                    <h6 class="card-subtitle text-muted">{&result.product.name}</h6>
                    <p class="card-text">{&result.product.description}</p>
                    <AddressTemplate address={result.company.address.clone()} />
                </div>
            </div>
        }
    });

    html! {
        <div class="search-results">
            { for cards }
        </div>
    }
}
