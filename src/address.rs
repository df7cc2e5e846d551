use common_data::Address;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddressProps {
    pub address: Address,
}

#[function_component]
pub fn AddressTemplate(props: &AddressProps) -> Html {
    html! {
        <address class="mb-0">
            { for props.address.lines().into_iter().map(|line| html!(<div>{line}</div>)) }
        </address>
    }
}
