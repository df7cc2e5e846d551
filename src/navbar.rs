use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub on_contact_toggle: Callback<()>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    let onclick = Callback::from({
        let cb = props.on_contact_toggle.clone();
        move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        }
    });

    html! {
        <nav class="navbar navbar-expand">
            <a class="navbar-brand" href="/">{"Indoor Farms"}</a>
            <ul class="navbar-nav">
                <li class="nav-item"><a class="nav-link" href="/">{"Home"}</a></li>
                <li class="nav-item"><a class="nav-link" href="#directory">{"Directory"}</a></li>
                <li class="nav-item"><a class="nav-link" href="#about">{"About"}</a></li>
            </ul>
            <button class="btn btn-outline-success" {onclick}>{"Contact us"}</button>
        </nav>
    }
}
