mod address;
mod company_table;
mod config;
mod contact_form;
mod leaflet;
mod navbar;
mod results;
mod search_box;
mod state;

use common_data::{ContactDetails, Coordinate};
use frontend_requests::RequestSequencer;
use gloo_utils::document;
use yew::prelude::*;

use crate::{
    company_table::CompanyTable,
    contact_form::CompanyInfoForm,
    leaflet::{MapComponent, MapHandle},
    navbar::NavBar,
    results::SearchResultsContainer,
    search_box::SearchBox,
    state::{ShellAction, ShellState},
};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));

    match document().get_element_by_id(config::MOUNT_POINT_ID) {
        Some(root) => yew::Renderer::<Shell>::with_root(root).render(),
        None => {
            log::warn!(
                "No #{} element on the page, mounting on <body>",
                config::MOUNT_POINT_ID
            );
            yew::Renderer::<Shell>::new().render()
        }
    };
}

#[function_component(Shell)]
pub fn shell() -> Html {
    let state = use_reducer(ShellState::default);
    let map = use_state(|| Option::<MapHandle>::None);
    let sequencer = use_mut_ref(RequestSequencer::new);

    let do_search = Callback::from({
        let dispatcher = state.dispatcher();
        move |keywords: String| {
            let ticket = sequencer.borrow_mut().issue();
            let sequencer = sequencer.clone();
            let dispatcher = dispatcher.clone();
            prokio::spawn_local(async move {
                let outcome = frontend_requests::search(&config::api_base(), &keywords).await;

                // A newer search was issued while this one was in flight
                if !sequencer.borrow().is_latest(ticket) {
                    log::debug!("Dropping stale response for search [{keywords}]");
                    return;
                }

                match outcome {
                    Ok(results) if results.is_empty() => {
                        log::info!("No data returned for search [{keywords}]")
                    }
                    Ok(results) => {
                        log::debug!("{} results for search [{keywords}]", results.len());
                        dispatcher.dispatch(ShellAction::ReplaceResults(results));
                    }
                    Err(why) => log::error!("Search for [{keywords}] failed: {why:#}"),
                }
            });
        }
    });

    // Markers follow each replacement of the results state, not the rendering
    // of the list. A repeated identical search still re-centers the camera.
    {
        let results = state.search_results.clone();
        use_effect_with_deps(
            move |(_, map)| {
                leaflet::show_results(map.as_ref(), &results);
                || ()
            },
            (state.results_generation, (*map).clone()),
        );
    }

    let toggle_contact_form = Callback::from({
        let dispatcher = state.dispatcher();
        move |()| dispatcher.dispatch(ShellAction::ToggleContactForm)
    });

    let contact_form_done = Callback::from({
        let dispatcher = state.dispatcher();
        move |details: ContactDetails| {
            log::debug!("Company info form finished: {details:?}");
            dispatcher.dispatch(ShellAction::CloseContactForm);
        }
    });

    let on_select = Callback::from({
        let map = map.clone();
        move |coordinate: Coordinate| leaflet::fly_to((*map).as_ref(), coordinate)
    });

    let on_map_ready = Callback::from({
        let map = map.clone();
        move |handle: MapHandle| map.set(Some(handle))
    });

    html! {
        <div id="app">
            <NavBar on_contact_toggle={toggle_contact_form} />
            if state.contact_form_visible {
                <CompanyInfoForm on_done={contact_form_done} />
            }
            <SearchBox on_search={do_search} />
            <main id="directory" class="directory" style="display: flex; height: 70vh;">
                <div style="flex: 1 0 auto; overflow-y: auto; width: 0px;">
                    <SearchResultsContainer results={state.search_results.clone()} {on_select} />
                </div>
                <MapComponent style="height: 100%; flex: 2 0 auto; width: 0px;" on_ready={on_map_ready} />
            </main>
            <CompanyTable results={state.search_results.clone()} />
        </div>
    }
}
