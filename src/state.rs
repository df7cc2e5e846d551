use std::rc::Rc;

use common_data::SearchResult;
use yew::prelude::*;

/// Page-level state owned by the shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    pub search_results: Rc<Vec<SearchResult>>,
    /// Bumped every time `search_results` is replaced, even by an identical list.
    pub results_generation: u64,
    pub contact_form_visible: bool,
}

pub enum ShellAction {
    ReplaceResults(Vec<SearchResult>),
    ToggleContactForm,
    CloseContactForm,
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // An empty answer never clears what is on screen.
            ShellAction::ReplaceResults(results) if results.is_empty() => self,
            ShellAction::ReplaceResults(results) => Rc::new(Self {
                search_results: Rc::new(results),
                results_generation: self.results_generation + 1,
                contact_form_visible: self.contact_form_visible,
            }),
            ShellAction::ToggleContactForm => Rc::new(Self {
                contact_form_visible: !self.contact_form_visible,
                ..(*self).clone()
            }),
            ShellAction::CloseContactForm if !self.contact_form_visible => self,
            ShellAction::CloseContactForm => Rc::new(Self {
                contact_form_visible: false,
                ..(*self).clone()
            }),
        }
    }
}
