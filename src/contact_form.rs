use std::rc::Rc;

use common_data::{ContactDetails, ContactDraft, CONTACT_FIELDS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CompanyInfoFormProps {
    pub on_done: Callback<ContactDetails>,
}

enum FieldEvent {
    Input(usize, String),
    Blur(usize, String),
}

struct DraftState(ContactDraft);

impl Reducible for DraftState {
    type Action = FieldEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = self.0.clone();
        match action {
            FieldEvent::Input(index, value) => draft.set_value(index, value),
            FieldEvent::Blur(index, value) => draft.blur(index, value),
        }
        Rc::new(Self(draft))
    }
}

/// Overlay form for companies that want to be listed. Nothing is sent
/// anywhere; the typed values go to `on_done`.
#[function_component]
pub fn CompanyInfoForm(props: &CompanyInfoFormProps) -> Html {
    let draft = use_reducer(|| DraftState(ContactDraft::new()));

    let fields = CONTACT_FIELDS.iter().enumerate().map(|(index, field)| {
        let oninput = Callback::from({
            let draft = draft.dispatcher();
            move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                draft.dispatch(FieldEvent::Input(index, input.value()));
            }
        });
        let onblur = Callback::from({
            let draft = draft.dispatcher();
            move |e: FocusEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                draft.dispatch(FieldEvent::Blur(index, input.value()));
            }
        });

        let id = format!("company-info-{}", field.name);
        html! {
            <div class="mb-3" key={field.name}>
                <label class="form-label" for={id.clone()}>{field.label}</label>
                <input
                    type="text"
                    class={classes!("form-control", draft.0.is_valid(index).then_some("valid"))}
                    {id}
                    name={field.name}
                    {oninput}
                    {onblur}
                />
            </div>
        }
    });

    let onclick = Callback::from({
        let cb = props.on_done.clone();
        let draft = draft.clone();
        move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(draft.0.details());
        }
    });

    html! {
        <div class="contact-overlay">
            <form class="company-info-form">
                <h2>{"Tell us about your farm"}</h2>
                { for fields }
                <button class="btn btn-primary" {onclick}>{"Done"}</button>
            </form>
        </div>
    }
}
