use std::rc::Rc;

use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Local-only waitlist form. Nothing leaves the browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistState {
    pub email: String,
    pub submitted: bool,
}

pub enum WaitlistAction {
    Input(String),
    Submit,
}

impl Reducible for WaitlistState {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            WaitlistAction::Input(_) | WaitlistAction::Submit if self.submitted => self,
            WaitlistAction::Input(email) => Rc::new(WaitlistState {
                email,
                submitted: false,
            }),
            WaitlistAction::Submit => Rc::new(WaitlistState {
                email: self.email.clone(),
                submitted: true,
            }),
        }
    }
}

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let state = use_reducer(WaitlistState::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(WaitlistAction::Input(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("waitlist signup captured locally");
            state.dispatch(WaitlistAction::Submit);
        })
    };

    if state.submitted {
        return html! {
            <div class="cta-thanks">{"🎉 You're on the list! We'll be in touch soon."}</div>
        };
    }

    html! {
        <form class="cta-form" onsubmit={onsubmit}>
            <input
                type="email"
                placeholder="you@company.com"
                value={state.email.clone()}
                oninput={oninput}
                required={true}
            />
            <button type="submit" class="btn-primary">{"Get Early Access →"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: WaitlistState, action: WaitlistAction) -> WaitlistState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn input_tracks_email() {
        let state = apply(WaitlistState::default(), WaitlistAction::Input("per".into()));
        let state = apply(state, WaitlistAction::Input("person@example.com".into()));
        assert_eq!(state.email, "person@example.com");
        assert!(!state.submitted);
    }

    #[test]
    fn submit_flips_to_thanks() {
        let state = apply(WaitlistState::default(), WaitlistAction::Input("person@example.com".into()));
        let state = apply(state, WaitlistAction::Submit);
        assert!(state.submitted);
        assert_eq!(state.email, "person@example.com");
    }

    #[test]
    fn submission_cannot_be_undone() {
        let state = apply(WaitlistState::default(), WaitlistAction::Input("person@example.com".into()));
        let state = apply(state, WaitlistAction::Submit);
        let state = apply(state, WaitlistAction::Input(String::new()));
        let state = apply(state, WaitlistAction::Submit);
        assert!(state.submitted);
        assert_eq!(state.email, "person@example.com");
    }

    #[test]
    fn submit_without_custom_validation() {
        // the browser's type="email" check is the only gate
        let state = apply(WaitlistState::default(), WaitlistAction::Submit);
        assert!(state.submitted);
    }
}
