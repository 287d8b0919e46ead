use std::fmt::Debug;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{NavLink, CTA_ID};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: offset > config::SCROLL_THRESHOLD_PX,
                ..*self
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..*self
            },
            NavAction::CloseMenu => NavState {
                menu_open: false,
                ..*self
            },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Logs a failed browser call and hands back the value on success.
fn warn_on_err<T, E: Debug>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{}: {:?}", context, err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub links: &'static [NavLink],
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let state = use_reducer_eq(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().and_then(|window| {
                let window_clone = window.clone();
                let on_scroll = Closure::wrap(Box::new(move || {
                    if let Some(offset) = warn_on_err("could not read scroll offset", window_clone.scroll_y()) {
                        dispatcher.dispatch(NavAction::Scrolled(offset));
                    }
                }) as Box<dyn FnMut()>);

                if let Err(err) = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()) {
                    warn!("scroll listener not registered: {:?}", err);
                    return None;
                }
                // pick up the offset when the page is reloaded mid-scroll
                let initial = on_scroll.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&wasm_bindgen::JsValue::NULL);
                warn_on_err("initial scroll check failed", initial);
                Some((window.clone(), on_scroll))
            });

            move || {
                if let Some((window, on_scroll)) = listener {
                    warn_on_err(
                        "scroll listener not removed",
                        window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref()),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::CloseMenu))
    };

    let bar_class = classes!("bar", state.menu_open.then_some("open"));
    let cta_href = format!("#{}", CTA_ID);

    html! {
        <nav class={classes!("navbar", state.scrolled.then_some("scrolled"))}>
            <div class="nav-inner">
                <div class="logo">
                    <img class="logo-image logo-image-nav" src={config::logo_src()} alt={props.brand.clone()} />
                </div>
                <div class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <a href={link.anchor}>{link.label}</a>
                    }) }
                </div>
                <a href={cta_href.clone()} class="btn-primary nav-cta">{"Get Early Access"}</a>
                <button
                    class="hamburger"
                    onclick={toggle_menu}
                    aria-label="Menu"
                    aria-expanded={state.menu_open.to_string()}
                >
                    <span class={bar_class.clone()}></span>
                    <span class={bar_class.clone()}></span>
                    <span class={bar_class}></span>
                </button>
            </div>
            {
                if state.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for props.links.iter().map(|link| html! {
                                <a href={link.anchor} onclick={close_menu.clone()}>{link.label}</a>
                            }) }
                            <a href={cta_href.clone()} class="btn-primary" onclick={close_menu.clone()}>{"Get Early Access"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1.25rem 0;
                    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(10, 12, 20, 0.92);
                    backdrop-filter: blur(12px);
                    padding: 0.75rem 0;
                    box-shadow: 0 1px 0 rgba(255, 255, 255, 0.06);
                }
                .nav-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .logo-image-nav {
                    height: 32px;
                    width: auto;
                }
                .nav-links {
                    display: flex;
                    gap: 1.75rem;
                    margin-left: auto;
                }
                .nav-links a, .mobile-menu a {
                    color: #c9cbd6;
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-links a:hover {
                    color: #fff;
                }
                .hamburger {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    margin-left: auto;
                }
                .bar {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .bar.open:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .bar.open:nth-child(2) { opacity: 0; }
                .bar.open:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: rgba(10, 12, 20, 0.98);
                }
                @media (max-width: 860px) {
                    .nav-links, .nav-cta { display: none; }
                    .hamburger { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let state = NavState::default();
        assert!(!apply(state, NavAction::Scrolled(0.0)).scrolled);
        assert!(!apply(state, NavAction::Scrolled(20.0)).scrolled);
        assert!(apply(state, NavAction::Scrolled(20.5)).scrolled);
        assert!(apply(state, NavAction::Scrolled(800.0)).scrolled);
    }

    #[test]
    fn scroll_is_recomputed_every_event() {
        let state = apply(NavState::default(), NavAction::Scrolled(300.0));
        assert!(state.scrolled);
        let state = apply(state, NavAction::Scrolled(5.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn hamburger_toggles_menu() {
        let state = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(state.menu_open);
        let state = apply(state, NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn link_click_always_closes() {
        let open = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(!apply(open, NavAction::CloseMenu).menu_open);
        assert!(!apply(NavState::default(), NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn flags_are_independent() {
        let state = apply(NavState::default(), NavAction::ToggleMenu);
        let state = apply(state, NavAction::Scrolled(100.0));
        assert!(state.menu_open && state.scrolled);
        let state = apply(state, NavAction::CloseMenu);
        assert!(state.scrolled);
    }

    #[test]
    fn failed_browser_calls_yield_nothing() {
        assert_eq!(warn_on_err("scroll offset", Ok::<f64, &str>(42.0)), Some(42.0));
        assert_eq!(warn_on_err("listener removal", Err::<(), &str>("detached window")), None);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(3.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
