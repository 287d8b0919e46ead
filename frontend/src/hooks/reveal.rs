use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report the crossing ratio with some float noise.
const RATIO_EPSILON: f64 = 1e-3;

/// One-way visibility flag for a section. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reveal {
    pub visible: bool,
}

impl Reveal {
    pub fn observe(self, intersecting: bool, ratio: f64, threshold: f64) -> Self {
        if self.visible {
            return self;
        }
        Self {
            visible: intersecting && ratio + RATIO_EPSILON >= threshold,
        }
    }
}

pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Class list for an element that fades in with its section.
pub fn fade_class(visible: bool) -> Classes {
    classes!("fade-in", visible.then_some("visible"))
}

/// Live observer plus the JS callback it calls into. Dropping it disconnects
/// the observer before the callback is freed.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(node: &NodeRef, threshold: f64, reveal: UseStateHandle<Reveal>) -> Option<Observation> {
    let element = node.cast::<Element>()?;
    let fallback = reveal.clone();
    let mut state = *reveal;

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            state = state.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold);
        }
        if state.visible {
            debug!("section revealed at threshold {}", threshold);
            reveal.set(state);
            // nothing left to watch for
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing section immediately: {:?}", err);
            fallback.set(Reveal { visible: true });
            None
        }
    }
}

/// Returns a ref to attach to the tracked element and whether it has been
/// on screen yet. The observer lives as long as the component does.
#[hook]
pub fn use_in_view(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let reveal = use_state_eq(Reveal::default);

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |threshold| {
                let observation = observe(&node, *threshold, reveal);
                move || drop(observation)
            },
            clamp_threshold(threshold),
        );
    }

    (node, reveal.visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_threshold_reached() {
        let reveal = Reveal::default();
        assert!(!reveal.visible);

        let reveal = reveal.observe(false, 0.0, 0.15);
        assert!(!reveal.visible);
        let reveal = reveal.observe(true, 0.05, 0.15);
        assert!(!reveal.visible);
        let reveal = reveal.observe(true, 0.15, 0.15);
        assert!(reveal.visible);
    }

    #[test]
    fn stays_visible_after_leaving_viewport() {
        let reveal = Reveal::default().observe(true, 0.6, 0.15);
        let reveal = reveal.observe(false, 0.0, 0.15);
        assert!(reveal.visible);
        let reveal = reveal.observe(true, 0.01, 0.15);
        assert!(reveal.visible);
    }

    #[test]
    fn tolerates_rounding_at_the_crossing() {
        assert!(Reveal::default().observe(true, 0.1499, 0.15).visible);
    }

    #[test]
    fn non_intersecting_entry_never_reveals() {
        assert!(!Reveal::default().observe(false, 1.0, 0.15).visible);
    }

    #[test]
    fn zero_threshold_reveals_on_any_intersection() {
        assert!(Reveal::default().observe(true, 0.0, 0.0).visible);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(clamp_threshold(-1.0), 0.0);
        assert_eq!(clamp_threshold(2.5), 1.0);
        assert_eq!(clamp_threshold(0.15), 0.15);
        assert_eq!(clamp_threshold(f64::NAN), 0.0);
    }
}
