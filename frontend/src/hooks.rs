use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DomError};
use crate::scroll::{self, ScrollState, SectionBounds};

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Flips to `true` the first time the referenced element scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match observe_once(node, revealed.clone()) {
                    Ok(pair) => Some(pair),
                    Err(err) => {
                        // Never leave content hidden because the observer is unavailable
                        log::warn!("reveal observer unavailable: {}", err);
                        revealed.set(true);
                        None
                    }
                };
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

fn observe_once(
    node: &NodeRef,
    revealed: UseStateHandle<bool>,
) -> Result<(IntersectionObserver, RevealCallback), DomError> {
    let element = node
        .cast::<Element>()
        .ok_or_else(|| DomError::MissingElement("reveal target".to_string()))?;

    let callback = RevealCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            revealed.set(true);
            observer.disconnect();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin("-100px");
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&element);

    Ok((observer, callback))
}

/// Tracks reading progress and the section under the viewport centre.
#[hook]
pub fn use_scroll_tracker(section_ids: &'static [&'static str]) -> ScrollState {
    let state = use_state_eq(|| scroll::initial_state(section_ids));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |ids: &&'static [&'static str]| {
                let ids = *ids;
                let last = Rc::new(Cell::new(*state));

                let update = move || match measure(ids, last.get()) {
                    Ok(next) => {
                        last.set(next);
                        state.set(next);
                    }
                    Err(err) => log::warn!("scroll tracking failed: {}", err),
                };

                let listener = Closure::<dyn Fn()>::new(update.clone());
                let window = dom::window().ok();
                if let Some(window) = &window {
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                    {
                        log::warn!("could not attach scroll listener: {:?}", err);
                    }
                }

                // Initial measurement
                update();

                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                    }
                }
            },
            section_ids,
        );
    }

    *state
}

fn measure(ids: &[&'static str], previous: ScrollState) -> Result<ScrollState, DomError> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let scroll_y = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let scroll_height = document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);

    let sections: Vec<SectionBounds> = ids
        .iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: *id,
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect();

    Ok(scroll::next_state(
        previous,
        scroll_y,
        scroll_height,
        viewport_height,
        &sections,
    ))
}

/// Callback that smooth-scrolls to a section id, logging ids that are not on the page.
#[hook]
pub fn use_section_navigator() -> Callback<&'static str> {
    use_callback(
        |id: &'static str, _| {
            log::debug!("navigating to section {}", id);
            if let Err(err) = dom::scroll_to_section(id) {
                log::warn!("cannot navigate to section: {}", err);
            }
        },
        (),
    )
}

/// Lifecycle of a form whose submission is only simulated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

impl SubmitPhase {
    /// Only an idle form can start submitting.
    pub fn begin(self) -> Option<SubmitPhase> {
        match self {
            SubmitPhase::Idle => Some(SubmitPhase::Submitting),
            _ => None,
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }
}

/// Returns the current phase and a callback that starts the fake round trip.
/// The pending timer is dropped with the component.
#[hook]
pub fn use_simulated_submit(form: &'static str) -> (SubmitPhase, Callback<()>) {
    let phase = use_state_eq(|| SubmitPhase::Idle);
    let timer = use_mut_ref(|| None::<Timeout>);

    let submit = {
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            let Some(next) = phase.begin() else {
                return;
            };
            log::info!("{} form submitted", form);
            phase.set(next);
            let phase = phase.clone();
            *timer.borrow_mut() = Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                log::debug!("{} form submission completed", form);
                phase.set(SubmitPhase::Submitted);
            }));
        })
    };

    (*phase, submit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_phase_only_begins_when_idle() {
        assert_eq!(SubmitPhase::Idle.begin(), Some(SubmitPhase::Submitting));
        assert_eq!(SubmitPhase::Submitting.begin(), None);
        assert_eq!(SubmitPhase::Submitted.begin(), None);
        assert!(SubmitPhase::Submitting.is_busy());
        assert!(!SubmitPhase::Submitted.is_busy());
    }
}
