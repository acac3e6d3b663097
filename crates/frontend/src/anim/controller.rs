//! Animation binding runtime.
//!
//! Interprets [`AnimationSpec`]s against the currently rendered DOM.
//! One observer serves every enter binding and one scroll listener
//! serves every scrub binding; both are torn down on release.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::progress::{resolve_region, scrub_progress};
use super::spec::{AnimationSpec, Trigger, VisualState};

/// Custom property written by scrub bindings.
const SWEEP_PROGRESS_PROP: &str = "--sweep-progress";

/// Fraction of an element that must be visible before an enter fires.
const ENTER_THRESHOLD: f64 = 0.2;

/// Delay before a mount timeline starts, so the initial styles get a
/// paint of their own and the transition actually runs.
const FLUSH_DELAY_MS: u32 = 20;

/// An enter binding armed and waiting for its viewport trigger.
struct EnterBinding {
    element: HtmlElement,
    spec: AnimationSpec,
}

/// A scrub binding with its resolved scroll region.
struct ScrubBinding {
    element: HtmlElement,
    start: f64,
    end: f64,
}

#[derive(Default)]
struct Bindings {
    enters: Vec<EnterBinding>,
    scrubs: Vec<ScrubBinding>,
    /// Live timeout handles; dropping one cancels it.
    pending: Vec<Timeout>,
    /// Markers whose one-shot timeline already played. Survives
    /// re-binds so a new pass applies their settled state instead of
    /// replaying the entrance.
    completed: HashSet<&'static str>,
}

/// Owns every live binding.
///
/// `bind` is idempotent with respect to the rendered elements: each
/// call releases the previous pass before arming the next one, so
/// stale observers and listeners never accumulate.
#[derive(Default)]
pub struct Animator {
    bindings: Rc<RefCell<Bindings>>,
    observer: Option<IntersectionObserver>,
    observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    scroll_callback: Option<Closure<dyn FnMut()>>,
}

impl Animator {
    /// Bind the given specs to the currently rendered marker elements.
    pub fn bind(&mut self, specs: &[AnimationSpec]) {
        self.release();

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let viewport = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let scroll_y = window.scroll_y().unwrap_or(0.0);

        for spec in specs {
            let matched = document.get_elements_by_class_name(spec.marker);
            for index in 0..matched.length() {
                let Some(element) = matched.item(index) else {
                    continue;
                };
                let Ok(element) = element.dyn_into::<HtmlElement>() else {
                    continue;
                };
                self.arm(*spec, element, index as usize, scroll_y, viewport);
            }
        }

        self.install_observer();
        self.install_scroll_listener(&window);
    }

    /// Drop every live binding and detach observers and listeners.
    ///
    /// Paired with `bind`; also invoked from the owning effect's
    /// destructor on unmount.
    pub fn release(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_callback = None;

        if let Some(callback) = self.scroll_callback.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }

        let mut bindings = self.bindings.borrow_mut();
        bindings.enters.clear();
        bindings.scrubs.clear();
        bindings.pending.clear();
        // `completed` survives: one-shots never replay.
    }

    /// Arm one spec against one matched element.
    fn arm(
        &mut self,
        spec: AnimationSpec,
        element: HtmlElement,
        index: usize,
        scroll_y: f64,
        viewport: f64,
    ) {
        match spec.trigger {
            Trigger::Mount => {
                if self.bindings.borrow().completed.contains(spec.marker) {
                    apply_state(&element, &spec.to);
                    return;
                }

                apply_state(&element, &spec.from_for(index));
                if spec.suppress_pointer {
                    suppress_pointer(&element);
                }

                let mut bindings = self.bindings.borrow_mut();

                let start = {
                    let shared = Rc::clone(&self.bindings);
                    let target = element.clone();
                    Timeout::new(FLUSH_DELAY_MS, move || {
                        start_transition(&target, &spec);
                        shared.borrow_mut().completed.insert(spec.marker);
                    })
                };
                bindings.pending.push(start);

                if spec.suppress_pointer {
                    let target = element;
                    let restore =
                        Timeout::new(FLUSH_DELAY_MS + spec.timing.total_ms(), move || {
                            restore_pointer(&target);
                        });
                    bindings.pending.push(restore);
                }
            }
            Trigger::Enter => {
                if self.bindings.borrow().completed.contains(spec.marker) {
                    apply_state(&element, &spec.to);
                    return;
                }

                apply_state(&element, &spec.from_for(index));
                if spec.suppress_pointer {
                    suppress_pointer(&element);
                }
                self.bindings
                    .borrow_mut()
                    .enters
                    .push(EnterBinding { element, spec });
            }
            Trigger::Scrub(region) => {
                let rect = element.get_bounding_client_rect();
                let doc_top = rect.top() + scroll_y;
                let (start, end) = resolve_region(region, doc_top, rect.height(), viewport);

                // Seed the sweep before the first scroll event.
                apply_sweep(&element, scrub_progress(scroll_y, start, end));

                self.bindings
                    .borrow_mut()
                    .scrubs
                    .push(ScrubBinding { element, start, end });
            }
        }
    }

    /// One IntersectionObserver for every armed enter binding.
    fn install_observer(&mut self) {
        if self.bindings.borrow().enters.is_empty() {
            return;
        }

        let shared = Rc::clone(&self.bindings);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    observer.unobserve(&target);

                    let mut bindings = shared.borrow_mut();
                    let Some(pos) = bindings
                        .enters
                        .iter()
                        .position(|binding| same_element(&binding.element, &target))
                    else {
                        continue;
                    };

                    let EnterBinding { element, spec } = bindings.enters.remove(pos);
                    start_transition(&element, &spec);
                    bindings.completed.insert(spec.marker);

                    if spec.suppress_pointer {
                        let restore = Timeout::new(spec.timing.total_ms(), move || {
                            restore_pointer(&element);
                        });
                        bindings.pending.push(restore);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ENTER_THRESHOLD));

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };

        for binding in self.bindings.borrow().enters.iter() {
            observer.observe(&binding.element);
        }

        self.observer = Some(observer);
        self.observer_callback = Some(callback);
    }

    /// One window scroll listener for every armed scrub binding.
    fn install_scroll_listener(&mut self, window: &web_sys::Window) {
        if self.bindings.borrow().scrubs.is_empty() {
            return;
        }

        let shared = Rc::clone(&self.bindings);
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);

            for scrub in shared.borrow().scrubs.iter() {
                apply_sweep(
                    &scrub.element,
                    scrub_progress(scroll_y, scrub.start, scrub.end),
                );
            }
        });

        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.scroll_callback = Some(callback);
        }
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.release();
    }
}

/// Whether an armed element is the observer entry's target.
fn same_element(armed: &HtmlElement, target: &Element) -> bool {
    let armed: &JsValue = armed.as_ref();
    let target: &JsValue = target.as_ref();
    armed == target
}

/// Write a visual state as inline styles.
fn apply_state(element: &HtmlElement, state: &VisualState) {
    let style = element.style();
    let _ = style.set_property("opacity", &state.opacity.to_string());
    let _ = style.set_property("transform", &state.transform());
}

/// Install the spec's transition and move to its target state.
fn start_transition(element: &HtmlElement, spec: &AnimationSpec) {
    let _ = element
        .style()
        .set_property("transition", &spec.timing.transition());
    apply_state(element, &spec.to);
}

/// Write scrub progress as a custom property in `[0, 1]`.
fn apply_sweep(element: &HtmlElement, progress: f64) {
    let _ = element
        .style()
        .set_property(SWEEP_PROGRESS_PROP, &format!("{progress:.4}"));
}

fn suppress_pointer(element: &HtmlElement) {
    let _ = element.style().set_property("pointer-events", "none");
}

fn restore_pointer(element: &HtmlElement) {
    let _ = element.style().remove_property("pointer-events");
}
