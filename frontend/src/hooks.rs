use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_ROOT_MARGIN;
use crate::error::{self, DomError};
use crate::widgets::counter::{tick_interval_ms, Counter};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    node: &NodeRef,
    on_visible: UseStateSetter<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), DomError> {
    let element = node
        .cast::<Element>()
        .ok_or_else(|| DomError::Observer("node is not mounted".to_string()))?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible.set(true);
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(DomError::observer)?;
    observer.observe(&element);

    Ok((observer, callback))
}

/// Becomes true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match observe_once(node, in_view.setter()) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        // Without an observer nothing would ever appear.
                        warn!("visibility tracking unavailable: {}", e);
                        in_view.set(true);
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

    *in_view
}

fn listen_scroll(on_scroll: UseStateSetter<f64>) -> Result<Box<dyn FnOnce()>, DomError> {
    let window = error::window()?;
    let reader = window.clone();
    let callback = Closure::<dyn Fn()>::new(move || {
        if let Ok(y) = reader.scroll_y() {
            on_scroll.set(y);
        }
    });
    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .map_err(DomError::listener)?;

    Ok(Box::new(move || {
        if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            warn!("failed to remove scroll listener: {:?}", e);
        }
    }))
}

/// Vertical scroll offset of the page, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| {
        error::window()
            .ok()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    });

    {
        let setter = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match listen_scroll(setter) {
                    Ok(destructor) => destructor,
                    Err(e) => {
                        warn!("scroll tracking unavailable: {}", e);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    *scroll_y
}

/// Counts from 0 to `target` over `duration_ms` once `visible` turns true.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, visible: bool) -> u32 {
    let displayed = use_state(|| 0u32);
    let counter = use_mut_ref(|| Counter::new(target));
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let setter = displayed.setter();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible && counter.borrow_mut().start(duration_ms) {
                    debug!("counter to {} started", target);
                    let ticking = counter.clone();
                    let handle = interval_handle.clone();
                    let period = tick_interval_ms().round() as u32;
                    let interval = Interval::new(period, move || {
                        let more = {
                            let mut counter = ticking.borrow_mut();
                            let more = counter.tick();
                            setter.set(counter.displayed());
                            if !more {
                                debug!("counter settled: {:?}", counter.phase());
                            }
                            more
                        };
                        if !more {
                            handle.borrow_mut().take();
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                        counter.borrow_mut().cancel();
                    }
                }
            },
            visible,
        );
    }

    *displayed
}
