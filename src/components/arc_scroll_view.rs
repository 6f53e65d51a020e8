use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, PageTransitionEvent, TouchEvent};
use yew::prelude::*;

use crate::config::{ArcScrollConfig, FALLBACK_VIEWPORT_HEIGHT};
use crate::haptics::{BackendHandle, EngineLifecycle};
use crate::model::LifecycleEvent;
use crate::state::GestureTracker;
use crate::util::{document_visible, viewport_height};

const BASE_STYLE: &str = "overflow-y:auto; -webkit-overflow-scrolling:touch; height:100%;";

/// A scroll container that answers an overscroll pull with graduated haptics.
///
/// Every scroll and touch prop is forwarded unchanged before the gesture
/// logic sees the event.
#[derive(Properties, PartialEq, Clone)]
pub struct ArcScrollViewProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub onscroll: Option<Callback<Event>>,
    #[prop_or_default]
    pub ontouchstart: Option<Callback<TouchEvent>>,
    #[prop_or_default]
    pub ontouchend: Option<Callback<TouchEvent>>,
    #[prop_or_default]
    pub ontouchcancel: Option<Callback<TouchEvent>>,
    /// Emitted once per crossing of the pull threshold.
    #[prop_or_default]
    pub on_pull_complete: Option<Callback<()>>,
    /// Defaults to the detected platform backend.
    #[prop_or_default]
    pub backend: Option<BackendHandle>,
    /// Defaults to `ArcScrollConfig::load()`.
    #[prop_or_default]
    pub config: Option<ArcScrollConfig>,
}

fn scroll_offset(container: &NodeRef) -> f64 {
    container
        .cast::<Element>()
        .map(|el| el.scroll_top() as f64)
        .unwrap_or(0.0)
}

/// Hands the raw scroll event to the host observer, then samples the pull and
/// plays whatever the gate lets through. The observer always runs, touch or not.
pub fn forward_then_sample(
    forward: impl FnOnce(),
    tracker: &mut GestureTracker,
    lifecycle: &mut EngineLifecycle,
    offset: f64,
) -> Option<f64> {
    forward();
    let fired = tracker.on_scroll(offset);
    if let Some(progress) = fired {
        lifecycle.play_progress(progress);
    }
    fired
}

fn touch_end_callback(
    tracker: Rc<RefCell<GestureTracker>>,
    container: NodeRef,
    forward: Option<Callback<TouchEvent>>,
) -> Callback<TouchEvent> {
    Callback::from(move |e: TouchEvent| {
        // Only the last lifted finger ends the gesture.
        if e.touches().length() == 0 {
            tracker.borrow_mut().on_touch_end(scroll_offset(&container));
        }
        if let Some(cb) = &forward {
            cb.emit(e);
        }
    })
}

#[function_component(ArcScrollView)]
pub fn arc_scroll_view(props: &ArcScrollViewProps) -> Html {
    let container_ref = use_node_ref();
    let tracker = {
        let config = props.config;
        use_mut_ref(move || {
            let config = config.unwrap_or_else(ArcScrollConfig::load);
            let height = viewport_height().unwrap_or(FALLBACK_VIEWPORT_HEIGHT);
            GestureTracker::from_config(&config, height)
        })
    };
    let lifecycle = {
        let backend = props.backend.clone();
        use_mut_ref(move || EngineLifecycle::new(backend.unwrap_or_else(BackendHandle::detect)))
    };

    // Engine follows page visibility for as long as the view is mounted.
    {
        let lifecycle = lifecycle.clone();
        use_effect_with((), move |_| {
            lifecycle.borrow_mut().on_foreground();

            let window = web_sys::window();
            let document = window.as_ref().and_then(|w| w.document());
            let visibility_cb = {
                let lifecycle = lifecycle.clone();
                Closure::wrap(Box::new(move |_e: Event| {
                    let event = if document_visible() {
                        LifecycleEvent::Foreground
                    } else {
                        LifecycleEvent::Background
                    };
                    lifecycle.borrow_mut().dispatch(event);
                }) as Box<dyn FnMut(_)>)
            };
            // A page restored from the back/forward cache comes back with
            // stale platform resources.
            let pageshow_cb = {
                let lifecycle = lifecycle.clone();
                Closure::wrap(Box::new(move |e: PageTransitionEvent| {
                    if e.persisted() {
                        lifecycle.borrow_mut().dispatch(LifecycleEvent::EngineReset);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(doc) = &document {
                let _ = doc.add_event_listener_with_callback(
                    "visibilitychange",
                    visibility_cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback(
                    "pageshow",
                    pageshow_cb.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(doc) = &document {
                    let _ = doc.remove_event_listener_with_callback(
                        "visibilitychange",
                        visibility_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "pageshow",
                        pageshow_cb.as_ref().unchecked_ref(),
                    );
                }
                lifecycle.borrow_mut().on_background();
            }
        });
    }

    let onscroll = {
        let tracker = tracker.clone();
        let lifecycle = lifecycle.clone();
        let container = container_ref.clone();
        let forward = props.onscroll.clone();
        let on_pull_complete = props.on_pull_complete.clone();
        Callback::from(move |e: Event| {
            let offset = scroll_offset(&container);
            let fired = forward_then_sample(
                || {
                    if let Some(cb) = &forward {
                        cb.emit(e);
                    }
                },
                &mut tracker.borrow_mut(),
                &mut lifecycle.borrow_mut(),
                offset,
            );
            if fired.is_some_and(|p| p >= 1.0) {
                if let Some(cb) = &on_pull_complete {
                    cb.emit(());
                }
            }
        })
    };
    let ontouchstart = {
        let tracker = tracker.clone();
        let forward = props.ontouchstart.clone();
        Callback::from(move |e: TouchEvent| {
            tracker.borrow_mut().on_touch_begin();
            if let Some(cb) = &forward {
                cb.emit(e);
            }
        })
    };
    let ontouchend = touch_end_callback(
        tracker.clone(),
        container_ref.clone(),
        props.ontouchend.clone(),
    );
    let ontouchcancel =
        touch_end_callback(tracker, container_ref.clone(), props.ontouchcancel.clone());

    let style = if props.style.is_empty() {
        BASE_STYLE.to_string()
    } else {
        format!("{BASE_STYLE} {}", props.style)
    };

    html! {
        <div
            ref={container_ref}
            class={props.class.clone()}
            style={style}
            onscroll={onscroll}
            ontouchstart={ontouchstart}
            ontouchend={ontouchend}
            ontouchcancel={ontouchcancel}
        >
            { for props.children.iter() }
        </div>
    }
}
