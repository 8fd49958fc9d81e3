use crate::lifecycle::TimedPhase;
use crate::motion::{scroll_progress, ResponsiveMode, ScrollRange, SectionBounds, MOBILE_BREAKPOINT_PX};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn window_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn current_mode() -> ResponsiveMode {
    let (width, _) = viewport_size();
    ResponsiveMode::from_width(width, MOBILE_BREAKPOINT_PX)
}

/// Distance from the document top, summed over the offset-parent chain.
fn document_offset_top(element: &HtmlElement) -> f64 {
    let mut top = f64::from(element.offset_top());
    let mut parent = element.offset_parent();

    while let Some(next) = parent.and_then(|p| p.dyn_into::<HtmlElement>().ok()) {
        top += f64::from(next.offset_top());
        parent = next.offset_parent();
    }

    top
}

fn section_bounds(node: &NodeRef) -> Option<SectionBounds> {
    let element = node.cast::<HtmlElement>()?;
    Some(SectionBounds::from_layout(
        document_offset_top(&element),
        f64::from(element.offset_height()),
        window_scroll_y(),
    ))
}

#[derive(Properties, PartialEq)]
pub struct ResponsiveProviderProps {
    pub children: Html,
}

#[function_component(ResponsiveProvider)]
pub fn responsive_provider(props: &ResponsiveProviderProps) -> Html {
    let mode = use_state_eq(current_mode);

    {
        let mode = mode.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "resize", move |_| mode.set(current_mode()))
            });
            move || drop(listener)
        });
    }

    let value = *mode;

    html! {
        <ContextProvider<ResponsiveMode> context={value}>
            {props.children.clone()}
        </ContextProvider<ResponsiveMode>>
    }
}

#[hook]
pub fn use_responsive_mode() -> ResponsiveMode {
    use_context::<ResponsiveMode>().unwrap_or_default()
}

/// Arms one timeout per phase. Changing phase or unmounting drops it, which
/// cancels the pending callback.
#[hook]
pub fn use_phase_timer<P>(phase: P, on_elapse: Callback<()>)
where
    P: TimedPhase + 'static,
{
    use_effect_with(phase, move |phase| {
        let timeout = phase.dwell().map(|dwell| {
            let millis = u32::try_from(dwell.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || on_elapse.emit(()))
        });
        move || drop(timeout)
    });
}

/// Forwards a window event for as long as the component is mounted.
#[hook]
pub fn use_window_event(event: &'static str, on_event: Callback<()>) {
    use_effect_with(event, move |event| {
        let listener = window().map(|win| {
            EventListener::new(&win, *event, move |_| on_event.emit(()))
        });
        move || drop(listener)
    });
}

/// Scroll-linked progress of `node` through `range`, re-read on every scroll
/// and resize with no smoothing.
#[hook]
pub fn use_scroll_progress(node: &NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        let node = node.clone();
        use_effect_with(range, move |range| {
            let range = *range;
            let measure = Rc::new(move || {
                if let Some(bounds) = section_bounds(&node) {
                    let (_, viewport_height) = viewport_size();
                    progress.set(scroll_progress(bounds, viewport_height, range));
                }
            });
            measure();

            let listeners = window().map(|win| {
                let on_scroll = {
                    let measure = measure.clone();
                    EventListener::new(&win, "scroll", move |_| measure())
                };
                let on_resize = {
                    let measure = measure.clone();
                    EventListener::new(&win, "resize", move |_| measure())
                };
                [on_scroll, on_resize]
            });
            move || drop(listeners)
        });
    }

    *progress
}

/// Whether `node` is inside the viewport, shrunk by `margin_px` at the
/// bottom. With `once`, the flag latches on first entry.
#[hook]
pub fn use_in_view(node: &NodeRef, once: bool, margin_px: u32) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with((once, margin_px), move |&(once, margin_px)| {
            let observer = node.cast::<Element>().and_then(|element| {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let intersecting = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());

                        if intersecting {
                            visible.set(true);
                            if once {
                                observer.disconnect();
                            }
                        } else if !once {
                            visible.set(false);
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(&format!("0px 0px -{margin_px}px 0px"));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok()?;
                observer.observe(&element);

                Some((observer, callback))
            });

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    *visible
}
