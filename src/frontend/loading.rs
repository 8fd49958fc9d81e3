use crate::content::{LOADING_ANIMATION_DATA, LOADING_CAPTION};
use crate::motion::ORBITERS;
use gloo_net::http::Request;
use js_sys::{Function, Object, Reflect};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element};
use yew::prelude::*;

async fn fetch_animation_data(path: &str) -> Option<JsValue> {
    let response = Request::get(path).send().await.ok()?;
    if !response.ok() {
        return None;
    }
    let text = response.text().await.ok()?;
    js_sys::JSON::parse(&text).ok()
}

fn set_option(options: &Object, key: &str, value: &JsValue) -> Option<()> {
    Reflect::set(options, &JsValue::from_str(key), value)
        .ok()
        .filter(|stored| *stored)
        .map(|_| ())
}

/// Hands the data to the page's `lottie` player, if one was loaded.
fn start_player(container: &Element, data: &JsValue) -> Option<JsValue> {
    let window_js: JsValue = window()?.into();
    let lottie = Reflect::get(&window_js, &JsValue::from_str("lottie")).ok()?;
    if lottie.is_undefined() || lottie.is_null() {
        return None;
    }

    let load_animation = Reflect::get(&lottie, &JsValue::from_str("loadAnimation"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;

    let options = Object::new();
    set_option(&options, "container", container.as_ref())?;
    set_option(&options, "renderer", &JsValue::from_str("svg"))?;
    set_option(&options, "loop", &JsValue::TRUE)?;
    set_option(&options, "autoplay", &JsValue::TRUE)?;
    set_option(&options, "animationData", data)?;

    load_animation.call1(&lottie, &options).ok()
}

fn destroy_player(player: &JsValue) {
    let destroy = Reflect::get(player, &JsValue::from_str("destroy"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());

    if let Some(destroy) = destroy {
        let _ = destroy.call0(player);
    }
}

#[function_component(LoadingAnimation)]
pub fn loading_animation() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with((), move |_| {
            let player: Rc<RefCell<Option<JsValue>>> = Rc::new(RefCell::new(None));
            let unmounted = Rc::new(Cell::new(false));

            {
                let player = player.clone();
                let unmounted = unmounted.clone();
                spawn_local(async move {
                    let Some(data) = fetch_animation_data(LOADING_ANIMATION_DATA).await else {
                        log::warn!("loading animation data unavailable at {LOADING_ANIMATION_DATA}");
                        return;
                    };
                    if unmounted.get() {
                        return;
                    }
                    let Some(element) = container.cast::<Element>() else {
                        return;
                    };
                    match start_player(&element, &data) {
                        Some(started) => *player.borrow_mut() = Some(started),
                        None => log::warn!("vector animation player not present; showing static loader"),
                    }
                });
            }

            move || {
                unmounted.set(true);
                if let Some(started) = player.borrow_mut().take() {
                    destroy_player(&started);
                }
            }
        });
    }

    html! {
        <div class="loader">
            <div class="loader-stage">
                { for ORBITERS.iter().map(|orbiter| html! {
                    <span
                        key={orbiter.slot}
                        class={classes!("orbiter", orbiter.slot)}
                        style={orbiter.style()}
                        aria-hidden="true"
                    >
                        {"🍰"}
                    </span>
                }) }
                <div ref={container} class="loader-animation" aria-hidden="true" />
            </div>
            <p class="loader-caption" role="status">{LOADING_CAPTION}</p>
        </div>
    }
}
