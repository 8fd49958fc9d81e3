mod about;
mod contact;
mod hero;
mod hooks;
mod loading;
mod navbar;
mod sprinkles;

use crate::content::{FOOTER_NOTE, SITE_META};
use crate::lifecycle::{OverlayPhase, PagePhase, TimedPhase};
use about::AboutSection;
use contact::ContactSection;
use hero::HeroSection;
use hooks::{use_in_view, use_phase_timer, ResponsiveProvider};
use loading::LoadingAnimation;
use navbar::Navbar;
use web_sys::window;
use yew::prelude::*;

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_motion_preference(reduced: bool) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let value = if reduced { "reduced" } else { "full" };
            let _ = root.set_attribute("data-motion", value);
        }
    }
}

fn apply_site_meta() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(SITE_META.title);

    if let Ok(Some(description)) = document.query_selector("meta[name=\"description\"]") {
        let _ = description.set_attribute("content", SITE_META.description);
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
pub(crate) struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    pub children: Html,
}

#[function_component(ExternalLink)]
pub(crate) fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={props.label.clone()}
        >
            {props.children.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(100)]
    pub margin_px: u32,
    pub children: Html,
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub(crate) fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(&node, true, props.margin_px);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("is-visible"))}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{format!("© {} {FOOTER_NOTE}", current_year())}</p>
        </footer>
    }
}

#[function_component(Page)]
fn page() -> Html {
    let phase = use_state_eq(PagePhase::default);
    let overlay = use_state_eq(OverlayPhase::default);

    {
        let phase = phase.clone();
        let current = *phase;
        use_phase_timer(current, Callback::from(move |_| phase.set(current.elapse())));
    }

    {
        let overlay = overlay.clone();
        let current = *overlay;
        use_phase_timer(current, Callback::from(move |_| overlay.set(current.elapse())));
    }

    {
        let overlay = overlay.clone();
        use_effect_with(*phase, move |phase| {
            log::info!("page phase: {phase:?}");
            overlay.set(overlay.for_page(*phase));
            || ()
        });
    }

    let content = *phase == PagePhase::Content;

    html! {
        <main class="page-root">
            if content {
                <div class="page-content">
                    <Navbar />
                    <HeroSection />
                    <AboutSection />
                    <ContactSection />
                    <Footer />
                </div>
            }
            if overlay.is_mounted() {
                <div
                    class={classes!(
                        "loading-overlay",
                        (*overlay == OverlayPhase::Exiting).then_some("is-exiting")
                    )}
                    aria-hidden={content.to_string()}
                >
                    <LoadingAnimation />
                </div>
            }
        </main>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        apply_site_meta();
        apply_motion_preference(prefers_reduced_motion());
        || ()
    });

    html! {
        <ResponsiveProvider>
            <Page />
        </ResponsiveProvider>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting {}", SITE_META.title);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
