use super::hooks::{use_window_event, window_scroll_y};
use super::ExternalLink;
use crate::content::{BRAND, MENU_CTA_LABEL, MENU_CTA_URL, NAV_ITEMS};
use crate::lifecycle::{NavAction, NavState};
use std::rc::Rc;
use yew::prelude::*;

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer_eq(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_window_event(
            "scroll",
            Callback::from(move |_| dispatcher.dispatch(NavAction::Scrolled(window_scroll_y()))),
        );
    }

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(NavAction::Scrolled(window_scroll_y()));
            || ()
        });
    }

    let on_open = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::OpenMenu))
    };

    let on_close = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::CloseMenu))
    };

    html! {
        <>
            <nav class={classes!("navbar", nav.scrolled.then_some("is-scrolled"))}>
                <div class="navbar-inner">
                    <a href="#home" class="brand">{BRAND}</a>
                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.label} href={item.anchor} class="nav-link">{item.label}</a>
                        }) }
                    </div>
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Open menu"
                        aria-expanded={nav.menu_open.to_string()}
                        onclick={on_open}
                    >
                        <span aria-hidden="true">{"☰"}</span>
                    </button>
                </div>
            </nav>
            if nav.menu_open {
                <MobileMenu on_close={on_close} />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MobileMenuProps {
    on_close: Callback<()>,
}

#[function_component(MobileMenu)]
fn mobile_menu(props: &MobileMenuProps) -> Html {
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mobile-menu" role="dialog" aria-label="Site menu">
            <div class="mobile-menu-header">
                <span class="brand">{BRAND}</span>
                <button type="button" class="menu-toggle" aria-label="Close menu" onclick={close_button}>
                    <span aria-hidden="true">{"✕"}</span>
                </button>
            </div>
            <div class="mobile-menu-links">
                { for NAV_ITEMS.iter().enumerate().map(|(i, item)| {
                    let on_close = props.on_close.clone();
                    html! {
                        <a
                            key={item.label}
                            href={item.anchor}
                            class="mobile-menu-link"
                            style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}
                            onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}
                        >
                            {item.label}
                        </a>
                    }
                }) }
            </div>
            <div class="mobile-menu-footer">
                <ExternalLink href={MENU_CTA_URL} class={classes!("cta-button", "is-wide")}>
                    <span aria-hidden="true">{"◎ "}</span>
                    {MENU_CTA_LABEL}
                </ExternalLink>
            </div>
        </div>
    }
}
