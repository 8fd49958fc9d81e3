use super::hooks::{use_responsive_mode, use_scroll_progress};
use super::sprinkles::Sprinkles;
use super::ExternalLink;
use crate::content::{
    HERO_CTA_LABEL, HERO_CTA_URL, HERO_IMAGE, HERO_IMAGE_ALT, HERO_TAGLINE, HERO_TITLE,
    STEAM_TEXTURE,
};
use crate::motion::{
    floating_icon_keyframes_css, floating_icon_placements, steam_layers, title_letters,
    HeroParallax, ScrollRange,
};
use yew::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let mode = use_responsive_mode();
    let node = use_node_ref();
    let progress = use_scroll_progress(&node, ScrollRange::StartToExit);
    let parallax = HeroParallax::from_progress(progress);
    let letters = title_letters(HERO_TITLE);
    let steam = steam_layers(mode);

    html! {
        <section id="home" ref={node.clone()} class="hero">
            <div class="hero-stage" style={parallax.to_style()}>
                <div class="hero-backdrop" aria-hidden="true">
                    <div class="hero-gradient" />
                    <div class="steam-field">
                        { for steam.iter().enumerate().map(|(i, layer)| html! {
                            <div key={i} class="steam-layer" style={layer.style(STEAM_TEXTURE)} />
                        }) }
                    </div>
                </div>

                <Sprinkles reduced_for_mobile={true} />

                if !mode.is_mobile() {
                    <FloatingIcons />
                }

                <div class="hero-body">
                    <div class="hero-portrait">
                        <img class="hero-image" src={HERO_IMAGE} alt={HERO_IMAGE_ALT} />
                        <div class="hero-pulse" aria-hidden="true" />
                    </div>

                    <h1 class="hero-title" aria-label={HERO_TITLE}>
                        { for letters.iter().enumerate().map(|(i, letter)| html! {
                            <span
                                key={i}
                                class="hero-letter"
                                aria-hidden="true"
                                style={format!("animation-delay: {:.2}s;", letter.delay)}
                            >
                                {letter.glyph.to_string()}
                            </span>
                        }) }
                    </h1>

                    <p class="hero-tagline">{HERO_TAGLINE}</p>

                    <div class="hero-cta">
                        <ExternalLink href={HERO_CTA_URL} class={classes!("cta-button")}>
                            {HERO_CTA_LABEL}
                        </ExternalLink>
                    </div>

                    <div class="scroll-hint" aria-hidden="true">
                        <svg width="24" height="24" viewBox="0 0 24 24" fill="none">
                            <path
                                d="M12 5V19M12 19L5 12M12 19L19 12"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                        </svg>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FloatingIcons)]
fn floating_icons() -> Html {
    let keyframes = use_memo((), |_| floating_icon_keyframes_css());
    let placements = use_memo((), |_| floating_icon_placements());

    html! {
        <div class="floating-icons" aria-hidden="true">
            <style>{(*keyframes).clone()}</style>
            { for placements.iter().enumerate().map(|(i, placement)| html! {
                <span
                    key={i}
                    class={classes!("floating-icon", placement.glyph.tone)}
                    style={placement.style()}
                >
                    {placement.glyph.symbol}
                </span>
            }) }
        </div>
    }
}
