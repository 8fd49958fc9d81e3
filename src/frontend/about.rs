use super::hooks::{use_in_view, use_responsive_mode, use_scroll_progress};
use super::{ExternalLink, Reveal};
use crate::content::{TimelineEntry, ABOUT_CLOSING, ABOUT_HEADING, ABOUT_INTRO, TIMELINE};
use crate::motion::{generate_background_cakes, ScrollRange, SWIRLS};
use yew::prelude::*;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let mode = use_responsive_mode();
    let node = use_node_ref();
    let progress = use_scroll_progress(&node, ScrollRange::EnterToExit);
    let line_style = format!("transform: scaleY({progress:.4});");

    html! {
        <section id="about" ref={node.clone()} class="about">
            if !mode.is_mobile() {
                <AboutBackdrop />
            }

            <div class="section-inner">
                <Reveal class={classes!("section-heading")}>
                    <h2>{ABOUT_HEADING}</h2>
                    <p>{ABOUT_INTRO}</p>
                </Reveal>

                <div class={classes!("timeline", mode.is_mobile().then_some("is-compact"))}>
                    <div class="timeline-line" style={line_style} />
                    <div class="timeline-items">
                        { for TIMELINE.iter().enumerate().map(|(index, entry)| html! {
                            <TimelineItem key={index} entry={*entry} index={index} />
                        }) }
                    </div>
                </div>

                <Reveal class={classes!("about-closing")}>
                    <p>{ABOUT_CLOSING}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(AboutBackdrop)]
fn about_backdrop() -> Html {
    let cakes = use_memo((), |_| {
        let mut rng = fastrand::Rng::new();
        generate_background_cakes(&mut rng)
    });

    html! {
        <div class="about-backdrop" aria-hidden="true">
            { for cakes.iter().enumerate().map(|(i, cake)| html! {
                <span key={format!("cake-{i}")} class="background-cake" style={cake.style()}>{"🎂"}</span>
            }) }
            { for SWIRLS.iter().enumerate().map(|(i, swirl)| html! {
                <div key={format!("swirl-{i}")} class="swirl" style={swirl.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    entry: TimelineEntry,
    index: usize,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let mode = use_responsive_mode();
    let node = use_node_ref();
    let margin_px = if mode.is_mobile() { 50 } else { 100 };
    let visible = use_in_view(&node, true, margin_px);
    let entry = props.entry;
    let visible_class = visible.then_some("is-visible");

    if mode.is_mobile() {
        return html! {
            <article ref={node} class={classes!("timeline-card", visible_class)}>
                <span class="timeline-dot" aria-hidden="true" />
                <div class="timeline-card-body">
                    <span class="year-badge">{entry.year}</span>
                    <div class="timeline-card-content">
                        <TimelineImage entry={entry} />
                        <h3>{entry.title}</h3>
                        <p>{entry.description}</p>
                    </div>
                </div>
            </article>
        };
    }

    let side = TimelineEntry::side(props.index);

    html! {
        <article
            ref={node}
            class={classes!(side.row_class(), visible_class)}
            style={format!("--enter-x: {:.0}px;", side.enter_offset_px())}
        >
            <div class="timeline-half">
                <TimelineImage entry={entry} />
            </div>
            <div class="timeline-half">
                <div class="timeline-copy" style={format!("text-align: {};", side.text_align())}>
                    <span class="year-pill">{entry.year}</span>
                    <h3>{entry.title}</h3>
                    <p>{entry.description}</p>
                </div>
            </div>
            <span class="timeline-dot" aria-hidden="true" />
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineImageProps {
    entry: TimelineEntry,
}

#[function_component(TimelineImage)]
fn timeline_image(props: &TimelineImageProps) -> Html {
    let entry = props.entry;

    html! {
        <div class="timeline-media">
            <ExternalLink href={entry.link_url} class={classes!("timeline-media-link")}>
                <img class="timeline-image" src={entry.image_path} alt={entry.title} loading="lazy" />
                <div class="timeline-media-shade" aria-hidden="true" />
                <div class="timeline-media-caption" aria-hidden="true">
                    <span class="caption-pill">{"View on Instagram"}</span>
                </div>
            </ExternalLink>
            <span class="instagram-badge" aria-hidden="true">{"Instagram"}</span>
        </div>
    }
}
