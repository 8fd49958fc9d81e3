use super::hooks::{use_in_view, use_phase_timer, use_responsive_mode};
use super::Reveal;
use crate::content::{CONTACT_BLURB, CONTACT_HEADING};
use crate::lifecycle::{ContactAction, ContactForm, FormField, SubmissionPhase};
use crate::motion::{generate_confetti, ConfettiParticle};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn submit_label(phase: SubmissionPhase) -> &'static str {
    match phase {
        SubmissionPhase::Idle => "Send Message",
        SubmissionPhase::Submitting => "Sending...",
        SubmissionPhase::Submitted => "Message Sent! ✨",
    }
}

/// Reads `(name, value)` from whichever form control fired the event.
fn field_edit(event: &InputEvent) -> Option<(FormField, String)> {
    let target = event.target()?;

    let (name, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else {
        let area = target.dyn_ref::<HtmlTextAreaElement>()?;
        (area.name(), area.value())
    };

    FormField::from_name(&name).map(|field| (field, value))
}

const DECORATIVE_DOTS: [(&str, &str); 3] = [
    ("top: 18%; left: 8%;", "0s"),
    ("top: 62%; right: 10%;", "0.8s"),
    ("bottom: 12%; left: 22%;", "1.6s"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer(ContactForm::default);
    let mode = use_responsive_mode();
    let form_node = use_node_ref();
    let form_visible = use_in_view(&form_node, false, 100);
    let phase = form.phase();

    {
        let dispatcher = form.dispatcher();
        use_phase_timer(
            phase,
            Callback::from(move |_| dispatcher.dispatch(ContactAction::TimerElapsed)),
        );
    }

    use_effect_with(phase, |phase| {
        log::debug!("contact form phase: {}", phase.as_str());
        || ()
    });

    let confetti = use_memo((phase, mode), |&(phase, mode)| {
        if !phase.is_submitted() {
            return Vec::new();
        }
        let mut rng = fastrand::Rng::new();
        generate_confetti(&mut rng, mode)
    });

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some((field, value)) = field_edit(&event) {
                dispatcher.dispatch(ContactAction::Edit(field, value));
            }
        })
    };

    let fields = form.fields();
    let readonly = !form.accepts_edits();
    let field_class = |i: usize| {
        (
            classes!("form-field", form_visible.then_some("is-visible")),
            format!("transition-delay: {:.1}s;", i as f64 * 0.1),
        )
    };
    let (name_class, name_delay) = field_class(0);
    let (email_class, email_delay) = field_class(1);
    let (message_class, message_delay) = field_class(2);

    html! {
        <section id="contact" class="contact">
            if !mode.is_mobile() {
                <div class="contact-backdrop" aria-hidden="true">
                    <div class="contact-blob is-pink" />
                    <div class="contact-blob is-mint" />
                    { for DECORATIVE_DOTS.iter().enumerate().map(|(i, (position, delay))| html! {
                        <span
                            key={i}
                            class="contact-dot"
                            style={format!("{position} animation-delay: {delay};")}
                        />
                    }) }
                </div>
            }

            <div class="section-inner is-narrow">
                <Reveal class={classes!("section-heading")}>
                    <h2>{CONTACT_HEADING}</h2>
                    <p>{CONTACT_BLURB}</p>
                </Reveal>

                <div class="contact-card">
                    <form
                        ref={form_node}
                        class="contact-form"
                        data-phase={phase.as_str()}
                        onsubmit={onsubmit}
                    >
                        <div class={name_class} style={name_delay}>
                            <label for="contact-name">{"Name"}</label>
                            <input
                                id="contact-name"
                                name="name"
                                type="text"
                                placeholder="Your sweet name"
                                required={true}
                                readonly={readonly}
                                value={fields.name.clone()}
                                oninput={oninput.clone()}
                            />
                        </div>
                        <div class={email_class} style={email_delay}>
                            <label for="contact-email">{"Email"}</label>
                            <input
                                id="contact-email"
                                name="email"
                                type="email"
                                placeholder="your@email.com"
                                required={true}
                                readonly={readonly}
                                value={fields.email.clone()}
                                oninput={oninput.clone()}
                            />
                        </div>
                        <div class={message_class} style={message_delay}>
                            <label for="contact-message">{"Message"}</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="5"
                                placeholder="Tell us what's on your mind..."
                                required={true}
                                readonly={readonly}
                                value={fields.message.clone()}
                                oninput={oninput}
                            />
                        </div>
                        <button
                            type="submit"
                            class={classes!("cta-button", "is-wide", phase.is_submitted().then_some("is-success"))}
                            disabled={!form.can_submit()}
                        >
                            {submit_label(phase)}
                        </button>
                    </form>

                    if phase.is_submitted() {
                        <SuccessConfetti particles={confetti.clone()} />
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SuccessConfettiProps {
    particles: Rc<Vec<ConfettiParticle>>,
}

#[function_component(SuccessConfetti)]
fn success_confetti(props: &SuccessConfettiProps) -> Html {
    html! {
        <div class="confetti-burst" aria-hidden="true">
            { for props.particles.iter().enumerate().map(|(i, particle)| html! {
                <span key={i} class="confetti" style={particle.style()} />
            }) }
        </div>
    }
}
