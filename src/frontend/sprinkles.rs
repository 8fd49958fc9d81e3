use super::hooks::use_responsive_mode;
use crate::motion::generate_sprinkles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SprinklesProps {
    #[prop_or_default]
    pub reduced_for_mobile: bool,
}

/// Decorative particles drifting up the hero. The whole field is redrawn
/// from scratch whenever the responsive mode flips.
#[function_component(Sprinkles)]
pub fn sprinkles(props: &SprinklesProps) -> Html {
    let mode = use_responsive_mode();
    let field = use_memo((mode, props.reduced_for_mobile), |&(mode, reduced)| {
        let mut rng = fastrand::Rng::new();
        generate_sprinkles(&mut rng, mode, reduced)
    });

    html! {
        <div class="sprinkle-field" aria-hidden="true">
            { for field.iter().map(|sprinkle| html! {
                <span key={sprinkle.id} class="sprinkle" style={sprinkle.style(mode)} />
            }) }
        </div>
    }
}
