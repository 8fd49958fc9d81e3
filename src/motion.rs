//! Animation maths shared by the page components.
//!
//! Everything here is framework-free: the components turn these values into
//! inline styles and CSS custom properties, and the stylesheet owns the
//! keyframes that read them. Random collections take the generator as an
//! argument so a seeded `fastrand::Rng` reproduces them exactly.

use fastrand::Rng;
use std::fmt::Write as _;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const TITLE_STAGGER_SECONDS: f64 = 0.08;
pub const MOBILE_SPEEDUP: f64 = 0.7;

pub const SPRINKLE_PALETTE: [&str; 5] = ["#F8BBD0", "#FFCDD2", "#F0F4C3", "#B2EBF2", "#D1C4E9"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponsiveMode {
    Mobile,
    #[default]
    Desktop,
}

impl ResponsiveMode {
    pub fn from_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px < breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// A section's bounding box relative to the viewport's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Bounds from layout offsets, which CSS transforms on the section do
    /// not move.
    pub fn from_layout(document_top: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            top: document_top - scroll_y,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRange {
    /// From the section's top meeting the viewport bottom until its bottom
    /// leaves through the viewport top.
    EnterToExit,
    /// From the section's top meeting the viewport top until its bottom
    /// leaves through the viewport top.
    StartToExit,
}

/// Fraction of `range` that has scrolled past, clamped to `[0, 1]`.
pub fn scroll_progress(bounds: SectionBounds, viewport_height: f64, range: ScrollRange) -> f64 {
    let (travelled, span) = match range {
        ScrollRange::EnterToExit => (viewport_height - bounds.top, viewport_height + bounds.height),
        ScrollRange::StartToExit => (-bounds.top, bounds.height),
    };

    if span.is_nan() || span <= 0.0 || !travelled.is_finite() {
        return 0.0;
    }

    (travelled / span).clamp(0.0, 1.0)
}

/// Linear map from `input` onto `output`, clamped at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;

    if in_hi == in_lo {
        return out_lo;
    }

    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

pub fn is_scrolled(scroll_offset: f64) -> bool {
    scroll_offset > SCROLL_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl HeroParallax {
    const INPUT: (f64, f64) = (0.0, 0.5);

    pub fn from_progress(progress: f64) -> Self {
        Self {
            opacity: map_range(progress, Self::INPUT, (1.0, 0.0)),
            scale: map_range(progress, Self::INPUT, (1.0, 0.9)),
            translate_y: map_range(progress, Self::INPUT, (0.0, 100.0)),
        }
    }

    pub fn to_style(self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.3});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

fn pick<'a, T>(rng: &mut Rng, items: &'a [T]) -> &'a T {
    &items[rng.usize(..items.len())]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SprinkleShape {
    Circle,
    Square,
    Triangle,
    Star,
}

impl SprinkleShape {
    pub const ALL: [Self; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Star];

    pub fn border_radius(self) -> &'static str {
        match self {
            Self::Circle => "50%",
            Self::Square => "2px",
            Self::Triangle | Self::Star => "0",
        }
    }

    pub fn clip_path(self) -> &'static str {
        match self {
            Self::Circle | Self::Square => "none",
            Self::Triangle => "polygon(50% 0%, 0% 100%, 100% 100%)",
            Self::Star => "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprinkle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
    pub color: &'static str,
    pub shape: SprinkleShape,
    pub delay: f64,
    pub duration: f64,
}

impl Sprinkle {
    /// Sideways sway at the top of the rise.
    pub fn drift(&self) -> f64 {
        (self.id as f64).sin() * 50.0
    }

    pub fn playback_duration(&self, mode: ResponsiveMode) -> f64 {
        if mode.is_mobile() {
            self.duration * MOBILE_SPEEDUP
        } else {
            self.duration
        }
    }

    pub fn style(&self, mode: ResponsiveMode) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; background-color: {}; \
             border-radius: {}; clip-path: {}; --sprinkle-drift: {:.2}px; --sprinkle-rotation: {:.1}deg; \
             animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.color,
            self.shape.border_radius(),
            self.shape.clip_path(),
            self.drift(),
            self.rotation,
            self.playback_duration(mode),
            self.delay,
        )
    }
}

pub fn sprinkle_count(mode: ResponsiveMode, reduced_for_mobile: bool) -> usize {
    if mode.is_mobile() && reduced_for_mobile {
        20
    } else {
        40
    }
}

pub fn generate_sprinkles(
    rng: &mut Rng,
    mode: ResponsiveMode,
    reduced_for_mobile: bool,
) -> Vec<Sprinkle> {
    let (size_span, size_floor) = if mode.is_mobile() { (8.0, 3.0) } else { (10.0, 5.0) };

    (0..sprinkle_count(mode, reduced_for_mobile))
        .map(|id| Sprinkle {
            id,
            x: rng.f64() * 100.0,
            y: rng.f64() * 100.0,
            size: rng.f64() * size_span + size_floor,
            rotation: rng.f64() * 360.0,
            color: *pick(rng, &SPRINKLE_PALETTE),
            shape: *pick(rng, &SprinkleShape::ALL),
            delay: rng.f64() * 5.0,
            duration: rng.f64() * 10.0 + 15.0,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub size: f64,
    pub color: &'static str,
    pub dx: f64,
    pub dy: f64,
    pub duration: f64,
}

impl ConfettiParticle {
    pub fn style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px; background-color: {}; --confetti-dx: {:.2}px; \
             --confetti-dy: {:.2}px; animation-duration: {:.2}s;",
            self.size, self.size, self.color, self.dx, self.dy, self.duration
        )
    }
}

pub fn confetti_count(mode: ResponsiveMode) -> usize {
    if mode.is_mobile() {
        15
    } else {
        30
    }
}

pub fn generate_confetti(rng: &mut Rng, mode: ResponsiveMode) -> Vec<ConfettiParticle> {
    let spread = if mode.is_mobile() { 150.0 } else { 200.0 };

    (0..confetti_count(mode))
        .map(|_| ConfettiParticle {
            size: rng.f64() * 8.0 + 4.0,
            color: *pick(rng, &SPRINKLE_PALETTE),
            dx: (rng.f64() - 0.5) * spread,
            dy: (rng.f64() - 0.5) * spread,
            duration: 1.0 + rng.f64() * 1.5,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeStop {
    pub offset: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    pub name: &'static str,
    pub stops: Vec<KeyframeStop>,
}

impl Keyframes {
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        for stop in &self.stops {
            let _ = write!(
                css,
                " {:.0}% {{ transform: translate({:.1}px, {:.1}px) rotate({:.1}deg); opacity: {:.2}; }}",
                stop.offset * 100.0,
                stop.translate_x,
                stop.translate_y,
                stop.rotate,
                stop.opacity
            );
        }
        css.push_str(" }");
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconGlyph {
    pub symbol: &'static str,
    pub tone: &'static str,
    pub size_px: u32,
}

pub const FLOATING_ICONS: [IconGlyph; 5] = [
    IconGlyph { symbol: "🍰", tone: "tone-pink", size_px: 24 },
    IconGlyph { symbol: "♥", tone: "tone-pink-soft", size_px: 20 },
    IconGlyph { symbol: "★", tone: "tone-caramel", size_px: 16 },
    IconGlyph { symbol: "☕", tone: "tone-brown-muted", size_px: 22 },
    IconGlyph { symbol: "🍰", tone: "tone-pink-light", size_px: 18 },
];

const FLIGHT_OFFSETS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
const FLIGHT_OPACITY: [f64; 6] = [0.0, 1.0, 0.8, 0.6, 0.4, 0.0];

/// One of the two looping paths the floating icons follow across the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconFlight {
    pub name: &'static str,
    pub path_x: [f64; 6],
    pub path_y: [f64; 6],
    pub spin_deg: f64,
    pub left_start_pct: f64,
    pub left_step_pct: f64,
    pub top_pct: f64,
    pub delay_start: f64,
    pub delay_step: f64,
    pub duration: f64,
}

pub const ICON_FLIGHTS: [IconFlight; 2] = [
    IconFlight {
        name: "icon-flight-left",
        path_x: [0.0, 50.0, -30.0, 20.0, -50.0, 30.0],
        path_y: [0.0, -100.0, -50.0, -150.0, -100.0, -200.0],
        spin_deg: 360.0,
        left_start_pct: 20.0,
        left_step_pct: 15.0,
        top_pct: 30.0,
        delay_start: 0.0,
        delay_step: 0.7,
        duration: 15.0,
    },
    IconFlight {
        name: "icon-flight-right",
        path_x: [0.0, -30.0, 20.0, -40.0, 30.0, -20.0],
        path_y: [0.0, -80.0, -40.0, -120.0, -60.0, -180.0],
        spin_deg: -360.0,
        left_start_pct: 50.0,
        left_step_pct: 10.0,
        top_pct: 40.0,
        delay_start: 2.0,
        delay_step: 0.5,
        duration: 12.0,
    },
];

impl IconFlight {
    pub fn keyframes(&self) -> Keyframes {
        let stops = FLIGHT_OFFSETS
            .iter()
            .enumerate()
            .map(|(i, &offset)| KeyframeStop {
                offset,
                translate_x: self.path_x[i],
                translate_y: self.path_y[i],
                rotate: self.spin_deg * offset,
                opacity: FLIGHT_OPACITY[i],
            })
            .collect();

        Keyframes { name: self.name, stops }
    }

    pub fn placement(&self, index: usize) -> IconPlacement {
        IconPlacement {
            glyph: FLOATING_ICONS[index % FLOATING_ICONS.len()],
            animation: self.name,
            left_pct: self.left_start_pct + self.left_step_pct * index as f64,
            top_pct: self.top_pct,
            delay: self.delay_start + self.delay_step * index as f64,
            duration: self.duration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconPlacement {
    pub glyph: IconGlyph,
    pub animation: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay: f64,
    pub duration: f64,
}

impl IconPlacement {
    pub fn style(&self) -> String {
        format!(
            "left: {:.0}%; top: {:.0}%; font-size: {}px; animation: {} {:.1}s ease-in-out {:.1}s infinite;",
            self.left_pct, self.top_pct, self.glyph.size_px, self.animation, self.duration, self.delay
        )
    }
}

pub fn floating_icon_placements() -> Vec<IconPlacement> {
    ICON_FLIGHTS
        .iter()
        .flat_map(|flight| (0..FLOATING_ICONS.len()).map(move |index| flight.placement(index)))
        .collect()
}

pub fn floating_icon_keyframes_css() -> String {
    ICON_FLIGHTS
        .iter()
        .map(|flight| flight.keyframes().to_css())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteamLayer {
    pub top_pct: f64,
    pub left_pct: f64,
    pub duration: f64,
    pub delay: f64,
}

impl SteamLayer {
    pub fn style(&self, texture: &str) -> String {
        format!(
            "background-image: url('{texture}'); top: {:.0}%; left: {:.0}%; animation-duration: {:.0}s; animation-delay: {:.0}s;",
            self.top_pct, self.left_pct, self.duration, self.delay
        )
    }
}

pub fn steam_layers(mode: ResponsiveMode) -> Vec<SteamLayer> {
    let count = if mode.is_mobile() { 3 } else { 5 };

    (0..count)
        .map(|i| {
            let i = i as f64;
            SteamLayer {
                top_pct: i * 20.0,
                left_pct: i * 5.0,
                duration: 10.0 + i * 2.0,
                delay: i * 2.0,
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleLetter {
    pub glyph: char,
    pub delay: f64,
}

pub fn title_letters(title: &str) -> Vec<TitleLetter> {
    title
        .chars()
        .enumerate()
        .map(|(i, c)| TitleLetter {
            glyph: if c == ' ' { '\u{00A0}' } else { c },
            delay: i as f64 * TITLE_STAGGER_SECONDS,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundCake {
    pub x_pct: f64,
    pub y_pct: f64,
    pub scale: f64,
    pub duration: f64,
    pub spin_deg: f64,
    pub delay: f64,
}

impl BackgroundCake {
    pub fn style(&self) -> String {
        format!(
            "--cake-x: {:.1}%; --cake-y: {:.1}%; --cake-scale: {:.2}; --cake-spin: {:.0}deg; \
             animation-duration: {:.1}s; animation-delay: {:.0}s;",
            self.x_pct, self.y_pct, self.scale, self.spin_deg, self.duration, self.delay
        )
    }
}

pub const BACKGROUND_CAKE_COUNT: usize = 5;

pub fn generate_background_cakes(rng: &mut Rng) -> Vec<BackgroundCake> {
    (0..BACKGROUND_CAKE_COUNT)
        .map(|i| BackgroundCake {
            x_pct: rng.f64() * 100.0 - 50.0,
            y_pct: rng.f64() * 100.0,
            scale: 0.5 + rng.f64() * 0.5,
            duration: 15.0 + rng.f64() * 20.0,
            spin_deg: if rng.bool() { 360.0 } else { -360.0 },
            delay: i as f64 * 3.0,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swirl {
    pub top_pct: f64,
    pub left_pct: f64,
    pub spin_duration: f64,
    pub pulse_duration: f64,
}

impl Swirl {
    pub fn style(&self) -> String {
        format!(
            "top: {:.0}%; left: {:.0}%; animation-duration: {:.0}s, {:.0}s;",
            self.top_pct, self.left_pct, self.spin_duration, self.pulse_duration
        )
    }
}

pub const SWIRLS: [Swirl; 3] = [
    Swirl { top_pct: 20.0, left_pct: 10.0, spin_duration: 20.0, pulse_duration: 8.0 },
    Swirl { top_pct: 50.0, left_pct: 40.0, spin_duration: 25.0, pulse_duration: 10.0 },
    Swirl { top_pct: 80.0, left_pct: 70.0, spin_duration: 30.0, pulse_duration: 12.0 },
];

/// A glyph circling the loading animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbiter {
    pub slot: &'static str,
    pub size_px: u32,
    pub duration: f64,
    pub delay: f64,
}

impl Orbiter {
    pub fn style(&self) -> String {
        format!(
            "font-size: {}px; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.size_px, self.duration, self.delay
        )
    }
}

pub const ORBITERS: [Orbiter; 4] = [
    Orbiter { slot: "orbiter-left", size_px: 32, duration: 3.0, delay: 0.0 },
    Orbiter { slot: "orbiter-right", size_px: 32, duration: 3.5, delay: 0.5 },
    Orbiter { slot: "orbiter-top", size_px: 28, duration: 4.0, delay: 1.0 },
    Orbiter { slot: "orbiter-bottom", size_px: 28, duration: 4.0, delay: 1.5 },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn responsive_mode_splits_at_breakpoint() {
        assert_eq!(ResponsiveMode::from_width(767.9, MOBILE_BREAKPOINT_PX), ResponsiveMode::Mobile);
        assert_eq!(ResponsiveMode::from_width(768.0, MOBILE_BREAKPOINT_PX), ResponsiveMode::Desktop);
        assert_eq!(ResponsiveMode::from_width(320.0, 400.0), ResponsiveMode::Mobile);
    }

    #[test]
    fn scrolled_only_beyond_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn enter_to_exit_progress_spans_viewport_and_section() {
        let viewport = 800.0;
        let entering = SectionBounds { top: 800.0, height: 1200.0 };
        let halfway = SectionBounds { top: -200.0, height: 1200.0 };
        let leaving = SectionBounds { top: -1200.0, height: 1200.0 };

        assert_close(scroll_progress(entering, viewport, ScrollRange::EnterToExit), 0.0);
        assert_close(scroll_progress(halfway, viewport, ScrollRange::EnterToExit), 0.5);
        assert_close(scroll_progress(leaving, viewport, ScrollRange::EnterToExit), 1.0);
    }

    #[test]
    fn progress_is_clamped_outside_range() {
        let below = SectionBounds { top: 5_000.0, height: 600.0 };
        let above = SectionBounds { top: -5_000.0, height: 600.0 };

        assert_close(scroll_progress(below, 900.0, ScrollRange::EnterToExit), 0.0);
        assert_close(scroll_progress(above, 900.0, ScrollRange::EnterToExit), 1.0);
        assert_close(scroll_progress(below, 900.0, ScrollRange::StartToExit), 0.0);
        assert_close(scroll_progress(above, 900.0, ScrollRange::StartToExit), 1.0);
    }

    #[test]
    fn start_to_exit_tracks_section_top() {
        let bounds = SectionBounds { top: -250.0, height: 1000.0 };
        assert_close(scroll_progress(bounds, 700.0, ScrollRange::StartToExit), 0.25);
    }

    #[test]
    fn layout_bounds_hold_steady_while_parallax_applies() {
        let viewport_height = 800.0;
        let mut readings = Vec::new();

        for _ in 0..4 {
            let bounds = SectionBounds::from_layout(0.0, 1000.0, 200.0);
            let progress = scroll_progress(bounds, viewport_height, ScrollRange::StartToExit);
            let parallax = HeroParallax::from_progress(progress);
            assert!(parallax.translate_y > 0.0 && parallax.scale < 1.0);
            readings.push(progress);
        }

        for progress in readings {
            assert_close(progress, 0.2);
        }
        assert_eq!(
            SectionBounds::from_layout(1200.0, 600.0, 300.0),
            SectionBounds { top: 900.0, height: 600.0 }
        );
    }

    #[test]
    fn degenerate_section_reports_zero_progress() {
        let flat = SectionBounds { top: -10.0, height: 0.0 };
        assert_close(scroll_progress(flat, 700.0, ScrollRange::StartToExit), 0.0);
        assert_close(scroll_progress(flat, 0.0, ScrollRange::EnterToExit), 0.0);
    }

    #[test]
    fn map_range_interpolates_and_clamps() {
        assert_close(map_range(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5);
        assert_close(map_range(0.9, (0.0, 0.5), (1.0, 0.0)), 0.0);
        assert_close(map_range(-1.0, (0.0, 0.5), (0.0, 100.0)), 0.0);
        assert_close(map_range(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn hero_parallax_settles_after_half_progress() {
        let start = HeroParallax::from_progress(0.0);
        assert_close(start.opacity, 1.0);
        assert_close(start.scale, 1.0);
        assert_close(start.translate_y, 0.0);

        let end = HeroParallax::from_progress(0.75);
        assert_close(end.opacity, 0.0);
        assert_close(end.scale, 0.9);
        assert_close(end.translate_y, 100.0);
        assert_eq!(
            end.to_style(),
            "opacity: 0.000; transform: translateY(100.00px) scale(0.900);"
        );
    }

    #[test]
    fn sprinkle_count_depends_only_on_mode_and_reduction() {
        assert_eq!(sprinkle_count(ResponsiveMode::Mobile, true), 20);
        assert_eq!(sprinkle_count(ResponsiveMode::Mobile, false), 40);
        assert_eq!(sprinkle_count(ResponsiveMode::Desktop, true), 40);
        assert_eq!(sprinkle_count(ResponsiveMode::Desktop, false), 40);

        let mut rng = Rng::with_seed(11);
        for _ in 0..5 {
            assert_eq!(generate_sprinkles(&mut rng, ResponsiveMode::Mobile, true).len(), 20);
            assert_eq!(generate_sprinkles(&mut rng, ResponsiveMode::Desktop, true).len(), 40);
        }
    }

    #[test]
    fn sprinkles_stay_within_sampling_bounds() {
        let mut rng = Rng::with_seed(42);

        for sprinkle in generate_sprinkles(&mut rng, ResponsiveMode::Mobile, false) {
            assert!((0.0..100.0).contains(&sprinkle.x));
            assert!((0.0..100.0).contains(&sprinkle.y));
            assert!((3.0..11.0).contains(&sprinkle.size));
            assert!((0.0..360.0).contains(&sprinkle.rotation));
            assert!((0.0..5.0).contains(&sprinkle.delay));
            assert!((15.0..25.0).contains(&sprinkle.duration));
            assert!(SPRINKLE_PALETTE.contains(&sprinkle.color));
        }

        for sprinkle in generate_sprinkles(&mut rng, ResponsiveMode::Desktop, false) {
            assert!((5.0..15.0).contains(&sprinkle.size));
        }
    }

    #[test]
    fn sprinkle_ids_follow_position_and_mobile_plays_faster() {
        let mut rng = Rng::with_seed(3);
        let sprinkles = generate_sprinkles(&mut rng, ResponsiveMode::Desktop, false);

        let ids: Vec<usize> = sprinkles.iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..40).collect::<Vec<_>>());

        let first = &sprinkles[0];
        assert_close(first.drift(), 0.0);
        assert_close(
            first.playback_duration(ResponsiveMode::Mobile),
            first.duration * MOBILE_SPEEDUP,
        );
        assert_close(first.playback_duration(ResponsiveMode::Desktop), first.duration);
    }

    #[test]
    fn seeded_generation_is_reproducible_and_regeneration_is_fresh() {
        let a = generate_sprinkles(&mut Rng::with_seed(9), ResponsiveMode::Desktop, false);
        let b = generate_sprinkles(&mut Rng::with_seed(9), ResponsiveMode::Desktop, false);
        assert_eq!(a, b);

        let mut rng = Rng::with_seed(9);
        let first = generate_sprinkles(&mut rng, ResponsiveMode::Desktop, false);
        let second = generate_sprinkles(&mut rng, ResponsiveMode::Desktop, false);
        assert_ne!(first, second);
    }

    #[test]
    fn sprinkle_style_carries_shape_and_timing() {
        let sprinkle = Sprinkle {
            id: 0,
            x: 10.0,
            y: 20.0,
            size: 6.0,
            rotation: 90.0,
            color: "#F8BBD0",
            shape: SprinkleShape::Triangle,
            delay: 1.5,
            duration: 20.0,
        };

        let style = sprinkle.style(ResponsiveMode::Mobile);
        assert!(style.contains("left: 10.00%;"));
        assert!(style.contains("clip-path: polygon(50% 0%, 0% 100%, 100% 100%);"));
        assert!(style.contains("animation-duration: 14.00s;"));
        assert!(style.contains("animation-delay: 1.50s;"));
    }

    #[test]
    fn confetti_count_and_ranges_follow_mode() {
        let mut rng = Rng::with_seed(5);

        let mobile = generate_confetti(&mut rng, ResponsiveMode::Mobile);
        assert_eq!(mobile.len(), 15);
        for particle in &mobile {
            assert!((-75.0..75.0).contains(&particle.dx));
            assert!((-75.0..75.0).contains(&particle.dy));
        }

        let desktop = generate_confetti(&mut rng, ResponsiveMode::Desktop);
        assert_eq!(desktop.len(), 30);
        for particle in &desktop {
            assert!((4.0..12.0).contains(&particle.size));
            assert!((1.0..2.5).contains(&particle.duration));
            assert!((-100.0..100.0).contains(&particle.dx));
            assert!(SPRINKLE_PALETTE.contains(&particle.color));
        }
    }

    #[test]
    fn icon_flights_place_five_icons_each() {
        let placements = floating_icon_placements();
        assert_eq!(placements.len(), 10);

        let left = &placements[2];
        assert_close(left.left_pct, 50.0);
        assert_close(left.top_pct, 30.0);
        assert_close(left.delay, 1.4);

        let right = &placements[9];
        assert_close(right.left_pct, 90.0);
        assert_close(right.top_pct, 40.0);
        assert_close(right.delay, 4.0);
        assert_eq!(right.animation, "icon-flight-right");
    }

    #[test]
    fn icon_flight_keyframes_spin_through_full_turn() {
        let frames = ICON_FLIGHTS[1].keyframes();
        assert_eq!(frames.stops.len(), 6);
        assert_close(frames.stops[5].rotate, -360.0);
        assert_close(frames.stops[5].opacity, 0.0);

        let css = frames.to_css();
        assert!(css.starts_with("@keyframes icon-flight-right {"));
        assert!(css.contains(
            "100% { transform: translate(-20.0px, -180.0px) rotate(-360.0deg); opacity: 0.00; }"
        ));
        assert!(floating_icon_keyframes_css().contains("@keyframes icon-flight-left"));
    }

    #[test]
    fn steam_layers_shrink_on_mobile() {
        assert_eq!(steam_layers(ResponsiveMode::Mobile).len(), 3);

        let desktop = steam_layers(ResponsiveMode::Desktop);
        assert_eq!(desktop.len(), 5);
        assert_close(desktop[4].top_pct, 80.0);
        assert_close(desktop[4].duration, 18.0);
        assert_close(desktop[4].delay, 8.0);
    }

    #[test]
    fn title_letters_stagger_and_keep_spaces_visible() {
        let letters = title_letters("Hi yo");
        assert_eq!(letters.len(), 5);
        assert_eq!(letters[2].glyph, '\u{00A0}');
        assert_close(letters[4].delay, 0.32);
    }

    #[test]
    fn background_cakes_and_swirls_follow_their_ranges() {
        let mut rng = Rng::with_seed(21);
        let cakes = generate_background_cakes(&mut rng);
        assert_eq!(cakes.len(), BACKGROUND_CAKE_COUNT);

        for (i, cake) in cakes.iter().enumerate() {
            assert!((-50.0..50.0).contains(&cake.x_pct));
            assert!((0.5..1.0).contains(&cake.scale));
            assert!((15.0..35.0).contains(&cake.duration));
            assert!(cake.spin_deg.abs() == 360.0);
            assert_close(cake.delay, i as f64 * 3.0);
        }

        let rings = SWIRLS;
        assert_close(rings[2].top_pct, 80.0);
        assert_close(rings[2].left_pct, 70.0);
        assert_close(rings[1].spin_duration, 25.0);
        assert_close(rings[1].pulse_duration, 10.0);
    }

    #[test]
    fn orbiters_take_distinct_slots_with_staggered_loops() {
        let slots: Vec<_> = ORBITERS.iter().map(|orbiter| orbiter.slot).collect();
        assert_eq!(
            slots,
            ["orbiter-left", "orbiter-right", "orbiter-top", "orbiter-bottom"]
        );

        for (i, orbiter) in ORBITERS.iter().enumerate() {
            assert_close(orbiter.delay, i as f64 * 0.5);
        }
        assert_eq!(
            ORBITERS[1].style(),
            "font-size: 32px; animation-duration: 3.5s; animation-delay: 0.5s;"
        );
    }
}
