//! Timer-driven UI state machines.
//!
//! Each machine is a small `Copy` phase type plus the data it guards. The
//! frontend arms exactly one one-shot timer per phase (see
//! `TimedPhase::dwell`) and feeds `elapse` back in when it fires, so the
//! legal transitions live here and nowhere else.

use std::time::Duration;

pub const PAGE_LOAD_DELAY: Duration = Duration::from_millis(2_500);
pub const LOADER_EXIT: Duration = Duration::from_millis(1_000);
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1_500);
pub const SUBMITTED_HOLD: Duration = Duration::from_millis(5_000);

pub trait TimedPhase: Copy + Eq {
    /// How long the phase lasts before `elapse` applies. `None` means the
    /// phase rests until something else moves it.
    fn dwell(self) -> Option<Duration>;

    fn elapse(self) -> Self;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Loading,
    Content,
}

impl TimedPhase for PagePhase {
    fn dwell(self) -> Option<Duration> {
        match self {
            Self::Loading => Some(PAGE_LOAD_DELAY),
            Self::Content => None,
        }
    }

    fn elapse(self) -> Self {
        Self::Content
    }
}

/// The loading overlay. It starts exiting when the page reaches `Content`
/// and stays mounted, without blocking input, until the exit animation ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Shown,
    Exiting,
    Gone,
}

impl OverlayPhase {
    pub fn for_page(self, page: PagePhase) -> Self {
        match (self, page) {
            (Self::Shown, PagePhase::Content) => Self::Exiting,
            (current, _) => current,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Gone)
    }
}

impl TimedPhase for OverlayPhase {
    fn dwell(self) -> Option<Duration> {
        match self {
            Self::Exiting => Some(LOADER_EXIT),
            Self::Shown | Self::Gone => None,
        }
    }

    fn elapse(self) -> Self {
        match self {
            Self::Exiting | Self::Gone => Self::Gone,
            Self::Shown => Self::Shown,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionPhase {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        }
    }
}

impl TimedPhase for SubmissionPhase {
    fn dwell(self) -> Option<Duration> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some(SUBMIT_LATENCY),
            Self::Submitted => Some(SUBMITTED_HOLD),
        }
    }

    fn elapse(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Submitting => Self::Submitted,
            Self::Submitted => Self::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Inputs are read-only while a message is in flight. Keystrokes in that
    /// window are dropped rather than buffered; the send clears the fields
    /// a moment later either way.
    pub fn accepts_edits(&self) -> bool {
        !self.phase.is_submitting()
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle)
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        *self.fields.slot(field) = value.into();
        true
    }

    /// Starts sending. The fields stay visible until the send completes.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    pub fn elapse(&mut self) {
        let next = self.phase.elapse();
        if self.phase.is_submitting() && next.is_submitted() {
            self.fields = FormFields::default();
        }
        self.phase = next;
    }

    /// Applies one action; returns whether the form changed.
    pub fn apply(&mut self, action: ContactAction) -> bool {
        match action {
            ContactAction::Edit(field, value) => self.edit(field, value),
            ContactAction::Submit => self.submit(),
            ContactAction::TimerElapsed => {
                let before = self.phase;
                self.elapse();
                before != self.phase
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(FormField, String),
    Submit,
    TimerElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    OpenMenu,
    CloseMenu,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.scrolled = crate::motion::is_scrolled(scroll_offset);
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(offset) => self.on_scroll(offset),
            NavAction::OpenMenu => self.open_menu(),
            NavAction::CloseMenu => self.close_menu(),
        }
    }
}

/// Deterministic stand-in for the browser's one-shot timers.
///
/// Holds at most one pending deadline, armed from the current phase's
/// `dwell`, exactly like the frontend's phase timer hook. `cancel` models the
/// owning component going away: the deadline is dropped and never fires.
#[derive(Clone, Debug)]
pub struct PhaseClock<P: TimedPhase> {
    phase: P,
    now: Duration,
    deadline: Option<Duration>,
}

impl<P: TimedPhase> PhaseClock<P> {
    pub fn start(phase: P) -> Self {
        let mut clock = Self {
            phase,
            now: Duration::ZERO,
            deadline: None,
        };
        clock.arm();
        clock
    }

    pub fn phase(&self) -> P {
        self.phase
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Moves the phase from outside the ladder (a user action) and re-arms.
    pub fn transition(&mut self, phase: P) {
        if phase != self.phase {
            self.phase = phase;
            self.arm();
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Advances time, firing every deadline that falls inside the window.
    /// Returns how many transitions fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.now.saturating_add(by);
        let mut fired = 0;

        while let Some(deadline) = self.deadline.filter(|deadline| *deadline <= target) {
            self.now = deadline;
            self.phase = self.phase.elapse();
            fired += 1;
            self.arm();
        }

        self.now = target;
        fired
    }

    fn arm(&mut self) {
        self.deadline = self.phase.dwell().map(|dwell| self.now.saturating_add(dwell));
    }
}
