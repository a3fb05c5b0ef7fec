//! Named screen sections, their rendered views, and transient notices.
//!
//! Exactly one section is active. Every activation bumps a generation
//! counter; work started under an older generation holds a stale
//! [`Ticket`] and its view writes are dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use pref_core::CoreError;
use serde::Serialize;

use crate::resources::RenderedList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Login,
    Register,
    Dashboard,
    Students,
    Courses,
    Packs,
    Preferences,
    Grades,
    Microservices,
    Actuator,
}

impl Section {
    pub const ALL: [Self; 10] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Students,
        Self::Courses,
        Self::Packs,
        Self::Preferences,
        Self::Grades,
        Self::Microservices,
        Self::Actuator,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Students => "students",
            Self::Courses => "courses",
            Self::Packs => "packs",
            Self::Preferences => "preferences",
            Self::Grades => "grades",
            Self::Microservices => "microservices",
            Self::Actuator => "actuator",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::Students => "Students",
            Self::Courses => "Courses",
            Self::Packs => "Packs",
            Self::Preferences => "Preferences",
            Self::Grades => "Grades",
            Self::Microservices => "Services",
            Self::Actuator => "Monitor",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownSection(value.to_string()))
    }
}

/// Proof that a view write belongs to the current activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub section: Section,
    pub generation: u64,
}

/// A named view area within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    List,
    Summary,
    Health,
    Info,
    Statistics,
}

/// Label/value pair of a panel view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Rendered content of a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum View {
    List(RenderedList),
    Panel(Vec<Field>),
    Json(serde_json::Value),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Auto-dismissing message scoped to one section.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    #[serde(skip)]
    shown_at: Instant,
    #[serde(skip)]
    ttl: Duration,
}

impl Notice {
    #[must_use]
    pub fn new(kind: NoticeKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

#[derive(Debug, Default)]
struct SectionState {
    views: BTreeMap<Slot, View>,
    notice: Option<Notice>,
}

#[derive(Debug)]
struct ScreenState {
    active: Section,
    generation: u64,
    sections: BTreeMap<Section, SectionState>,
}

/// The terminal analogue of the page: sections, active marker, notices.
#[derive(Debug)]
pub struct Screen {
    state: Mutex<ScreenState>,
    notice_ttl: Duration,
}

impl Screen {
    #[must_use]
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            state: Mutex::new(ScreenState {
                active: Section::Login,
                generation: 0,
                sections: BTreeMap::new(),
            }),
            notice_ttl,
        }
    }

    #[must_use]
    pub fn active(&self) -> Section {
        self.lock().active
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Make `section` the only active one and start a new generation.
    pub fn activate(&self, section: Section) -> Ticket {
        let mut state = self.lock();
        state.active = section;
        state.generation += 1;
        tracing::debug!(%section, generation = state.generation, "section activated");
        Ticket {
            section,
            generation: state.generation,
        }
    }

    /// Ticket for work on `section` under the current generation.
    #[must_use]
    pub fn ticket(&self, section: Section) -> Ticket {
        Ticket {
            section,
            generation: self.lock().generation,
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        Self::current(&self.lock(), ticket)
    }

    /// Write `view` into a slot. Returns `false` and writes nothing for a
    /// stale ticket.
    pub fn render(&self, ticket: Ticket, slot: Slot, view: View) -> bool {
        let mut state = self.lock();
        if !Self::current(&state, ticket) {
            tracing::debug!(section = %ticket.section, ?slot, "discarding stale view write");
            return false;
        }
        state
            .sections
            .entry(ticket.section)
            .or_default()
            .views
            .insert(slot, view);
        true
    }

    /// Show a notice in the ticket's section. Stale tickets are ignored.
    pub fn notify(&self, ticket: Ticket, kind: NoticeKind, text: impl Into<String>) -> bool {
        let notice = Notice::new(kind, text, self.notice_ttl);
        let mut state = self.lock();
        if !Self::current(&state, ticket) {
            tracing::debug!(
                section = %ticket.section,
                text = %notice.text,
                "discarding stale notice"
            );
            return false;
        }
        state.sections.entry(ticket.section).or_default().notice = Some(notice);
        true
    }

    /// The section's notice while it is still visible.
    #[must_use]
    pub fn notice(&self, section: Section) -> Option<Notice> {
        self.lock()
            .sections
            .get(&section)
            .and_then(|s| s.notice.clone())
            .filter(Notice::is_visible)
    }

    #[must_use]
    pub fn view(&self, section: Section, slot: Slot) -> Option<View> {
        self.lock()
            .sections
            .get(&section)
            .and_then(|s| s.views.get(&slot).cloned())
    }

    /// Every rendered slot of `section`, in slot order.
    #[must_use]
    pub fn views(&self, section: Section) -> Vec<(Slot, View)> {
        self.lock()
            .sections
            .get(&section)
            .map(|s| s.views.iter().map(|(slot, view)| (*slot, view.clone())).collect())
            .unwrap_or_default()
    }

    /// Drop every rendered view and notice (used on logout).
    pub fn clear(&self) {
        self.lock().sections.clear();
    }

    fn current(state: &ScreenState, ticket: Ticket) -> bool {
        state.generation == ticket.generation && state.active == ticket.section
    }

    fn lock(&self) -> MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn screen() -> Screen {
        Screen::new(Duration::from_secs(5))
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert_eq!("Students".parse::<Section>().unwrap(), Section::Students);
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(matches!(
            "settings".parse::<Section>(),
            Err(CoreError::UnknownSection(ref id)) if id == "settings"
        ));
    }

    #[test]
    fn activation_bumps_generation() {
        let screen = screen();
        let first = screen.activate(Section::Students);
        let second = screen.activate(Section::Courses);
        assert_eq!(second.generation, first.generation + 1);
        assert_eq!(screen.active(), Section::Courses);
    }

    #[test]
    fn stale_ticket_cannot_write() {
        let screen = screen();
        screen.activate(Section::Students);
        let ticket = screen.ticket(Section::Students);
        screen.activate(Section::Courses);

        assert!(!screen.render(ticket, Slot::List, View::Text("late".into())));
        assert!(!screen.notify(ticket, NoticeKind::Error, "late"));
        assert!(screen.view(Section::Students, Slot::List).is_none());
        assert!(screen.notice(Section::Students).is_none());
    }

    #[test]
    fn reactivating_same_section_invalidates_old_ticket() {
        let screen = screen();
        let old = screen.activate(Section::Grades);
        screen.activate(Section::Grades);
        assert!(!screen.is_current(old));
    }

    #[test]
    fn ticket_for_inactive_section_is_stale() {
        let screen = screen();
        screen.activate(Section::Dashboard);
        let ticket = screen.ticket(Section::Packs);
        assert!(!screen.is_current(ticket));
    }

    #[test]
    fn notices_expire() {
        let notice = Notice::new(
            NoticeKind::Success,
            "Student added successfully!",
            Duration::from_secs(5),
        );
        let now = Instant::now();
        assert!(notice.is_visible_at(now));
        assert!(!notice.is_visible_at(now + Duration::from_secs(6)));
    }

    #[test]
    fn zero_ttl_notice_is_never_shown() {
        let screen = Screen::new(Duration::ZERO);
        let ticket = screen.activate(Section::Students);
        assert!(screen.notify(ticket, NoticeKind::Error, "Failed to load students"));
        assert!(screen.notice(Section::Students).is_none());
    }

    #[test]
    fn clear_drops_views() {
        let screen = screen();
        let ticket = screen.activate(Section::Actuator);
        screen.render(ticket, Slot::Info, View::Text("No info available".into()));
        screen.clear();
        assert!(screen.views(Section::Actuator).is_empty());
    }
}
