//! Reader session state - the one mutable piece of the reading view
//!
//! The session owns the current page index and mediates every change to it.
//! Page turns do not commit immediately: a turn request starts a timed
//! window (the visible page-curl), and the index changes only when [`tick`]
//! observes that the window has elapsed. Time is always passed in by the
//! caller, so the machine runs identically under a real event loop and in
//! tests. Dropping the session discards any pending turn; nothing fires
//! after teardown.
//!
//! [`tick`]: ReaderSession::tick

use crate::reader::{paginate, synthesize_sections};
use crate::types::{BookRecord, PagePair, Section};
use tracing::debug;

/// How long a page turn stays in flight before the index commits
pub const DEFAULT_TURN_MS: u64 = 300;

/// Which way a pending page turn is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Towards the end of the book
    Forward,
    /// Towards the cover
    Backward,
}

/// What the caller should do after a [`ReaderSession::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Nothing changed
    NoRender,
    /// A turn committed; repaint from [`ReaderSession::view`]
    RenderRequested,
}

/// A turn that has been requested but not yet committed
#[derive(Debug, Clone, Copy)]
struct PendingTurn {
    direction: TurnDirection,
    commit_at_ms: u64,
}

/// Everything the renderer needs for the current page pair
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Left-hand page
    pub left: &'a Section,
    /// Right-hand page
    pub right: &'a Section,
    /// Position label, e.g. `1-2 / 4`
    pub page_label: String,
    /// Whether the previous control should be disabled
    pub previous_disabled: bool,
    /// Whether the next control should be disabled
    pub next_disabled: bool,
    /// Left page is mid-turn (backward turn in flight)
    pub turning_left: bool,
    /// Right page is mid-turn (forward turn in flight)
    pub turning_right: bool,
}

/// Navigation state machine over an immutable sequence of page pairs
///
/// The page sequence is fixed when the session is created; only the current
/// index moves, and only through [`turn_next`] / [`turn_previous`] followed
/// by a [`tick`] that observes the turn window elapsing. Requests at either
/// boundary are no-ops, as are requests made while a turn is already in
/// flight.
///
/// [`turn_next`]: ReaderSession::turn_next
/// [`turn_previous`]: ReaderSession::turn_previous
/// [`tick`]: ReaderSession::tick
#[derive(Debug, Clone)]
pub struct ReaderSession {
    pages: Vec<PagePair>,
    current_page: usize,
    pending: Option<PendingTurn>,
    turn_duration_ms: u64,
}

impl ReaderSession {
    /// Open a session at the first page pair
    pub fn new(pages: Vec<PagePair>) -> Self {
        Self {
            pages,
            current_page: 0,
            pending: None,
            turn_duration_ms: DEFAULT_TURN_MS,
        }
    }

    /// Run the whole pipeline for one record and open a session on it
    pub fn from_record(book: &BookRecord) -> Self {
        Self::new(paginate(synthesize_sections(book)))
    }

    /// Override the turn window (tests use 0 for instant commits)
    pub fn with_turn_duration(mut self, turn_duration_ms: u64) -> Self {
        self.turn_duration_ms = turn_duration_ms;
        self
    }

    /// Request a turn towards the end of the book
    ///
    /// Returns whether a turn actually started. No-op on the last pair, when
    /// there are no pages at all, or while another turn is still in flight.
    pub fn turn_next(&mut self, now_ms: u64) -> bool {
        if self.pending.is_some() {
            debug!(page = self.current_page, "turn ignored: another turn in flight");
            return false;
        }
        if self.pages.is_empty() || self.current_page == self.pages.len() - 1 {
            return false;
        }
        self.start_turn(TurnDirection::Forward, now_ms);
        true
    }

    /// Request a turn back towards the cover
    ///
    /// Symmetric with [`turn_next`]; no-op on the first pair.
    ///
    /// [`turn_next`]: ReaderSession::turn_next
    pub fn turn_previous(&mut self, now_ms: u64) -> bool {
        if self.pending.is_some() {
            debug!(page = self.current_page, "turn ignored: another turn in flight");
            return false;
        }
        if self.pages.is_empty() || self.current_page == 0 {
            return false;
        }
        self.start_turn(TurnDirection::Backward, now_ms);
        true
    }

    fn start_turn(&mut self, direction: TurnDirection, now_ms: u64) {
        debug!(page = self.current_page, ?direction, "turn started");
        self.pending = Some(PendingTurn {
            direction,
            commit_at_ms: now_ms.saturating_add(self.turn_duration_ms),
        });
    }

    /// Advance the clock; commits an in-flight turn once its window elapsed
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let Some(turn) = self.pending else {
            return TickResult::NoRender;
        };
        if now_ms < turn.commit_at_ms {
            return TickResult::NoRender;
        }

        self.pending = None;
        let last = self.pages.len().saturating_sub(1);
        self.current_page = match turn.direction {
            TurnDirection::Forward => (self.current_page + 1).min(last),
            TurnDirection::Backward => self.current_page.saturating_sub(1),
        };
        debug!(page = self.current_page, "turn committed");
        TickResult::RenderRequested
    }

    /// Snapshot for the renderer, or `None` when the book has no pages
    ///
    /// Callers showing `None` should paint a "no content available"
    /// placeholder with both controls disabled.
    pub fn view(&self) -> Option<PageView<'_>> {
        let pair = self.pages.get(self.current_page)?;
        let start = 2 * self.current_page + 1;
        Some(PageView {
            left: &pair.left,
            right: &pair.right,
            page_label: format!("{}-{} / {}", start, start + 1, 2 * self.pages.len()),
            previous_disabled: self.current_page == 0,
            next_disabled: self.current_page == self.pages.len() - 1,
            turning_left: self.turning(TurnDirection::Backward),
            turning_right: self.turning(TurnDirection::Forward),
        })
    }

    fn turning(&self, direction: TurnDirection) -> bool {
        self.pending.map(|t| t.direction) == Some(direction)
    }

    /// Whether any turn is currently in flight
    pub fn is_turning(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the session has anything to show
    pub fn has_content(&self) -> bool {
        !self.pages.is_empty()
    }

    /// Number of page pairs
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the visible page pair
    pub fn current_page(&self) -> usize {
        self.current_page
    }
}
