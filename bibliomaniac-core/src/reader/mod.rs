//! Reading preview pipeline: synthesize sections, lay them out as facing
//! pages, and drive the page-turn state machine
//!
//! The pipeline is deliberately split into three stages:
//!
//! 1. [`synthesize_sections`] derives titled sections from a catalog record
//! 2. [`paginate`] lays the sections out as left/right page pairs
//! 3. [`ReaderSession`] tracks the visible pair and animates page turns
//!
//! Stages 1 and 2 are pure functions; the session owns all mutable state and
//! takes the current time as an argument, so every stage is testable without
//! clocks or timers.

mod content;
mod paginate;
mod session;

pub use content::synthesize_sections;
pub use paginate::paginate;
pub use session::{PageView, ReaderSession, TickResult, TurnDirection, DEFAULT_TURN_MS};
