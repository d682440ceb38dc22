//! Interactive browser state - screens, cursors and key handling
//!
//! All state transitions live here, free of any terminal I/O; the event
//! loop feeds in key events and the current time, and `ui` paints whatever
//! this struct says. That split keeps every screen testable headlessly.

use bibliomaniac_core::catalog::KNOWN_CATEGORIES;
use bibliomaniac_core::error::Result;
use bibliomaniac_core::{BookId, BookRecord, CatalogStore, ReaderSession, TickResult};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashSet;
use tracing::warn;

/// One full-terminal view, mirroring the web front end's pages
#[derive(Debug, Clone)]
pub enum Screen {
    /// Popular shelf, the landing view
    Home { cursor: usize },
    /// Full shelf with bookmark stars
    MyBooks { cursor: usize },
    /// Category tabs with the matching shelf below
    Categories { tab: usize, cursor: usize },
    /// One book's details page
    Details { id: BookId },
    /// The author page reached from a book
    Author { id: BookId },
    /// Full-screen reader over a synthesized preview
    Reader { title: String, session: ReaderSession },
}

/// Top-level application state driven by the event loop
pub struct App {
    store: CatalogStore,
    screen: Screen,
    back: Vec<Screen>,
    bookmarks: HashSet<BookId>,
    should_quit: bool,
}

impl App {
    /// Start on the home shelf
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            screen: Screen::Home { cursor: 0 },
            back: Vec::new(),
            bookmarks: HashSet::new(),
            should_quit: false,
        }
    }

    /// Start directly in the reader on one book
    pub fn with_book(store: CatalogStore, id: &BookId) -> Result<Self> {
        let book = store.book(id)?;
        let title = book.title.clone();
        let session = ReaderSession::from_record(book);
        Ok(Self {
            store,
            screen: Screen::Reader { title, session },
            back: Vec::new(),
            bookmarks: HashSet::new(),
            should_quit: false,
        })
    }

    /// The screen to paint
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The loaded catalog
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Whether the event loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a book's bookmark star is lit
    pub fn is_bookmarked(&self, id: &BookId) -> bool {
        self.bookmarks.contains(id)
    }

    /// Books shown by the current browse screen, in display order
    pub fn shelf(&self) -> Vec<&BookRecord> {
        match &self.screen {
            Screen::Home { .. } | Screen::MyBooks { .. } => self.store.books().iter().collect(),
            Screen::Categories { tab, .. } => self.store.in_category(KNOWN_CATEGORIES[*tab]),
            _ => Vec::new(),
        }
    }

    /// Advance time-based state; returns whether a repaint is needed
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match &mut self.screen {
            Screen::Reader { session, .. } => session.tick(now_ms) == TickResult::RenderRequested,
            _ => false,
        }
    }

    /// Dispatch one key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match &self.screen {
            Screen::Home { .. } | Screen::MyBooks { .. } | Screen::Categories { .. } => {
                self.handle_browse_key(key)
            }
            Screen::Details { .. } => self.handle_details_key(key),
            Screen::Author { .. } => self.handle_author_key(key),
            Screen::Reader { .. } => self.handle_reader_key(key, now_ms),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.switch_tab(-1),
            KeyCode::Right | KeyCode::Char('l') => self.switch_tab(1),
            KeyCode::Tab => self.cycle_browse(),
            KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    self.open(Screen::Details { id });
                }
            }
            KeyCode::Char('m') => {
                if let Some(id) = self.selected_id() {
                    self.toggle_bookmark(id);
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        let Screen::Details { id } = &self.screen else {
            return;
        };
        let id = id.clone();

        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.open_reader(&id),
            KeyCode::Char('a') => self.open(Screen::Author { id }),
            KeyCode::Char('m') => self.toggle_bookmark(id),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_author_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.go_back();
        }
    }

    fn handle_reader_key(&mut self, key: KeyEvent, now_ms: u64) {
        let Screen::Reader { session, .. } = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                session.turn_previous(now_ms);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                session.turn_next(now_ms);
            }
            // leaving the screen drops the session and any pending turn
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn select_previous(&mut self) {
        if let Screen::Home { cursor }
        | Screen::MyBooks { cursor }
        | Screen::Categories { cursor, .. } = &mut self.screen
        {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn select_next(&mut self) {
        let len = self.shelf().len();
        if let Screen::Home { cursor }
        | Screen::MyBooks { cursor }
        | Screen::Categories { cursor, .. } = &mut self.screen
        {
            if len > 0 {
                *cursor = (*cursor + 1).min(len - 1);
            }
        }
    }

    fn switch_tab(&mut self, step: isize) {
        if let Screen::Categories { tab, cursor } = &mut self.screen {
            let len = KNOWN_CATEGORIES.len() as isize;
            *tab = (*tab as isize + step).rem_euclid(len) as usize;
            *cursor = 0;
        }
    }

    fn cycle_browse(&mut self) {
        self.screen = match self.screen {
            Screen::Home { .. } => Screen::MyBooks { cursor: 0 },
            Screen::MyBooks { .. } => Screen::Categories { tab: 0, cursor: 0 },
            Screen::Categories { .. } => Screen::Home { cursor: 0 },
            _ => return,
        };
        self.back.clear();
    }

    fn selected_id(&self) -> Option<BookId> {
        let cursor = match &self.screen {
            Screen::Home { cursor } | Screen::MyBooks { cursor } => *cursor,
            Screen::Categories { cursor, .. } => *cursor,
            _ => return None,
        };
        self.shelf().get(cursor).map(|book| book.id.clone())
    }

    fn open_reader(&mut self, id: &BookId) {
        match self.store.book(id) {
            Ok(book) => {
                let title = book.title.clone();
                let session = ReaderSession::from_record(book);
                self.open(Screen::Reader { title, session });
            }
            Err(error) => warn!(%error, "cannot open reader"),
        }
    }

    fn toggle_bookmark(&mut self, id: BookId) {
        if !self.bookmarks.insert(id.clone()) {
            self.bookmarks.remove(&id);
        }
    }

    fn open(&mut self, next: Screen) {
        let previous = std::mem::replace(&mut self.screen, next);
        self.back.push(previous);
    }

    fn go_back(&mut self) {
        match self.back.pop() {
            Some(previous) => self.screen = previous,
            None => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibliomaniac_core::{Catalog, DEFAULT_TURN_MS};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut catalog = Catalog::new();
        catalog.add_book(
            BookRecord::new("1", "Dune", "Frank Herbert")
                .with_description("A desert planet...")
                .with_category("Science Fiction"),
        );
        catalog.add_book(BookRecord::new("2", "Dune Messiah", "Frank Herbert"));
        catalog.add_book(BookRecord::new("3", "Emma", "Jane Austen").with_category("Classic"));
        App::new(CatalogStore::new(catalog))
    }

    fn reader_session(app: &App) -> &ReaderSession {
        match app.screen() {
            Screen::Reader { session, .. } => session,
            other => panic!("expected reader screen, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_opens_details_and_esc_returns() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down), 0);
        app.handle_key(key(KeyCode::Enter), 0);
        assert!(matches!(app.screen(), Screen::Details { id } if id.as_str() == "2"));

        app.handle_key(key(KeyCode::Esc), 0);
        assert!(matches!(app.screen(), Screen::Home { cursor: 1 }));
    }

    #[test]
    fn test_tab_cycles_browse_screens() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab), 0);
        assert!(matches!(app.screen(), Screen::MyBooks { .. }));
        app.handle_key(key(KeyCode::Tab), 0);
        assert!(matches!(app.screen(), Screen::Categories { .. }));
        app.handle_key(key(KeyCode::Tab), 0);
        assert!(matches!(app.screen(), Screen::Home { .. }));
    }

    #[test]
    fn test_cursor_clamps_at_shelf_edges() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up), 0);
        assert!(matches!(app.screen(), Screen::Home { cursor: 0 }));

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down), 0);
        }
        assert!(matches!(app.screen(), Screen::Home { cursor: 2 }));
    }

    #[test]
    fn test_category_tabs_change_shelf() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab), 0);
        app.handle_key(key(KeyCode::Tab), 0);

        // the "Science Fiction" label also matches the fiction tab
        let shelf = app.shelf();
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf[0].title, "Dune");

        app.handle_key(key(KeyCode::Right), 0);
        let shelf = app.shelf();
        assert_eq!(shelf.len(), 1);
        assert_eq!(shelf[0].title, "Emma");

        // stepping left past the first tab wraps to mystery
        app.handle_key(key(KeyCode::Left), 0);
        app.handle_key(key(KeyCode::Left), 0);
        assert!(matches!(app.screen(), Screen::Categories { tab: 4, .. }));
        assert!(app.shelf().is_empty());
    }

    #[test]
    fn test_bookmark_star_round_trips() {
        let mut app = app();
        let id = BookId::new("1");
        assert!(!app.is_bookmarked(&id));

        app.handle_key(key(KeyCode::Char('m')), 0);
        assert!(app.is_bookmarked(&id));
        app.handle_key(key(KeyCode::Char('m')), 0);
        assert!(!app.is_bookmarked(&id));
    }

    #[test]
    fn test_reader_turn_commits_via_tick() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter), 0);
        app.handle_key(key(KeyCode::Char('r')), 0);
        assert_eq!(reader_session(&app).page_count(), 2);

        app.handle_key(key(KeyCode::Right), 1_000);
        assert!(!app.tick(1_000 + DEFAULT_TURN_MS - 1));
        assert!(app.tick(1_000 + DEFAULT_TURN_MS));
        assert_eq!(reader_session(&app).current_page(), 1);
    }

    #[test]
    fn test_leaving_reader_discards_pending_turn() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter), 0);
        app.handle_key(key(KeyCode::Char('r')), 0);
        app.handle_key(key(KeyCode::Right), 0);

        app.handle_key(key(KeyCode::Esc), 100);
        assert!(matches!(app.screen(), Screen::Details { .. }));
        assert!(!app.tick(10_000));

        // reopening starts a fresh session at the first page
        app.handle_key(key(KeyCode::Char('r')), 200);
        assert_eq!(reader_session(&app).current_page(), 0);
        assert!(!reader_session(&app).is_turning());
    }

    #[test]
    fn test_author_page_from_details() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter), 0);
        app.handle_key(key(KeyCode::Char('a')), 0);
        assert!(matches!(app.screen(), Screen::Author { id } if id.as_str() == "1"));

        app.handle_key(key(KeyCode::Esc), 0);
        assert!(matches!(app.screen(), Screen::Details { .. }));
    }

    #[test]
    fn test_read_mode_esc_quits() {
        let store = app().store.clone();
        let mut app = App::with_book(store, &BookId::new("1")).unwrap();
        assert!(matches!(app.screen(), Screen::Reader { .. }));

        app.handle_key(key(KeyCode::Esc), 0);
        assert!(app.should_quit());
    }

    #[test]
    fn test_unknown_book_rejected() {
        let store = app().store.clone();
        assert!(App::with_book(store, &BookId::new("404")).is_err());
    }

    #[test]
    fn test_q_quits_from_any_screen() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter), 0);
        app.handle_key(key(KeyCode::Char('q')), 0);
        assert!(app.should_quit());
    }
}
