//! Screen painting with ratatui
//!
//! Pure view code: reads [`App`] state and draws it, no mutation.

use crate::tui::app::{App, Screen};
use bibliomaniac_core::catalog::KNOWN_CATEGORIES;
use bibliomaniac_core::{BookId, BookRecord, ReaderSession, Section};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);
const DIM: Style = Style::new().fg(Color::DarkGray);

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Home { cursor } => draw_shelf(frame, app, "Popular", *cursor),
        Screen::MyBooks { cursor } => draw_shelf(frame, app, "My books", *cursor),
        Screen::Categories { tab, cursor } => draw_categories(frame, app, *tab, *cursor),
        Screen::Details { id } => draw_details(frame, app, id),
        Screen::Author { id } => draw_author(frame, app, id),
        Screen::Reader { title, session } => draw_reader(frame, title, session),
    }
}

fn draw_shelf(frame: &mut Frame, app: &App, title: &str, cursor: usize) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    render_shelf_list(frame, app, body, format!("Bibliomaniac: {title}"), cursor);
    hints(frame, footer, "enter details  m bookmark  tab switch view  q quit");
}

fn draw_categories(frame: &mut Frame, app: &App, tab: usize, cursor: usize) {
    let [tab_bar, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let tabs = Tabs::new(KNOWN_CATEGORIES)
        .select(tab)
        .block(Block::bordered().title("Categories"))
        .highlight_style(BOLD.fg(Color::Yellow));
    frame.render_widget(tabs, tab_bar);

    if app.shelf().is_empty() {
        let empty = Paragraph::new("No books found in this category.")
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(empty, body);
    } else {
        render_shelf_list(frame, app, body, String::new(), cursor);
    }

    hints(
        frame,
        footer,
        "left/right switch tab  enter details  tab switch view  q quit",
    );
}

fn render_shelf_list(frame: &mut Frame, app: &App, area: Rect, title: String, cursor: usize) {
    let items: Vec<ListItem> = app
        .shelf()
        .iter()
        .map(|book| shelf_item(app, book))
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(title))
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn shelf_item(app: &App, book: &BookRecord) -> ListItem<'static> {
    let star = if app.is_bookmarked(&book.id) { "★" } else { "☆" };
    let mut spans = vec![
        Span::raw(format!("{star} ")),
        Span::styled(book.title.clone(), BOLD),
        Span::styled(format!("  {}", book.author), DIM),
        Span::raw(format!("  {}", book.stars())),
    ];
    if let Some(price) = &book.price {
        spans.push(Span::styled(format!("  {price}"), DIM));
    }
    ListItem::new(Line::from(spans))
}

fn draw_details(frame: &mut Frame, app: &App, id: &BookId) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let Some(book) = app.store().get(id) else {
        frame.render_widget(
            Paragraph::new("Book not found.").block(Block::bordered().title("Book details")),
            body,
        );
        hints(frame, footer, "esc back  q quit");
        return;
    };

    let star = if app.is_bookmarked(id) { "★" } else { "☆" };
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{star} ")),
            Span::styled(book.title.clone(), BOLD),
        ]),
        Line::from(format!("by {}", book.author)),
    ];
    if let Some(date) = &book.publication_date {
        lines.push(Line::from(format!("Published: {date}")));
    }
    lines.push(Line::from(format!("{} ({:.1})", book.stars(), book.rating)));
    if let Some(price) = &book.price {
        lines.push(Line::from(format!("Price: {price}")));
    }
    if let Some(category) = &book.category {
        lines.push(Line::from(format!("Category: {category}")));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("About this e-book", BOLD)));
    lines.push(Line::from(
        book.description
            .clone()
            .unwrap_or_else(|| "No description available.".to_string()),
    ));

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title("Book details"));
    frame.render_widget(details, body);

    hints(frame, footer, "r read  a author  m bookmark  esc back  q quit");
}

fn draw_author(frame: &mut Frame, app: &App, id: &BookId) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let Some(book) = app.store().get(id) else {
        frame.render_widget(
            Paragraph::new("Author not found.").block(Block::bordered().title("Author")),
            body,
        );
        hints(frame, footer, "esc back  q quit");
        return;
    };

    let shelf = app.store().books_by_author(&book.author);
    let count = match book.number_of_books {
        Some(count) => count as usize,
        None => shelf.len(),
    };

    let mut lines = vec![
        Line::from(Span::styled(book.author.clone(), BOLD)),
        Line::from(format!("{count} books")),
        Line::default(),
        Line::from(Span::styled("About this author", BOLD)),
        Line::from(match &book.about_author {
            Some(bio) if !bio.trim().is_empty() => bio.clone(),
            _ => "No author information available.".to_string(),
        }),
    ];
    if shelf.len() > 1 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("In the catalog", BOLD)));
        for other in shelf {
            lines.push(Line::from(format!("  {}", other.title)));
        }
    }

    let author = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title("Author"));
    frame.render_widget(author, body);

    hints(frame, footer, "esc back  q quit");
}

fn draw_reader(frame: &mut Frame, title: &str, session: &ReaderSession) {
    let [heading, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(title.to_string())
            .style(BOLD)
            .alignment(Alignment::Center),
        heading,
    );

    let Some(view) = session.view() else {
        frame.render_widget(
            Paragraph::new("No content available")
                .alignment(Alignment::Center)
                .block(Block::bordered()),
            body,
        );
        hints(frame, footer, "esc close  q quit");
        return;
    };

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    frame.render_widget(page_widget(view.left, view.turning_left), left);
    frame.render_widget(page_widget(view.right, view.turning_right), right);

    let [prev_area, label_area, next_area] = Layout::horizontal([
        Constraint::Length(12),
        Constraint::Min(1),
        Constraint::Length(12),
    ])
    .areas(footer);

    let nav_style = |disabled: bool| if disabled { DIM } else { Style::new() };
    frame.render_widget(
        Paragraph::new("< previous").style(nav_style(view.previous_disabled)),
        prev_area,
    );
    frame.render_widget(
        Paragraph::new(view.page_label.clone()).alignment(Alignment::Center),
        label_area,
    );
    frame.render_widget(
        Paragraph::new("next >")
            .style(nav_style(view.next_disabled))
            .alignment(Alignment::Right),
        next_area,
    );
}

/// A single page, bordered; the border lights up while the page is mid-turn
fn page_widget<'a>(section: &'a Section, turning: bool) -> Paragraph<'a> {
    let mut block = Block::bordered();
    if !section.title.is_empty() {
        block = block.title(section.title.as_str());
    }
    if turning {
        block = block.border_style(Style::new().fg(Color::Yellow));
    }
    Paragraph::new(section.content.as_str())
        .wrap(Wrap { trim: false })
        .block(block)
}

fn hints(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(Paragraph::new(text.to_string()).style(DIM), area);
}
