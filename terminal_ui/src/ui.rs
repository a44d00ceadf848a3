use rand::Rng;
use tracker_shared::{Priority, Task};
use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{BarChart, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

const TITLE: &str = "Enhanced AI-Powered Todo List Tracker";
const TEXT_PLACEHOLDER: &str = "Enter a new task...";
const TIME_PLACEHOLDER: &str = "Time (e.g., 30m, 1h)";
const HELP: &str =
    "Tab: next field  Enter: add  ←/→: priority  Space: toggle  d: delete  Esc: quit";

pub fn row_color(task: &Task) -> Color {
    if task.is_completed() {
        return Color::DarkGray;
    }
    match task.priority() {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
        Priority::Normal => Color::Blue,
    }
}

pub fn flag_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low | Priority::Normal => Color::Green,
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Horizontal scroll and cursor column for a one-line field whose inner area
/// is `inner_width` columns wide. The tail of `value` stays visible with one
/// free column left for the cursor.
fn field_view(value: &str, inner_width: u16) -> (u16, u16) {
    let width = u16::try_from(Span::raw(value).width()).unwrap_or(u16::MAX);
    let offset = width.saturating_sub(inner_width.saturating_sub(1));
    (offset, width - offset)
}

fn input<'a>(
    value: &'a str,
    placeholder: &'a str,
    title: &'a str,
    focused: bool,
    area: Rect,
) -> Paragraph<'a> {
    let line = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };
    let (offset, _) = field_view(value, area.width.saturating_sub(2));
    Paragraph::new(Spans::from(line))
        .block(field_block(title, focused))
        .scroll((0, offset))
}

fn task_item(task: &Task) -> ListItem<'_> {
    let color = row_color(task);
    let (glyph, text_style) = if task.is_completed() {
        (
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Style::default().fg(color).add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (
            Span::styled("○ ", Style::default().fg(Color::Gray)),
            Style::default().fg(color),
        )
    };

    ListItem::new(Spans::from(vec![
        glyph,
        Span::styled(task.text(), text_style),
        Span::raw("  "),
        Span::styled("⏱ ", Style::default().fg(Color::Gray)),
        Span::styled(task.time_allotted(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled("⚑", Style::default().fg(flag_color(task.priority()))),
    ]))
}

fn set_field_cursor<B: Backend>(f: &mut Frame<B>, area: Rect, value: &str) {
    let (_, column) = field_view(value, area.width.saturating_sub(2));
    f.set_cursor(
        area.x.saturating_add(1).saturating_add(column),
        area.y.saturating_add(1),
    );
}

pub fn draw<B: Backend, R: Rng>(f: &mut Frame<B>, app: &App<R>) {
    let tracker = app.tracker();
    let draft = tracker.draft();
    let focus = app.focus();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(10),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new(Spans::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    f.render_widget(
        input(
            draft.text(),
            TEXT_PLACEHOLDER,
            "Task",
            focus == Focus::Text,
            rows[1],
        ),
        rows[1],
    );

    let options = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[2]);
    f.render_widget(
        input(
            draft.time(),
            TIME_PLACEHOLDER,
            "Time",
            focus == Focus::Time,
            options[0],
        ),
        options[0],
    );
    let picker = Paragraph::new(Spans::from(vec![
        Span::raw("◀ "),
        Span::styled(
            draft.priority().label(),
            Style::default().fg(flag_color(draft.priority())),
        ),
        Span::raw(" ▶"),
    ]))
    .block(field_block("Priority", focus == Focus::Priority));
    f.render_widget(picker, options[1]);

    let banner = Paragraph::new(Spans::from(vec![
        Span::styled("AI Suggestion: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(tracker.suggestion()),
    ]))
    .style(Style::default().fg(Color::Blue))
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(banner, rows[3]);

    let items: Vec<ListItem> = tracker.tasks().iter().map(task_item).collect();
    let list = List::new(items)
        .block(field_block("Tasks", focus == Focus::List))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if focus == Focus::List {
        state.select(app.selected());
    }
    f.render_stateful_widget(list, rows[4], &mut state);

    let data: Vec<(&str, u64)> = tracker
        .completion()
        .iter()
        .map(|bucket| (bucket.name, bucket.value as u64))
        .collect();
    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .data(&data)
        .bar_width(11)
        .bar_gap(4)
        .bar_style(Style::default().fg(Color::Rgb(0x88, 0x84, 0xd8)))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(0x88, 0x84, 0xd8)),
        );
    f.render_widget(chart, rows[5]);

    f.render_widget(
        Paragraph::new(Spans::from(Span::styled(
            HELP,
            Style::default().fg(Color::DarkGray),
        ))),
        rows[6],
    );

    match focus {
        Focus::Text => set_field_cursor(f, rows[1], draft.text()),
        Focus::Time => set_field_cursor(f, options[0], draft.time()),
        Focus::Priority | Focus::List => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tracker_shared::TaskStore;
    use tui::{backend::TestBackend, Terminal};

    fn terminal_with(app: &App<StdRng>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn render(app: &App<StdRng>) -> String {
        let terminal = terminal_with(app);
        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(&buffer.get(x, y).symbol);
            }
            screen.push('\n');
        }
        screen
    }

    fn type_and_submit(app: &mut App<StdRng>, text: &str) {
        for c in text.chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn empty_screen_shows_form_banner_and_chart() {
        let app = App::new(StdRng::seed_from_u64(9));
        let screen = render(&app);

        assert!(screen.contains(TITLE));
        assert!(screen.contains(TEXT_PLACEHOLDER));
        assert!(screen.contains(TIME_PLACEHOLDER));
        assert!(screen.contains("Normal Priority"));
        assert!(screen.contains("AI Suggestion: "));
        assert!(screen.contains(app.tracker().suggestion()));
        assert!(screen.contains("Completed"));
        assert!(screen.contains("Remaining"));
    }

    #[test]
    fn added_tasks_are_listed() {
        let mut app = App::new(StdRng::seed_from_u64(9));
        type_and_submit(&mut app, "Write report");
        type_and_submit(&mut app, "Stretch");
        let screen = render(&app);

        assert!(screen.contains("Write report"));
        assert!(screen.contains("Stretch"));
        assert!(screen.contains("○ Write report"));
    }

    #[test]
    fn cursor_follows_display_width() {
        let mut app = App::new(StdRng::seed_from_u64(9));
        for c in "日本".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let mut terminal = terminal_with(&app);

        // Task field starts at column 1, row 2; its text starts one cell in.
        assert_eq!(terminal.get_cursor().unwrap(), (2 + 4, 3));
    }

    #[test]
    fn very_long_draft_scrolls_instead_of_overflowing() {
        let mut app = App::new(StdRng::seed_from_u64(9));
        for _ in 0..65_534 {
            app.on_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        }
        let mut terminal = terminal_with(&app);

        // Last inner column of the 98-wide task field.
        assert_eq!(terminal.get_cursor().unwrap(), (97, 3));
        let screen = render(&app);
        assert!(screen.contains(&"a".repeat(95)));
        assert!(!screen.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn field_view_keeps_tail_visible() {
        assert_eq!(field_view("", 10), (0, 0));
        assert_eq!(field_view("abc", 10), (0, 3));
        assert_eq!(field_view("abcdefghijkl", 10), (3, 9));
        assert_eq!(field_view("日本", 10), (0, 4));
        assert_eq!(field_view("abc", 0), (3, 0));
    }

    #[test]
    fn row_colors_follow_priority_until_completed() {
        let mut store = TaskStore::new();
        let high = store.add("h", "", Priority::High).unwrap();
        let normal = store.add("n", "", Priority::Normal).unwrap();

        assert_eq!(row_color(store.get(high).unwrap()), Color::Red);
        assert_eq!(row_color(store.get(normal).unwrap()), Color::Blue);

        store.toggle(high);
        assert_eq!(row_color(store.get(high).unwrap()), Color::DarkGray);
    }

    #[test]
    fn flags_fall_back_to_green() {
        assert_eq!(flag_color(Priority::High), Color::Red);
        assert_eq!(flag_color(Priority::Medium), Color::Yellow);
        assert_eq!(flag_color(Priority::Low), Color::Green);
        assert_eq!(flag_color(Priority::Normal), Color::Green);
    }
}
