use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use rand::Rng;
use tracker_shared::{Task, Tracker};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    Time,
    Priority,
    List,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Text, Focus::Time, Focus::Priority, Focus::List];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

pub struct App<R> {
    tracker: Tracker<R>,
    focus: Focus,
    selected: Option<usize>,
    should_quit: bool,
}

impl<R: Rng> App<R> {
    pub fn new(rng: R) -> Self {
        Self {
            tracker: Tracker::new(rng),
            focus: Focus::Text,
            selected: None,
            should_quit: false,
        }
    }

    pub fn tracker(&self) -> &Tracker<R> {
        &self.tracker
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|index| self.tracker.tasks().get(index))
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Text | Focus::Time => self.on_field_key(key),
                Focus::Priority => self.on_priority_key(key),
                Focus::List => self.on_list_key(key),
            },
        }
    }

    fn on_field_key(&mut self, key: KeyEvent) {
        let draft = self.tracker.draft_mut();
        let field = if self.focus == Focus::Text {
            draft.text_mut()
        } else {
            draft.time_mut()
        };

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                field.push(c);
            }
            _ => {}
        }
    }

    fn on_priority_key(&mut self, key: KeyEvent) {
        let draft = self.tracker.draft_mut();
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Left | KeyCode::Up => draft.set_priority(draft.priority().previous()),
            KeyCode::Right | KeyCode::Down => draft.set_priority(draft.priority().next()),
            _ => {}
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_task().map(Task::id) {
                    self.tracker.toggle(id);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = self.selected_task().map(Task::id) {
                    self.tracker.delete(id);
                    self.clamp_selection();
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        if self.tracker.submit_draft().is_some() {
            self.focus = Focus::Text;
            if self.selected.is_none() {
                self.selected = Some(0);
            }
        } else {
            debug!("submit ignored: draft text is blank");
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.tracker.tasks().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        self.selected = Some((current + delta).clamp(0, len as isize - 1) as usize);
    }

    fn clamp_selection(&mut self) {
        let len = self.tracker.tasks().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }
}
