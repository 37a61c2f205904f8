use crate::color::Theme;
use crate::component::{Component, Stateful};
use crate::entry::Entry;
use crate::rendering::{Fabric, Yarn};

pub enum Event {
    Resize { columns: usize },
    /// The selected entry changed.
    Entry(Entry),
    Message(String),
    /// Forget the message so that the selected entry is shown again.
    ClearMessage,
}

/// A one row bar showing the latest status message, or details of the selected entry.
pub struct StatusBar {
    state: State,
}

impl StatusBar {
    pub fn new(theme: Theme) -> Self {
        let state = State {
            columns: 0,
            entry: None,
            message: None,
            theme,
        };
        Self { state }
    }
}

impl Component<Event, ()> for StatusBar {
    fn handle(&mut self, event: Event) -> Option<()> {
        self.state.perform(event)
    }

    fn render(&self) -> Fabric {
        let mut yarn = Yarn::from(self.state.text());
        yarn.resize(self.state.columns);
        yarn.color(self.state.theme.bar_foreground);
        yarn.background(self.state.theme.bar_background);
        Fabric::from(yarn)
    }
}

struct State {
    columns: usize,
    entry: Option<Entry>,
    message: Option<String>,
    theme: Theme,
}

impl State {
    fn text(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }

        match &self.entry {
            Some(entry) if !entry.name().is_empty() => {
                let mut text = format!(
                    "{}  {}  {}",
                    entry.name(),
                    entry.size(),
                    entry.modify_time()
                );
                if let Some(link) = entry.symlink_display_name() {
                    text.push_str(&format!("  -> {}", link));
                }
                text
            }
            _ => String::new(),
        }
    }
}

impl Stateful<Event, ()> for State {
    fn perform(&mut self, event: Event) -> Option<()> {
        match event {
            Event::Resize { columns } => self.columns = columns,
            Event::Entry(entry) => self.entry = Some(entry),
            Event::Message(message) => self.message = Some(message),
            Event::ClearMessage => self.message = None,
        }
        None
    }
}
