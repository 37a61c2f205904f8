use super::viewport::visible_range;

use crate::color::Theme;
use crate::command::{Command, Msg};
use crate::component::{Component, Stateful};
use crate::config::GeneralConfig;
use crate::entry::{Entry, Filesystem, GetEntriesError};
use crate::rendering::{Fabric, FlexRow, Location, Zone};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use typed_builder::TypedBuilder;

/// The rows above the first entry: the header and the separator.
const HEADER_ROWS: usize = 2;

/// The relative widths of the name, size, and modify time columns.
const COLUMN_WEIGHTS: [usize; 3] = [5, 2, 3];

/// The name column width used before the first resize.
const INITIAL_TRUNCATE_LIMIT: usize = 100;

#[derive(TypedBuilder)]
pub struct Props {
    /// The absolute path of the directory to start in.
    path: PathBuf,
    filesystem: Box<dyn Filesystem>,
    #[builder(default)]
    theme: Theme,
    #[builder(default)]
    general: GeneralConfig,
}

/// A scrollable, selectable list of the entries of a directory.
pub struct List {
    state: State,
}

impl List {
    /// Return a list showing the entries of the starting directory.
    ///
    /// Failing to read the starting directory is an error since there is nothing to show.
    pub fn new(props: Props) -> Result<Self, GetEntriesError> {
        let state = State::try_from(props)?;
        Ok(Self { state })
    }

    pub fn path(&self) -> &Path {
        &self.state.path
    }

    pub fn show_hidden(&self) -> bool {
        self.state.show_hidden
    }

    /// Return the selected entry, or the default entry if there are no entries.
    pub fn selected_entry(&self) -> Entry {
        self.state.selected_entry()
    }

    fn map(&self, msg: Msg) -> Option<Action> {
        match msg {
            Msg::Path { path, request } => Some(Action::ChangePath { path, request }),
            Msg::UpdateEntries { parent } => Some(Action::UpdateEntries { parent }),
            Msg::ClearKey => Some(Action::ClearKey),
            Msg::Key(key_event) => Some(Action::Key {
                key: Key::from(key_event),
            }),
            Msg::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some(Action::Click {
                column: column.into(),
                row: row.into(),
            }),
            Msg::Mouse(_) => None,
            Msg::Resize { zone } => Some(Action::Resize { zone }),
            Msg::Entry(_) | Msg::NewMessage(_) => None,
        }
    }
}

impl Component<Msg, Command> for List {
    fn on_created(&mut self) -> Option<Command> {
        Some(self.state.clear_key_later())
    }

    fn handle(&mut self, msg: Msg) -> Option<Command> {
        let command: Option<Command> = match self.map(msg) {
            Some(action) => self.state.perform(action),
            None => None,
        };

        if self.state.initialized {
            return command;
        }

        // The first message reloads the starting directory and announces the selection.
        self.state.initialized = true;
        let path: PathBuf = self.state.path.clone();
        let bootstrap = Command::Batch(vec![
            self.state.request_path(path),
            self.state.selection_changed(),
        ]);
        Command::and(command, Some(bootstrap))
    }

    fn render(&self) -> Fabric {
        self.state.render()
    }
}

/// A key that the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Key {
    ToggleHidden,
    Top,
    Bottom,
    Home,
    Copy,
    Up,
    Down,
    Parent,
    Child,
    Open,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Key::Other;
        }

        match key_event.code {
            KeyCode::Char('m') => Key::ToggleHidden,
            KeyCode::Char('g') => Key::Top,
            KeyCode::Char('G') => Key::Bottom,
            KeyCode::Char('~') | KeyCode::Char('.') => Key::Home,
            KeyCode::Char('c') => Key::Copy,
            KeyCode::Char('w') | KeyCode::Char('k') | KeyCode::Up => Key::Up,
            KeyCode::Char('s') | KeyCode::Char('j') | KeyCode::Down => Key::Down,
            KeyCode::Char('a') | KeyCode::Char('h') | KeyCode::Left => Key::Parent,
            KeyCode::Char('d') | KeyCode::Char('l') | KeyCode::Right => Key::Child,
            KeyCode::Enter => Key::Open,
            _ => Key::Other,
        }
    }
}

impl Key {
    /// Return the character remembered for two key sequences, if the key is part of one.
    fn tracked(self) -> Option<char> {
        match self {
            Key::Top => Some('g'),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(super) enum Action {
    ChangePath { path: PathBuf, request: Option<u64> },
    UpdateEntries { parent: bool },
    ClearKey,
    Key { key: Key },
    Resize { zone: Zone },
    Click { column: usize, row: usize },
}

pub(super) struct State {
    pub(super) path: PathBuf,
    pub(super) entries: Vec<Entry>,
    pub(super) show_hidden: bool,
    pub(super) selected: usize,

    /// Where the list was last drawn.
    pub(super) zone: Zone,
    pub(super) flex: FlexRow,
    pub(super) truncate_limit: usize,
    pub(super) max_entries_shown: usize,

    /// The last key pressed, until the next clear key tick.
    last_key: Option<char>,
    key_timeout: Duration,

    last_click_at: Option<Instant>,
    click_delay: Duration,

    /// The number of the latest path change the list asked for.
    latest_request: u64,
    /// The request that reloads the directory after toggling hidden entries.
    hidden_toggle_request: Option<u64>,

    initialized: bool,
    pub(super) theme: Theme,
    filesystem: Box<dyn Filesystem>,
}

impl TryFrom<Props> for State {
    type Error = GetEntriesError;

    fn try_from(props: Props) -> Result<Self, Self::Error> {
        let show_hidden = props.general.show_hidden();
        let entries: Vec<Entry> = props.filesystem.entries(&props.path, show_hidden)?;

        Ok(State {
            path: props.path,
            entries,
            show_hidden,
            selected: 0,
            zone: Zone::default(),
            flex: FlexRow::new(COLUMN_WEIGHTS.to_vec()),
            truncate_limit: INITIAL_TRUNCATE_LIMIT,
            max_entries_shown: 0,
            last_key: None,
            key_timeout: props.general.key_timeout(),
            last_click_at: None,
            click_delay: props.general.click_delay(),
            latest_request: 0,
            hidden_toggle_request: None,
            initialized: false,
            theme: props.theme,
            filesystem: props.filesystem,
        })
    }
}

impl State {
    pub(super) fn selected_entry(&self) -> Entry {
        self.entries
            .get(self.selected)
            .cloned()
            .unwrap_or_default()
    }

    /// Return the range of entries that are drawn.
    pub(super) fn visible_range(&self) -> std::ops::Range<usize> {
        visible_range(
            self.selected,
            self.entries.len(),
            self.max_entries_shown,
            self.zone.size.rows,
        )
    }

    /// Keep the selection on an entry, wrapping past the end back to the first entry.
    fn restrict_index(&mut self) {
        if self.selected >= self.entries.len() {
            self.selected = 0;
        }
    }

    fn selection_changed(&self) -> Command {
        Command::Emit(Msg::Entry(self.selected_entry()))
    }

    fn clear_key_later(&self) -> Command {
        Command::Tick {
            after: self.key_timeout,
            msg: Msg::ClearKey,
        }
    }

    fn message(text: impl Into<String>) -> Command {
        Command::Emit(Msg::NewMessage(text.into()))
    }

    /// Ask for the entries of `path`, superseding any earlier request.
    fn request_path(&mut self, path: PathBuf) -> Command {
        self.latest_request += 1;
        Command::Emit(Msg::Path {
            path,
            request: Some(self.latest_request),
        })
    }

    fn change_path(&mut self, path: PathBuf, request: Option<u64>) -> Option<Command> {
        if let Some(request) = request {
            if request < self.latest_request {
                #[cfg(feature = "logging")]
                log::debug!("Dropping the superseded request {} for {:?}.", request, path);
                return None;
            }
        }

        let hidden_toggled = request.is_some() && request == self.hidden_toggle_request;
        if hidden_toggled {
            self.hidden_toggle_request = None;
        }

        match self.filesystem.entries(&path, self.show_hidden) {
            Ok(entries) => {
                #[cfg(feature = "logging")]
                log::info!("Showing {} entries of {:?}.", entries.len(), path);
                self.path = path;
                self.entries = entries;
                self.restrict_index();
                Some(self.selection_changed())
            }
            Err(error) => {
                #[cfg(feature = "logging")]
                log::warn!("Failed to load {:?}: {}", path, error);
                if hidden_toggled {
                    self.show_hidden = !self.show_hidden;
                }
                Some(Self::message(error.to_string()))
            }
        }
    }

    fn update_entries(&mut self, parent: bool) -> Option<Command> {
        if parent {
            let path: PathBuf = self.path.parent().unwrap_or(&self.path).to_path_buf();
            return Some(self.request_path(path));
        }

        let entry: Entry = self.selected_entry();
        if self.entries.is_empty() || !(entry.is_dir() || entry.is_symlink()) {
            return None;
        }
        let path: PathBuf = entry.full_path(&self.path);
        Some(self.request_path(path))
    }

    fn clear_key(&mut self) -> Option<Command> {
        self.last_key = None;
        Some(self.clear_key_later())
    }

    fn key(&mut self, key: Key) -> Option<Command> {
        let last_key: Option<char> = self.last_key;
        self.last_key = key.tracked();

        match key {
            Key::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                let path: PathBuf = self.path.clone();
                let command = self.request_path(path);
                self.hidden_toggle_request = Some(self.latest_request);
                Some(command)
            }
            Key::Top => {
                if last_key != Some('g') {
                    return None;
                }
                self.selected = 0;
                Some(self.selection_changed())
            }
            Key::Bottom => {
                self.selected = self.entries.len().saturating_sub(1);
                Some(self.selection_changed())
            }
            Key::Home => match self.filesystem.home_dir() {
                Some(home) => Some(self.request_path(home)),
                None => Some(Self::message("Could not determine the home directory.")),
            },
            Key::Copy => {
                if self.entries.is_empty() {
                    return None;
                }
                let path: PathBuf = self.selected_entry().full_path(&self.path);
                Some(Command::Batch(vec![
                    Command::Copy(path.to_string_lossy().to_string()),
                    Self::message("Copied!"),
                ]))
            }
            Key::Up => {
                self.selected = match self.selected {
                    0 => self.entries.len().saturating_sub(1),
                    selected => selected - 1,
                };
                self.restrict_index();
                Some(self.selection_changed())
            }
            Key::Down => {
                self.selected += 1;
                self.restrict_index();
                Some(self.selection_changed())
            }
            Key::Parent => Some(Command::Emit(Msg::UpdateEntries { parent: true })),
            Key::Child => Some(Command::Emit(Msg::UpdateEntries { parent: false })),
            Key::Open => {
                if self.entries.is_empty() {
                    return None;
                }
                Some(Command::Open(self.selected_entry().full_path(&self.path)))
            }
            Key::Other => None,
        }
    }

    fn resize(&mut self, zone: Zone) -> Option<Command> {
        self.zone = zone;
        let widths: Vec<usize> = self.flex.widths(zone.size.columns);
        self.truncate_limit = widths[0].saturating_sub(1);
        self.max_entries_shown = zone.size.rows * 3 / 4;
        None
    }

    fn click(&mut self, column: usize, row: usize) -> Option<Command> {
        let Location { row: y, .. } = self.zone.pos(column, row)?;
        let visible = self.visible_range();
        if y < HEADER_ROWS || y - HEADER_ROWS >= visible.len() {
            return None;
        }

        self.selected = visible.start + y - HEADER_ROWS;

        let now = Instant::now();
        let double_click = self
            .last_click_at
            .map_or(false, |last| now.duration_since(last) < self.click_delay);
        if double_click && self.selected_entry().is_dir() {
            return Some(Command::Emit(Msg::UpdateEntries { parent: false }));
        }

        self.last_click_at = Some(now);
        Some(self.selection_changed())
    }
}

impl Stateful<Action, Command> for State {
    fn perform(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::ChangePath { path, request } => self.change_path(path, request),
            Action::UpdateEntries { parent } => self.update_entries(parent),
            Action::ClearKey => self.clear_key(),
            Action::Key { key } => self.key(key),
            Action::Resize { zone } => self.resize(zone),
            Action::Click { column, row } => self.click(column, row),
        }
    }
}
