use super::{List, ListProps, PathBar, PathBarEvent, PathBarProps, StatusBar, StatusBarEvent};
use crate::color::Theme;
use crate::command::{Command, Msg};
use crate::component::Component;
use crate::entry::GetEntriesError;
use crate::rendering::{Fabric, Location, Size, Zone};

use std::path::PathBuf;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use typed_builder::TypedBuilder;

/// The rows used by the path bar and the status bar.
const BAR_ROWS: usize = 2;

#[derive(TypedBuilder)]
pub struct Props {
    list: ListProps,
    #[builder(default)]
    home: Option<PathBuf>,
    #[builder(default)]
    theme: Theme,
}

#[derive(Debug)]
pub enum Event {
    Terminal(CrosstermEvent),
    /// A message delivered by a command.
    Msg(Msg),
}

/// The whole browser: a path bar above the list and a status bar below it.
pub struct Fman {
    list: List,
    path_bar: PathBar,
    status_bar: StatusBar,
    size: Size,
}

impl Fman {
    pub fn new(props: Props) -> Result<Self, GetEntriesError> {
        let list = List::new(props.list)?;
        let path_bar = PathBar::new(
            PathBarProps::builder()
                .directory(list.path().to_path_buf())
                .home(props.home)
                .theme(props.theme)
                .build(),
        );
        let status_bar = StatusBar::new(props.theme);

        Ok(Self {
            list,
            path_bar,
            status_bar,
            size: Size::default(),
        })
    }

    fn resize(&mut self, size: Size) -> Option<Command> {
        self.size = size;
        let columns = size.columns;
        self.path_bar.handle(PathBarEvent::Resize { columns });
        self.status_bar.handle(StatusBarEvent::Resize { columns });

        let zone = Zone::new(
            Location::new(1, 0),
            Size::new(size.rows.saturating_sub(BAR_ROWS), columns),
        );
        self.handle_list(Msg::Resize { zone })
    }

    fn handle_list(&mut self, msg: Msg) -> Option<Command> {
        let command = self.list.handle(msg);
        self.path_bar.handle(PathBarEvent::SetDirectory {
            directory: self.list.path().to_path_buf(),
            show_hidden: self.list.show_hidden(),
        });
        command
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') => key_event.modifiers.is_empty(),
        KeyCode::Char('c') => key_event.modifiers == KeyModifiers::CONTROL,
        _ => false,
    }
}

impl Component<Event, Command> for Fman {
    fn on_created(&mut self) -> Option<Command> {
        self.list.on_created()
    }

    fn handle(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Terminal(CrosstermEvent::Key(key_event)) => {
                if is_quit(&key_event) {
                    return Some(Command::Quit);
                }
                self.status_bar.handle(StatusBarEvent::ClearMessage);
                self.handle_list(Msg::Key(key_event))
            }
            Event::Terminal(CrosstermEvent::Mouse(mouse_event)) => {
                self.handle_list(Msg::Mouse(mouse_event))
            }
            Event::Terminal(CrosstermEvent::Resize(columns, rows)) => {
                self.resize(Size::from((columns, rows)))
            }
            Event::Msg(Msg::Entry(entry)) => {
                self.status_bar.handle(StatusBarEvent::Entry(entry));
                None
            }
            Event::Msg(Msg::NewMessage(message)) => {
                self.status_bar.handle(StatusBarEvent::Message(message));
                None
            }
            Event::Msg(msg) => self.handle_list(msg),
        }
    }

    fn render(&self) -> Fabric {
        let list_size = Size::new(self.size.rows.saturating_sub(BAR_ROWS), self.size.columns);
        let mut list = self.list.render();
        list.resize(list_size);

        let mut fabric = self
            .path_bar
            .render()
            .quilt_bottom(list)
            .quilt_bottom(self.status_bar.render());
        fabric.resize(self.size);
        fabric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LocalFilesystem;

    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    use tempfile::TempDir;
    use test_case::test_case;

    fn fman(directory: &TempDir) -> Fman {
        let list = ListProps::builder()
            .path(directory.path().to_path_buf())
            .filesystem(Box::new(LocalFilesystem))
            .build();
        Fman::new(Props::builder().list(list).build()).unwrap()
    }

    fn directory() -> TempDir {
        let directory = tempfile::tempdir().unwrap();
        std::fs::create_dir(directory.path().join("docs")).unwrap();
        std::fs::write(directory.path().join("notes.txt"), "hi").unwrap();
        directory
    }

    fn key(code: KeyCode) -> Event {
        Event::Terminal(CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn lines(fman: &Fman) -> Vec<String> {
        fman.render()
            .to_string()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE; "q")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL; "control c")]
    fn test_quit(code: KeyCode, modifiers: KeyModifiers) {
        let directory = directory();
        let mut fman = fman(&directory);

        let event = Event::Terminal(CrosstermEvent::Key(KeyEvent::new(code, modifiers)));

        assert_eq!(fman.handle(event), Some(Command::Quit));
    }

    #[test]
    fn test_render_fills_the_terminal() {
        let directory = directory();
        let mut fman = fman(&directory);

        fman.handle(Event::Terminal(CrosstermEvent::Resize(60, 12)));

        let fabric = fman.render();
        assert_eq!(fabric.size(), Size::new(12, 60));

        let lines = lines(&fman);
        assert!(lines[0].starts_with(&directory.path().to_string_lossy().to_string()));
        assert!(lines[1].starts_with("Name"));
        assert!(lines[3].starts_with("📁 docs"));
        assert!(lines[4].starts_with("📄 notes.txt"));
    }

    #[test]
    fn test_selected_entry_is_shown_in_the_status_bar() {
        let directory = directory();
        let mut fman = fman(&directory);
        fman.handle(Event::Terminal(CrosstermEvent::Resize(60, 12)));

        let entry = fman.list.selected_entry();
        fman.handle(Event::Msg(Msg::Entry(entry)));

        assert!(lines(&fman)[11].starts_with("docs  -  "));
    }

    #[test]
    fn test_key_press_clears_the_message() {
        let directory = directory();
        let mut fman = fman(&directory);
        fman.handle(Event::Terminal(CrosstermEvent::Resize(60, 12)));

        fman.handle(Event::Msg(Msg::NewMessage(String::from("Copied!"))));
        assert_eq!(lines(&fman)[11], "Copied!");

        fman.handle(key(KeyCode::Char('m')));
        assert_ne!(lines(&fman)[11], "Copied!");
    }

    #[test]
    fn test_hidden_toggle_is_shown_in_the_path_bar() {
        let directory = directory();
        let mut fman = fman(&directory);
        fman.handle(Event::Terminal(CrosstermEvent::Resize(80, 12)));

        fman.handle(key(KeyCode::Char('m')));

        assert!(lines(&fman)[0].ends_with("(showing hidden)"));
    }

    #[test]
    fn test_click_below_the_path_bar_selects_an_entry() {
        let directory = directory();
        let mut fman = fman(&directory);
        fman.handle(Event::Terminal(CrosstermEvent::Resize(60, 12)));

        // The path bar, the header, and the separator come before the second entry.
        let click = Event::Terminal(CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }));
        fman.handle(click);

        assert_eq!(fman.list.selected_entry().name(), "notes.txt");
    }
}
