mod props {
    use crate::color::Theme;

    use std::path::PathBuf;

    use typed_builder::TypedBuilder;

    #[derive(TypedBuilder)]
    pub struct Props {
        pub directory: PathBuf,
        #[builder(default)]
        pub home: Option<PathBuf>,
        #[builder(default)]
        pub theme: Theme,
    }
}
pub use props::Props;

mod path_bar {
    use super::{Action, Event, Props, State};
    use crate::component::{Component, Stateful};
    use crate::rendering::{Fabric, Yarn};

    /// A one row bar showing the directory being browsed.
    pub struct PathBar {
        state: State,
    }

    impl PathBar {
        pub fn new(props: Props) -> Self {
            let state = State::from(props);
            Self { state }
        }

        fn map(&self, event: Event) -> Action {
            match event {
                Event::SetDirectory {
                    directory,
                    show_hidden,
                } => Action::SetDirectory {
                    directory,
                    show_hidden,
                },
                Event::Resize { columns } => Action::Resize { columns },
            }
        }
    }

    impl Component<Event, ()> for PathBar {
        fn handle(&mut self, event: Event) -> Option<()> {
            let action = self.map(event);
            self.state.perform(action)
        }

        fn render(&self) -> Fabric {
            let mut string = self.state.directory_string();
            if self.state.show_hidden {
                string.push_str("  (showing hidden)");
            }

            let mut yarn = Yarn::from(string);
            yarn.resize(self.state.columns);
            yarn.color(self.state.theme.bar_foreground);
            yarn.background(self.state.theme.bar_background);

            Fabric::from(yarn)
        }
    }
}
pub use path_bar::PathBar;

mod event {
    use std::path::PathBuf;

    pub enum Event {
        SetDirectory {
            directory: PathBuf,
            show_hidden: bool,
        },
        Resize {
            columns: usize,
        },
    }
}
pub use event::Event;

mod state {
    use super::{Action, Props};
    use crate::color::Theme;
    use crate::component::Stateful;

    use std::path::{PathBuf, MAIN_SEPARATOR as PATH_SEPARATOR};

    pub struct State {
        directory: PathBuf,
        home: Option<PathBuf>,
        pub show_hidden: bool,
        pub columns: usize,
        pub theme: Theme,
    }

    impl State {
        /// Return the directory with the home directory abbreviated to `~` and a trailing
        /// separator.
        pub fn directory_string(&self) -> String {
            if let Some(home) = &self.home {
                if let Ok(path) = self.directory.strip_prefix(home) {
                    let mut string = String::from("~");
                    string.push(PATH_SEPARATOR);

                    let path_string = path.to_string_lossy();
                    if !path_string.is_empty() {
                        string.push_str(&path_string);
                        string.push(PATH_SEPARATOR);
                    }

                    return string;
                }
            }

            let mut string = self.directory.to_string_lossy().to_string();
            if self.directory.parent().is_some() {
                string.push(PATH_SEPARATOR);
            }
            string
        }
    }

    impl From<Props> for State {
        fn from(props: Props) -> Self {
            Self {
                directory: props.directory,
                home: props.home,
                show_hidden: false,
                columns: 0,
                theme: props.theme,
            }
        }
    }

    impl Stateful<Action, ()> for State {
        fn perform(&mut self, action: Action) -> Option<()> {
            match action {
                Action::SetDirectory {
                    directory,
                    show_hidden,
                } => {
                    self.directory = directory;
                    self.show_hidden = show_hidden;
                }
                Action::Resize { columns } => {
                    self.columns = columns;
                }
            }
            None
        }
    }
}
use state::State;

mod action {
    use std::path::PathBuf;

    pub enum Action {
        SetDirectory {
            directory: PathBuf,
            show_hidden: bool,
        },
        Resize {
            columns: usize,
        },
    }
}
use action::Action;

#[cfg(unix)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;

    use std::path::PathBuf;

    use test_case::test_case;

    #[test_case("/home/user", "~/"; "the home directory")]
    #[test_case("/home/user/src/fman", "~/src/fman/"; "inside the home directory")]
    #[test_case("/etc", "/etc/"; "outside the home directory")]
    #[test_case("/", "/"; "the root directory")]
    fn test_render(directory: &str, expected: &str) {
        let props = Props::builder()
            .directory(PathBuf::from(directory))
            .home(Some(PathBuf::from("/home/user")))
            .build();
        let mut path_bar = PathBar::new(props);
        path_bar.handle(Event::Resize { columns: 20 });

        let text = path_bar.render().to_string();

        assert_eq!(text.trim_end(), expected);
        assert_eq!(text.chars().count(), 20);
    }

    #[test]
    fn test_render_shows_hidden() {
        let props = Props::builder().directory(PathBuf::from("/etc")).build();
        let mut path_bar = PathBar::new(props);
        path_bar.handle(Event::Resize { columns: 40 });
        path_bar.handle(Event::SetDirectory {
            directory: PathBuf::from("/tmp"),
            show_hidden: true,
        });

        assert_eq!(
            path_bar.render().to_string().trim_end(),
            "/tmp/  (showing hidden)"
        );
    }
}
