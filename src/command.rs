/*!
Messages that drive the browser and the commands components return to the application.

Commands only describe side effects. The application runs them later and feeds any resulting
messages back in, so updating a component never blocks.
*/
use crate::entry::Entry;
use crate::rendering::Zone;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Show the entries of `path`.
    ///
    /// Paths requested by the list carry the number of the request so that superseded requests
    /// can be dropped.
    Path {
        path: PathBuf,
        request: Option<u64>,
    },
    /// Move into the parent directory or into the selected directory.
    UpdateEntries { parent: bool },
    /// Forget the last key pressed.
    ClearKey,
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The region of the terminal the list is drawn in changed.
    Resize { zone: Zone },
    /// The selected entry changed.
    Entry(Entry),
    /// Display a one line status message.
    NewMessage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver a message as soon as possible.
    Emit(Msg),
    /// Deliver a message after a delay.
    Tick { after: Duration, msg: Msg },
    /// Put text on the system clipboard.
    Copy(String),
    /// Open a path with the default application of the platform.
    Open(PathBuf),
    /// Run several commands in order.
    Batch(Vec<Command>),
    /// Quit the application.
    Quit,
}

impl Command {
    /// Combine two optional commands, keeping the order.
    pub fn and(first: Option<Command>, second: Option<Command>) -> Option<Command> {
        match (first, second) {
            (Some(first), Some(second)) => Some(Command::Batch(vec![first, second])),
            (first, None) => first,
            (None, second) => second,
        }
    }

    /// Return the commands in the order they run, with batches expanded.
    pub fn flatten(self) -> Vec<Command> {
        match self {
            Command::Batch(commands) => commands.into_iter().flat_map(Command::flatten).collect(),
            command => vec![command],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_batches() {
        let command = Command::Batch(vec![
            Command::Quit,
            Command::Batch(vec![Command::Emit(Msg::ClearKey), Command::Batch(vec![])]),
            Command::Copy(String::from("a")),
        ]);

        assert_eq!(
            command.flatten(),
            vec![
                Command::Quit,
                Command::Emit(Msg::ClearKey),
                Command::Copy(String::from("a")),
            ]
        );
    }

    #[test]
    fn test_and_keeps_order() {
        let result = Command::and(Some(Command::Quit), Some(Command::Emit(Msg::ClearKey)));

        assert_eq!(
            result,
            Some(Command::Batch(vec![Command::Quit, Command::Emit(Msg::ClearKey)]))
        );
        assert_eq!(Command::and(None, Some(Command::Quit)), Some(Command::Quit));
        assert_eq!(Command::and(None, None), None);
    }
}
