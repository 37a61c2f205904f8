use crate::clipboard::Clipboard;
use crate::command::{Command, Msg};
use crate::component::Component;
use crate::components::FmanEvent as Event;
use crate::opener;
use crate::rendering::Renderer;

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;
use std::panic;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide as HideCursor, Show as ShowCursor};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::terminal::{Clear as ClearTerminal, ClearType as TerminalClearType};
use crossterm::QueueableCommand;

/// How long to wait for terminal events when no timer is pending.
const IDLE_TIMEOUT: Duration = Duration::from_secs(1);

/// A message to deliver once `due` has passed.
struct Timer {
    due: Instant,
    msg: Msg,
}

/// Runs a root component in the terminal and carries out the commands it returns.
pub struct App {
    stdout: Stdout,
    renderer: Renderer,
    /// Messages waiting to be delivered, oldest first.
    msgs: VecDeque<Msg>,
    timers: Vec<Timer>,
    /// Opened on the first copy.
    clipboard: Option<Clipboard>,
}

impl App {
    pub fn new() -> Self {
        App {
            stdout: io::stdout(),
            renderer: Renderer::new(),
            msgs: VecDeque::new(),
            timers: Vec::new(),
            clipboard: None,
        }
    }

    /// Run until the root component quits.
    ///
    /// The terminal is restored even if running fails.
    pub fn run(&mut self, root: &mut impl Component<Event, Command>) -> io::Result<()> {
        self.set_up()?;

        #[cfg(feature = "logging")]
        log::info!("Running.");

        let result = self.run_loop(root);

        #[cfg(feature = "logging")]
        match &result {
            Ok(()) => log::info!("Exiting."),
            Err(error) => log::error!("Exiting after an error: {}", error),
        }

        let teardown_result = self.teardown();
        result.and(teardown_result)
    }

    fn run_loop(&mut self, root: &mut impl Component<Event, Command>) -> io::Result<()> {
        let command = root.on_created();
        if self.execute(command).is_break() {
            return Ok(());
        }

        let (columns, rows) = terminal::size()?;
        let resize = Event::Terminal(CrosstermEvent::Resize(columns, rows));
        if self.dispatch(root, resize).is_break() {
            return Ok(());
        }

        loop {
            if self.deliver_msgs(root).is_break() {
                return Ok(());
            }

            self.renderer.render(&root.render())?;

            if event::poll(self.timeout())? {
                let event: CrosstermEvent = event::read()?;
                if let CrosstermEvent::Resize(..) = event {
                    self.lazy_clear_screen()?;
                }
                if self.dispatch(root, Event::Terminal(event)).is_break() {
                    return Ok(());
                }
            }

            self.fire_timers();
        }
    }

    /// Deliver queued messages in order, including the ones queued while delivering.
    fn deliver_msgs(&mut self, root: &mut impl Component<Event, Command>) -> ControlFlow<()> {
        while let Some(msg) = self.msgs.pop_front() {
            if self.dispatch(root, Event::Msg(msg)).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn dispatch(
        &mut self,
        root: &mut impl Component<Event, Command>,
        event: Event,
    ) -> ControlFlow<()> {
        let command: Option<Command> = root.handle(event);
        self.execute(command)
    }

    fn execute(&mut self, command: Option<Command>) -> ControlFlow<()> {
        let command: Command = match command {
            Some(command) => command,
            None => return ControlFlow::Continue(()),
        };

        for command in command.flatten() {
            match command {
                Command::Emit(msg) => self.msgs.push_back(msg),
                Command::Tick { after, msg } => self.timers.push(Timer {
                    due: Instant::now() + after,
                    msg,
                }),
                Command::Copy(text) => self.copy(text),
                Command::Open(path) => match opener::open(&path) {
                    Ok(()) => {}
                    #[allow(unused_variables)]
                    Err(error) => {
                        #[cfg(feature = "logging")]
                        log::warn!("Failed to open \"{}\": {}", path.display(), error);
                    }
                },
                Command::Batch(_) => {}
                Command::Quit => return ControlFlow::Break(()),
            }
        }

        ControlFlow::Continue(())
    }

    fn copy(&mut self, text: String) {
        if self.clipboard.is_none() {
            self.clipboard = Clipboard::new();
        }
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.copy(text);
        }
    }

    /// Return how long to wait for a terminal event before the next timer is due.
    fn timeout(&self) -> Duration {
        let now = Instant::now();
        self.timers
            .iter()
            .map(|timer| timer.due.saturating_duration_since(now))
            .min()
            .unwrap_or(IDLE_TIMEOUT)
    }

    /// Queue the messages of timers that are due, earliest first.
    fn fire_timers(&mut self) {
        let now = Instant::now();
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|timer| timer.due <= now);
        self.timers = pending;

        due.sort_by_key(|timer| timer.due);
        self.msgs.extend(due.into_iter().map(|timer| timer.msg));
    }

    fn set_up(&mut self) -> io::Result<()> {
        self.change_panic_hook();

        self.stdout.queue(EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.stdout.queue(HideCursor)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.lazy_clear_screen()?;
        self.stdout.flush()
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(LeaveAlternateScreen)?;
        self.stdout.queue(ShowCursor)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()
    }

    fn lazy_clear_screen(&mut self) -> io::Result<()> {
        self.stdout.queue(ClearTerminal(TerminalClearType::All))?;
        Ok(())
    }

    fn change_panic_hook(&mut self) {
        let hook_before = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            let _ = stdout.queue(DisableMouseCapture);
            let _ = stdout.queue(LeaveAlternateScreen);
            let _ = stdout.queue(ShowCursor);
            let _ = stdout.flush();
            let _ = terminal::disable_raw_mode();
            hook_before(info);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Fabric;

    /// Records the events it is given and answers each message with a prepared command.
    struct Recorder {
        events: Vec<String>,
        replies: VecDeque<Option<Command>>,
    }

    impl Component<Event, Command> for Recorder {
        fn handle(&mut self, event: Event) -> Option<Command> {
            if let Event::Msg(msg) = event {
                self.events.push(format!("{:?}", msg));
                return self.replies.pop_front().flatten();
            }
            None
        }

        fn render(&self) -> Fabric {
            Fabric::from(crate::rendering::Yarn::new())
        }
    }

    fn message(text: &str) -> Msg {
        Msg::NewMessage(String::from(text))
    }

    #[test]
    fn test_messages_are_delivered_in_order() {
        let mut app = App::new();
        let mut root = Recorder {
            events: Vec::new(),
            replies: VecDeque::from(vec![
                Some(Command::Batch(vec![
                    Command::Emit(message("c")),
                    Command::Emit(message("d")),
                ])),
                None,
                None,
                None,
            ]),
        };

        let command = Command::Batch(vec![Command::Emit(message("a")), Command::Emit(message("b"))]);
        assert!(app.execute(Some(command)).is_continue());
        assert!(app.deliver_msgs(&mut root).is_continue());

        let expected: Vec<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|text| format!("{:?}", message(text)))
            .collect();
        assert_eq!(root.events, expected);
    }

    #[test]
    fn test_quit_stops_the_batch() {
        let mut app = App::new();

        let command = Command::Batch(vec![Command::Quit, Command::Emit(message("a"))]);

        assert!(app.execute(Some(command)).is_break());
        assert!(app.msgs.is_empty());
    }

    #[test]
    fn test_timers_fire_when_due() {
        let mut app = App::new();
        let command = Command::Batch(vec![
            Command::Tick {
                after: Duration::from_secs(60),
                msg: Msg::ClearKey,
            },
            Command::Tick {
                after: Duration::ZERO,
                msg: Msg::UpdateEntries { parent: true },
            },
        ]);
        assert!(app.execute(Some(command)).is_continue());

        app.fire_timers();

        assert_eq!(app.msgs, VecDeque::from(vec![Msg::UpdateEntries { parent: true }]));
        assert_eq!(app.timers.len(), 1);
        assert!(app.timeout() > Duration::from_secs(50));
    }

    #[test]
    fn test_timeout_without_timers() {
        let app = App::new();

        assert_eq!(app.timeout(), IDLE_TIMEOUT);
    }
}
