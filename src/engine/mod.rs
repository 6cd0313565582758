mod command;

use anyhow::Result;
use std::{io::BufRead, sync::mpsc::Sender};

use crate::{
    browser::{BookmarkToggle, HistoryStore},
    config::BrowserConfig,
    display::DisplayEvent,
};

pub use command::{Command, CommandError};

/// Where commands come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typed by the user, one prompt per command.
    Interactive,
    /// Read from a file, each command echoed before it runs.
    Script,
}

#[derive(Debug, PartialEq, Eq)]
enum EngineState {
    Running,
    Quit,
}

pub struct Engine {
    state: EngineState,
    mode: Mode,
    browser: HistoryStore,
}

impl Engine {
    pub fn init(config: &BrowserConfig, mode: Mode) -> Self {
        Self {
            state: EngineState::Running,
            mode,
            browser: HistoryStore::from_config(config),
        }
    }

    pub fn browser(&self) -> &HistoryStore {
        &self.browser
    }

    fn execute(
        &mut self,
        command: Command,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        match command {
            Command::Visit(url) => {
                self.browser.visit(&url);
            }
            Command::Back(steps) => {
                self.browser.back(steps);
            }
            Command::Forward(steps) => {
                self.browser.forward(steps);
            }
            Command::Remove(url) => {
                let removed = self.browser.remove(&url);
                display_event_sender.send(DisplayEvent::Info(format!(
                    "Removed {removed} entries for {url}."
                )))?;
            }
            Command::Bookmark => {
                let site = self.browser.current_site().to_owned();
                let message = match self.browser.bookmark_current() {
                    Ok(BookmarkToggle::Added) => {
                        DisplayEvent::Info(format!("Added {site} to bookmarks."))
                    }
                    Ok(BookmarkToggle::Removed) => {
                        DisplayEvent::Info(format!("{site} removed from bookmarks."))
                    }
                    Err(e) => DisplayEvent::Error(e.to_string()),
                };
                display_event_sender.send(message)?;
            }
            Command::ClearHistory => self.browser.clear_history(),
            Command::PrintBookmarks => {
                let event = match self.browser.bookmarks() {
                    Some(bookmarks) => DisplayEvent::List("Bookmark List:".to_owned(), bookmarks),
                    None => DisplayEvent::Info("Bookmark list is empty.".to_owned()),
                };
                display_event_sender.send(event)?;
            }
            Command::PrintHistory => {
                display_event_sender.send(DisplayEvent::List(
                    "History:".to_owned(),
                    self.browser.history(),
                ))?;
            }
            Command::CountHistory => {
                display_event_sender.send(DisplayEvent::Info(format!(
                    "Number of elements in history: {}",
                    self.browser.count_history()
                )))?;
            }
            Command::CountBookmarks => {
                display_event_sender.send(DisplayEvent::Info(format!(
                    "Number of elements in bookmarks: {}",
                    self.browser.count_bookmarks()
                )))?;
            }
            Command::VisitBookmark(index) => {
                if let Err(e) = self.browser.visit_bookmark(index) {
                    log::warn!("Bookmark visit failed: {e}");
                    display_event_sender.send(DisplayEvent::Error(e.to_string()))?;
                }
            }
            Command::Quit => return Ok(Some(EngineState::Quit)),
            Command::Help => display_event_sender.send(DisplayEvent::Help)?,
        }
        Ok(None)
    }

    fn handle_line(
        &mut self,
        line: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        match line.parse::<Command>() {
            Ok(command) => {
                log::debug!("Executing {command:?}.");
                self.execute(command, display_event_sender)
            }
            Err(e) => {
                log::warn!("Rejected command {line:?}: {e}");
                display_event_sender.send(DisplayEvent::Error(e.to_string()))?;
                Ok(None)
            }
        }
    }

    /// Reads commands from `input` until it runs dry or a quit command is
    /// read. Everything meant for the user goes through `display_event_sender`.
    pub fn run<R: BufRead>(
        &mut self,
        mut input: R,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<()> {
        if self.mode == Mode::Interactive {
            display_event_sender.send(DisplayEvent::Welcome)?;
        }
        let mut line = String::new();
        while self.state == EngineState::Running {
            display_event_sender.send(DisplayEvent::CurrentSite(
                self.browser.current_site().to_owned(),
            ))?;
            if self.mode == Mode::Interactive {
                display_event_sender.send(DisplayEvent::Prompt)?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let command = line.trim_end_matches(['\r', '\n']);
            if self.mode == Mode::Script {
                display_event_sender.send(DisplayEvent::Executing(command.to_owned()))?;
            }
            if let Some(next_state) = self.handle_line(command, display_event_sender)? {
                self.state = next_state;
            }
            display_event_sender.send(DisplayEvent::Blank)?;
        }
        if self.mode == Mode::Script {
            display_event_sender.send(DisplayEvent::CurrentSite(
                self.browser.current_site().to_owned(),
            ))?;
        }
        display_event_sender.send(DisplayEvent::Goodbye)?;
        Ok(())
    }
}
