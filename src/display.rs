use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::{
    io::{stdout, Write},
    sync::mpsc::Receiver,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Welcome,
    Help,
    Prompt,
    CurrentSite(String),
    Executing(String),
    Info(String),
    Error(String),
    List(String, Vec<String>),
    Blank,
    Goodbye,
}

const RULE_WIDTH: usize = 63;

const COMMANDS: [(&str, &str); 13] = [
    ("v [url]", "Visit the specified URL."),
    ("< [steps]", "Move backward the specified number of steps."),
    ("> [steps]", "Move forward the specified number of steps."),
    ("r [url]", "Remove all history entries for the given URL."),
    ("b", "Bookmark/unbookmark the current URL."),
    ("c", "Clear the history, resetting to the homepage."),
    ("p", "Prints the bookmark list."),
    ("h", "Prints the history list."),
    ("H", "Counts the number of elements in the history list."),
    ("B", "Counts the number of elements in the bookmark list."),
    ("V [index]", "Visits the bookmark with specified index, if it exists."),
    ("q", "Quit."),
    ("?", "Show this help menu."),
];

fn banner(title: &str) -> String {
    let title = format!("[ {title} ]");
    let side = RULE_WIDTH.saturating_sub(title.len()) / 2;
    let rest = RULE_WIDTH.saturating_sub(title.len() + side);
    format!("{}{}{}", "=".repeat(side), title, "=".repeat(rest))
}

/// Writes one event to `out` without flushing.
pub fn render<W: Write>(out: &mut W, display_event: DisplayEvent) -> Result<()> {
    match display_event {
        DisplayEvent::Welcome => {
            queue!(
                out,
                style::PrintStyledContent(banner("Browser").bold()),
                style::Print("\n                 Welcome to the History Browser!\n"),
                style::Print("                 Enter ? for a list of commands.\n"),
                style::PrintStyledContent("=".repeat(RULE_WIDTH).bold()),
                style::Print("\n\n"),
            )?;
        }
        DisplayEvent::Help => {
            queue!(
                out,
                style::PrintStyledContent(banner("Commands").bold()),
                style::Print("\n")
            )?;
            for (usage, description) in COMMANDS {
                queue!(
                    out,
                    style::PrintStyledContent(format!("  {usage}").cyan()),
                    style::Print(format!("\n      {description}\n"))
                )?;
            }
            queue!(
                out,
                style::PrintStyledContent("=".repeat(RULE_WIDTH).bold()),
                style::Print("\n")
            )?;
        }
        DisplayEvent::Prompt => {
            queue!(out, style::Print("Enter command: "))?;
        }
        DisplayEvent::CurrentSite(site) => {
            queue!(
                out,
                style::Print("Current site: "),
                style::PrintStyledContent(site.green()),
                style::Print("\n")
            )?;
        }
        DisplayEvent::Executing(command) => {
            queue!(out, style::Print(format!("Executing command: {command}\n")))?;
        }
        DisplayEvent::Info(message) => {
            queue!(out, style::Print(message), style::Print("\n"))?;
        }
        DisplayEvent::Error(message) => {
            queue!(
                out,
                style::PrintStyledContent(message.red()),
                style::Print("\n")
            )?;
        }
        DisplayEvent::List(title, entries) => {
            queue!(out, style::Print(title), style::Print("\n"))?;
            for entry in entries {
                queue!(out, style::Print(entry), style::Print("\n"))?;
            }
        }
        DisplayEvent::Blank => {
            queue!(out, style::Print("\n"))?;
        }
        DisplayEvent::Goodbye => {
            queue!(out, style::Print("Goodbye!\n"))?;
        }
    }
    Ok(())
}

pub fn run_display(display_event_receiver: Receiver<DisplayEvent>) -> Result<()> {
    let mut stdout = stdout();
    for display_event in display_event_receiver {
        render(&mut stdout, display_event)?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{banner, render, DisplayEvent, RULE_WIDTH};

    fn rendered(display_event: DisplayEvent) -> String {
        let mut buf = Vec::new();
        render(&mut buf, display_event).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_width() {
        assert_eq!(banner("Browser").len(), RULE_WIDTH);
        assert_eq!(banner("Commands").len(), RULE_WIDTH);
        assert!(banner("Browser").contains("[ Browser ]"));
    }

    #[test]
    fn test_render_plain_events() {
        assert_eq!(rendered(DisplayEvent::Prompt), "Enter command: ");
        assert_eq!(
            rendered(DisplayEvent::Executing("v a.com".into())),
            "Executing command: v a.com\n"
        );
        assert_eq!(
            rendered(DisplayEvent::Info("Number of elements in history: 2".into())),
            "Number of elements in history: 2\n"
        );
        assert_eq!(
            rendered(DisplayEvent::List(
                "Bookmark List:".into(),
                vec!["a.com".into(), "b.com".into()]
            )),
            "Bookmark List:\na.com\nb.com\n"
        );
        assert_eq!(rendered(DisplayEvent::Goodbye), "Goodbye!\n");
    }

    #[test]
    fn test_render_styled_events() {
        assert!(rendered(DisplayEvent::CurrentSite("a.com".into())).contains("a.com"));
        assert!(rendered(DisplayEvent::Error("Unknown command: x".into()))
            .contains("Unknown command: x"));
        let help = rendered(DisplayEvent::Help);
        assert!(help.contains("V [index]"));
        assert!(help.contains("Show this help menu."));
    }
}
