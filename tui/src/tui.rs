use std::io::Result;
use std::io::Stdout;
use std::io::stdout;
use std::panic;

use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio_stream::StreamExt;

pub(crate) type Backend = CrosstermBackend<Stdout>;

#[derive(Debug)]
pub(crate) enum TuiEvent {
    Key(KeyEvent),
    Paste(String),
    Draw,
}

pub(crate) struct Tui {
    terminal: Terminal<Backend>,
    events: EventStream,
}

/// Put the terminal in raw mode on the alternate screen and install a panic
/// hook that puts it back before the report is printed.
/// A failure after raw mode is enabled restores the terminal before the
/// error is returned.
pub(crate) fn init() -> Result<Tui> {
    set_panic_hook();
    enable_raw_mode()?;
    let terminal = undo_on_error(enter_screen, restore)?;
    Ok(Tui {
        terminal,
        events: EventStream::new(),
    })
}

/// Run `step`; when it fails, run `undo` and return the original error.
fn undo_on_error<T>(
    step: impl FnOnce() -> Result<T>,
    undo: impl FnOnce() -> Result<()>,
) -> Result<T> {
    step().inspect_err(|_| {
        let _ = undo();
    })
}

fn enter_screen() -> Result<Terminal<Backend>> {
    execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

pub(crate) fn restore() -> Result<()> {
    execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn set_panic_hook() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));
}

impl Tui {
    pub(crate) fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    pub(crate) fn clear(&mut self) -> Result<()> {
        self.terminal.clear()
    }

    /// Next input the app cares about. `None` once stdin is closed.
    pub(crate) async fn next_event(&mut self) -> Option<Result<TuiEvent>> {
        loop {
            let event = match self.events.next().await? {
                Ok(event) => event,
                Err(err) => return Some(Err(err)),
            };
            match event {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    return Some(Ok(TuiEvent::Key(key_event)));
                }
                Event::Paste(pasted) => return Some(Ok(TuiEvent::Paste(pasted))),
                Event::Resize(_, _) | Event::FocusGained => return Some(Ok(TuiEvent::Draw)),
                _ => {}
            }
        }
    }
}
