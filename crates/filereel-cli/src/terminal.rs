use std::fmt;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Minimal screen surface for the spin: cursor motion plus raw writes.
///
/// Everything goes through `print!` in the real implementation, so callers
/// must `flush` once per frame.
pub trait Screen: Send {
    fn clear_screen(&mut self);
    fn clear_line(&mut self);
    fn move_home(&mut self);
    /// Move to the first column of `row` (1-based, ANSI convention).
    fn move_to_row(&mut self, row: u16);
    fn write(&mut self, text: &str);
    /// Write `text` followed by `\r\n`; raw mode needs the explicit `\r`.
    fn write_line(&mut self, text: &str);
    fn hide_cursor(&mut self);
    fn show_cursor(&mut self);
    fn flush(&mut self);
}

pub struct MockScreen {
    /// Raw emissions from `write` and `write_line`, in order.
    pub writes: Vec<String>,
    /// Rows visited via `move_to_row`; `move_home` records row 1.
    pub moves: Vec<u16>,
    pub clear_count: usize,
    pub line_clear_count: usize,
    pub flush_count: usize,
    pub cursor_hidden: bool,
}

impl Default for MockScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MockScreen {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            moves: Vec::new(),
            clear_count: 0,
            line_clear_count: 0,
            flush_count: 0,
            cursor_hidden: false,
        }
    }
}

impl Screen for MockScreen {
    fn clear_screen(&mut self) {
        self.clear_count += 1;
    }

    fn clear_line(&mut self) {
        self.line_clear_count += 1;
    }

    fn move_home(&mut self) {
        self.moves.push(1);
    }

    fn move_to_row(&mut self, row: u16) {
        self.moves.push(row);
    }

    fn write(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }

    fn write_line(&mut self, text: &str) {
        self.writes.push(format!("{}\r\n", text));
    }

    fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }

    fn show_cursor(&mut self) {
        self.cursor_hidden = false;
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}

pub struct AnsiScreen;

impl Default for AnsiScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for AnsiScreen {
    fn clear_screen(&mut self) {
        print!("\x1B[2J");
    }

    fn clear_line(&mut self) {
        print!("\x1B[2K");
    }

    fn move_home(&mut self) {
        print!("\x1B[1;1H");
    }

    fn move_to_row(&mut self, row: u16) {
        print!("\x1B[{};1H", row);
    }

    fn write(&mut self, text: &str) {
        print!("{}", text);
    }

    fn write_line(&mut self, text: &str) {
        print!("{}\r\n", text);
    }

    fn hide_cursor(&mut self) {
        print!("\x1B[?25l");
    }

    fn show_cursor(&mut self) {
        print!("\x1B[?25h");
    }

    fn flush(&mut self) {
        use std::io::{self, Write};
        let _ = io::stdout().flush();
    }
}

/// Inverse-video styling for the winner row: black on white, reset after.
pub struct Highlighted<'a>(pub &'a str);

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[30;47m{}\x1B[0m", self.0)
    }
}

/// A user action observed while the reel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Any ordinary key press.
    Key,
    /// Ctrl+C. Raw mode disables ISIG, so it arrives as a key event
    /// rather than a signal.
    Interrupt,
}

/// Wait up to `timeout` for input; `None` when the window elapses first.
/// Doubles as the frame pacer for the scroll loop.
pub fn poll_input(timeout: Duration) -> Result<Option<Input>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(classify(event::read()?))
}

/// Block until a key press or Ctrl+C.
pub fn wait_for_input() -> Result<Input> {
    loop {
        if let Some(input) = classify(event::read()?) {
            return Ok(input);
        }
    }
}

/// Key-press events count; releases, repeats, and non-key events (resize,
/// focus, paste) do not.
fn classify(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                Some(Input::Interrupt)
            } else {
                Some(Input::Key)
            }
        }
        _ => None,
    }
}

/// Terminal dimensions as (columns, rows). Queried once at startup;
/// resizes during the spin are not tracked.
pub fn screen_size() -> Result<(usize, usize)> {
    use terminal_size::{Height, Width, terminal_size};

    let Some((Width(w), Height(h))) = terminal_size() else {
        anyhow::bail!("could not determine the terminal size");
    };
    anyhow::ensure!(w > 0 && h > 0, "terminal reports a zero-sized screen");
    Ok((w as usize, h as usize))
}
