use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Result, ensure};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use filereel_core::{Animation, Reel, Window, git};
use is_terminal::IsTerminal;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::flicker::{self, FLICKER_INTERVAL};
use crate::terminal::{self, AnsiScreen, Highlighted, Input, Screen};

/// Redraw cap for the scroll loop. The animation is wall-clock driven, so
/// this bounds paint work without stretching the spin.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

enum Outcome {
    Key,
    Interrupt,
}

pub fn handle(ext: Option<&str>, duration: Duration, seed: Option<u64>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = git::repository_root(&cwd)?;

    let files = match ext {
        Some(ext) => {
            let suffix = format!(".{}", ext.trim_start_matches('.'));
            let files = git::tracked_files(&root, |f| f.ends_with(&suffix))?;
            ensure!(
                !files.is_empty(),
                "no tracked files ending in `{}` in this repository",
                suffix
            );
            files
        }
        None => {
            let files = git::tracked_files(&root, |_| true)?;
            ensure!(!files.is_empty(), "no tracked files in this repository");
            files
        }
    };

    ensure!(
        std::io::stdout().is_terminal(),
        "stdout is not a terminal; filereel needs one to spin"
    );
    let (width, height) = terminal::screen_size()?;

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let reel = Reel::new(files, width, height, &mut rng)?;

    // Covers signals sent while raw mode is off; once raw mode is on,
    // Ctrl+C arrives as a key event and the spin loop handles it.
    ctrlc::set_handler(move || {
        let mut screen = AnsiScreen::new();
        screen.show_cursor();
        screen.flush();
        let _ = disable_raw_mode();
        std::process::exit(130);
    })?;

    enable_raw_mode()?;
    let mut screen = AnsiScreen::new();
    screen.hide_cursor();
    screen.clear_screen();

    let outcome = spin(&mut screen, &reel, duration);

    // Restore even when the spin itself failed; the listing stays on
    // screen, only cursor and input modes go back to normal.
    screen.show_cursor();
    screen.flush();
    disable_raw_mode()?;

    match outcome? {
        Outcome::Key => Ok(()),
        Outcome::Interrupt => std::process::exit(130),
    }
}

/// Scroll to the settle window, then flicker the winner until input.
fn spin(screen: &mut AnsiScreen, reel: &Reel, duration: Duration) -> Result<Outcome> {
    let mut early_press = false;
    for window in reel.windows(Animation::linear(duration)) {
        draw_window(screen, &window);
        match terminal::poll_input(FRAME_INTERVAL)? {
            Some(Input::Interrupt) => return Ok(Outcome::Interrupt),
            Some(Input::Key) => early_press = true,
            None => {}
        }
    }

    let stop = Arc::new(AtomicBool::new(false));
    let flicker_stop = Arc::clone(&stop);
    let line = reel.trimmed_winner().to_string();
    let row = winner_screen_row(reel.height());
    thread::spawn(move || {
        let mut screen = AnsiScreen::new();
        flicker::run(&mut screen, &line, row, FLICKER_INTERVAL, &flicker_stop);
    });

    let outcome = if early_press {
        // a key buffered during the scroll stops the flicker at once
        Outcome::Key
    } else {
        match terminal::wait_for_input()? {
            Input::Key => Outcome::Key,
            Input::Interrupt => Outcome::Interrupt,
        }
    };
    stop.store(true, Ordering::SeqCst);
    // The flicker thread is not joined; it dies with the process,
    // mid-sleep at worst.
    Ok(outcome)
}

/// Paint one frame in place: home the cursor, then rewrite every row.
///
/// The middle row carries the highlight. The bottom row is written without
/// a line ending, even when it is also the middle one, so the cursor never
/// passes the last cell and the terminal never scrolls.
fn draw_window<S: Screen>(screen: &mut S, window: &Window<'_>) {
    screen.move_home();
    for row in window.rows() {
        screen.clear_line();
        match (row.is_middle, row.is_last) {
            (true, false) => screen.write_line(&Highlighted(row.text).to_string()),
            (true, true) => screen.write(&Highlighted(row.text).to_string()),
            (false, false) => screen.write_line(row.text),
            (false, true) => screen.write(row.text),
        }
    }
    screen.flush();
}

/// 1-based screen row of the settled winner (ANSI rows start at 1).
fn winner_screen_row(height: usize) -> u16 {
    (height / 2 + 1) as u16
}
