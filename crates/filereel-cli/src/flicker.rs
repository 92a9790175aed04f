use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::terminal::{Highlighted, Screen};

pub const FLICKER_INTERVAL: Duration = Duration::from_millis(500);

/// The two faces of the settled winner row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Highlight,
    Plain,
}

impl Phase {
    fn toggled(self) -> Self {
        match self {
            Phase::Highlight => Phase::Plain,
            Phase::Plain => Phase::Highlight,
        }
    }
}

fn flash<S: Screen>(screen: &mut S, line: &str, row: u16, phase: Phase) {
    screen.move_to_row(row);
    match phase {
        Phase::Highlight => screen.write(&Highlighted(line).to_string()),
        Phase::Plain => screen.write(line),
    }
    screen.flush();
}

/// Flash `line` at `row` until `stop` is set, starting highlighted and
/// strictly alternating. The flag is checked only after a full write and
/// sleep cycle, so at most one extra flash lands after it flips.
pub fn run<S: Screen>(screen: &mut S, line: &str, row: u16, interval: Duration, stop: &AtomicBool) {
    let mut phase = Phase::Highlight;
    loop {
        flash(screen, line, row, phase);
        std::thread::sleep(interval);
        if stop.load(Ordering::SeqCst) {
            break;
        }
        phase = phase.toggled();
    }
}
