use rand::Rng;

use crate::animation::{Animation, RunningAnimation};
use crate::error::{Error, Result};

/// Ellipsis-trim `s` to at most `width` characters.
///
/// Strings that fit come back unchanged; longer ones keep their first
/// `width - 3` characters and end in `...`. Counts chars, not bytes, so
/// multi-byte paths never get split mid-character.
pub fn trim(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// A spin-ready column of file names.
///
/// Construction picks the winner, trims every entry to the screen width,
/// and rotates the listing so that the window at the final scroll offset
/// (`len - height`) shows the winner on its middle row. After that the
/// reel is immutable; scrolling is just a moving window over it.
#[derive(Debug)]
pub struct Reel {
    entries: Vec<String>,
    winner: String,
    trimmed_winner: String,
    width: usize,
    height: usize,
}

impl Reel {
    pub fn new(
        files: Vec<String>,
        width: usize,
        height: usize,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        if files.is_empty() {
            return Err(Error::NoMatchingFiles);
        }
        if height == 0 || files.len() < height {
            return Err(Error::NotEnoughFiles { files: files.len(), rows: height });
        }

        let winner_index = rng.random_range(0..files.len());
        let winner = files[winner_index].clone();
        let trimmed_winner = trim(&winner, width);

        let mut entries: Vec<String> = files.into_iter().map(|f| trim(&f, width)).collect();
        let split = centered_split(winner_index, entries.len(), height);
        entries.rotate_left(split);

        Ok(Self { entries, winner, trimmed_winner, width, height })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The trimmed entry at `index`, in rotated order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The untrimmed winning file path.
    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// The winner as it appears on screen.
    pub fn trimmed_winner(&self) -> &str {
        &self.trimmed_winner
    }

    /// Row index of the winner within any window (0-based).
    pub fn middle_row(&self) -> usize {
        self.height / 2
    }

    /// Scroll offset of the settle window.
    pub fn settle_offset(&self) -> usize {
        self.entries.len() - self.height
    }

    /// Iterate one window per frame under `animation`, scrolling from the
    /// top of the reel down to the settle window, which is always the final
    /// item yielded.
    pub fn windows(&self, animation: Animation) -> Windows<'_> {
        Windows {
            reel: self,
            running: animation.start(0, self.settle_offset()),
            exhausted: false,
        }
    }
}

/// Rotation amount that puts `winner_index` on the middle row of the
/// window at offset `len - height`.
///
/// Derived from the window the winner should end up in: its first row is
/// `winner_index - height / 2`, which may be negative near the top of the
/// listing, so the split wraps modulo `len`.
fn centered_split(winner_index: usize, len: usize, height: usize) -> usize {
    let first = winner_index as isize - (height / 2) as isize;
    let last = first + height as isize - 1;
    (last + 1).rem_euclid(len as isize) as usize
}

/// Per-frame window iterator; ends after yielding the settle window.
pub struct Windows<'a> {
    reel: &'a Reel,
    running: RunningAnimation,
    exhausted: bool,
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Window<'a>> {
        if self.exhausted {
            return None;
        }
        let sample = self.running.sample();
        if sample.finished {
            self.exhausted = true;
        }
        Some(Window { reel: self.reel, first: sample.offset })
    }
}

/// A contiguous `height`-row slice of the reel.
#[derive(Clone, Copy)]
pub struct Window<'a> {
    reel: &'a Reel,
    first: usize,
}

impl<'a> Window<'a> {
    /// Index into the reel of the top row.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Index into the reel of the highlighted middle row.
    pub fn middle(&self) -> usize {
        self.first + self.reel.height / 2
    }

    /// Index into the reel of the bottom row.
    pub fn last(&self) -> usize {
        self.first + self.reel.height - 1
    }

    /// The rows of this window, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> {
        let reel = self.reel;
        let middle = self.middle();
        let last = self.last();
        (self.first..=last).map(move |i| Row {
            text: &reel.entries[i],
            is_middle: i == middle,
            is_last: i == last,
        })
    }
}

/// One display row of a window.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub text: &'a str,
    pub is_middle: bool,
    pub is_last: bool,
}
