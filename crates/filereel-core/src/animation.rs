use std::time::{Duration, Instant};

/// Scroll strategy signature: maps normalized time `t` in [0, 1] to an
/// integer offset in `0..=span`.
///
/// Strategies must return `span` at `t = 1.0` so the reel settles on its
/// final window. In between they are free to overshoot backwards, stall,
/// or bounce, as long as they stay within `0..=span`.
pub type OffsetFn = fn(t: f64, span: usize) -> usize;

/// Constant-velocity scroll: `floor(span * t)`.
pub fn linear(t: f64, span: usize) -> usize {
    (span as f64 * t).floor() as usize
}

/// A scroll policy: how long the spin runs and which curve drives it.
///
/// Inert until [`Animation::start`] stamps wall-clock start and end times.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    duration: Duration,
    curve: OffsetFn,
}

impl Animation {
    pub fn new(duration: Duration, curve: OffsetFn) -> Self {
        Self { duration, curve }
    }

    /// The built-in constant-velocity policy.
    pub fn linear(duration: Duration) -> Self {
        Self::new(duration, linear)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Begin producing offsets over `first..=last` (`first <= last`),
    /// stamping the clock now.
    pub fn start(self, first: usize, last: usize) -> RunningAnimation {
        debug_assert!(first <= last);
        let started = Instant::now();
        RunningAnimation {
            first,
            last,
            started,
            ends: started + self.duration,
            curve: self.curve,
        }
    }
}

/// A started animation, sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub struct RunningAnimation {
    first: usize,
    last: usize,
    started: Instant,
    ends: Instant,
    curve: OffsetFn,
}

/// One frame's worth of animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Absolute offset for this frame, `first <= offset <= last`.
    pub offset: usize,
    /// True exactly from the sample where `t` clamped to 1.0 onwards.
    pub finished: bool,
}

impl RunningAnimation {
    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn span(&self) -> usize {
        self.last - self.first
    }

    /// Sample against the wall clock.
    pub fn sample(&self) -> Sample {
        self.sample_at(Instant::now())
    }

    /// Sample at an explicit instant.
    ///
    /// `t` clamps to exactly 1.0 once `now` reaches the stamped end time,
    /// and `finished` flips true in the same sample, so the caller always
    /// observes the settled offset together with the finished flag.
    pub fn sample_at(&self, now: Instant) -> Sample {
        if now >= self.ends {
            return Sample {
                offset: self.first + (self.curve)(1.0, self.span()),
                finished: true,
            };
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        let t = elapsed / (self.ends - self.started).as_secs_f64();
        Sample {
            offset: self.first + (self.curve)(t, self.span()),
            finished: false,
        }
    }
}
