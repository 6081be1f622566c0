use crate::constants::{LAG_ADJUSTED_MS, LAG_THRESHOLD_MS, NOMINAL_FRAME_MS};

/// Timing information handed to every scene once per display refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since the previous tick, after lag smoothing.
    pub delta_ms: f64,
    /// `delta_ms` relative to a nominal 60 Hz frame.
    pub delta_ratio: f32,
    /// Smoothed milliseconds accumulated since the first tick.
    pub elapsed_ms: f64,
    pub frame: u64,
}

impl FrameTick {
    #[inline]
    pub fn delta_sec(&self) -> f32 {
        (self.delta_ms / 1000.0) as f32
    }
}

/// Converts raw frame timestamps into lag-smoothed deltas.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    elapsed_ms: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameTick {
        let raw = match self.last_ms {
            None => NOMINAL_FRAME_MS,
            Some(last) if now_ms.is_finite() && now_ms > last => now_ms - last,
            Some(_) => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        // A hidden tab or a debugger pause must not teleport followers.
        let delta_ms = if raw > LAG_THRESHOLD_MS {
            LAG_ADJUSTED_MS
        } else {
            raw
        };
        self.elapsed_ms += delta_ms;
        self.frame += 1;
        FrameTick {
            delta_ms,
            delta_ratio: (delta_ms / NOMINAL_FRAME_MS) as f32,
            elapsed_ms: self.elapsed_ms,
            frame: self.frame,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Fires once every `interval_ms` of accumulated frame time.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    interval_ms: f64,
    accum_ms: f64,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(f64::EPSILON),
            accum_ms: 0.0,
        }
    }

    /// Advance by `delta_ms`; returns how many intervals elapsed.
    pub fn advance(&mut self, delta_ms: f64) -> u32 {
        if !(delta_ms > 0.0) {
            return 0;
        }
        self.accum_ms += delta_ms;
        let mut fired = 0;
        while self.accum_ms >= self.interval_ms {
            self.accum_ms -= self.interval_ms;
            fired += 1;
        }
        fired
    }
}
