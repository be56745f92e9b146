//! Bounded (time, displacement) history feeding the live graph.

use crate::constants::{GRAPH_MIN_DISPLACEMENT_RANGE, TELEMETRY_CAPACITY};
use crate::error::{SimError, SimResult};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TelemetrySample {
    pub time: f32,
    pub displacement: f32,
}

/// Fixed-capacity FIFO of samples with running extrema for autoscaling.
///
/// Once full, each append evicts the oldest sample. The extrema cover every
/// sample appended since the last reset, including evicted ones, and start
/// from zero so the graph always includes the equilibrium line.
#[derive(Clone, Debug)]
pub struct TelemetryBuffer {
    samples: VecDeque<TelemetrySample>,
    capacity: usize,
    min_displacement: f32,
    max_displacement: f32,
    max_time: f32,
}

impl Default for TelemetryBuffer {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(TELEMETRY_CAPACITY),
            capacity: TELEMETRY_CAPACITY,
            min_displacement: 0.0,
            max_displacement: 0.0,
            max_time: 0.0,
        }
    }
}

impl TelemetryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> SimResult<Self> {
        if capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            ..Self::default()
        })
    }

    pub fn append(&mut self, time: f32, displacement: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(TelemetrySample { time, displacement });

        self.min_displacement = self.min_displacement.min(displacement);
        self.max_displacement = self.max_displacement.max(displacement);
        self.max_time = self.max_time.max(time);
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.min_displacement = 0.0;
        self.max_displacement = 0.0;
        self.max_time = 0.0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn min_displacement(&self) -> f32 {
        self.min_displacement
    }

    pub fn max_displacement(&self) -> f32 {
        self.max_displacement
    }

    pub fn max_time(&self) -> f32 {
        self.max_time
    }

    /// Height of the y axis, never below the graph's minimum range.
    pub fn displacement_range(&self) -> f32 {
        (self.max_displacement - self.min_displacement).max(GRAPH_MIN_DISPLACEMENT_RANGE)
    }

    pub fn oldest(&self) -> Option<TelemetrySample> {
        self.samples.front().copied()
    }

    pub fn latest(&self) -> Option<TelemetrySample> {
        self.samples.back().copied()
    }

    /// All retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TelemetrySample> + '_ {
        self.samples.iter()
    }

    /// Samples from the last `span` seconds ending at `now`, oldest first.
    ///
    /// The newest sample older than the window start is included too, so a
    /// trace drawn through the result reaches the left edge of the graph.
    pub fn window(&self, now: f32, span: f32) -> impl Iterator<Item = &TelemetrySample> + '_ {
        let start = window_start(now, span);
        // Times are appended in order.
        let first = self
            .samples
            .partition_point(|s| s.time < start)
            .saturating_sub(1);
        self.samples.range(first..).take_while(move |s| s.time <= now)
    }
}

/// Left edge of a sliding window, pinned at zero during the first `span` seconds.
#[inline]
pub fn window_start(now: f32, span: f32) -> f32 {
    if now > span {
        now - span
    } else {
        0.0
    }
}
