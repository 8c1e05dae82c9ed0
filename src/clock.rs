//! Frame clock
//!
//! Turns the host's frame timestamps into sanitized tick timing: deltas are
//! never negative, non-finite timestamps are ignored and long stalls are
//! capped so a backgrounded tab doesn't teleport the simulation.

use crate::sim::Frame;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Latest timestamp seen (ms); time never runs backwards
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any frame has been seen yet
    pub fn started(&self) -> bool {
        self.last_ms.is_some()
    }

    /// Most recent timestamp, or 0 before the first frame
    pub fn now_ms(&self) -> f64 {
        self.last_ms.unwrap_or(0.0)
    }

    /// Consume a timestamp and produce the frame timing for this tick
    pub fn advance(&mut self, now_ms: f64, max_frame_ms: f64) -> Frame {
        if !now_ms.is_finite() {
            return Frame {
                delta_ms: 0.0,
                now_ms: self.now_ms(),
            };
        }

        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                Frame {
                    delta_ms: 0.0,
                    now_ms,
                }
            }
            Some(last) => {
                let now = now_ms.max(last);
                self.last_ms = Some(now);
                Frame {
                    delta_ms: (now - last).min(max_frame_ms),
                    now_ms: now,
                }
            }
        }
    }
}
