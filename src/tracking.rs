use std::io::BufRead;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::thread;

use serde::Deserialize;

/// One hand-tracking observation in normalized image coordinates, as produced
/// by an external tracker (index fingertip and thumb tip, both in [0,1]²).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HandSample {
    pub index_tip: [f32; 2],
    pub thumb_tip: [f32; 2],
}

impl HandSample {
    /// Euclidean thumb-index distance in normalized image space
    pub fn pinch_distance(&self) -> f32 {
        let dx = self.thumb_tip[0] - self.index_tip[0];
        let dy = self.thumb_tip[1] - self.index_tip[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Per-frame source of tracking samples. `None` means no hand this frame;
/// the scene then holds its state or auto-rotates.
pub trait TrackingSource {
    fn poll(&mut self) -> Option<HandSample>;
}

/// A source that never sees a hand. The scene runs in auto-rotate demo mode.
pub struct NullTracking;

impl TrackingSource for NullTracking {
    fn poll(&mut self) -> Option<HandSample> {
        None
    }
}

/// Samples piped in as newline-delimited JSON on stdin, one object per line:
/// `{"index_tip":[0.5,0.5],"thumb_tip":[0.55,0.5]}`.
///
/// A background thread owns the blocking reads; `poll` drains the channel and
/// keeps only the newest sample so a slow frame never replays stale motion.
pub struct StdinTracking {
    receiver: Receiver<HandSample>,
    disconnected: bool,
}

impl StdinTracking {
    pub fn spawn() -> Self {
        let (sender, receiver) = std::sync::mpsc::channel();

        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("tracking input closed: {}", e);
                        break;
                    }
                };

                if line.trim().is_empty() {
                    continue;
                }

                match serde_json::from_str::<HandSample>(&line) {
                    Ok(sample) => {
                        if sender.send(sample).is_err() {
                            break;
                        }
                    }
                    Err(e) => log::warn!("dropping malformed tracking sample: {}", e),
                }
            }
        });

        Self {
            receiver,
            disconnected: false,
        }
    }
}

impl TrackingSource for StdinTracking {
    fn poll(&mut self) -> Option<HandSample> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(sample) => latest = Some(sample),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        self.disconnected = true;
                        log::info!("tracking source disconnected");
                    }
                    break;
                }
            }
        }
        latest
    }
}
