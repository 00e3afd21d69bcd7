//! Periodic refresh timer.
//!
//! A named thread sleeps on a stop channel with `recv_timeout`; every timeout
//! becomes a [`RefreshTick`] on the UI's channel. Stopping sends on (or drops)
//! the stop channel, so the thread wakes immediately and is joined.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTick {
    /// 1-based count of ticks since the timer last started.
    pub seq: u64,
}

struct Running {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct RefreshTimer {
    interval: Duration,
    ticks: Sender<RefreshTick>,
    running: Option<Running>,
}

impl RefreshTimer {
    /// A stopped timer. A zero interval never starts.
    pub fn new(interval: Duration, ticks: Sender<RefreshTick>) -> Self {
        Self {
            interval,
            ticks,
            running: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Start ticking. Returns `Ok(false)` when already running or disabled.
    pub fn start(&mut self) -> io::Result<bool> {
        if self.running.is_some() || self.interval.is_zero() {
            return Ok(false);
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let ticks = self.ticks.clone();
        let interval = self.interval;

        let handle = thread::Builder::new()
            .name("trendview-refresh".into())
            .spawn(move || {
                let mut seq = 0u64;
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            seq += 1;
                            if ticks.send(RefreshTick { seq }).is_err() {
                                // Receiver gone: nobody to refresh for.
                                break;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        debug!(interval_ms = interval.as_millis() as u64, "refresh timer started");
        self.running = Some(Running { stop_tx, handle });
        Ok(true)
    }

    /// Stop and join the timer thread. Returns `false` when it was not running.
    pub fn stop(&mut self) -> bool {
        let Some(running) = self.running.take() else {
            return false;
        };
        let _ = running.stop_tx.send(());
        if running.handle.join().is_err() {
            warn!("refresh timer thread panicked");
        }
        debug!("refresh timer stopped");
        true
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
