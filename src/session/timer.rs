//! Elapsed-time tracking for one game.

use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Start and (once the game is over) end of a game.
///
/// Uses tokio's clock so tests can pause and advance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    started_at: Instant,
    stopped_at: Option<Instant>,
}

impl SessionTimer {
    /// Starts a timer now.
    #[instrument]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            stopped_at: None,
        }
    }

    /// Freezes the timer. Later calls leave the end time untouched.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.stopped_at.is_none() {
            let now = Instant::now();
            debug!(elapsed = ?now.duration_since(self.started_at), "Timer stopped");
            self.stopped_at = Some(now);
        }
    }

    /// Checks if the timer has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Time since start, frozen at the stop time once stopped.
    pub fn elapsed(&self) -> Duration {
        let end = self.stopped_at.unwrap_or_else(Instant::now);
        end.duration_since(self.started_at)
    }
}

/// Formats a duration for display as `"{minutes}m {seconds}s"`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}m {}s", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_tracks_clock_until_stopped() {
        let mut timer = SessionTimer::start();
        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(timer.elapsed(), Duration::from_secs(5));

        timer.stop();
        tokio::time::advance(Duration::from_secs(30)).await;
        assert!(timer.is_stopped());
        assert_eq!(timer.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_stop_keeps_first_end_time() {
        let mut timer = SessionTimer::start();
        tokio::time::advance(Duration::from_secs(2)).await;
        timer.stop();
        tokio::time::advance(Duration::from_secs(3)).await;
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(999)), "0m 0s");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "1m 1s");
        assert_eq!(format_elapsed(Duration::from_secs(3600 + 59)), "60m 59s");
    }
}
