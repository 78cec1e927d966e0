//! Auto-advance timer for rotation controllers
//!
//! A fixed-delay repeating task that calls `next()` on one controller. The
//! task handle is kept so the timer can be stopped, restarted after manual
//! navigation, and torn down with its owner.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::rotation::RotationController;

/// Periodically advances a [`RotationController`]
#[derive(Debug)]
pub struct AutoAdvanceTimer {
    controller: RotationController,
    runtime: Handle,
    interval: Option<Duration>,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvanceTimer {
    /// Create a stopped timer that will spawn its ticks on `runtime`
    pub fn new(controller: RotationController, runtime: Handle) -> Self {
        Self {
            controller,
            runtime,
            interval: None,
            task: None,
        }
    }

    /// The interval of the last successful `start`
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start advancing every `interval`, replacing any running schedule.
    ///
    /// The first advance happens one full interval from now. A zero interval
    /// leaves the timer stopped.
    pub fn start(&mut self, interval: Duration) {
        self.stop();

        if interval.is_zero() {
            warn!("Ignoring zero auto-advance interval");
            return;
        }

        self.interval = Some(interval);
        let controller = self.controller.clone();
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let index = controller.next();
                debug!("Auto-advanced to {}", index);
            }
        }));

        info!("Auto-advance started ({:?})", interval);
    }

    /// Cancel the pending advance; safe to call when not running
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Auto-advance stopped");
        }
    }

    /// Restart a running timer so the next advance is a full interval away.
    ///
    /// A stopped (paused) timer stays stopped.
    pub fn reset(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(interval) = self.interval {
            self.start(interval);
        }
    }

    /// Start again with the last interval, if there was one
    pub fn resume(&mut self) {
        if let Some(interval) = self.interval {
            if !self.is_running() {
                self.start(interval);
            }
        }
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_for(controller: &RotationController) -> AutoAdvanceTimer {
        AutoAdvanceTimer::new(controller.clone(), Handle::current())
    }

    #[tokio::test(start_paused = true)]
    async fn test_advances_once_per_interval() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::from_millis(1000));
        time::sleep(Duration::from_millis(3500)).await;

        assert_eq!(controller.current_index(), 3);
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_replaces_schedule() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::from_millis(1000));
        timer.start(Duration::from_millis(1000));
        time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(controller.current_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_advance() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::from_millis(1000));
        time::sleep(Duration::from_millis(1500)).await;
        timer.stop();
        timer.stop();
        time::sleep(Duration::from_millis(5000)).await;

        assert_eq!(controller.current_index(), 1);
        assert!(!timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_pushes_next_advance_a_full_interval_out() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::from_millis(1000));
        time::sleep(Duration::from_millis(600)).await;

        controller.next();
        timer.reset();
        assert_eq!(controller.current_index(), 1);

        // The original schedule would have fired at 1000ms
        time::sleep(Duration::from_millis(600)).await;
        assert_eq!(controller.current_index(), 1);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(controller.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_keeps_paused_timer_stopped() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::from_millis(1000));
        timer.stop();
        timer.reset();

        assert!(!timer.is_running());
        timer.resume();
        assert!(timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_ignored() {
        let controller = RotationController::new(6, 1);
        let mut timer = timer_for(&controller);

        timer.start(Duration::ZERO);
        time::sleep(Duration::from_millis(100)).await;

        assert!(!timer.is_running());
        assert_eq!(timer.interval(), None);
        assert_eq!(controller.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let controller = RotationController::new(6, 1);
        {
            let mut timer = timer_for(&controller);
            timer.start(Duration::from_millis(1000));
        }
        time::sleep(Duration::from_millis(3000)).await;

        assert_eq!(controller.current_index(), 0);
    }
}
