//! Recurring-tick / one-shot-timeout loop with a non-blocking fallback.
//!
//! Each iteration offers three branches: the periodic tick, the one-shot
//! timeout, and a default branch taken immediately when neither timer is
//! ready. The default branch yields for a short backoff so polling stays
//! cheap without busy-spinning. Observing the timeout ends the loop.

use std::thread;

use crossbeam_channel::Select;
use log::{info, trace};

use crate::config::Config;
use crate::timer;

/// Counters observed by one run of the tick loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct TickLoopReport {
    /// Tick events observed.
    pub ticks: u64,

    /// Times the fallback branch ran because neither timer was ready.
    pub idle_polls: u64,
}

/// Runs the multiplexed timer loop until the one-shot timeout fires.
///
/// Ticks arrive every `config.tick_interval`; missed ticks are skipped,
/// not queued, so a loop that lingers elsewhere sees fewer events rather
/// than a burst. If the tick and the timeout are ready at the same moment
/// the winner is picked at random (crossbeam's select policy), so the
/// final tick around the timeout boundary may or may not be observed.
pub fn run_tick_loop(config: &Config) -> TickLoopReport {
    let ticks = timer::tick(config.tick_interval);
    let timeout = timer::after(config.run_duration);
    let mut report = TickLoopReport::default();

    loop {
        let mut sel = Select::new();
        let tick_op = sel.recv(ticks.raw());
        let boom_op = sel.recv(timeout.raw());

        match sel.try_select() {
            Ok(oper) if oper.index() == tick_op => {
                let _ = oper.recv(ticks.raw());
                info!("tick.");
                report.ticks += 1;
            }
            Ok(oper) => {
                debug_assert_eq!(oper.index(), boom_op);
                let _ = oper.recv(timeout.raw());
                info!("BOOM!");
                break;
            }
            // Neither timer is ready: fall back immediately, then yield
            // so the poll does not busy-spin.
            Err(_) => {
                trace!("idle poll");
                report.idle_polls += 1;
                thread::sleep(config.poll_backoff);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_count_matches_the_window() {
        let config = Config::default()
            .with_tick_interval(Duration::from_millis(25))
            .with_run_duration(Duration::from_millis(140))
            .with_poll_backoff(Duration::from_millis(5));

        let report = run_tick_loop(&config);

        // floor(140 / 25) = 5, with one tick of scheduling tolerance.
        assert!(
            (4..=6).contains(&report.ticks),
            "observed {} ticks",
            report.ticks
        );
        assert!(report.idle_polls > 0);
    }

    #[test]
    fn test_fast_preset_terminates_on_timeout() {
        let report = run_tick_loop(&Config::fast());
        assert!(report.ticks >= 1);
    }
}
