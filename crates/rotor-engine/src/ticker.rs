// SPDX-License-Identifier: MIT
//
// Ticker: the rotation clock.
//
// A dedicated thread sleeps for one period and sends a `Tick` over a
// standard channel, forever, until told to stop. The thread never touches
// the sequencer; it only produces messages. The driver loop on the owning
// thread receives them and does the work.
//
// Shutdown: the thread sleeps in short slices and checks an `AtomicBool`
// between them, so `stop()` returns within one slice instead of waiting
// out a whole period.
//
// Missed deadlines are not replayed. If the thread wakes a full period or
// more late it sends one tick and restarts the schedule from now.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the ticker thread checks the stop flag.
const STOP_SLICE: Duration = Duration::from_millis(25);

/// One clock pulse. `seq` counts from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub seq: u64,
    /// The deadline this tick was scheduled for.
    pub due: Instant,
}

/// Background thread emitting a [`Tick`] every `period`.
///
/// Runs until [`stop`](Self::stop) is called, the `Ticker` is dropped, or
/// the receiver goes away.
#[derive(Debug)]
pub struct Ticker {
    /// `None` after `stop()` joins it.
    handle: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl Ticker {
    /// Spawn the ticker thread.
    ///
    /// The first tick arrives one full period after spawning. The channel
    /// closes once the thread exits.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(period: Duration) -> io::Result<(Self, Receiver<Tick>)> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("theme-ticker".into())
            .spawn(move || Self::tick_loop(&tx, &stop_flag, period))?;

        Ok((
            Self {
                handle: Some(handle),
                stop,
            },
            rx,
        ))
    }

    /// Signal the thread to stop and wait for it to exit.
    ///
    /// Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn tick_loop(tx: &Sender<Tick>, stop: &AtomicBool, period: Duration) {
        let mut seq = 0;
        let mut next = Instant::now() + period;

        loop {
            // Sleep toward the deadline, one slice at a time.
            let now = loop {
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                let now = Instant::now();
                if now >= next {
                    break now;
                }
                thread::sleep((next - now).min(STOP_SLICE));
            };

            seq += 1;
            if tx.send(Tick { seq, due: next }).is_err() {
                // Receiver dropped.
                return;
            }
            next = reschedule(next, now, period);
        }
    }
}

/// The deadline after `due`, given the tick for it went out at `now`.
///
/// Normally one period past `due`, so cadence doesn't drift with send
/// latency. When that is already in the past the missed ticks are
/// skipped and the schedule restarts one period from `now`.
fn reschedule(due: Instant, now: Instant, period: Duration) -> Instant {
    let next = due + period;
    if now >= next { now + period } else { next }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reschedule_keeps_cadence_when_on_time() {
        let t0 = Instant::now();
        let period = Duration::from_millis(100);
        assert_eq!(reschedule(t0, t0, period), t0 + period);
        assert_eq!(reschedule(t0, t0 + Duration::from_millis(40), period), t0 + period);
    }

    #[test]
    fn reschedule_skips_missed_ticks() {
        let t0 = Instant::now();
        let period = Duration::from_millis(100);
        let late = t0 + Duration::from_millis(350);
        assert_eq!(reschedule(t0, late, period), late + period);
        let exactly_one_late = t0 + period;
        assert_eq!(reschedule(t0, exactly_one_late, period), exactly_one_late + period);
    }

    #[test]
    fn ticks_carry_their_deadlines() {
        let period = Duration::from_millis(20);
        let start = Instant::now();
        let (mut ticker, rx) = Ticker::spawn(period).unwrap();
        let a = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let b = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        ticker.stop();
        assert!(a.due >= start + period);
        assert!(b.due >= a.due + period);
    }

    #[test]
    fn stop_slice_reasonable() {
        assert!(STOP_SLICE >= Duration::from_millis(5));
        assert!(STOP_SLICE <= Duration::from_millis(100));
    }

    #[test]
    fn ticks_arrive_in_order() {
        let (mut ticker, rx) = Ticker::spawn(Duration::from_millis(10)).unwrap();
        let a = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let b = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let c = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        ticker.stop();
        assert_eq!((a.seq, b.seq, c.seq), (1, 2, 3));
    }

    #[test]
    fn first_tick_waits_a_period() {
        let start = Instant::now();
        let (_ticker, rx) = Ticker::spawn(Duration::from_millis(60)).unwrap();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn stop_is_prompt_with_long_period() {
        let (mut ticker, _rx) = Ticker::spawn(Duration::from_secs(3600)).unwrap();
        let start = Instant::now();
        ticker.stop();
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut ticker, _rx) = Ticker::spawn(Duration::from_millis(10)).unwrap();
        ticker.stop();
        ticker.stop();
    }

    #[test]
    fn drop_stops_ticker() {
        let (ticker, _rx) = Ticker::spawn(Duration::from_secs(3600)).unwrap();
        drop(ticker);
    }

    #[test]
    fn channel_closes_on_stop() {
        let (mut ticker, rx) = Ticker::spawn(Duration::from_millis(5)).unwrap();
        ticker.stop();
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn thread_exits_when_receiver_dropped() {
        let (mut ticker, rx) = Ticker::spawn(Duration::from_millis(5)).unwrap();
        drop(rx);
        thread::sleep(Duration::from_millis(30));
        ticker.stop();
    }
}
