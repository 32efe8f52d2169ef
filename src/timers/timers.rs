use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    laps: Vec<Duration>,
    subtimers: SubTimersMap,
}

impl InnerTimer {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.laps.clear();
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            let lap = instant.elapsed();
            self.elapsed += lap;
            self.laps.push(lap);
        }
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[derive(Debug, Default)]
struct SubTimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn reset_subtimer(&mut self, key: &'static str) {
        let t = self.entry(key).or_default();
        t.reset();
    }

    fn start_subtimer(&mut self, key: &'static str) {
        let t = self.0.entry(key).or_default();
        t.start();
    }
}

/// Nested named timers.
///
/// Timers are started and stopped in stack order with the `timeit!`
/// macro.   Every stop records one lap, so a timer that wraps a repeated
/// operation collects one sample per repetition.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;

        //first one gets special treatment since self is not
        //an InnerTimer and a common trait would be overkill
        let mut active_timer = self.subtimers.get_mut(first)?;

        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    pub fn reset_timer(&mut self, key: &'static str) {
        self.subtimers.reset_subtimer(key);
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        //starts a timer with name "str" as the current timer

        let active_timer = self.mut_active_timer();

        if let Some(active) = active_timer {
            // child of current active timer
            active.subtimers.start_subtimer(key);
        } else {
            // nothing active, create one at root
            self.subtimers.start_subtimer(key);
        }

        //append to timer call stack
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        //stops the current timer.  There should always be one
        // active when this function is reached.
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }

        //remove from timer call stack
        self.stack.pop();
    }

    /// total time recorded by the root level timer `key`
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.subtimers
            .get(key)
            .map_or(Duration::ZERO, InnerTimer::elapsed)
    }

    /// laps recorded by the root level timer `key`, in order
    pub fn laps(&self, key: &'static str) -> &[Duration] {
        self.subtimers.get(key).map_or(&[], |t| t.laps.as_slice())
    }
}

macro_rules! timeit {
    ($timer:ident => $key:expr; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_laps() {
        let mut timers = Timers::default();
        for _ in 0..3 {
            timeit! {timers => "outer"; {
                timeit! {timers => "inner"; {
                    std::hint::black_box(0);
                }}
            }}
        }
        assert_eq!(timers.laps("outer").len(), 3);
        assert!(timers.laps("missing").is_empty());
        // nested timers are not visible at the root
        assert!(timers.laps("inner").is_empty());
        assert_eq!(
            timers.elapsed("outer"),
            timers.laps("outer").iter().sum::<Duration>()
        );

        timers.reset_timer("outer");
        assert!(timers.laps("outer").is_empty());
    }
}
