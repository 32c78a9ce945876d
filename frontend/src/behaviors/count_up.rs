//! Count-up state for the numbers in the stats section.
//!
//! A label like `"200+"` is split into a numeric target and a cosmetic suffix.
//! [`CountUpState`] then walks the displayed value from 0 to the target one
//! tick at a time. It knows nothing about timers or the DOM; the driver in
//! `ticker.rs` feeds it ticks.

use crate::config;
use crate::error::LabelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    Plus,
    Percent,
    None,
}

impl Suffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Plus => "+",
            Suffix::Percent => "%",
            Suffix::None => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpTarget {
    pub value: u64,
    pub suffix: Suffix,
}

impl CountUpTarget {
    /// Every ASCII digit in the label, read as one integer. `"1,000+"` is 1000.
    pub fn parse(label: &str) -> Result<Self, LabelError> {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(LabelError::NoDigits(label.to_string()));
        }
        let value = digits
            .parse::<u64>()
            .map_err(|_| LabelError::OutOfRange(label.to_string()))?;

        let suffix = if label.contains('+') {
            Suffix::Plus
        } else if label.contains('%') {
            Suffix::Percent
        } else {
            Suffix::None
        };

        Ok(Self { value, suffix })
    }

    pub fn render(&self, current: u64) -> String {
        format!("{}{}", current, self.suffix.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration_ms: config::COUNT_UP_DURATION_MS,
            tick_ms: config::COUNT_UP_TICK_MS,
        }
    }
}

impl AnimationTiming {
    /// Ticks in a full run, 125 for the defaults.
    pub fn steps(&self) -> f64 {
        f64::from(self.duration_ms) / f64::from(self.tick_ms.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing changed.
    Ignored,
    Advanced(u64),
    Finished(u64),
}

#[derive(Debug, Clone)]
pub struct CountUpState {
    target: u64,
    current: u64,
    accumulated: f64,
    increment: f64,
    phase: Phase,
}

impl CountUpState {
    pub fn new(target: u64, timing: AnimationTiming) -> Self {
        let steps = timing.steps();
        let increment = if steps > 0.0 {
            target as f64 / steps
        } else {
            target as f64
        };
        Self {
            target,
            current: 0,
            accumulated: 0.0,
            increment,
            phase: Phase::Idle,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn has_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Idle -> Running. Returns false if the animation already started once,
    /// so repeated visibility signals are harmless.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Ignored;
        }

        self.accumulated += self.increment;
        if self.accumulated >= self.target as f64 {
            self.current = self.target;
            self.phase = Phase::Completed;
            return Tick::Finished(self.current);
        }

        // accumulated < target here, so the floor cannot pass the target
        let next = (self.accumulated.floor() as u64).min(self.target);
        self.current = self.current.max(next);
        Tick::Advanced(self.current)
    }

    /// Teardown. A completed animation keeps its phase; anything else stops for good.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Completed {
            self.phase = Phase::Cancelled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(state: &mut CountUpState) -> Vec<u64> {
        let mut shown = Vec::new();
        loop {
            match state.tick() {
                Tick::Advanced(v) => shown.push(v),
                Tick::Finished(v) => {
                    shown.push(v);
                    return shown;
                }
                Tick::Ignored => return shown,
            }
            assert!(shown.len() < 10_000, "animation never finished");
        }
    }

    #[test]
    fn parses_page_labels() {
        assert_eq!(
            CountUpTarget::parse("200+").unwrap(),
            CountUpTarget { value: 200, suffix: Suffix::Plus }
        );
        assert_eq!(
            CountUpTarget::parse("100%").unwrap(),
            CountUpTarget { value: 100, suffix: Suffix::Percent }
        );
        assert_eq!(CountUpTarget::parse("40+").unwrap().value, 40);
    }

    #[test]
    fn strips_every_non_digit() {
        let target = CountUpTarget::parse("1,000+").unwrap();
        assert_eq!(target.value, 1000);
        assert_eq!(target.suffix, Suffix::Plus);

        let plain = CountUpTarget::parse("~75").unwrap();
        assert_eq!(plain.value, 75);
        assert_eq!(plain.suffix, Suffix::None);
    }

    #[test]
    fn label_without_digits_is_rejected() {
        assert_eq!(
            CountUpTarget::parse("lots+"),
            Err(LabelError::NoDigits("lots+".to_string()))
        );
        assert!(matches!(CountUpTarget::parse(""), Err(LabelError::NoDigits(_))));
    }

    #[test]
    fn oversized_label_is_rejected() {
        let label = "99999999999999999999999+";
        assert_eq!(
            CountUpTarget::parse(label),
            Err(LabelError::OutOfRange(label.to_string()))
        );
    }

    #[test]
    fn render_reappends_suffix() {
        let target = CountUpTarget::parse("100%").unwrap();
        assert_eq!(target.render(37), "37%");
        assert_eq!(CountUpTarget::parse("12").unwrap().render(3), "3");
    }

    #[test]
    fn ticks_before_start_do_nothing() {
        let mut state = CountUpState::new(200, AnimationTiming::default());
        assert_eq!(state.tick(), Tick::Ignored);
        assert_eq!(state.current(), 0);
        assert!(!state.has_started());
    }

    #[test]
    fn starts_only_once() {
        let mut state = CountUpState::new(40, AnimationTiming::default());
        assert!(state.start());
        state.tick();
        let after_one = state.current();

        assert!(!state.start());
        assert!(!state.start());
        assert_eq!(state.current(), after_one);
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        for target in [1, 7, 40, 100, 200, 999, 123_457] {
            let mut state = CountUpState::new(target, AnimationTiming::default());
            state.start();
            let shown = run_to_end(&mut state);

            assert!(shown.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(shown.iter().all(|v| *v <= target), "target {target}");
            assert_eq!(*shown.last().unwrap(), target);
            assert!(state.has_completed());
        }
    }

    #[test]
    fn finishes_exactly_on_target_despite_float_drift() {
        let mut state = CountUpState::new(u64::from(u32::MAX) + 17, AnimationTiming::default());
        state.start();
        run_to_end(&mut state);
        assert_eq!(state.current(), state.target());
    }

    #[test]
    fn hundred_takes_at_least_a_full_run() {
        let mut state = CountUpState::new(100, AnimationTiming::default());
        state.start();
        let shown = run_to_end(&mut state);

        assert!(shown.len() >= 125, "finished after {} ticks", shown.len());
        assert!(shown.iter().all(|v| *v <= 100));
        assert_eq!(shown.last(), Some(&100));
    }

    #[test]
    fn completed_state_stays_put() {
        let mut state = CountUpState::new(3, AnimationTiming { duration_ms: 32, tick_ms: 16 });
        state.start();
        run_to_end(&mut state);

        assert_eq!(state.tick(), Tick::Ignored);
        state.cancel();
        assert!(state.has_completed());
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut state = CountUpState::new(0, AnimationTiming::default());
        state.start();
        assert_eq!(state.tick(), Tick::Finished(0));
    }

    #[test]
    fn cancelled_state_ignores_ticks() {
        let mut state = CountUpState::new(200, AnimationTiming::default());
        state.start();
        state.tick();
        let frozen = state.current();

        state.cancel();
        assert_eq!(state.tick(), Tick::Ignored);
        assert_eq!(state.current(), frozen);
        assert!(!state.start());
    }
}
