use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::Callback;

use super::count_up::{AnimationTiming, CountUpState, Tick};

/// Something that can call a closure every `period_ms` until its handle is released.
pub trait TickScheduler: Clone + 'static {
    type Handle: 'static;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Stops the timer. May be called from inside the timer's own callback.
    fn release(&self, handle: Self::Handle) {
        drop(handle);
    }
}

/// `setInterval` through gloo.
#[derive(Clone, Copy, Default)]
pub struct BrowserTicker;

impl TickScheduler for BrowserTicker {
    type Handle = Interval;

    fn repeat(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }

    fn release(&self, handle: Interval) {
        // Clear now, but free the closure later: it may be the one running
        let closure = handle.cancel();
        wasm_bindgen_futures::spawn_local(async move {
            drop(closure);
        });
    }
}

/// Owns one count-up and its timer for the lifetime of a mounted stat card.
/// Dropping it cancels the timer, finished or not.
pub struct CountUpAnimation<S: TickScheduler> {
    state: Rc<RefCell<CountUpState>>,
    timer: Rc<RefCell<Option<S::Handle>>>,
    scheduler: S,
    tick_ms: u32,
    on_change: Callback<u64>,
}

impl<S: TickScheduler> CountUpAnimation<S> {
    pub fn new(target: u64, timing: AnimationTiming, scheduler: S, on_change: Callback<u64>) -> Self {
        Self {
            state: Rc::new(RefCell::new(CountUpState::new(target, timing))),
            timer: Rc::new(RefCell::new(None)),
            scheduler,
            tick_ms: timing.tick_ms,
            on_change,
        }
    }

    pub fn current(&self) -> u64 {
        self.state.borrow().current()
    }

    pub fn has_started(&self) -> bool {
        self.state.borrow().has_started()
    }

    pub fn has_completed(&self) -> bool {
        self.state.borrow().has_completed()
    }

    /// Handles an "element entered the viewport" signal. Only the first one does anything.
    pub fn start(&self) -> bool {
        if !self.state.borrow_mut().start() {
            return false;
        }
        debug!("count-up to {} started", self.state.borrow().target());

        let state = self.state.clone();
        let timer = self.timer.clone();
        let scheduler = self.scheduler.clone();
        let on_change = self.on_change.clone();

        let handle = self.scheduler.repeat(
            self.tick_ms,
            Box::new(move || {
                let outcome = state.borrow_mut().tick();
                match outcome {
                    Tick::Advanced(value) => on_change.emit(value),
                    Tick::Finished(value) => {
                        let handle = timer.borrow_mut().take();
                        if let Some(handle) = handle {
                            scheduler.release(handle);
                        }
                        debug!("count-up reached {}", value);
                        on_change.emit(value);
                    }
                    Tick::Ignored => {}
                }
            }),
        );

        *self.timer.borrow_mut() = Some(handle);
        true
    }
}

impl<S: TickScheduler> Drop for CountUpAnimation<S> {
    fn drop(&mut self) {
        self.state.borrow_mut().cancel();
        let handle = self.timer.borrow_mut().take();
        if let Some(handle) = handle {
            debug!("count-up torn down at {}", self.state.borrow().current());
            self.scheduler.release(handle);
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::TickScheduler;

    struct Slot {
        alive: bool,
        tick: Option<Box<dyn FnMut()>>,
    }

    /// Fires registered callbacks only when told to.
    #[derive(Clone, Default)]
    pub struct ManualTicker {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    pub struct ManualHandle {
        index: usize,
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let mut slots = self.slots.borrow_mut();
            slots[self.index].alive = false;
            slots[self.index].tick = None;
        }
    }

    impl ManualTicker {
        pub fn active(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.alive).count()
        }

        /// One period elapses. Returns how many callbacks ran.
        pub fn advance(&self) -> usize {
            let len = self.slots.borrow().len();
            let mut fired = 0;
            for index in 0..len {
                let taken = {
                    let mut slots = self.slots.borrow_mut();
                    if slots[index].alive { slots[index].tick.take() } else { None }
                };
                if let Some(mut tick) = taken {
                    tick();
                    fired += 1;
                    let mut slots = self.slots.borrow_mut();
                    if slots[index].alive {
                        slots[index].tick = Some(tick);
                    }
                }
            }
            fired
        }
    }

    impl TickScheduler for ManualTicker {
        type Handle = ManualHandle;

        fn repeat(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot { alive: true, tick: Some(tick) });
            ManualHandle {
                index: slots.len() - 1,
                slots: self.slots.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::manual::ManualTicker;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, Callback<u64>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |v| sink.borrow_mut().push(v)))
    }

    #[test]
    fn nothing_runs_until_visible() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder();
        let anim = CountUpAnimation::new(200, AnimationTiming::default(), ticker.clone(), on_change);

        assert_eq!(ticker.advance(), 0);
        assert_eq!(anim.current(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn repeated_visibility_starts_one_timer() {
        let ticker = ManualTicker::default();
        let (_seen, on_change) = recorder();
        let anim = CountUpAnimation::new(40, AnimationTiming::default(), ticker.clone(), on_change);

        assert!(anim.start());
        assert!(anim.has_started());
        ticker.advance();
        assert!(!anim.start());
        assert!(!anim.start());

        assert_eq!(ticker.active(), 1);
        assert_eq!(ticker.advance(), 1);
    }

    #[test]
    fn runs_to_target_and_clears_its_timer() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder();
        let anim = CountUpAnimation::new(100, AnimationTiming::default(), ticker.clone(), on_change);
        anim.start();

        let mut ticks = 0;
        while ticker.advance() > 0 {
            ticks += 1;
            assert!(ticks < 1_000);
        }

        let seen = seen.borrow();
        assert!(ticks >= 125);
        assert_eq!(seen.len(), ticks);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|v| *v <= 100));
        assert_eq!(seen.last(), Some(&100));
        assert!(anim.has_completed());
        assert_eq!(ticker.active(), 0);
    }

    #[test]
    fn teardown_mid_animation_stops_updates() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder();
        let anim = CountUpAnimation::new(200, AnimationTiming::default(), ticker.clone(), on_change);
        anim.start();
        for _ in 0..10 {
            ticker.advance();
        }
        let before = seen.borrow().len();
        assert_eq!(before, 10);

        drop(anim);

        assert_eq!(ticker.active(), 0);
        assert_eq!(ticker.advance(), 0);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn teardown_before_start_is_quiet() {
        let ticker = ManualTicker::default();
        let (seen, on_change) = recorder();
        let anim = CountUpAnimation::new(200, AnimationTiming::default(), ticker.clone(), on_change);
        drop(anim);

        assert_eq!(ticker.advance(), 0);
        assert!(seen.borrow().is_empty());
    }
}
