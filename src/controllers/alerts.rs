//! Flash Alert Dismisser
//!
//! Every flash message present at load is closed once the configured delay
//! has elapsed.

use log::debug;

/// Runs a task once, `delay_ms` from now
pub trait Scheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub struct AlertDismisser<S> {
    scheduler: S,
    delay_ms: u32,
}

impl<S: Scheduler> AlertDismisser<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms }
    }

    /// Schedule `close` for each alert
    pub fn dismiss_all<T, F>(&self, alerts: Vec<T>, close: F)
    where
        T: 'static,
        F: Fn(&T) + Clone + 'static,
    {
        debug!("closing {} alerts in {}ms", alerts.len(), self.delay_ms);
        for alert in alerts {
            let close = close.clone();
            self.scheduler.after(self.delay_ms, Box::new(move || close(&alert)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Task = (u32, Box<dyn FnOnce()>);

    /// Virtual clock; tasks run only when `advance` passes their due time
    #[derive(Default)]
    struct FakeClock {
        now: Cell<u32>,
        pending: RefCell<Vec<Task>>,
    }

    impl FakeClock {
        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Task> = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<Task>, Vec<Task>) = pending.drain(..).partition(|(at, _)| *at <= now);
                *pending = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }
    }

    impl Scheduler for Rc<FakeClock> {
        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            let at = self.now.get() + delay_ms;
            self.pending.borrow_mut().push((at, task));
        }
    }

    fn setup(delay_ms: u32) -> (Rc<FakeClock>, AlertDismisser<Rc<FakeClock>>, Rc<RefCell<Vec<&'static str>>>) {
        let clock = Rc::new(FakeClock::default());
        let dismisser = AlertDismisser::new(clock.clone(), delay_ms);
        (clock, dismisser, Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_alerts_stay_until_delay_elapses() {
        let (clock, dismisser, closed) = setup(3000);
        let sink = closed.clone();
        dismisser.dismiss_all(vec!["welcome", "added"], move |alert: &&'static str| {
            sink.borrow_mut().push(*alert)
        });

        clock.advance(2999);
        assert!(closed.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*closed.borrow(), vec!["welcome", "added"]);
    }

    #[test]
    fn test_configured_delay_is_used() {
        let (clock, dismisser, closed) = setup(5000);
        let sink = closed.clone();
        dismisser.dismiss_all(vec!["saved"], move |alert: &&'static str| sink.borrow_mut().push(*alert));

        clock.advance(3000);
        assert!(closed.borrow().is_empty());
        clock.advance(2000);
        assert_eq!(*closed.borrow(), vec!["saved"]);
    }

    #[test]
    fn test_no_alerts_schedules_nothing() {
        let (clock, dismisser, _closed) = setup(3000);
        dismisser.dismiss_all(Vec::<&'static str>::new(), |_: &&str| {});
        assert!(clock.pending.borrow().is_empty());
    }
}
