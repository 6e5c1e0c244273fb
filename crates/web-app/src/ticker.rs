use crate::TickToken;

/// Owner of the single scheduled tick callback.
///
/// `H` is the handle of a scheduled callback that cancels the callback when dropped, e.g. a
/// `gloo_timers::callback::Timeout` or a wrapper around a spawned task. At most one handle is
/// held at a time.
pub struct Ticker<H> {
    pending: Option<(TickToken, H)>,
}

impl<H> Ticker<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule the tick identified by `token`, cancelling any other pending tick.
    ///
    /// Nothing happens if `token` is already scheduled.
    pub fn schedule(&mut self, token: TickToken, schedule: impl FnOnce(TickToken) -> H) {
        if self.token() == Some(token) {
            return;
        }
        self.pending = None;
        self.pending = Some((token, schedule(token)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Follow the pending tick of a session.
    pub fn sync(&mut self, pending: Option<TickToken>, schedule: impl FnOnce(TickToken) -> H) {
        match pending {
            Some(token) => self.schedule(token, schedule),
            None => self.cancel(),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<TickToken> {
        self.pending.as_ref().map(|(token, _)| *token)
    }
}

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use shufflefit_domain::Catalog;

    use super::*;
    use crate::{Settings, WorkoutSession};

    struct Handle {
        token: TickToken,
        cancelled: Rc<RefCell<Vec<TickToken>>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.token);
        }
    }

    fn handle(cancelled: &Rc<RefCell<Vec<TickToken>>>) -> impl FnOnce(TickToken) -> Handle {
        let cancelled = cancelled.clone();
        move |token| Handle { token, cancelled }
    }

    fn tokens() -> (TickToken, TickToken) {
        let mut session = WorkoutSession::new(
            Catalog::default(),
            &Settings::default(),
            StdRng::seed_from_u64(1),
        );
        let first = session.start().unwrap();
        session.tick(first);
        (first, session.pending_tick().unwrap())
    }

    #[test]
    fn test_ticker_schedule_replaces_pending_tick() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let (first, second) = tokens();
        let mut ticker = Ticker::new();

        ticker.schedule(first, handle(&cancelled));
        assert_eq!(ticker.token(), Some(first));
        assert!(cancelled.borrow().is_empty());

        ticker.schedule(second, handle(&cancelled));
        assert_eq!(ticker.token(), Some(second));
        assert_eq!(*cancelled.borrow(), vec![first]);
    }

    #[test]
    fn test_ticker_schedule_same_token() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let (first, _) = tokens();
        let mut ticker = Ticker::new();
        let mut scheduled = 0;

        for _ in 0..3 {
            ticker.schedule(first, |token| {
                scheduled += 1;
                handle(&cancelled)(token)
            });
        }

        assert_eq!(scheduled, 1);
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn test_ticker_cancel() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let (first, _) = tokens();
        let mut ticker = Ticker::new();

        ticker.schedule(first, handle(&cancelled));
        ticker.cancel();

        assert_eq!(ticker.token(), None);
        assert_eq!(*cancelled.borrow(), vec![first]);
    }

    #[test]
    fn test_ticker_sync() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let (first, _) = tokens();
        let mut ticker = Ticker::new();

        ticker.sync(Some(first), handle(&cancelled));
        assert_eq!(ticker.token(), Some(first));

        ticker.sync(None, handle(&cancelled));
        assert_eq!(ticker.token(), None);
        assert_eq!(*cancelled.borrow(), vec![first]);
    }

    #[test]
    fn test_ticker_drop_cancels() {
        let cancelled = Rc::new(RefCell::new(vec![]));
        let (first, _) = tokens();
        let mut ticker = Ticker::new();
        ticker.schedule(first, handle(&cancelled));

        drop(ticker);

        assert_eq!(*cancelled.borrow(), vec![first]);
    }

    #[test]
    fn test_ticker_drives_session() {
        let mut session = WorkoutSession::new(
            Catalog::default(),
            &Settings::default(),
            StdRng::seed_from_u64(2),
        );
        let mut ticker: Ticker<TickToken> = Ticker::new();

        session.start();
        let mut ticks = 0;
        loop {
            ticker.sync(session.pending_tick(), |token| token);
            let Some(token) = ticker.token() else {
                break;
            };
            session.tick(token);
            ticks += 1;
        }

        assert!(ticks > 0);
        assert!(session.timer().completed().iter().all(|c| *c));
    }
}
