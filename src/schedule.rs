//! Timing transforms shared by the scroll-driven features: a trailing-edge
//! debounce and an animation-frame coalescer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Trailing-edge rate limiter. Each `call` replaces the pending timeout, so
/// the callback runs once per quiescent period with the last call's value.
pub(crate) struct Debounced<T> {
    delay_ms: u32,
    callback: Rc<RefCell<dyn FnMut(T)>>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            callback: self.callback.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<T: 'static> Debounced<T> {
    pub(crate) fn new(delay_ms: u32, callback: impl FnMut(T) + 'static) -> Self {
        Self {
            delay_ms,
            callback: Rc::new(RefCell::new(callback)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub(crate) fn call(&self, value: T) {
        let callback = self.callback.clone();
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            (callback.borrow_mut())(value);
        });
        // Dropping the previous Timeout cancels it.
        *self.pending.borrow_mut() = Some(timeout);
    }
}

/// Collapses bursts of trigger events into at most one handler run per
/// rendering frame. The scheduled flag is cleared as the frame callback's
/// last action.
pub(crate) struct FrameCoalescer {
    scheduled: Rc<Cell<bool>>,
    handler: Rc<RefCell<dyn FnMut()>>,
}

impl Clone for FrameCoalescer {
    fn clone(&self) -> Self {
        Self {
            scheduled: self.scheduled.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl FrameCoalescer {
    pub(crate) fn new(handler: impl FnMut() + 'static) -> Self {
        Self {
            scheduled: Rc::new(Cell::new(false)),
            handler: Rc::new(RefCell::new(handler)),
        }
    }

    /// Run the handler immediately, outside frame scheduling. Used for the
    /// eager startup pass so a page loaded pre-scrolled paints correctly.
    pub(crate) fn run_now(&self) {
        (self.handler.borrow_mut())();
    }

    pub(crate) fn trigger(&self) {
        if self.scheduled.replace(true) {
            return;
        }
        let scheduled = self.scheduled.clone();
        let handler = self.handler.clone();
        let frame = Closure::once_into_js(move || {
            (handler.borrow_mut())();
            scheduled.set(false);
        });
        let requested = web_sys::window()
            .map(|w| w.request_animation_frame(frame.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !requested {
            self.scheduled.set(false);
        }
    }

    #[cfg(test)]
    pub(crate) fn scheduled(&self) -> bool {
        self.scheduled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test(async)]
    async fn debounce_collapses_a_burst_into_one_call_with_the_last_value() {
        let seen: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let debounced = Debounced::new(20, move |value: i32| sink.borrow_mut().push(value));

        for value in 1..=5 {
            debounced.call(value);
        }
        assert!(seen.borrow().is_empty());

        TimeoutFuture::new(80).await;
        assert_eq!(*seen.borrow(), vec![5]);
    }

    #[wasm_bindgen_test(async)]
    async fn debounce_restarts_the_delay_on_each_call() {
        let count: Rc<Cell<u32>> = Rc::new(Cell::new(0));
        let sink = count.clone();
        let debounced = Debounced::new(100, move |_: ()| sink.set(sink.get() + 1));

        debounced.call(());
        TimeoutFuture::new(40).await;
        // Still within the delay of the first call; this resets it.
        debounced.call(());
        TimeoutFuture::new(40).await;
        assert_eq!(count.get(), 0);

        TimeoutFuture::new(150).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test(async)]
    async fn coalescer_runs_once_per_frame_and_clears_its_flag() {
        let runs: Rc<Cell<u32>> = Rc::new(Cell::new(0));
        let sink = runs.clone();
        let coalescer = FrameCoalescer::new(move || sink.set(sink.get() + 1));

        coalescer.trigger();
        coalescer.trigger();
        coalescer.trigger();
        assert!(coalescer.scheduled());

        TimeoutFuture::new(100).await;
        assert_eq!(runs.get(), 1);
        assert!(!coalescer.scheduled());

        coalescer.trigger();
        TimeoutFuture::new(100).await;
        assert_eq!(runs.get(), 2);
    }
}
