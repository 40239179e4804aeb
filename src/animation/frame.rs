//! Frame loop on top of `requestAnimationFrame`.
//!
//! The loop talks to the browser through [`FrameScheduler`], so its
//! lifecycle (stop on `false`, nothing fires after drop) is tested natively
//! with a hand-cranked scheduler.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};

type Tick = Rc<dyn Fn(f64)>;

/// Source of animation frames.
pub trait FrameScheduler {
    /// Queue `tick` for the next frame and return a handle for
    /// [`FrameScheduler::cancel`], or `None` when no frame can be queued.
    fn request(&self, tick: Tick) -> Option<i32>;
    fn cancel(&self, handle: i32);
}

/// `requestAnimationFrame` on the current window. One JS closure is created
/// up front and hands each frame to whichever tick is queued.
pub struct BrowserFrames {
    window: Window,
    queued: Rc<RefCell<Option<Tick>>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl BrowserFrames {
    pub fn new() -> Option<Self> {
        let window = window()?;
        let queued: Rc<RefCell<Option<Tick>>> = Rc::default();
        let callback = {
            let queued = queued.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                let tick = queued.borrow_mut().take();
                if let Some(tick) = tick {
                    tick(timestamp);
                }
            }) as Box<dyn FnMut(f64)>)
        };
        Some(Self {
            window,
            queued,
            callback,
        })
    }
}

impl FrameScheduler for BrowserFrames {
    fn request(&self, tick: Tick) -> Option<i32> {
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(handle) => {
                *self.queued.borrow_mut() = Some(tick);
                Some(handle)
            }
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: i32) {
        self.queued.borrow_mut().take();
        let _ = self.window.cancel_animation_frame(handle);
    }
}

struct FrameState<S> {
    scheduler: S,
    alive: Cell<bool>,
    pending: Cell<Option<i32>>,
    on_frame: RefCell<Box<dyn FnMut(f64) -> bool>>,
}

impl<S: FrameScheduler + 'static> FrameState<S> {
    fn schedule(self: &Rc<Self>) -> bool {
        // Queued ticks never keep the loop alive
        let weak: Weak<Self> = Rc::downgrade(self);
        let tick: Tick = Rc::new(move |timestamp: f64| {
            if let Some(state) = weak.upgrade() {
                state.tick(timestamp);
            }
        });
        match self.scheduler.request(tick) {
            Some(handle) => {
                self.pending.set(Some(handle));
                true
            }
            None => {
                self.alive.set(false);
                false
            }
        }
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.pending.set(None);
        if !self.alive.get() {
            return;
        }
        let more = match self.on_frame.try_borrow_mut() {
            Ok(mut on_frame) => (&mut **on_frame)(timestamp),
            Err(_) => false,
        };
        if !(more && self.alive.get() && self.schedule()) {
            self.alive.set(false);
        }
    }

    fn cancel(&self) {
        self.alive.set(false);
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// Runs `on_frame` once per animation frame until it returns `false` or the
/// loop is dropped. Dropping cancels the pending frame, so nothing fires
/// after teardown.
pub struct FrameLoop<S: FrameScheduler + 'static = BrowserFrames> {
    state: Rc<FrameState<S>>,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self::start_with(BrowserFrames::new()?, on_frame)
    }
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn start_with<F>(scheduler: S, on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(FrameState {
            scheduler,
            alive: Cell::new(true),
            pending: Cell::new(None),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        if !state.schedule() {
            return None;
        }
        Some(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.alive.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frames fire only when the test says so. `cancel` records the handle
    /// but leaves the tick queued, like a frame already in flight.
    #[derive(Default)]
    struct ManualFrames {
        queue: RefCell<Vec<Tick>>,
        issued: Cell<i32>,
        cancelled: RefCell<Vec<i32>>,
        refuse: Cell<bool>,
    }

    impl ManualFrames {
        /// Fire everything queued so far and return how many ticks ran.
        fn run_frame(&self, timestamp: f64) -> usize {
            let ticks: Vec<Tick> = self.queue.borrow_mut().drain(..).collect();
            for tick in &ticks {
                tick(timestamp);
            }
            ticks.len()
        }
    }

    impl FrameScheduler for Rc<ManualFrames> {
        fn request(&self, tick: Tick) -> Option<i32> {
            if self.refuse.get() {
                return None;
            }
            let handle = self.issued.get() + 1;
            self.issued.set(handle);
            self.queue.borrow_mut().push(tick);
            Some(handle)
        }

        fn cancel(&self, handle: i32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        (calls.clone(), calls)
    }

    #[test]
    fn test_runs_until_callback_returns_false() {
        let frames = Rc::new(ManualFrames::default());
        let (calls, seen) = counter();
        let frame_loop = FrameLoop::start_with(frames.clone(), move |_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        })
        .unwrap();

        let mut ran = 0;
        for i in 0..10 {
            ran += frames.run_frame(i as f64 * 16.0);
        }
        assert_eq!(seen.get(), 3);
        assert_eq!(ran, 3);
        assert!(!frame_loop.is_running());
        assert!(frames.queue.borrow().is_empty());
    }

    #[test]
    fn test_dropped_loop_never_calls_back() {
        let frames = Rc::new(ManualFrames::default());
        let (calls, seen) = counter();
        let frame_loop = FrameLoop::start_with(frames.clone(), move |_| {
            calls.set(calls.get() + 1);
            true
        })
        .unwrap();

        frames.run_frame(0.0);
        assert_eq!(seen.get(), 1);

        drop(frame_loop);
        assert_eq!(*frames.cancelled.borrow(), vec![2]);

        // The queued tick still fires but finds nothing to run
        assert_eq!(frames.run_frame(16.0), 1);
        assert_eq!(frames.run_frame(32.0), 0);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_drop_inside_callback_stops_loop() {
        let frames = Rc::new(ManualFrames::default());
        let slot: Rc<RefCell<Option<FrameLoop<Rc<ManualFrames>>>>> = Rc::default();
        let (calls, seen) = counter();
        let frame_loop = {
            let slot = slot.clone();
            FrameLoop::start_with(frames.clone(), move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
                true
            })
        };
        *slot.borrow_mut() = frame_loop;

        frames.run_frame(0.0);
        assert!(slot.borrow().is_none());
        assert_eq!(frames.run_frame(16.0), 0);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_start_fails_without_frames() {
        let frames = Rc::new(ManualFrames::default());
        frames.refuse.set(true);
        let frame_loop = FrameLoop::start_with(frames.clone(), |_| true);
        assert!(frame_loop.is_none());
    }
}
