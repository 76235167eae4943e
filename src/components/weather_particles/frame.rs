//! Cancellable per-frame scheduling.
//!
//! [`AnimationLoop`] runs a tick once per display frame until stopped. The host
//! primitive is abstracted as [`FrameScheduler`] so the loop logic does not
//! depend on a browser; [`BrowserFrames`] backs it with `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Host primitive that runs a callback once on the next frame.
pub trait FrameScheduler {
	/// Handle identifying a pending request.
	type Id;

	/// Arranges for `fire` to run on the next frame. `None` means the host
	/// refused the request.
	fn request(&self, fire: Box<dyn FnOnce()>) -> Option<Self::Id>;

	/// Cancels a pending request. Cancelling a request that already fired is
	/// harmless.
	fn cancel(&self, id: Self::Id);
}

struct LoopInner<S: FrameScheduler + 'static> {
	scheduler: S,
	tick: RefCell<Box<dyn FnMut()>>,
	pending: Cell<Option<S::Id>>,
	running: Cell<bool>,
	frames: Cell<u64>,
}

impl<S: FrameScheduler + 'static> LoopInner<S> {
	fn schedule(this: &Rc<Self>) {
		let weak = Rc::downgrade(this);
		let id = this.scheduler.request(Box::new(move || {
			if let Some(inner) = weak.upgrade() {
				LoopInner::fire(&inner);
			}
		}));

		match id {
			Some(id) => this.pending.set(Some(id)),
			None => {
				warn!("animation loop: frame request refused, stopping");
				this.running.set(false);
			}
		}
	}

	fn fire(this: &Rc<Self>) {
		this.pending.set(None);
		if !this.running.get() {
			return;
		}

		{
			let mut tick = this.tick.borrow_mut();
			(*tick)();
		}
		this.frames.set(this.frames.get() + 1);

		if this.running.get() {
			Self::schedule(this);
		}
	}
}

/// A repeating frame task. Ticks are strictly sequential and at most one
/// frame request is outstanding at any time.
///
/// Dropping the loop stops it.
pub struct AnimationLoop<S: FrameScheduler + 'static> {
	inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> AnimationLoop<S> {
	/// Starts ticking on the next frame.
	pub fn start(scheduler: S, tick: impl FnMut() + 'static) -> Self {
		let inner = Rc::new(LoopInner {
			scheduler,
			tick: RefCell::new(Box::new(tick)),
			pending: Cell::new(None),
			running: Cell::new(true),
			frames: Cell::new(0),
		});
		LoopInner::schedule(&inner);
		Self { inner }
	}

	/// Stops the loop and cancels any pending frame. Safe to call repeatedly.
	pub fn stop(&self) {
		if self.inner.running.replace(false) {
			debug!(
				"animation loop: stopped after {} frames",
				self.inner.frames.get()
			);
		}
		if let Some(id) = self.inner.pending.take() {
			self.inner.scheduler.cancel(id);
		}
	}

	/// False once stopped, dropped or refused a frame.
	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}

	/// Number of ticks run so far.
	pub fn frames(&self) -> u64 {
		self.inner.frames.get()
	}
}

impl<S: FrameScheduler + 'static> Drop for AnimationLoop<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

/// `requestAnimationFrame`-backed scheduler.
///
/// A single JS closure is created up front and reused for every request; it
/// runs whichever callback is currently parked in `pending`.
pub struct BrowserFrames {
	window: Window,
	pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
	callback: Closure<dyn FnMut()>,
}

impl BrowserFrames {
	/// Scheduler backed by `window.requestAnimationFrame`.
	pub fn new(window: Window) -> Self {
		let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(None));
		let slot = pending.clone();
		let callback = Closure::new(move || {
			let fire = slot.borrow_mut().take();
			if let Some(fire) = fire {
				fire();
			}
		});
		Self {
			window,
			pending,
			callback,
		}
	}
}

impl FrameScheduler for BrowserFrames {
	type Id = i32;

	fn request(&self, fire: Box<dyn FnOnce()>) -> Option<i32> {
		*self.pending.borrow_mut() = Some(fire);
		match self
			.window
			.request_animation_frame(self.callback.as_ref().unchecked_ref())
		{
			Ok(id) => Some(id),
			Err(_) => {
				self.pending.borrow_mut().take();
				None
			}
		}
	}

	fn cancel(&self, id: i32) {
		let _ = self.window.cancel_animation_frame(id);
		self.pending.borrow_mut().take();
	}
}


#[cfg(test)]
mod tests {
	use super::manual::ManualFrames;
	use super::*;

	fn counting_loop(frames: &ManualFrames) -> (AnimationLoop<ManualFrames>, Rc<Cell<u32>>) {
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let anim = AnimationLoop::start(frames.clone(), move || counter.set(counter.get() + 1));
		(anim, ticks)
	}

	#[test]
	fn ticks_once_per_frame() {
		let frames = ManualFrames::default();
		let (anim, ticks) = counting_loop(&frames);

		assert_eq!(ticks.get(), 0);
		for expected in 1..=5 {
			frames.fire();
			assert_eq!(ticks.get(), expected);
			assert_eq!(frames.pending(), 1);
		}
		assert_eq!(anim.frames(), 5);
		assert!(anim.is_running());
	}

	#[test]
	fn stop_cancels_pending_frame() {
		let frames = ManualFrames::default();
		let (anim, ticks) = counting_loop(&frames);
		frames.fire();

		anim.stop();
		assert_eq!(frames.pending(), 0);
		assert_eq!(frames.cancelled.get(), 1);

		frames.fire();
		assert_eq!(ticks.get(), 1);
		assert!(!anim.is_running());
	}

	#[test]
	fn stop_is_idempotent() {
		let frames = ManualFrames::default();
		let (anim, _) = counting_loop(&frames);

		anim.stop();
		anim.stop();
		drop(anim);
		assert_eq!(frames.cancelled.get(), 1);
	}

	#[test]
	fn drop_stops_the_loop() {
		let frames = ManualFrames::default();
		let (anim, ticks) = counting_loop(&frames);
		drop(anim);

		assert_eq!(frames.pending(), 0);
		frames.fire();
		assert_eq!(ticks.get(), 0);
	}

	#[test]
	fn stale_callback_after_stop_does_nothing() {
		#[derive(Clone, Default)]
		struct Leaky(ManualFrames);
		impl FrameScheduler for Leaky {
			type Id = u32;
			fn request(&self, fire: Box<dyn FnOnce()>) -> Option<u32> {
				self.0.request(fire)
			}
			// Host that ignores cancellation.
			fn cancel(&self, _id: u32) {}
		}

		let leaky = Leaky::default();
		let ticks = Rc::new(Cell::new(0));
		let counter = ticks.clone();
		let anim = AnimationLoop::start(leaky.clone(), move || counter.set(counter.get() + 1));

		anim.stop();
		leaky.0.fire();
		assert_eq!(ticks.get(), 0);
		assert_eq!(leaky.0.pending(), 0);
	}

	#[test]
	fn refused_request_stops_loop() {
		struct Refusing;
		impl FrameScheduler for Refusing {
			type Id = ();
			fn request(&self, _fire: Box<dyn FnOnce()>) -> Option<()> {
				None
			}
			fn cancel(&self, _id: ()) {}
		}

		let anim = AnimationLoop::start(Refusing, || {});
		assert!(!anim.is_running());
	}
}
