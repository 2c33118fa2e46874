//! Owned browser subscriptions.
//!
//! Every listener, timer and frame loop the layer uses is held as a value
//! that releases its browser registration when dropped. Tearing the
//! component down is then just dropping its [`Subscriptions`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

/// A window event listener, removed on drop.
pub struct EventSubscription {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
	/// Listens for `event` on the window.
	pub fn window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
		let window: Window = web_sys::window()?;
		Self::on(window.into(), event, handler)
	}

	fn on(
		target: EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			Ok(()) => Some(Self {
				target,
				event,
				callback,
			}),
			Err(e) => {
				warn!("ambient: could not listen for {}: {:?}", event, e);
				None
			}
		}
	}
}

impl Drop for EventSubscription {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// Self-rescheduling `requestAnimationFrame` chain, cancelled on drop.
///
/// The step receives the frame timestamp in milliseconds.
pub struct FrameLoop {
	handle: Rc<Cell<Option<i32>>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
	/// Requests the first frame. `None` if the window or
	/// `requestAnimationFrame` is unavailable.
	pub fn start(mut step: impl FnMut(f64) + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

		let (handle_inner, callback_inner) = (handle.clone(), Rc::downgrade(&callback));
		*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			step(timestamp);
			// The loop was dropped during `step`
			let Some(cb) = callback_inner.upgrade() else {
				return;
			};
			if let (Some(window), Some(cb)) = (web_sys::window(), cb.borrow().as_ref()) {
				handle_inner.set(
					window
						.request_animation_frame(cb.as_ref().unchecked_ref())
						.ok(),
				);
			}
		}));

		let first = callback
			.borrow()
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		if first.is_none() {
			warn!("ambient: requestAnimationFrame unavailable");
			return None;
		}
		handle.set(first);

		Some(Self { handle, callback })
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let (Some(window), Some(id)) = (web_sys::window(), self.handle.take()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

/// A `setInterval` timer, cleared on drop.
pub struct IntervalTimer {
	id: i32,
	_callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
	/// Calls `tick` every `interval_ms`.
	pub fn start(interval_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(tick);
		let id = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				interval_ms as i32,
			)
			.map_err(|e| warn!("ambient: setInterval failed: {:?}", e))
			.ok()?;
		Some(Self {
			id,
			_callback: callback,
		})
	}
}

impl Drop for IntervalTimer {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.id);
		}
	}
}

/// Pending one-shot timeouts keyed by the effect they belong to.
///
/// Whatever is still pending on drop is cleared so no callback outlives the
/// component.
#[derive(Clone, Default)]
pub struct TimeoutSet {
	inner: Rc<RefCell<PendingTimeouts>>,
}

#[derive(Default)]
struct PendingTimeouts {
	timers: HashMap<u64, (i32, Closure<dyn FnMut()>)>,
	/// Closures that already ran. A closure cannot be freed from inside its
	/// own invocation, so they are dropped on the next `schedule` or `clear`.
	spent: Vec<Closure<dyn FnMut()>>,
}

impl TimeoutSet {
	/// Runs `fire` once after `delay_ms`. Scheduling a key that is already
	/// pending replaces the earlier timeout.
	pub fn schedule(&self, key: u64, delay_ms: f64, fire: impl FnOnce() + 'static) {
		let Some(window) = web_sys::window() else {
			return;
		};
		self.inner.borrow_mut().spent.clear();

		let inner = Rc::downgrade(&self.inner);
		let mut fire = Some(fire);
		let callback = Closure::<dyn FnMut()>::new(move || {
			if let Some(fire) = fire.take() {
				fire();
			}
			if let Some(inner) = inner.upgrade() {
				let mut inner = inner.borrow_mut();
				if let Some((_, cb)) = inner.timers.remove(&key) {
					inner.spent.push(cb);
				}
			}
		});

		match window.set_timeout_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			delay_ms.max(0.0).round() as i32,
		) {
			Ok(id) => {
				let replaced = self.inner.borrow_mut().timers.insert(key, (id, callback));
				if let Some((old, _)) = replaced {
					window.clear_timeout_with_handle(old);
				}
			}
			Err(e) => warn!("ambient: setTimeout failed: {:?}", e),
		}
	}

	/// Cancels every pending timeout.
	pub fn clear(&self) {
		let mut inner = self.inner.borrow_mut();
		if let Some(window) = web_sys::window() {
			for (id, _) in inner.timers.values() {
				window.clear_timeout_with_handle(*id);
			}
		}
		inner.timers.clear();
		inner.spent.clear();
	}
}

/// Everything the mounted component holds on to.
///
/// Dropping this releases every listener, timer and the frame loop.
#[derive(Default)]
pub struct Subscriptions {
	/// Window event listeners.
	pub listeners: Vec<EventSubscription>,
	/// The `requestAnimationFrame` chain.
	pub frame_loop: Option<FrameLoop>,
	/// Particle tick.
	pub interval: Option<IntervalTimer>,
	/// Splash removal timers.
	pub timeouts: TimeoutSet,
}

impl Subscriptions {
	/// Adds a window listener for `event`.
	pub fn listen(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) {
		if let Some(sub) = EventSubscription::window(event, handler) {
			self.listeners.push(sub);
		}
	}
}

impl Drop for Subscriptions {
	fn drop(&mut self) {
		self.timeouts.clear();
	}
}
