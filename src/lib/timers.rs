//! Timers tied to the reactive owner that creates them. The `gloo-timers`
//! handle lives in a local `StoredValue`; when the owning component is
//! disposed the handle is dropped, which cancels the timer, so callbacks never
//! touch state of an unmounted screen.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Slot for a one-shot timer that can be armed later, e.g. after a request completes.
pub type TimeoutSlot = StoredValue<Option<Timeout>, LocalStorage>;

/// Runs `callback` every `millis` until the current owner is disposed.
pub fn scoped_interval(millis: u32, callback: impl FnMut() + 'static) {
    let interval = Interval::new(millis, callback);
    let _ = StoredValue::new_local(interval);
}

/// Runs `callback` once after `millis` unless the current owner is disposed first.
pub fn scoped_timeout(millis: u32, callback: impl FnOnce() + 'static) {
    let timeout = Timeout::new(millis, callback);
    let _ = StoredValue::new_local(timeout);
}

/// Creates an empty timeout slot owned by the current component.
pub fn timeout_slot() -> TimeoutSlot {
    StoredValue::new_local(None)
}

/// Arms the slot, cancelling any timer it already held.
pub fn arm(slot: TimeoutSlot, millis: u32, callback: impl FnOnce() + 'static) {
    let timeout = Timeout::new(millis, callback);
    slot.update_value(|current| *current = Some(timeout));
}
