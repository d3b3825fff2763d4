//! Global session-expired handler
//!
//! Lets the request layer force a logout without every call site holding
//! the auth context. The auth provider registers a callback on mount and
//! clears it on unmount.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Register the callback invoked when the session can no longer be
/// refreshed.
pub fn set_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

pub fn clear_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Invoke the registered callback, if any.
pub fn trigger() {
    // Clone out of the cell so the callback may re-register itself.
    let callback = SESSION_EXPIRED_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback();
    }
}
