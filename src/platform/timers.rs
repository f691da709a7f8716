//! Browser timers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Run `f` once after `delay_ms`
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        log::warn!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}

/// Call `f` every `interval_ms` until it returns false
pub fn repeat_every<F>(interval_ms: u32, mut f: F)
where
    F: FnMut() -> bool + 'static,
{
    set_timeout(interval_ms, move || {
        if f() {
            repeat_every(interval_ms, f);
        }
    });
}

/// Call `f` on every animation frame, forever
pub fn every_frame<F>(mut f: F)
where
    F: FnMut() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        f();
        every_frame(f);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
