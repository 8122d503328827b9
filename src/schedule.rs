use gloo_timers::callback::Timeout;
use leptos::prelude::request_animation_frame;
use std::time::Duration;

/// Run `f` in the first frame after the current styles have been painted.
///
/// One animation frame is not enough: it fires before the next paint, so a
/// class added there lands in the same style pass as a preceding
/// `display` change and the CSS transition has no start value.
pub fn after_next_paint(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// A one-shot timer. Dropping it cancels the callback.
#[must_use = "dropping a Deferred cancels it"]
pub struct Deferred {
    timeout: Timeout,
}

impl Deferred {
    pub fn new(delay: Duration, f: impl FnOnce() + 'static) -> Self {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Self {
            timeout: Timeout::new(millis, f),
        }
    }

    pub fn cancel(self) {
        let _ = self.timeout.cancel();
    }
}
