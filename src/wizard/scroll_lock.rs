use web_sys::window;

/// Background page scroll held disabled for as long as this guard lives.
/// The popup keeps one exactly while it is visible, so any exit path —
/// close, successful submit, teardown — restores scrolling on drop.
pub struct ScrollLock {
    _priv: (),
}

impl ScrollLock {
    pub fn engage() -> Self {
        set_body_overflow("hidden");
        ScrollLock { _priv: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        set_body_overflow("");
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}
