use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Adds `visible` to every `.reveal` element once it is scrolled into view.
/// Returns the listener so the caller's effect cleanup can detach it.
pub fn start() -> Closure<dyn FnMut()> {
    let callback = Closure::wrap(Box::new(run_pass) as Box<dyn FnMut()>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    }
    // First pass before any scrolling, for sections already on screen.
    run_pass();

    callback
}

pub fn stop(listener: Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window
            .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
}

fn run_pass() {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let Ok(nodes) = document.query_selector_all(".reveal") else { return };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else { continue };
        let in_view = element.get_bounding_client_rect().top() < viewport * 0.88;
        let classes = element.class_name();
        if in_view && !classes.contains("visible") {
            element.set_class_name(&format!("{} visible", classes));
        }
    }
}
