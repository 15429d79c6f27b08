use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, ScrollBehavior, Storage};

/// Result of wiring a feature to the page. Absent markup is not an error:
/// the feature reports `Inactive` and attaches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mounted {
    Active,
    Inactive,
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(crate) fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub(crate) fn media_query_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn prefers_reduced_motion() -> bool {
    media_query_matches("(prefers-reduced-motion: reduce)")
}

/// Behavior for programmatic scrolls: smooth, unless the user asked for
/// reduced motion.
pub(crate) fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

/// Attach a page-lifetime event listener. The closure is leaked on purpose;
/// nothing in this crate unsubscribes before unload.
pub(crate) fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&format!("scrollwork: failed to attach {kind} listener").into());
    }
    closure.forget();
}

pub(crate) fn for_each_element(list: &NodeList, mut f: impl FnMut(&Element)) {
    for index in 0..list.length() {
        let Some(node) = list.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        f(element);
    }
}
