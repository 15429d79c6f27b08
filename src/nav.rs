//! In-page navigation: smooth scrolling for fragment links, active-link
//! highlighting for the section in the focal band, and fragment restore on
//! load.

use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, Event, FocusOptions, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::dom::{self, Mounted};

const ANCHOR_SELECTOR: &str = "a[href^='#']";
const SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-links a";
const ACTIVE_CLASS: &str = "active";
const FOCAL_BAND_MARGIN: &str = "-30% 0px -70% 0px";
const HASH_SETTLE_DELAY_MS: u32 = 100;

/// Intercept every same-page link: suppress the default jump, then scroll,
/// update history, and move focus only when the fragment resolves.
pub(crate) fn mount_links(document: &Document) -> Mounted {
    let Ok(anchors) = document.query_selector_all(ANCHOR_SELECTOR) else {
        return Mounted::Inactive;
    };
    if anchors.length() == 0 {
        return Mounted::Inactive;
    }

    dom::for_each_element(&anchors, |anchor| {
        let document = document.clone();
        dom::listen(anchor.as_ref(), "click", move |event| {
            on_anchor_click(&document, &event);
        });
    });
    Mounted::Active
}

fn on_anchor_click(document: &Document, event: &Event) {
    event.prevent_default();
    let Some(anchor) = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let Some(fragment) = anchor.get_attribute("href") else {
        return;
    };
    let Some(target) = fragment_target(document, &fragment) else {
        // Default already suppressed; a dangling fragment is a no-op.
        return;
    };

    scroll_to(&target);
    push_fragment(&fragment);
    focus_without_scroll(&target);
}

fn fragment_target(document: &Document, fragment: &str) -> Option<Element> {
    let id = fragment.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    document.get_element_by_id(id)
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(dom::scroll_behavior());
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn push_fragment(fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let pushed = window
        .history()
        .ok()
        .map(|history| {
            history
                .push_state_with_url(&JsValue::NULL, "", Some(fragment))
                .is_ok()
        })
        .unwrap_or(false);
    if !pushed {
        let _ = window.location().set_hash(fragment);
    }
}

fn focus_without_scroll(target: &Element) {
    if target.get_attribute("tabindex").is_none() {
        let _ = target.set_attribute("tabindex", "-1");
    }
    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        let _ = element.focus_with_options(&options);
    }
}

/// Keep exactly one nav link marked active: whichever section last reported
/// an intersection with the focal band. Entries in a batch are processed in
/// callback order, each clearing then setting, so the last intersecting
/// entry wins (see DESIGN.md).
pub(crate) fn mount_section_highlight(document: &Document) -> Mounted {
    let Ok(sections) = document.query_selector_all(SECTION_SELECTOR) else {
        return Mounted::Inactive;
    };
    let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return Mounted::Inactive;
    };
    if sections.length() == 0 || links.length() == 0 {
        return Mounted::Inactive;
    }

    let observed_links = links.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            set_active_link(&observed_links, &format!("#{}", entry.target().id()));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.0));
    options.set_root_margin(FOCAL_BAND_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                console::warn_1(&err);
                return Mounted::Inactive;
            }
        };
    callback.forget();

    dom::for_each_element(&sections, |section| observer.observe(section));

    restore_hash_target(document, &links);
    Mounted::Active
}

fn set_active_link(links: &NodeList, fragment: &str) {
    dom::for_each_element(links, |link| {
        let classes = link.class_list();
        let _ = classes.remove_1(ACTIVE_CLASS);
        if link.get_attribute("href").as_deref() == Some(fragment) {
            let _ = classes.add_1(ACTIVE_CLASS);
        }
    });
}

/// A fragment in the address on load activates its link directly (the
/// tracker has not fired yet) and scrolls to the section once layout has
/// settled.
fn restore_hash_target(document: &Document, links: &NodeList) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let fragment = window.location().hash().unwrap_or_default();
    if fragment.len() < 2 {
        return;
    }

    set_active_link(links, &fragment);

    let document = document.clone();
    Timeout::new(HASH_SETTLE_DELAY_MS, move || {
        if let Some(target) = fragment_target(&document, &fragment) {
            scroll_to(&target);
        }
    })
    .forget();
}
