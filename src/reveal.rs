//! One-shot visibility watchers: content reveal animations and lazy image
//! loading. Each element is activated on its first intersection and
//! unobserved immediately, so it is never re-evaluated.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

use crate::dom::{self, Mounted};

const REVEAL_SELECTOR: &str = "\
.skill-category, .timeline-item, .project-card, .cert-item, .hero-subtitle, \
.hero-title, .hero-description, .hero-stats, .social-links, .hero-image, \
.section-title, .about-text";
const REVEAL_BASE_CLASS: &str = "animate";
const REVEAL_ACTIVE_CLASS: &str = "animate-in";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";

const LAZY_SELECTOR: &str = "img[data-src]";
const DEFERRED_SRC_ATTR: &str = "data-src";
const LAZY_THRESHOLD: f64 = 0.0;
const LAZY_MARGIN: &str = "100px 0px";

pub(crate) fn mount_animations(document: &Document) -> Mounted {
    let Ok(elements) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Mounted::Inactive;
    };
    dom::for_each_element(&elements, |element| {
        let _ = element.class_list().add_1(REVEAL_BASE_CLASS);
    });
    observe_once(&elements, REVEAL_THRESHOLD, REVEAL_MARGIN, |element| {
        let _ = element.class_list().add_1(REVEAL_ACTIVE_CLASS);
    })
}

pub(crate) fn mount_lazy_images(document: &Document) -> Mounted {
    let Ok(images) = document.query_selector_all(LAZY_SELECTOR) else {
        return Mounted::Inactive;
    };
    observe_once(&images, LAZY_THRESHOLD, LAZY_MARGIN, |element| {
        let Some(source) = element.get_attribute(DEFERRED_SRC_ATTR) else {
            return;
        };
        if let Some(image) = element.dyn_ref::<HtmlImageElement>() {
            image.set_src(&source);
        }
        let _ = element.remove_attribute(DEFERRED_SRC_ATTR);
    })
}

/// Observe every element in `targets`; run `activate` the first time one
/// intersects, then drop that element's subscription.
fn observe_once(
    targets: &NodeList,
    threshold: f64,
    root_margin: &str,
    mut activate: impl FnMut(&Element) + 'static,
) -> Mounted {
    if targets.length() == 0 {
        return Mounted::Inactive;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                activate(&target);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    options.set_root_margin(root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                console::warn_1(&err);
                return Mounted::Inactive;
            }
        };
    callback.forget();

    dom::for_each_element(targets, |element| observer.observe(element));
    Mounted::Active
}
