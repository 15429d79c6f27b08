//! Optional scroll-to-top control: shown after scrolling past a threshold,
//! scrolls back to the top on activation.

use web_sys::{Document, ScrollToOptions};

use crate::dom::{self, Mounted};
use crate::schedule::Debounced;

const SCROLL_TOP_ID: &str = "scrollToTopBtn";
const SHOW_CLASS: &str = "show";
const SHOW_THRESHOLD: f64 = 300.0;
const SCROLL_DEBOUNCE_MS: u32 = 50;

pub(crate) fn mount(document: &Document) -> Mounted {
    let Some(window) = web_sys::window() else {
        return Mounted::Inactive;
    };
    let Some(button) = document.get_element_by_id(SCROLL_TOP_ID) else {
        return Mounted::Inactive;
    };

    let visibility = {
        let window = window.clone();
        let button = button.clone();
        Debounced::new(SCROLL_DEBOUNCE_MS, move |_: ()| {
            let classes = button.class_list();
            let _ = if window.scroll_y().unwrap_or(0.0) > SHOW_THRESHOLD {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        })
    };
    dom::listen(window.as_ref(), "scroll", move |_| visibility.call(()));

    dom::listen(button.as_ref(), "click", move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(dom::scroll_behavior());
        window.scroll_to_with_scroll_to_options(&options);
    });
    Mounted::Active
}
