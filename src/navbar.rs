//! Navbar scroll behavior: compact past a small offset, hidden while
//! scrolling further down, shown again on any upward movement.

const COMPACT_THRESHOLD: f64 = 50.0;
const HIDE_THRESHOLD: f64 = 100.0;

#[cfg(target_arch = "wasm32")]
const NAVBAR_ID: &str = "navbar";
#[cfg(target_arch = "wasm32")]
const COMPACT_CLASS: &str = "scrolled";
#[cfg(target_arch = "wasm32")]
const HIDDEN_CLASS: &str = "nav-hidden";

/// Last frame-coalesced scroll observation. Direction is derived by
/// comparing each new offset against it; an unchanged offset counts as not
/// increasing.
#[derive(Debug, Default)]
pub(crate) struct ScrollState {
    last_offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavbarFrame {
    pub(crate) compact: bool,
    pub(crate) hidden: bool,
}

impl ScrollState {
    pub(crate) fn observe(&mut self, offset: f64) -> NavbarFrame {
        let frame = NavbarFrame {
            compact: offset > COMPACT_THRESHOLD,
            hidden: offset > self.last_offset && offset > HIDE_THRESHOLD,
        };
        self.last_offset = offset;
        frame
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn mount(document: &web_sys::Document) -> crate::dom::Mounted {
    use crate::dom::{self, Mounted};
    use crate::schedule::FrameCoalescer;

    let Some(window) = web_sys::window() else {
        return Mounted::Inactive;
    };
    let Some(navbar) = document.get_element_by_id(NAVBAR_ID) else {
        return Mounted::Inactive;
    };

    let coalescer = {
        let window = window.clone();
        let mut state = ScrollState::default();
        FrameCoalescer::new(move || {
            let frame = state.observe(window.scroll_y().unwrap_or(0.0));
            let classes = navbar.class_list();
            let _ = if frame.compact {
                classes.add_1(COMPACT_CLASS)
            } else {
                classes.remove_1(COMPACT_CLASS)
            };
            let _ = if frame.hidden {
                classes.add_1(HIDDEN_CLASS)
            } else {
                classes.remove_1(HIDDEN_CLASS)
            };
        })
    };

    coalescer.run_now();

    let trigger = coalescer.clone();
    dom::listen(window.as_ref(), "scroll", move |_| trigger.trigger());
    Mounted::Active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(offsets: &[f64]) -> Vec<NavbarFrame> {
        let mut state = ScrollState::default();
        offsets.iter().map(|&offset| state.observe(offset)).collect()
    }

    #[test]
    fn scroll_sequence_drives_compact_and_hidden_states() {
        let observed = frames(&[0.0, 60.0, 200.0, 150.0]);
        let expected = [
            NavbarFrame { compact: false, hidden: false },
            NavbarFrame { compact: true, hidden: false },
            NavbarFrame { compact: true, hidden: true },
            NavbarFrame { compact: true, hidden: false },
        ];
        assert_eq!(observed, expected);
    }

    #[test]
    fn unchanged_offset_counts_as_not_increasing() {
        let observed = frames(&[300.0, 300.0]);
        assert!(observed[0].hidden);
        assert!(!observed[1].hidden);
    }

    #[test]
    fn thresholds_are_strict() {
        let mut state = ScrollState::default();
        let at_compact = state.observe(COMPACT_THRESHOLD);
        assert!(!at_compact.compact);

        let mut state = ScrollState::default();
        let at_hide = state.observe(HIDE_THRESHOLD);
        assert!(!at_hide.hidden);
        assert!(state.observe(HIDE_THRESHOLD + 1.0).hidden);
    }

    #[test]
    fn scrolling_back_up_shows_the_navbar_but_keeps_it_compact() {
        let observed = frames(&[500.0, 400.0]);
        assert!(observed[1].compact);
        assert!(!observed[1].hidden);
    }
}
