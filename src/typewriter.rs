//! Decorative typewriter effect: type a phrase, hold, delete it at double
//! speed, hold, move to the next phrase, forever.

pub(crate) const DEFAULT_INTERVAL_MS: u32 = 100;
const FULL_PHRASE_HOLD_MS: u32 = 1500;
const NEXT_PHRASE_HOLD_MS: u32 = 500;

#[cfg(target_arch = "wasm32")]
const TYPEWRITER_SELECTOR: &str = ".hero-title .highlight[data-typewriter-text]";
#[cfg(target_arch = "wasm32")]
const PHRASE_ATTR: &str = "data-typewriter-text";
#[cfg(target_arch = "wasm32")]
const PHRASE_SEPARATOR: char = ',';

/// One animation tick: the text to display and how long to wait before the
/// next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) text: String,
    pub(crate) delay_ms: u32,
}

/// Cycling phrase animator. State advances only through `tick`; phrases are
/// stored as chars so prefixes never split a code point.
pub(crate) struct Typewriter {
    phrases: Vec<Vec<char>>,
    interval_ms: u32,
    phrase: usize,
    pos: usize,
    deleting: bool,
}

impl Typewriter {
    pub(crate) fn new(phrases: Vec<String>) -> Option<Self> {
        Self::with_interval(phrases, DEFAULT_INTERVAL_MS)
    }

    pub(crate) fn with_interval(phrases: Vec<String>, interval_ms: u32) -> Option<Self> {
        let phrases: Vec<Vec<char>> = phrases
            .iter()
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| phrase.chars().collect())
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            interval_ms,
            phrase: 0,
            pos: 0,
            deleting: false,
        })
    }

    pub(crate) fn tick(&mut self) -> Step {
        if self.deleting {
            self.pos -= 1;
            let text = self.prefix(self.pos);
            if self.pos == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                Step { text, delay_ms: NEXT_PHRASE_HOLD_MS }
            } else {
                Step { text, delay_ms: self.interval_ms / 2 }
            }
        } else {
            self.pos += 1;
            let length = self.phrases[self.phrase].len();
            let text = self.prefix(self.pos.min(length));
            if self.pos == length + 1 {
                // One tick past the full phrase: hold it, then start
                // deleting from the full length.
                self.deleting = true;
                self.pos = length;
                Step { text, delay_ms: FULL_PHRASE_HOLD_MS }
            } else {
                Step { text, delay_ms: self.interval_ms }
            }
        }
    }

    fn prefix(&self, length: usize) -> String {
        self.phrases[self.phrase][..length].iter().collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn mount(document: &web_sys::Document) -> crate::dom::Mounted {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dom::Mounted;

    let Some(element) = document.query_selector(TYPEWRITER_SELECTOR).ok().flatten() else {
        return Mounted::Inactive;
    };
    let Some(raw) = element.get_attribute(PHRASE_ATTR) else {
        return Mounted::Inactive;
    };
    let phrases: Vec<String> = raw.split(PHRASE_SEPARATOR).map(str::to_owned).collect();
    let Some(animator) = Typewriter::new(phrases) else {
        return Mounted::Inactive;
    };

    run_tick(Rc::new(RefCell::new(animator)), element);
    Mounted::Active
}

/// Runs forever; each tick schedules the next with the delay the state
/// machine chose.
#[cfg(target_arch = "wasm32")]
fn run_tick(
    animator: std::rc::Rc<std::cell::RefCell<Typewriter>>,
    element: web_sys::Element,
) {
    let step = animator.borrow_mut().tick();
    element.set_text_content(Some(&step.text));
    gloo::timers::callback::Timeout::new(step.delay_ms, move || run_tick(animator, element))
        .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(animator: &mut Typewriter, count: usize) -> Vec<Step> {
        (0..count).map(|_| animator.tick()).collect()
    }

    fn step(text: &str, delay_ms: u32) -> Step {
        Step { text: text.to_owned(), delay_ms }
    }

    #[test]
    fn two_phrases_cycle_with_holds_at_full_and_empty() {
        let mut animator =
            Typewriter::with_interval(vec!["Hi".to_owned(), "Yo".to_owned()], 100)
                .expect("phrases are usable");

        let expected = [
            step("H", 100),
            step("Hi", 100),
            step("Hi", 1500),
            step("H", 50),
            step("", 500),
            step("Y", 100),
            step("Yo", 100),
            step("Yo", 1500),
            step("Y", 50),
            step("", 500),
            // Wrapped back to the first phrase.
            step("H", 100),
        ];
        assert_eq!(steps(&mut animator, expected.len()), expected);
    }

    #[test]
    fn a_single_phrase_cycles_trivially() {
        let mut animator =
            Typewriter::with_interval(vec!["Ab".to_owned()], 100).expect("phrase is usable");

        let first_cycle = steps(&mut animator, 5);
        let second_cycle = steps(&mut animator, 5);
        assert_eq!(first_cycle, second_cycle);
        assert_eq!(first_cycle[4], step("", 500));
    }

    #[test]
    fn deletion_runs_at_double_speed() {
        let mut animator =
            Typewriter::with_interval(vec!["abc".to_owned()], 90).expect("phrase is usable");

        // Type through the full phrase and the hold tick.
        for _ in 0..4 {
            animator.tick();
        }
        assert_eq!(animator.tick().delay_ms, 45);
    }

    #[test]
    fn prefixes_respect_char_boundaries() {
        let mut animator =
            Typewriter::with_interval(vec!["héllo".to_owned()], 100).expect("phrase is usable");

        assert_eq!(animator.tick().text, "h");
        assert_eq!(animator.tick().text, "hé");
        assert_eq!(animator.tick().text, "hél");
    }

    #[test]
    fn empty_phrases_are_discarded() {
        let mut animator =
            Typewriter::with_interval(vec![String::new(), "Ok".to_owned()], 100)
                .expect("one phrase survives");
        assert_eq!(animator.tick().text, "O");

        assert!(Typewriter::new(Vec::new()).is_none());
        assert!(Typewriter::new(vec![String::new()]).is_none());
    }
}
