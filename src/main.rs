#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod navbar;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typewriter;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod schedule;
#[cfg(target_arch = "wasm32")]
mod scroll_top;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use dom::Mounted;
    use web_sys::console;

    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    let features = [
        ("navbar", navbar::mount(&document)),
        ("reveal animations", reveal::mount_animations(&document)),
        ("lazy images", reveal::mount_lazy_images(&document)),
        ("anchor navigation", nav::mount_links(&document)),
        ("section highlight", nav::mount_section_highlight(&document)),
        ("theme toggle", theme::mount(&document)),
        ("typewriter", typewriter::mount(&document)),
        ("scroll to top", scroll_top::mount(&document)),
    ];
    for (name, mounted) in features {
        if mounted == Mounted::Inactive {
            console::debug_1(&format!("scrollwork: {name} not present, left inert").into());
        }
    }
}
