use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches to `true` the first time `target` scrolls into the viewport.
///
/// Sections animate in once and stay put, so leaving the viewport again
/// never hides them.
pub fn use_reveal(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let visible = use_element_visibility(target);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Visible as soon as the page has hydrated, for content above the fold.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}

/// Scrolls the section with `id` into view, returning whether it exists.
pub fn try_scroll_to_section(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(el) => {
            el.scroll_into_view();
            true
        }
        None => {
            log::warn!("no section with id '{id}' to scroll to");
            false
        }
    }
}

pub fn scroll_to_section(id: &str) {
    try_scroll_to_section(id);
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}
