use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{profile, Icon};
use crate::menu::MobileMenu;

use super::icon::IconGlyph;
use super::reveal::try_scroll_to_section;

/// Scroll offset past which the header gets its solid background.
const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let profile = profile();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = move || scroll_y.get() > SCROLLED_OFFSET;
    let menu = RwSignal::new(MobileMenu::default());
    let menu_open = move || menu.with(|m| m.is_open());
    let close_menu = move |_: leptos::ev::MouseEvent| menu.update(MobileMenu::close);

    let navigate = move |id: &str| {
        let found = try_scroll_to_section(id);
        menu.update(|m| m.navigated(found));
    };

    let nav_buttons = move |class: &'static str| {
        profile
            .nav
            .iter()
            .map(|item| {
                let id = item.id.as_str();
                view! {
                    <button on:click=move |_| navigate(id) class=class>
                        {item.label.as_str()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if is_scrolled() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-background/80 backdrop-blur-md border-b border-border/20"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <nav class="container mx-auto pl-6 pr-12 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <img
                            src=profile.person.logo.as_str()
                            alt=format!("{} logo", profile.full_name())
                            class="h-12 w-auto"
                        />
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        {nav_buttons(
                            "text-foreground hover:text-primary transition-colors duration-200 font-medium",
                        )}
                        <button
                            on:click=move |_| navigate("contact")
                            class="bg-primary hover:bg-primary-glow button-glow transition-all duration-300 px-4 py-2 rounded-md"
                        >
                            "Hire Me"
                        </button>
                    </div>

                    <button
                        class="md:hidden border border-white/30 rounded-md p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        {move || {
                            if menu_open() {
                                Either::Left(view! { <IconGlyph icon=Icon::Close /> })
                            } else {
                                Either::Right(view! { <IconGlyph icon=Icon::Menu /> })
                            }
                        }}
                    </button>
                </div>
            </nav>
        </header>

        <Show when=menu_open>
            <div class="fixed inset-0 bg-black/60 z-40" on:click=close_menu />
        </Show>

        <div class=move || {
            if menu_open() {
                "fixed inset-y-0 right-0 z-50 w-64 bg-card shadow-lg transform transition-transform duration-300 md:hidden translate-x-0"
            } else {
                "fixed inset-y-0 right-0 z-50 w-64 bg-card shadow-lg transform transition-transform duration-300 md:hidden translate-x-full"
            }
        }>
            <div class="flex justify-end p-4">
                <button aria-label="Close menu" on:click=close_menu>
                    <IconGlyph icon=Icon::Close />
                </button>
            </div>
            <div class="flex flex-col space-y-2 px-6">
                {nav_buttons(
                    "text-left text-foreground hover:text-primary transition-colors duration-200 py-2",
                )}
                <button
                    on:click=move |_| navigate("contact")
                    class="bg-primary hover:bg-primary-glow button-glow mt-4 px-4 py-2 rounded-md"
                >
                    "Hire Me"
                </button>
            </div>
        </div>
    }
}
