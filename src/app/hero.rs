use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::content::{profile, Icon};
use crate::motion::{particles, reveal_class, tilt_style, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::{scroll_to_section, use_mounted};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    let person = &profile.person;
    let visible = use_mounted();

    let portrait = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(portrait);
    let tilt = move || {
        tilt_style(
            element_x.get(),
            element_y.get(),
            element_width.get(),
            element_height.get(),
            is_outside.get(),
        )
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden hero-flip"
        >
            <div class="absolute inset-0 bg-hero-gradient opacity-10"></div>

            <div class="absolute inset-0">
                {particles()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="absolute w-2 h-2 bg-primary rounded-full opacity-20 float-animation"
                                style=p.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-14 py-20 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || {
                        format!(
                            "flex justify-center lg:justify-end lg:mr-20 order-1 lg:order-2 {}",
                            reveal_class(visible.get(), FADE_IN),
                        )
                    }>
                        <div node_ref=portrait class="w-80 h-80 tilt-card" style=tilt>
                            <div class="relative w-full h-full rounded-full overflow-hidden border-4 border-primary/30 shadow-glow">
                                <img
                                    src=person.avatar.as_str()
                                    alt=profile.full_name()
                                    class="w-full h-full object-cover object-top scale-125"
                                />
                                <div class="absolute -inset-4 bg-gradient-to-r from-primary to-accent rounded-full opacity-20 blur-xl"></div>
                            </div>
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "text-center lg:text-left order-2 lg:order-1 {}",
                            reveal_class(visible.get(), SLIDE_UP),
                        )
                    }>
                        <div class="space-y-6">
                            <div class="space-y-2">
                                <p class="text-xl text-muted-foreground">"Hello, I'm"</p>
                                <h1 class="text-5xl lg:text-7xl font-bold">
                                    <span class="hero-text">{person.first_name.as_str()}</span>
                                    <br />
                                    <span class="hero-text">{person.last_name.as_str()}</span>
                                </h1>
                                <h2 class="text-2xl lg:text-3xl font-semibold text-foreground/80">
                                    {person.headline.as_str()}
                                </h2>
                            </div>

                            <p class="text-lg text-muted-foreground max-w-xl">
                                {person.tagline.as_str()}
                            </p>

                            <div class="flex flex-wrap gap-4 justify-center lg:justify-start">
                                <button
                                    on:click=move |_| scroll_to_section("portfolio")
                                    class="bg-primary hover:bg-primary-glow button-glow text-lg px-8 py-3 rounded-md"
                                >
                                    "View My Work"
                                </button>
                                <a
                                    href=person.resume.as_str()
                                    download=""
                                    class="border border-primary text-primary hover:bg-primary hover:text-primary-foreground text-lg px-8 py-3 transition-all duration-300 rounded-md flex items-center gap-2"
                                >
                                    <IconGlyph icon=Icon::Download class="h-5 w-5" />
                                    "Download CV"
                                </a>
                            </div>

                            <div class="flex gap-4 justify-center lg:justify-start pt-4">
                                {person
                                    .socials
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label.as_str()
                                                class="p-3 bg-card border border-border/20 rounded-full hover:bg-primary hover:border-primary transition-all duration-300 button-glow group"
                                            >
                                                <IconGlyph
                                                    icon=social.icon
                                                    class="h-5 w-5 group-hover:text-primary-foreground"
                                                />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <a
                                    href=profile.contact.mailto()
                                    aria-label="Email"
                                    class="p-3 bg-card border border-border/20 rounded-full hover:bg-primary hover:border-primary transition-all duration-300 button-glow group"
                                >
                                    <IconGlyph
                                        icon=Icon::Mail
                                        class="h-5 w-5 group-hover:text-primary-foreground"
                                    />
                                </a>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <button
                        aria-label="Scroll to about"
                        on:click=move |_| scroll_to_section("about")
                        class="text-muted-foreground hover:text-primary transition-colors duration-300"
                    >
                        <IconGlyph icon=Icon::ArrowDown class="h-6 w-6" />
                    </button>
                </div>
            </div>
        </section>
    }
}
