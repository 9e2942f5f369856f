use leptos::{html, prelude::*};

use crate::content::{profile, Icon};
use crate::motion::{reveal_class, stagger_delay, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::{scroll_to_section, use_reveal};

#[component]
pub fn Services() -> impl IntoView {
    let services = &profile().services;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="services" node_ref=section_ref class="py-20 bg-muted/5">
            <div class="container mx-auto px-14">
                <div class=move || format!("text-center mb-16 {}", reveal_class(visible.get(), FADE_IN))>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-4">
                        "My " <span class="hero-text">"Services"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        {services.intro.as_str()}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {services
                        .items
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let gradient = service.gradient.as_str();
                            view! {
                                <div
                                    class=move || reveal_class(visible.get(), SLIDE_UP)
                                    style=stagger_delay(index, 200)
                                >
                                    <div class="h-full bg-card-gradient card-glow card-hover rounded-lg transition-all duration-500 group cursor-pointer">
                                        <div class="p-8 h-full flex flex-col">
                                            <div class="mb-6">
                                                <div class=format!(
                                                    "w-16 h-16 rounded-lg bg-gradient-to-r {gradient} p-3 mb-4 group-hover:scale-110 transition-transform duration-300",
                                                )>
                                                    <IconGlyph icon=service.icon class="w-full h-full text-white" />
                                                </div>
                                                <h3 class="text-2xl font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                                                    {service.title.as_str()}
                                                </h3>
                                            </div>

                                            <p class="text-muted-foreground mb-6 leading-relaxed flex-grow">
                                                {service.description.as_str()}
                                            </p>

                                            <div class="space-y-3 mb-6">
                                                {service
                                                    .features
                                                    .iter()
                                                    .map(|feature| {
                                                        view! {
                                                            <div class="flex items-center space-x-3">
                                                                <div class=format!(
                                                                    "w-2 h-2 rounded-full bg-gradient-to-r {gradient}",
                                                                )></div>
                                                                <span class="text-sm text-muted-foreground">
                                                                    {feature.as_str()}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>

                                            <button
                                                on:click=move |_| scroll_to_section("contact")
                                                class="mt-auto p-2 w-fit text-primary hover:text-primary-glow flex items-center group/btn"
                                            >
                                                <span class="mr-2">"Get Started"</span>
                                                <IconGlyph
                                                    icon=Icon::ArrowRight
                                                    class="h-4 w-4 group-hover/btn:translate-x-1 transition-transform duration-300"
                                                />
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class=move || format!("mt-16 text-center {}", reveal_class(visible.get(), FADE_IN))
                    style="animation-delay: 0.8s"
                >
                    <div class="bg-card-gradient card-glow rounded-lg max-w-4xl mx-auto p-8">
                        <h3 class="text-3xl font-bold mb-4">
                            "Ready to Start Your " <span class="hero-text">"Project?"</span>
                        </h3>
                        <p class="text-xl text-muted-foreground mb-8 max-w-2xl mx-auto">
                            "Let's collaborate to bring your vision to life with modern web technologies and creative design solutions."
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center">
                            <button
                                on:click=move |_| scroll_to_section("contact")
                                class="bg-primary hover:bg-primary-glow button-glow text-lg px-8 py-3 rounded-md"
                            >
                                "Start a Project"
                            </button>
                            <button
                                on:click=move |_| scroll_to_section("portfolio")
                                class="border border-primary text-primary hover:bg-primary hover:text-primary-foreground text-lg px-8 py-3 rounded-md"
                            >
                                "View Portfolio"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
