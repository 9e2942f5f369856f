use leptos::{html, prelude::*};

use crate::content::{profile, Icon};
use crate::motion::{reveal_class, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let about = &profile().about;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="about" node_ref=section_ref class="py-20 bg-muted/5">
            <div class="container mx-auto px-14">
                <div class=move || format!("text-center mb-16 {}", reveal_class(visible.get(), FADE_IN))>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-4">
                        "About " <span class="hero-text">"Me"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        {about.intro.as_str()}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class=move || format!("space-y-6 {}", reveal_class(visible.get(), SLIDE_UP))>
                        <h3 class="text-2xl font-semibold mb-6 hero-text">"My Story"</h3>
                        <div class="bg-card-gradient card-glow rounded-lg p-8">
                            <div class="space-y-1 text-muted-foreground leading-relaxed">
                                {about
                                    .story
                                    .iter()
                                    .map(|p| view! { <p>{p.as_str()}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div
                        class=move || format!("space-y-6 {}", reveal_class(visible.get(), SLIDE_UP))
                        style="animation-delay: 0.2s"
                    >
                        <h3 class="text-2xl font-semibold mb-6 hero-text">"Education"</h3>
                        <div class="space-y-6">
                            {about
                                .education
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <div class="bg-card-gradient card-glow card-hover rounded-lg p-8 transition-all duration-300">
                                            <div class="flex items-start space-x-4">
                                                <div class="p-3 bg-primary/10 rounded-lg">
                                                    <IconGlyph icon=Icon::GraduationCap class="h-6 w-6 text-primary" />
                                                </div>
                                                <div class="flex-1">
                                                    <h4 class="text-xl font-semibold text-foreground mb-2">
                                                        {edu.degree.as_str()}
                                                    </h4>
                                                    <p class="text-primary font-medium mb-2">
                                                        {edu.institution.as_str()}
                                                    </p>
                                                    <div class="flex flex-wrap gap-4 text-sm text-muted-foreground">
                                                        <div class="flex items-center gap-1">
                                                            <IconGlyph icon=Icon::Calendar class="h-4 w-4" />
                                                            {edu.period.as_str()}
                                                        </div>
                                                        <div class="flex items-center gap-1">
                                                            <IconGlyph icon=Icon::MapPin class="h-4 w-4" />
                                                            {edu.location.as_str()}
                                                        </div>
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="flex justify-center mt-16">
                    <div class="bg-card-gradient card-glow rounded-lg max-w-2xl w-full p-6">
                        <h4 class="text-lg font-semibold mb-4 text-center">"Quick Facts"</h4>
                        <div class="grid grid-cols-2 gap-4 text-center">
                            {about
                                .facts
                                .iter()
                                .map(|fact| {
                                    view! {
                                        <div>
                                            <div class="text-2xl font-bold text-primary">
                                                {fact.value.as_str()}
                                            </div>
                                            <div class="text-sm text-muted-foreground">
                                                {fact.label.as_str()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
