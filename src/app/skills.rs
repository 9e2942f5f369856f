use leptos::{html, prelude::*};

use crate::content::profile;
use crate::motion::{reveal_class, skill_bar_style, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::use_reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &profile().skills;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="skills" node_ref=section_ref class="py-20">
            <div class="container mx-auto px-6">
                <div class=move || format!("text-center mb-16 {}", reveal_class(visible.get(), FADE_IN))>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-4">
                        "My " <span class="hero-text">"Skills"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        {skills.intro.as_str()}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || format!("space-y-8 {}", reveal_class(visible.get(), SLIDE_UP))>
                        <h3 class="text-2xl font-semibold text-center lg:text-left">
                            <span class="hero-text">"Technical Skills"</span>
                        </h3>
                        <div class="space-y-6">
                            {skills
                                .technical
                                .iter()
                                .enumerate()
                                .map(|(index, skill)| {
                                    let level = skill.level;
                                    view! {
                                        <div class="space-y-2">
                                            <div class="flex justify-between items-center">
                                                <span class="font-medium text-foreground">
                                                    {skill.name.as_str()}
                                                </span>
                                                <span class="text-sm text-muted-foreground">
                                                    {format!("{level}%")}
                                                </span>
                                            </div>
                                            <div class="h-3 bg-muted rounded-full overflow-hidden">
                                                <div
                                                    class=format!(
                                                        "h-full bg-gradient-to-r {} rounded-full transition-all duration-1000 ease-out shadow-[0_0_10px_currentColor]",
                                                        skill.gradient,
                                                    )
                                                    style=move || skill_bar_style(visible.get(), level, index)
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=move || format!("space-y-8 {}", reveal_class(visible.get(), SLIDE_UP))
                        style="animation-delay: 0.3s"
                    >
                        <h3 class="text-2xl font-semibold text-center lg:text-left">
                            <span class="hero-text">"Soft Skills"</span>
                        </h3>
                        <div class="grid gap-4">
                            {skills
                                .soft
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="bg-card-gradient card-glow card-hover rounded-lg p-6 transition-all duration-300 group">
                                            <div class="flex items-start space-x-4">
                                                <div class="p-3 bg-primary/10 rounded-lg group-hover:bg-primary/20 transition-colors duration-300">
                                                    <IconGlyph icon=skill.icon class="h-6 w-6 text-primary" />
                                                </div>
                                                <div class="flex-1">
                                                    <h4 class="text-lg font-semibold text-foreground mb-2">
                                                        {skill.name.as_str()}
                                                    </h4>
                                                    <p class="text-sm text-muted-foreground">
                                                        {skill.description.as_str()}
                                                    </p>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div
                    class=move || format!("mt-16 {}", reveal_class(visible.get(), FADE_IN))
                    style="animation-delay: 0.6s"
                >
                    <div class="bg-card-gradient card-glow rounded-lg p-8 text-center">
                        <h3 class="text-2xl font-semibold mb-4 hero-text">"Continuous Learning"</h3>
                        <p class="text-muted-foreground max-w-3xl mx-auto leading-relaxed">
                            {skills.summary.as_str()}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
