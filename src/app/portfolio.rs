use leptos::{html, prelude::*};

use crate::content::{profile, Icon, Project};
use crate::motion::{reveal_class, stagger_delay, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::{scroll_to_section, use_reveal};

#[component]
pub fn Portfolio() -> impl IntoView {
    let profile = profile();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);
    let all_projects = profile.social(Icon::Github).map(|s| s.href.as_str());

    view! {
        <section id="portfolio" node_ref=section_ref class="py-20">
            <div class="container mx-auto px-14">
                <div class=move || format!("text-center mb-16 {}", reveal_class(visible.get(), FADE_IN))>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-4">
                        "My " <span class="hero-text">"Portfolio"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        {profile.portfolio.intro.as_str()}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 xl:grid-cols-3 gap-8">
                    {profile
                        .portfolio
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <div
                                    class=move || reveal_class(visible.get(), SLIDE_UP)
                                    style=stagger_delay(index, 200)
                                >
                                    <ProjectCard project source=profile.source_link(project) />
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
                            "Interested in " <span class="hero-text">"Collaborating?"</span>
                        </h3>
                        <p class="text-xl text-muted-foreground mb-8 max-w-2xl mx-auto">
                            "I'm always excited to work on new projects and bring innovative ideas to life. Let's discuss how we can create something amazing together."
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center">
                            <button
                                on:click=move |_| scroll_to_section("contact")
                                class="bg-primary hover:bg-primary-glow button-glow text-lg px-8 py-3 rounded-md"
                            >
                                "Let's Work Together"
                            </button>
                            {all_projects
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="border border-primary text-primary hover:bg-primary hover:text-primary-foreground text-lg px-8 py-3 rounded-md flex items-center"
                                        >
                                            <IconGlyph icon=Icon::Github class="mr-2 h-5 w-5" />
                                            "View All Projects"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, source: Option<&'static str>) -> impl IntoView {
    let gradient = project.gradient.as_str();

    view! {
        <div class="h-full bg-card-gradient card-glow card-hover rounded-lg transition-all duration-500 group overflow-hidden">
            <div class="relative overflow-hidden">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="absolute bottom-4 left-4 right-4 flex gap-2">
                        {project
                            .demo_link
                            .as_deref()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="bg-primary/90 hover:bg-primary text-primary-foreground text-sm px-3 py-1.5 rounded-md flex items-center"
                                    >
                                        <IconGlyph icon=Icon::ExternalLink class="h-4 w-4 mr-1" />
                                        "Demo"
                                    </a>
                                }
                            })}
                        {source
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="bg-background/90 hover:bg-primary border border-border/20 text-sm px-3 py-1.5 rounded-md flex items-center"
                                    >
                                        <IconGlyph icon=Icon::Github class="h-4 w-4 mr-1" />
                                        "Code"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>

            <div class="p-6 flex flex-col h-[calc(100%-12rem)]">
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <span class="inline-block mb-2 text-xs rounded-full bg-secondary px-2.5 py-0.5 font-semibold">
                            {project.category.as_str()}
                        </span>
                        <h3 class="text-xl font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                            {project.title.as_str()}
                        </h3>
                    </div>
                    <div class=format!(
                        "p-2 rounded-lg bg-gradient-to-r {gradient} opacity-80 group-hover:opacity-100 transition-opacity duration-300",
                    )>
                        <IconGlyph icon=project.icon class="h-5 w-5 text-white" />
                    </div>
                </div>

                <p class="text-muted-foreground text-sm leading-relaxed mb-4 flex-grow">
                    {project.description.as_str()}
                </p>

                <div class="mb-4">
                    <h4 class="text-sm font-medium text-foreground mb-2">"Key Features:"</h4>
                    <div class="grid grid-cols-2 gap-1 text-xs text-muted-foreground">
                        {project
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="flex items-center space-x-1">
                                        <div class=format!(
                                            "w-1.5 h-1.5 rounded-full bg-gradient-to-r {gradient}",
                                        )></div>
                                        <span>{feature.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-auto">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="text-xs rounded-full border border-primary/20 text-primary hover:bg-primary/10 px-2.5 py-0.5">
                                        {tech.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
