use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{profile, Icon};

use super::icon::IconGlyph;
use super::reveal::{scroll_to_section, scroll_to_top};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profile();
    let contact = &profile.contact;
    let name = profile.full_name();
    let year = Utc::now().year();

    view! {
        <footer class="bg-card border-t border-border/20">
            <div class="container mx-auto px-6 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <div
                            on:click=move |_| scroll_to_top()
                            class="text-2xl font-bold hero-text cursor-pointer hover:opacity-80 transition-opacity"
                        >
                            {name.clone()}
                        </div>
                        <p class="text-muted-foreground leading-relaxed">
                            {profile.person.blurb.as_str()}
                        </p>
                        <div class="flex space-x-4">
                            {profile
                                .person
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label.as_str()
                                            class="p-2 bg-muted rounded-lg hover:bg-primary hover:text-primary-foreground transition-all duration-300 button-glow group"
                                        >
                                            <IconGlyph icon=social.icon class="h-5 w-5" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href=contact.mailto()
                                aria-label="Email"
                                class="p-2 bg-muted rounded-lg hover:bg-primary hover:text-primary-foreground transition-all duration-300 button-glow group"
                            >
                                <IconGlyph icon=Icon::Mail class="h-5 w-5" />
                            </a>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold text-foreground">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {profile
                                .quick_links()
                                .map(|link| {
                                    let id = link.id.as_str();
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| scroll_to_section(id)
                                                class="text-muted-foreground hover:text-primary transition-colors duration-200 capitalize"
                                            >
                                                {link.label.as_str()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h3 class="text-lg font-semibold text-foreground">"Get In Touch"</h3>
                        <div class="space-y-2 text-muted-foreground">
                            <p>
                                <span class="font-medium">"Email:"</span>
                                " "
                                <a
                                    href=contact.mailto()
                                    class="hover:text-primary transition-colors duration-200"
                                >
                                    {contact.email.as_str()}
                                </a>
                            </p>
                            <p>
                                <span class="font-medium">"Phone:"</span>
                                " "
                                <a
                                    href=contact.phone_href.as_str()
                                    class="hover:text-primary transition-colors duration-200"
                                >
                                    {contact.phone.as_str()}
                                </a>
                            </p>
                            <p>
                                <span class="font-medium">"Location:"</span>
                                " "
                                {contact.location.as_str()}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-border/20 mt-8 pt-8">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <div class="text-muted-foreground text-sm">
                            {format!("© {year} {name}. All rights reserved.")}
                        </div>
                        <div class="flex items-center text-muted-foreground text-sm">
                            <span>"Made with"</span>
                            <IconGlyph icon=Icon::Heart class="h-4 w-4 mx-1 text-red-500 animate-pulse" />
                            <span>"using Rust, Leptos & Tailwind CSS"</span>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
