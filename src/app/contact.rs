use leptos::{
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
    web_sys,
};

use crate::content::{profile, Icon};
use crate::form::{
    ContactDraft, ContactField, SubmitState, SENT_DESCRIPTION, SENT_TITLE, SUBMIT_DELAY,
};
use crate::motion::{reveal_class, FADE_IN, SLIDE_UP};

use super::icon::IconGlyph;
use super::reveal::use_reveal;
use super::toaster::use_toasts;

const INPUT_CLASS: &str = "w-full rounded-md border px-3 py-2 bg-background border-border/20 focus:border-primary focus:outline-none";

#[component]
pub fn Contact() -> impl IntoView {
    let profile = profile();
    let contact = &profile.contact;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref);

    view! {
        <section id="contact" node_ref=section_ref class="py-20 bg-muted/5">
            <div class="container mx-auto px-14">
                <div class=move || format!("text-center mb-16 {}", reveal_class(visible.get(), FADE_IN))>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-4">
                        "Get In " <span class="hero-text">"Touch"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        {contact.intro.as_str()}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || format!("space-y-8 {}", reveal_class(visible.get(), SLIDE_UP))>
                        <div>
                            <h3 class="text-2xl font-semibold mb-6 hero-text">"Contact Information"</h3>
                            <p class="text-muted-foreground mb-8 leading-relaxed">
                                {contact.pitch.as_str()}
                            </p>
                        </div>

                        <div class="space-y-6">
                            {contact
                                .methods()
                                .into_iter()
                                .map(|method| {
                                    let target = method.target();
                                    let rel = method.rel();
                                    view! {
                                        <div class="bg-card-gradient card-glow card-hover rounded-lg transition-all duration-300 group cursor-pointer">
                                            <a
                                                href=method.href
                                                target=target
                                                rel=rel
                                                class="flex items-center space-x-4 p-6"
                                            >
                                                <div class=format!(
                                                    "p-3 rounded-lg bg-gradient-to-r {} group-hover:scale-110 transition-transform duration-300",
                                                    method.gradient,
                                                )>
                                                    <IconGlyph icon=method.icon class="h-6 w-6 text-white" />
                                                </div>
                                                <div>
                                                    <h4 class="font-semibold text-foreground group-hover:text-primary transition-colors duration-300">
                                                        {method.label}
                                                    </h4>
                                                    <p class="text-muted-foreground">{method.value}</p>
                                                </div>
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold mb-4 text-foreground">"Follow Me"</h4>
                            <div class="flex gap-4">
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
                                                title=social.label.as_str()
                                                class=format!(
                                                    "p-3 rounded-lg bg-gradient-to-r {} hover:scale-110 transition-all duration-300 button-glow group",
                                                    social.gradient,
                                                )
                                            >
                                                <IconGlyph icon=social.icon class="h-6 w-6 text-white" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div
                        class=move || reveal_class(visible.get(), SLIDE_UP)
                        style="animation-delay: 0.3s"
                    >
                        <div class="bg-card-gradient card-glow rounded-lg p-8">
                            <h3 class="text-2xl font-semibold mb-6 hero-text">"Send a Message"</h3>
                            <ContactForm />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let toasts = use_toasts();
    let draft = RwSignal::new(ContactDraft::default());
    let status = RwSignal::new(SubmitState::Idle);

    let value = move |field: ContactField| draft.with(|d| d.get(field).to_string());
    // one handler for every input, keyed by the element's `name` attribute
    let on_input = move |ev: Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        let value = event_target_value(&ev);
        draft.update(|d| {
            if let Err(e) = d.apply_input(&name, value) {
                log::warn!("{e}");
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut state = status.get_untracked();
        if !draft.with_untracked(|d| d.begin_submit(&mut state)) {
            return;
        }
        status.set(state);
        log::debug!("simulating contact form submission");

        set_timeout(
            move || {
                toasts.push(SENT_TITLE, SENT_DESCRIPTION);
                let mut state = status.get_untracked();
                draft.update(|d| d.finish_submit(&mut state));
                status.set(state);
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid md:grid-cols-2 gap-6">
                <div>
                    <label for="name" class="block text-sm font-medium text-foreground mb-2">
                        "Your Name"
                    </label>
                    <input
                        id="name"
                        name=ContactField::Name.name()
                        type="text"
                        required=true
                        prop:value=move || value(ContactField::Name)
                        on:input=on_input
                        class=INPUT_CLASS
                        placeholder="Enter your name"
                    />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-foreground mb-2">
                        "Email Address"
                    </label>
                    <input
                        id="email"
                        name=ContactField::Email.name()
                        type="email"
                        required=true
                        prop:value=move || value(ContactField::Email)
                        on:input=on_input
                        class=INPUT_CLASS
                        placeholder="Enter your email"
                    />
                </div>
            </div>

            <div>
                <label for="subject" class="block text-sm font-medium text-foreground mb-2">
                    "Subject"
                </label>
                <input
                    id="subject"
                    name=ContactField::Subject.name()
                    type="text"
                    required=true
                    prop:value=move || value(ContactField::Subject)
                    on:input=on_input
                    class=INPUT_CLASS
                    placeholder="What's this about?"
                />
            </div>

            <div>
                <label for="message" class="block text-sm font-medium text-foreground mb-2">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name=ContactField::Message.name()
                    required=true
                    rows=5
                    prop:value=move || value(ContactField::Message)
                    on:input=on_input
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Tell me about your project..."
                ></textarea>
            </div>

            <button
                type="submit"
                disabled=move || status.get().is_submitting()
                class="w-full bg-primary hover:bg-primary-glow button-glow text-lg py-3 rounded-md disabled:opacity-50"
            >
                {move || {
                    let state = status.get();
                    if state.is_submitting() {
                        view! {
                            <div class="flex items-center justify-center">
                                <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-white mr-2"></div>
                                {state.button_label()}
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="flex items-center justify-center">
                                <IconGlyph icon=Icon::Send class="mr-2 h-5 w-5" />
                                {state.button_label()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </button>
        </form>
    }
}
