mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icon;
mod portfolio;
mod reveal;
mod services;
mod skills;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{profile, FAVICON};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::Portfolio;
use services::Services;
use skills::Skills;
use toaster::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    let profile = profile();
    let name = profile.full_name();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile.person.tagline.as_str() />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio: every section stacked in page order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Header />
        <main class="overflow-x-hidden">
            <Hero />
            <About />
            <Skills />
            <Services />
            <Portfolio />
            <Contact />
        </main>
        <Footer />
        <Toaster />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 text-center">
            <h1 class="text-5xl font-bold hero-text">"404"</h1>
            <p class="text-xl text-muted-foreground">"This page doesn't exist."</p>
            <a
                href="/"
                class="bg-primary hover:bg-primary-glow button-glow px-8 py-3 rounded-md transition-all duration-300"
            >
                "Back to the portfolio"
            </a>
        </div>
    }
}
