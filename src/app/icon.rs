use leptos::prelude::*;

use crate::content::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}
