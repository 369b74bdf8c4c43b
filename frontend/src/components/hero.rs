//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Send an Email"</h1>
            <p class="subtitle">
                "Attach a file, tell us who you are, and your message lands "
                "in our inbox with a link to the attachment."
            </p>
        </div>
    }
}
