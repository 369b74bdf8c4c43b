//! Contact form component.
//!
//! File picker, upload button, the three text fields, and the send button.
//! All interaction is forwarded to the dispatcher as messages; this
//! component holds no state of its own.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::state::{Msg, SubmissionPhase};
use crate::Dispatcher;

#[component]
pub fn ContactForm(dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            dispatcher.file_chosen(file);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        dispatcher.send(Msg::SendClicked);
    };

    let is_uploading = move || {
        state.with(|s| matches!(s.phase, SubmissionPhase::Uploading { .. }))
    };
    let is_sending = move || state.with(|s| matches!(s.phase, SubmissionPhase::Sending { .. }));

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="attachment-row">
                <input type="file" id="fileInput" on:change=on_file_change/>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| dispatcher.send(Msg::UploadClicked)
                >
                    {move || if is_uploading() { "⏳ Uploading..." } else { "Upload File" }}
                </button>
            </div>

            <Show
                when=move || state.with(|s| s.uploaded_url().is_some())
                fallback=|| view! { }
            >
                <div class="upload-hint">
                    "✅ Attachment ready: "
                    {move || state.with(|s| s.uploaded_url().unwrap_or_default().to_string())}
                </div>
            </Show>

            <input
                type="text"
                class="form-field"
                placeholder="Your Name"
                required
                prop:value=move || state.with(|s| s.fields.name.clone())
                on:input=move |ev| dispatcher.send(Msg::NameChanged(event_target_value(&ev)))
            />
            <input
                type="email"
                class="form-field"
                placeholder="Your Email"
                required
                prop:value=move || state.with(|s| s.fields.email.clone())
                on:input=move |ev| dispatcher.send(Msg::EmailChanged(event_target_value(&ev)))
            />
            <textarea
                class="form-field"
                placeholder="Your Message"
                rows="6"
                required
                prop:value=move || state.with(|s| s.fields.message.clone())
                on:input=move |ev| dispatcher.send(Msg::MessageChanged(event_target_value(&ev)))
            ></textarea>

            <button type="submit" class="btn btn-primary">
                {move || if is_sending() { "⏳ Sending..." } else { "Send Email" }}
            </button>
        </form>
    }
}
