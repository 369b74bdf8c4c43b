//! Mailform - Contact Form Frontend
//!
//! A WebAssembly contact form that uploads an attachment to a backend and
//! delivers the message through an email relay.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── ContactForm (fields, file picker, upload, send)        │
//! │  └── Footer                                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastHost (success/error notification)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration (backend URL, relay credentials)
//! - [`types`] - Common types (FormFields, EmailMessage, AppError)
//! - [`state`] - Pure state machine driving the upload/send workflow
//! - [`components`] - UI components (ContactForm, ToastHost, etc.)
//! - [`services`] - Backend communication (upload, email relay)

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, EmailMessage, FormFields};

// State machine
pub use state::{AppState, DismissReason, Effect, Msg, SubmissionPhase, Toast, ToastKind};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Dispatcher
// =============================================================================

/// Routes messages through the pure state core and executes the returned
/// effects.
///
/// A copyable handle: the signals and the stored config are all `Copy`, so
/// the dispatcher moves freely into event handlers and async tasks. The DOM
/// `File` handle lives here, outside the pure state.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
    file: RwSignal<Option<web_sys::File>>,
    config: StoredValue<Config>,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            state: create_rw_signal(AppState::new()),
            file: create_rw_signal(None),
            config: store_value(config),
        }
    }

    /// The reactive application state, for components to render from.
    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }

    /// Record the picked file handle and inform the core.
    pub fn file_chosen(&self, file: web_sys::File) {
        let name = file.name();
        log::info!("📎 File selected: {}", name);
        self.file.set(Some(file));
        self.send(Msg::FileChosen { name });
    }

    /// Apply a message and run whatever effects fall out of the transition.
    pub fn send(&self, msg: Msg) {
        let effects = self.state.try_update(|s| s.apply(msg)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let dispatcher = *self;
        match effect {
            Effect::UploadSelectedFile => {
                // The core checked that a file was chosen, but the handle
                // could still have been dropped out from under us.
                let Some(file) = self.file.get_untracked() else {
                    dispatcher.send(Msg::UploadFailed {
                        reason: "the selected file is no longer available".to_string(),
                    });
                    return;
                };
                let backend_url = self.config.with_value(|c| c.backend_url.clone());
                spawn_local(async move {
                    log::info!("📤 Uploading {}...", file.name());
                    match services::upload_file(file, &backend_url).await {
                        Ok(url) => {
                            log::info!("✅ File uploaded: {}", url);
                            dispatcher.send(Msg::UploadSucceeded { url });
                        }
                        Err(e) => {
                            log::error!("❌ Upload failed: {}", e);
                            dispatcher.send(Msg::UploadFailed {
                                reason: e.to_string(),
                            });
                        }
                    }
                });
            }
            Effect::SendEmail(message) => {
                let config = self.config.get_value();
                spawn_local(async move {
                    log::info!(
                        "📧 Sending email from {} <{}>",
                        message.from_name,
                        message.from_email
                    );
                    match services::send_email(&config, &message).await {
                        Ok(()) => {
                            log::info!("✅ Email sent successfully");
                            dispatcher.send(Msg::SendSucceeded);
                        }
                        Err(e) => {
                            log::error!("❌ Email send failed: {}", e);
                            dispatcher.send(Msg::SendFailed {
                                reason: e.to_string(),
                            });
                        }
                    }
                });
            }
            Effect::ScheduleToastHide { seq } => {
                spawn_local(async move {
                    TimeoutFuture::new(TOAST_AUTO_HIDE_MS).await;
                    dispatcher.send(Msg::ToastTimedOut { seq });
                });
            }
        }
    }
}

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Mailform - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let config = Config::from_build_env();
    config.warn_if_incomplete();

    let dispatcher = Dispatcher::new(config);

    // Clicks that bubble up to the container count as click-away; the core
    // ignores them, so background clicks never dismiss the toast.
    view! {
        <div
            class="container"
            on:click=move |_| dispatcher.send(Msg::ToastDismissed {
                reason: DismissReason::Clickaway,
            })
        >
            <Hero/>
            <ContactForm dispatcher=dispatcher/>
            <Footer/>
        </div>

        <ToastHost dispatcher=dispatcher/>
    }
}
