use std::rc::Rc;

use blingo_core::ServiceConfig;
use blingo_io::{GenerationClient, Tab, TabBar, Toast, ToastMessage};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

mod enhancer;
mod generator;

use enhancer::EnhancerPanel;
use generator::GeneratorPanel;

/// Shown after a result has been handed to the browser's download.
pub const SAVED_MESSAGE: &str = "Image saved to gallery!";

fn main() {
    dioxus::launch(app);
}

/// Service configuration baked in at build time.
///
/// The page is served statically, so there is no runtime environment to
/// read; `GEMINI_API_KEY` (or `API_KEY`), `BLINGO_MODEL`, and
/// `BLINGO_ENDPOINT` are captured when the app is compiled.
fn service_config() -> ServiceConfig {
    ServiceConfig::from_lookup(|name| build_time_var(name).map(str::to_owned))
}

fn build_time_var(name: &str) -> Option<&'static str> {
    match name {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "API_KEY" => option_env!("API_KEY"),
        "BLINGO_MODEL" => option_env!("BLINGO_MODEL"),
        "BLINGO_ENDPOINT" => option_env!("BLINGO_ENDPOINT"),
        _ => None,
    }
}

/// Root application component.
///
/// Provides the generation client and the toast signal to both panels.
/// The panels stay mounted when hidden so an in-flight request and the
/// user's inputs survive a tab switch.
fn app() -> Element {
    use_context_provider(|| {
        let config = service_config();
        info!(?config, "generation service configured");
        if config.api_key.is_none() {
            warn!("no API key was set at build time; requests will fail");
        }
        Rc::new(GenerationClient::new(config))
    });
    let toast = use_context_provider(|| Signal::new(Option::<ToastMessage>::None));
    let mut active = use_signal(Tab::default);

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/blingo.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "Blingo Enhancer" }
                p { class: "app-subtitle", "Your AI-Powered Creative Suite" }
            }

            TabBar {
                active: active(),
                on_select: move |tab: Tab| {
                    info!(%tab, "tab selected");
                    active.set(tab);
                },
            }

            main { class: "app-main",
                div { hidden: active() != Tab::Enhancer, EnhancerPanel {} }
                div { hidden: active() != Tab::Generator, GeneratorPanel {} }
            }

            Toast { message: toast }
        }
    }
}
