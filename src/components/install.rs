//! Installability Helper
//!
//! Registers the offline service worker and manages the deferred
//! install prompt. The platform hands us one `beforeinstallprompt`
//! event; we hold it until the user clicks Install, then spend it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// `beforeinstallprompt` event, which web-sys does not bind.
    #[wasm_bindgen(extends = web_sys::Event)]
    #[derive(Clone)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method)]
    fn prompt(this: &BeforeInstallPromptEvent);

    #[wasm_bindgen(method, getter, js_name = userChoice)]
    fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

/// Fire-and-forget registration of the offline worker. Skipped on
/// engines without service-worker support (e.g. some webviews).
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let has_sw = js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !has_sw {
        return;
    }
    let _ = navigator.service_worker().register("./sw.js");
    web_sys::console::log_1(&"[install] service worker registration requested".into());
}

/// Install button, hidden until the platform signals installability.
#[component]
pub fn InstallButton() -> impl IntoView {
    // JS event objects are not Send, so the stash lives in the local arena
    let deferred = RwSignal::new_local(None::<BeforeInstallPromptEvent>);
    let (visible, set_visible) = signal(false);

    Effect::new(move |_| {
        register_service_worker();

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_prompt = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            deferred.set(Some(ev.unchecked_into::<BeforeInstallPromptEvent>()));
            set_visible.set(true);
            web_sys::console::log_1(&"[install] install prompt deferred".into());
        });
        let _ = window.add_event_listener_with_callback(
            "beforeinstallprompt",
            on_prompt.as_ref().unchecked_ref(),
        );
        // Listener lives for the page lifetime
        on_prompt.forget();
    });

    let on_click = move |_| {
        set_visible.set(false);
        // One-shot: the stashed event is consumed here and never refilled
        let taken = deferred.write().take();
        let Some(ev) = taken else {
            return;
        };
        spawn_local(async move {
            ev.prompt();
            let _ = JsFuture::from(ev.user_choice()).await;
            web_sys::console::log_1(&"[install] install choice resolved".into());
        });
    };

    view! {
        <Show when=move || visible.get()>
            <button class="install-btn" on:click=on_click>"Install app"</button>
        </Show>
    }
}
