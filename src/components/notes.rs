//! Notes Widget
//!
//! A single free-form text blob, saved on explicit user action only.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::storage;

const NOTES_KEY: &str = "pd_notes";

#[component]
pub fn NotesWidget() -> impl IntoView {
    let (notes, set_notes) = signal(storage::load(NOTES_KEY, String::new()));
    let (saved_label, set_saved_label) = signal(String::new());

    let save_notes = move |_| {
        storage::save(NOTES_KEY, &notes.get());
        set_saved_label.set("Saved".to_string());
        spawn_local(async move {
            TimeoutFuture::new(1200).await;
            set_saved_label.set(String::new());
        });
    };

    view! {
        <section class="widget notes-widget">
            <h2>"Notes"</h2>
            <textarea
                class="notes-textarea"
                placeholder="Jot something down..."
                prop:value=move || notes.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_notes.set(textarea.value());
                }
            ></textarea>
            <div class="widget-footer">
                <button on:click=save_notes>"Save"</button>
                <span class="saved-label">{move || saved_label.get()}</span>
            </div>
        </section>
    }
}
