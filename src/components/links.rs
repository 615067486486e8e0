//! Link Widget
//!
//! A collection of saved links, newest first. URLs get an explicit
//! scheme before storage; entries are immutable once added.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{self, LinkItem};
use crate::storage;

const LINKS_KEY: &str = "pd_links";

#[component]
pub fn LinkWidget() -> impl IntoView {
    let (links, set_links) = signal(storage::load(LINKS_KEY, Vec::<LinkItem>::new()));
    let (new_title, set_new_title) = signal(String::new());
    let (new_url, set_new_url) = signal(String::new());

    let add = move || {
        set_links.update(|list| {
            if models::add_link(list, &new_title.get(), &new_url.get()) {
                storage::save(LINKS_KEY, list);
                set_new_title.set(String::new());
                set_new_url.set(String::new());
            }
        });
    };

    let delete = move |i: usize| {
        set_links.update(|list| {
            models::remove_at(list, i);
            storage::save(LINKS_KEY, list);
        });
    };

    let link_rows = move || links.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section class="widget link-widget">
            <h2>"Links"</h2>
            <div class="add-row">
                <input
                    type="text"
                    placeholder="Title (optional)"
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="URL"
                    prop:value=move || new_url.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_url.set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button on:click=move |_| add()>"Add"</button>
            </div>
            <ul class="item-list">
                <For
                    each=link_rows
                    key=|(i, l)| (*i, l.title.clone(), l.url.clone())
                    children=move |(i, link)| {
                        let label = link.label().to_string();
                        view! {
                            <li class="item-row">
                                <a href=link.url target="_blank" rel="noopener">{label}</a>
                                <div class="spacer"></div>
                                <button class="delete" on:click=move |_| delete(i)>"Delete"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
