//! Todo Widget
//!
//! Ordered list of todos, newest first. Every mutation persists before
//! the next render so storage never lags the screen.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{self, TodoItem};
use crate::storage;

const TODOS_KEY: &str = "pd_todos";

#[component]
pub fn TodoWidget() -> impl IntoView {
    let (todos, set_todos) = signal(storage::load(TODOS_KEY, Vec::<TodoItem>::new()));
    let (new_text, set_new_text) = signal(String::new());

    let add = move || {
        set_todos.update(|list| {
            if models::add_todo(list, &new_text.get()) {
                storage::save(TODOS_KEY, list);
                set_new_text.set(String::new());
            }
        });
    };

    let toggle = move |i: usize| {
        set_todos.update(|list| {
            models::toggle_todo(list, i);
            storage::save(TODOS_KEY, list);
        });
    };

    let delete = move |i: usize| {
        set_todos.update(|list| {
            models::remove_at(list, i);
            storage::save(TODOS_KEY, list);
        });
    };

    let clear_done = move |_| {
        set_todos.update(|list| {
            models::clear_completed(list);
            storage::save(TODOS_KEY, list);
        });
    };

    let todo_rows = move || todos.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section class="widget todo-widget">
            <h2>"Todos"</h2>
            <div class="add-row">
                <input
                    type="text"
                    placeholder="Add a todo..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_text.set(input.value());
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
                    each=todo_rows
                    // Identity is positional, so the key covers the index
                    // and every field that can change under it
                    key=|(i, t)| (*i, t.text.clone(), t.done)
                    children=move |(i, todo)| {
                        let done = todo.done;
                        view! {
                            <li class="item-row">
                                <input
                                    type="checkbox"
                                    prop:checked=done
                                    on:change=move |_| toggle(i)
                                />
                                <span class=if done { "item-text done" } else { "item-text" }>
                                    {todo.text}
                                </span>
                                <div class="spacer"></div>
                                <button class="delete" on:click=move |_| delete(i)>"Delete"</button>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="widget-footer">
                <span class="todo-count">
                    {move || format!("{} remaining", models::remaining(&todos.get()))}
                </span>
                <button on:click=clear_done>"Clear completed"</button>
            </div>
        </section>
    }
}
