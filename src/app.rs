//! Pindash Frontend App
//!
//! Main application component laying out the three widgets.

use leptos::prelude::*;

use crate::components::{InstallButton, LinkWidget, NotesWidget, TodoWidget};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Personal Dashboard"</h1>
                <InstallButton />
            </header>

            <main class="widget-grid">
                <NotesWidget />
                <TodoWidget />
                <LinkWidget />
            </main>
        </div>
    }
}
