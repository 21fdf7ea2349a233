use leptos::prelude::*;

pub mod api;
mod components;
pub mod config;
mod pages;
mod services;

use components::ToastContainer;
use config::DashboardConfig;
use pages::Dashboard;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_document();

    view! {
        <ToastContainer>
            <main>
                {match config {
                    Ok(config) => view! { <Dashboard config=config/> }.into_any(),
                    Err(err) => view! {
                        <p class="error">{"Dashboard unavailable: "} {err.to_string()}</p>
                    }.into_any(),
                }}
            </main>
        </ToastContainer>
    }
}
