//! On-demand latest sensor reading.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::SharedServices;

#[component]
pub fn ReadingPanel(services: SharedServices) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let refresh = move |_| {
        let services = services.get_value();
        spawn_local(async move {
            let outcome = services.readings.latest().await;
            set_text.set(outcome.text());
        });
    };

    view! {
        <section class="card reading-panel">
            <h2>"Latest Reading"</h2>
            <button on:click=refresh>"Refresh"</button>
            <p id="reading-data">{text}</p>
        </section>
    }
}
