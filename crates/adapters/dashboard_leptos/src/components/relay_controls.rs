//! Relay on/off buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;
use meterdash_domain::relay::RelayState;

use crate::services::SharedServices;

/// Buttons sending relay commands. The outcome is reported as a toast.
#[component]
pub fn RelayControls(services: SharedServices) -> impl IntoView {
    let send = move |state: RelayState| {
        let services = services.get_value();
        spawn_local(async move {
            let last_power = services.power.last_power();
            let outcome = services.relay.send(state, last_power).await;
            leptos::logging::log!("relay {state}: {outcome:?}");
        });
    };

    view! {
        <section class="card relay-controls">
            <h2>"Relay"</h2>
            <button class="relay-on" on:click=move |_| send(RelayState::On)>"Turn ON"</button>
            <button class="relay-off" on:click=move |_| send(RelayState::Off)>"Turn OFF"</button>
        </section>
    }
}
