//! Live current-power readout.

use leptos::prelude::*;
use meterdash_domain::power::Watts;

use super::{LOADING, StatCard};

/// Card showing the most recent power value, e.g. `12.5 W`.
#[component]
pub fn PowerReadout(power: ReadSignal<Option<Watts>>) -> impl IntoView {
    let value = Signal::derive(move || {
        power
            .get()
            .map_or_else(|| LOADING.to_string(), Watts::readout)
    });

    view! {
        <div id="current-power" class="power-readout">
            <StatCard label="Current Power" value=value/>
        </div>
    }
}
