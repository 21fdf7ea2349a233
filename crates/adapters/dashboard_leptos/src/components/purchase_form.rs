//! Buy-electricity form with the purpose selector and live meter check.
//!
//! The form itself posts natively; only the other-meter field is scripted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use meterdash_domain::purchase::{FeedbackTone, MeterFeedback, OTHER_PURPOSE, OtherMeterField};

use crate::services::SharedServices;

#[component]
pub fn PurchaseForm(services: SharedServices) -> impl IntoView {
    let (purpose, set_purpose) = signal(String::from("self"));
    let field = Memo::new(move |_| purpose.with(|p| OtherMeterField::for_purpose(p)));

    let (feedback, set_feedback) = signal(MeterFeedback::default());
    // Clearing the text leaves the last tone applied.
    let (tone, set_tone) = signal(None::<FeedbackTone>);

    let on_purpose = move |ev| set_purpose.set(event_target_value(&ev));

    let on_meter_input = move |ev| {
        let input = event_target_value(&ev);
        let services = services.get_value();
        spawn_local(async move {
            let result = services.lookup.check(&input).await;
            if let Some(next) = result.tone() {
                set_tone.set(Some(next));
            }
            set_feedback.set(result);
        });
    };

    view! {
        <section class="card purchase-form">
            <h2>"Buy Electricity"</h2>
            <form method="post" action="/user/buy-electricity">
                <label for="buy_for">"Buy for"</label>
                <select id="buy_for" name="buy_for" on:change=on_purpose>
                    <option value="self">"Myself"</option>
                    <option value=OTHER_PURPOSE>"Someone else"</option>
                </select>

                <div id="otherMeterDiv" class:hidden=move || !field.get().visible>
                    <label for="other_meter_number">"Meter number"</label>
                    <input
                        id="other_meter_number"
                        name="other_meter_number"
                        type="text"
                        required=move || field.get().required
                        on:input=on_meter_input
                    />
                    <p id="meterFeedback" class=move || tone.get().map_or("", FeedbackTone::class)>
                        {move || feedback.get().text()}
                    </p>
                </div>

                <label for="amount">"Amount"</label>
                <input id="amount" name="amount" type="number" min="0" step="0.01" required=true/>

                <button type="submit">"Buy"</button>
            </form>
        </section>
    }
}
