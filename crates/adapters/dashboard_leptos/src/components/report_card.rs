//! Aggregate report card.

use leptos::prelude::*;
use meterdash_domain::report::{PortReport, ReportField};

use super::{LOADING, StatCard};

/// Six stat cards, one per report slot. Slots keep their last value when a
/// poll fails.
#[component]
pub fn ReportCard(report: ReadSignal<Option<PortReport>>) -> impl IntoView {
    let cards = ReportField::ALL
        .into_iter()
        .enumerate()
        .map(|(idx, field)| {
            let value = Signal::derive(move || {
                report.with(|report| {
                    report
                        .as_ref()
                        .map_or_else(|| LOADING.to_string(), |r| r.slots()[idx].text.clone())
                })
            });
            view! { <StatCard label=field.label() value=value/> }
        })
        .collect_view();

    view! {
        <section class="card report-card">
            <h2>"Port Report"</h2>
            <div class="stat-grid">{cards}</div>
        </section>
    }
}
