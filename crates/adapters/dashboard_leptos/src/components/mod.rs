mod power_readout;
mod purchase_form;
mod reading_panel;
mod relay_controls;
mod report_card;
mod stat_card;
mod toast;

pub use power_readout::PowerReadout;
pub use purchase_form::PurchaseForm;
pub use reading_panel::ReadingPanel;
pub use relay_controls::RelayControls;
pub use report_card::ReportCard;
pub use stat_card::StatCard;
pub use toast::{ToastContainer, ToastProvider, use_toasts};

/// Shown in every display slot until its first successful poll.
pub const LOADING: &str = "Loading\u{2026}";
