pub mod card;
pub mod charts;
pub mod layout;
pub mod metric_card;
pub mod status_badge;
