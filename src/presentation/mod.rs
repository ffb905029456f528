//! Presentation helpers: formatting, form validation and the dashboard view.

pub mod dashboard;
pub mod form;
pub mod format;
pub mod palette;
pub mod render;

pub use dashboard::{
    category_breakdown, CategorySlice, Dashboard, DonutChart, DonutSegment, ListRow, SummaryCard,
};
pub use form::{delete_prompt, FormError, SubscriptionForm};
pub use format::{format_brl, format_date_br, CurrencyFormatter, DateFormatter, LocaleFormatter};
pub use palette::chart_color;
pub use render::{render_dashboard, render_dashboard_with, render_report};
