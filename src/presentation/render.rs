//! Terminal-friendly rendering of a [`Dashboard`].

use chrono::NaiveDate;
use colored::Colorize;

use crate::config::Config;
use crate::core::SortKey;
use crate::domain::Subscription;

use super::dashboard::{Dashboard, ListRow, EMPTY_HINT, EMPTY_TITLE};
use super::format::{CurrencyFormatter, DateFormatter, LocaleFormatter};
use super::palette::{cycle_color, terminal_color};

const SEPARATOR: &str = "----------------------------------------";

/// Renders the dashboard with pt-BR formatting. `plain` disables colors.
pub fn render_dashboard(dashboard: &Dashboard, plain: bool) -> String {
    render_dashboard_with(dashboard, &LocaleFormatter::default(), plain)
}

/// Builds and renders the dashboard using the locale, currency symbol and
/// default ordering from `config`. An explicit `sort` overrides the default.
pub fn render_report(
    subscriptions: &[Subscription],
    config: &Config,
    sort: Option<SortKey>,
    today: NaiveDate,
    plain: bool,
) -> String {
    let dashboard = Dashboard::build(subscriptions, sort.unwrap_or(config.default_sort), today);
    render_dashboard_with(&dashboard, &LocaleFormatter::from_config(config), plain)
}

/// Renders the dashboard as a multi-line report using `formatter`.
pub fn render_dashboard_with<F>(dashboard: &Dashboard, formatter: &F, plain: bool) -> String
where
    F: CurrencyFormatter + DateFormatter,
{
    let mut lines = vec![section("Resumo", plain)];
    let width = dashboard
        .cards
        .iter()
        .map(|card| card.title.chars().count())
        .max()
        .unwrap_or(0);
    for card in &dashboard.cards {
        let amount = paint(&formatter.format_amount(card.amount), plain, |text| {
            text.bold().to_string()
        });
        lines.push(format!("{:<width$}  {}", card.title, amount));
    }

    if !dashboard.breakdown.is_empty() {
        lines.push(String::new());
        lines.push(section("Gastos por Categoria", plain));
        for slice in &dashboard.breakdown {
            let label = paint(slice.category.label(), plain, |text| {
                text.color(terminal_color(slice.category)).to_string()
            });
            lines.push(format!(
                "{}  {}  {}%",
                pad(&label, slice.category.label(), 10),
                formatter.format_amount(slice.value),
                slice.percent
            ));
        }
    }

    lines.push(String::new());
    lines.push(section(
        &format!("Minhas Assinaturas ({})", dashboard.sort_key.label()),
        plain,
    ));
    if dashboard.is_empty() {
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_HINT.to_string());
    }
    for (index, row) in dashboard.rows.iter().enumerate() {
        if index > 0 {
            lines.push(SEPARATOR.to_string());
        }
        lines.extend(row_lines(row, formatter, plain));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn section(title: &str, plain: bool) -> String {
    let header = format!("=== {} ===", title.trim());
    paint(&header, plain, |text| text.bold().to_string())
}

fn row_lines<F>(row: &ListRow, formatter: &F, plain: bool) -> [String; 2]
where
    F: CurrencyFormatter + DateFormatter,
{
    let name = paint(&row.name, plain, |text| text.bold().to_string());
    let category = paint(row.category.label(), plain, |text| {
        text.color(terminal_color(row.category)).to_string()
    });
    let cycle = paint(row.cycle.label(), plain, |text| {
        text.color(cycle_color(row.cycle)).to_string()
    });
    [
        format!("{name} [{category}]"),
        format!(
            "  Próximo vencimento: {}  {}  {}",
            formatter.format_date(row.next_billing),
            cycle,
            formatter.format_amount(row.cost)
        ),
    ]
}

fn paint(text: &str, plain: bool, style: impl FnOnce(&str) -> String) -> String {
    if plain {
        text.to_string()
    } else {
        style(text)
    }
}

// Pads by the visible width so ANSI escapes do not skew the columns.
fn pad(styled: &str, visible: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible.chars().count());
    format!("{styled}{}", " ".repeat(fill))
}
