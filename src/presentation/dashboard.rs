//! View model for the summary cards, category chart and subscription list.

use std::f64::consts::PI;

use chrono::NaiveDate;

use crate::core::{aggregate, next_billing_date_for, sort_subscriptions, SortKey, SpendSummary};
use crate::domain::{BillingCycle, Category, Subscription, SubscriptionId};

use super::palette::chart_color;

pub const DONUT_RADIUS: f64 = 80.0;
pub const DONUT_STROKE_WIDTH: f64 = 25.0;

pub const EMPTY_TITLE: &str = "Nenhuma assinatura adicionada ainda.";
pub const EMPTY_HINT: &str = "Clique em \"Adicionar\" para começar!";

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub amount: f64,
}

/// One legend entry of the category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub value: f64,
    /// Share of the monthly total, rounded to a whole percent.
    pub percent: u32,
    pub color: &'static str,
}

/// Stroke parameters for one ring segment of the donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub category: Category,
    pub color: &'static str,
    pub dash_offset: f64,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub inner_radius: f64,
    pub circumference: f64,
    pub segments: Vec<DonutSegment>,
}

impl DonutChart {
    /// Lays out slices clockwise from largest to smallest. Returns `None`
    /// when there is no spend to draw.
    pub fn layout(slices: &[CategorySlice], total: f64) -> Option<Self> {
        if total <= 0.0 {
            return None;
        }
        let inner_radius = DONUT_RADIUS - DONUT_STROKE_WIDTH;
        let circumference = 2.0 * PI * inner_radius;
        let mut accumulated = 0.0;
        let segments = slices
            .iter()
            .map(|slice| {
                let fraction = slice.value / total;
                let segment = DonutSegment {
                    category: slice.category,
                    color: slice.color,
                    dash_offset: circumference * (1.0 - fraction),
                    rotation_deg: accumulated * 360.0,
                };
                accumulated += fraction;
                segment
            })
            .collect();
        Some(Self {
            inner_radius,
            circumference,
            segments,
        })
    }
}

/// One row of the subscription list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: SubscriptionId,
    pub name: String,
    pub category: Category,
    pub next_billing: NaiveDate,
    pub cycle: BillingCycle,
    pub cost: f64,
}

/// Everything the main screen shows, computed for one `today` and sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub sort_key: SortKey,
    pub cards: [SummaryCard; 2],
    pub summary: SpendSummary,
    /// Empty when there are no subscriptions; the chart is hidden then.
    pub breakdown: Vec<CategorySlice>,
    pub donut: Option<DonutChart>,
    pub rows: Vec<ListRow>,
}

impl Dashboard {
    pub fn build(subscriptions: &[Subscription], sort_key: SortKey, today: NaiveDate) -> Self {
        let summary = aggregate(subscriptions);
        let cards = [
            SummaryCard {
                title: "Custo Mensal Total",
                amount: summary.monthly_total,
            },
            SummaryCard {
                title: "Custo Anual Total",
                amount: summary.yearly_total,
            },
        ];
        let breakdown = category_breakdown(&summary);
        let donut = DonutChart::layout(&breakdown, summary.monthly_total);
        let rows = sort_subscriptions(subscriptions, sort_key, today)
            .into_iter()
            .map(|sub| ListRow {
                id: sub.id.clone(),
                name: sub.name.clone(),
                category: sub.category,
                next_billing: next_billing_date_for(sub, today),
                cycle: sub.billing_cycle,
                cost: sub.cost,
            })
            .collect();
        Self {
            sort_key,
            cards,
            summary,
            breakdown,
            donut,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Category slices ordered by spend, largest first.
pub fn category_breakdown(summary: &SpendSummary) -> Vec<CategorySlice> {
    summary
        .categories_by_spend()
        .into_iter()
        .map(|(category, value)| CategorySlice {
            category,
            value,
            percent: percent_of(value, summary.monthly_total),
            color: chart_color(category),
        })
        .collect()
}

fn percent_of(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubscriptionDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sub(id: &str, name: &str, cost: f64, cycle: BillingCycle, category: Category) -> Subscription {
        Subscription::with_id(
            SubscriptionId::new(id),
            SubscriptionDraft::new(name, cost, cycle, date(2023, 1, 15), category),
        )
    }

    fn sample() -> Vec<Subscription> {
        vec![
            sub("1", "Netflix", 30.0, BillingCycle::Monthly, Category::Streaming),
            sub("2", "Spotify", 10.0, BillingCycle::Monthly, Category::Music),
            sub("3", "Xbox", 120.0, BillingCycle::Yearly, Category::Games),
        ]
    }

    #[test]
    fn empty_collection_hides_chart() {
        let dashboard = Dashboard::build(&[], SortKey::NameAsc, date(2023, 3, 1));
        assert!(dashboard.is_empty());
        assert!(dashboard.breakdown.is_empty());
        assert!(dashboard.donut.is_none());
        assert_eq!(dashboard.cards[0].amount, 0.0);
        assert_eq!(dashboard.cards[1].title, "Custo Anual Total");
    }

    #[test]
    fn breakdown_is_sorted_with_whole_percentages() {
        let dashboard = Dashboard::build(&sample(), SortKey::NameAsc, date(2023, 3, 1));
        let shares: Vec<_> = dashboard
            .breakdown
            .iter()
            .map(|slice| (slice.category, slice.percent))
            .collect();
        assert_eq!(
            shares,
            vec![
                (Category::Streaming, 60),
                (Category::Music, 20),
                (Category::Games, 20),
            ]
        );
        assert_eq!(dashboard.breakdown[0].color, "#3b82f6");
    }

    #[test]
    fn donut_segments_rotate_by_accumulated_share() {
        let dashboard = Dashboard::build(&sample(), SortKey::NameAsc, date(2023, 3, 1));
        let donut = dashboard.donut.expect("chart drawn");
        assert_eq!(donut.inner_radius, 55.0);
        assert!((donut.circumference - 2.0 * PI * 55.0).abs() < 1e-9);
        assert_eq!(donut.segments.len(), 3);
        assert_eq!(donut.segments[0].rotation_deg, 0.0);
        assert!((donut.segments[1].rotation_deg - 216.0).abs() < 1e-9);
        assert!((donut.segments[2].rotation_deg - 288.0).abs() < 1e-9);
        assert!((donut.segments[0].dash_offset - donut.circumference * 0.4).abs() < 1e-9);
    }

    #[test]
    fn rows_follow_sort_key_and_carry_next_billing_date() {
        let dashboard = Dashboard::build(&sample(), SortKey::CostDesc, date(2023, 3, 1));
        let names: Vec<_> = dashboard.rows.iter().map(|row| row.name.as_str()).collect();
        // Spotify and Xbox both cost 120 a year and keep their input order.
        assert_eq!(names, vec!["Netflix", "Spotify", "Xbox"]);
        assert_eq!(dashboard.rows[0].next_billing, date(2023, 3, 15));
        assert_eq!(dashboard.rows[2].next_billing, date(2024, 1, 15));
        assert_eq!(dashboard.rows[2].cycle, BillingCycle::Yearly);
    }
}
