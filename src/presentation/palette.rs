use colored::Color;

use crate::domain::{BillingCycle, Category};

/// Hex fill used for a category's chart segment and legend dot.
pub fn chart_color(category: Category) -> &'static str {
    match category {
        Category::Streaming => "#3b82f6",
        Category::Software => "#6366f1",
        Category::Music => "#ec4899",
        Category::Games => "#22c55e",
        Category::News => "#f59e0b",
        Category::Other => "#64748b",
    }
}

/// Closest terminal color for a category badge.
pub fn terminal_color(category: Category) -> Color {
    match category {
        Category::Streaming => Color::Blue,
        Category::Software => Color::BrightBlue,
        Category::Music => Color::Magenta,
        Category::Games => Color::Green,
        Category::News => Color::Yellow,
        Category::Other => Color::BrightBlack,
    }
}

pub fn cycle_color(cycle: BillingCycle) -> Color {
    match cycle {
        BillingCycle::Monthly => Color::Cyan,
        BillingCycle::Yearly => Color::Yellow,
    }
}
