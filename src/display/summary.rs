//! Plain-text budget summary
//!
//! Printed to stdout after the TUI closes.

use crate::store::BudgetSnapshot;

use super::amount::AmountFormat;

/// Format per-collection line items and totals as an aligned text block
pub fn format_summary(snapshot: &BudgetSnapshot, fmt: &AmountFormat) -> String {
    let totals = snapshot.totals();

    let mut rows: Vec<(String, String)> = Vec::new();
    push_section(
        &mut rows,
        "Income",
        snapshot.incomes.iter().map(|i| (i.name.as_str(), i.amount)),
        fmt,
    );
    push_section(
        &mut rows,
        "Savings",
        snapshot.savings.iter().map(|s| (s.name.as_str(), s.amount)),
        fmt,
    );
    push_section(
        &mut rows,
        "Expenses",
        snapshot
            .expenses
            .iter()
            .map(|e| (e.category_name.as_str(), e.amount)),
        fmt,
    );

    let totals_rows = [
        ("Total income", fmt.format(totals.income)),
        ("Total savings", fmt.format(totals.savings)),
        ("Total expenses", fmt.format(totals.expenses)),
        ("Remainder", fmt.format(totals.remainder)),
    ];

    let label_width = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .chain(totals_rows.iter().map(|(l, _)| l.chars().count()))
        .max()
        .unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(totals_rows.iter().map(|(_, v)| v.chars().count()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (label, value) in &rows {
        output.push_str(&line(label, value, label_width, value_width));
    }
    if !rows.is_empty() {
        output.push_str(&format!("{:-<width$}\n", "", width = label_width + value_width + 2));
    }
    for (label, value) in &totals_rows {
        output.push_str(&line(label, value, label_width, value_width));
    }
    output
}

fn push_section<'a>(
    rows: &mut Vec<(String, String)>,
    title: &str,
    items: impl Iterator<Item = (&'a str, crate::models::Money)>,
    fmt: &AmountFormat,
) {
    for (name, amount) in items {
        rows.push((format!("{}: {}", title, name), fmt.format(amount)));
    }
}

fn line(label: &str, value: &str, label_width: usize, value_width: usize) -> String {
    let label_pad = label_width.saturating_sub(label.chars().count());
    let value_pad = value_width.saturating_sub(value.chars().count());
    format!(
        "{}{}  {}{}\n",
        label,
        " ".repeat(label_pad),
        " ".repeat(value_pad),
        value
    )
}
