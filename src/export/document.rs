//! Printable document export
//!
//! Renders a self-contained HTML report: embedded styles, a title, record
//! count, currency total, and a row-per-record table, with a script that
//! triggers printing on load. No external assets, so the document renders
//! identically anywhere it is opened.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money};

use super::template::Column;

/// Render the printable report document
pub fn render(
    expenses: &[Expense],
    title: &str,
    columns: &[Column],
    generated_on: NaiveDate,
) -> String {
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let generated = format!(
        "{} {}, {}",
        generated_on.format("%B"),
        generated_on.day(),
        generated_on.year()
    );

    let header_cells: String = columns
        .iter()
        .map(|c| {
            if *c == Column::Amount {
                format!("<th class=\"amount\">{}</th>", c.header())
            } else {
                format!("<th>{}</th>", c.header())
            }
        })
        .collect();

    let body_rows: String = expenses
        .iter()
        .map(|e| {
            let cells: String = columns
                .iter()
                .map(|c| match c {
                    Column::Date => format!("<td>{}</td>", e.date.format("%Y-%m-%d")),
                    Column::Category => format!("<td>{}</td>", escape_html(e.category.name())),
                    Column::Description => format!("<td>{}</td>", escape_html(&e.description)),
                    Column::Amount => format!("<td class=\"amount\">{}</td>", e.amount),
                })
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{title}</title>
<style>
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; padding: 40px; color: #1f2937; }}
h1 {{ font-size: 22px; margin-bottom: 4px; }}
.subtitle {{ color: #6b7280; font-size: 13px; margin-bottom: 24px; }}
table {{ width: 100%; border-collapse: collapse; font-size: 13px; }}
th {{ text-align: left; padding: 10px 12px; background: #f3f4f6; border-bottom: 2px solid #e5e7eb; font-weight: 600; }}
td {{ padding: 9px 12px; border-bottom: 1px solid #f3f4f6; }}
tr:nth-child(even) td {{ background: #f9fafb; }}
.amount {{ text-align: right; font-variant-numeric: tabular-nums; }}
.total {{ margin-top: 16px; text-align: right; font-size: 15px; font-weight: 700; }}
@media print {{ body {{ padding: 20px; }} }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="subtitle">{count} record{plural} &middot; {total} total &middot; Generated {generated}</p>
<table>
<thead><tr>{header_cells}</tr></thead>
<tbody>{body_rows}</tbody>
</table>
<p class="total">Total: {total}</p>
<script>window.onload = function() {{ window.print(); }}</script>
</body>
</html>
"#,
        title = escape_html(title),
        count = expenses.len(),
        plural = if expenses.len() == 1 { "" } else { "s" },
        total = total,
        generated = generated,
        header_cells = header_cells,
        body_rows = body_rows,
    )
}

/// Escape text for embedding in HTML
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const COLUMNS: [Column; 4] = [
        Column::Date,
        Column::Category,
        Column::Description,
        Column::Amount,
    ];

    fn expense(cents: i64, description: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            Category::Food,
            description,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        )
    }

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_document_embeds_title_count_and_total() {
        let expenses = vec![expense(1250, "Lunch"), expense(4000, "Dinner")];
        let html = render(&expenses, "Tax Report", &COLUMNS, generated_on());

        assert!(html.contains("<h1>Tax Report</h1>"));
        assert!(html.contains("2 records"));
        assert!(html.contains("Total: $52.50"));
        assert!(html.contains("Generated March 15, 2024"));
    }

    #[test]
    fn test_singular_record_count() {
        let html = render(&[expense(100, "x")], "Report", &COLUMNS, generated_on());
        assert!(html.contains("1 record &middot;"));
    }

    #[test]
    fn test_rows_follow_column_order() {
        let columns = [Column::Description, Column::Amount];
        let html = render(&[expense(1250, "Lunch")], "Report", &columns, generated_on());

        assert!(html.contains("<tr><td>Lunch</td><td class=\"amount\">$12.50</td></tr>"));
        assert!(html.contains("<thead><tr><th>Description</th><th class=\"amount\">Amount</th></tr></thead>"));
    }

    #[test]
    fn test_html_is_escaped() {
        let html = render(
            &[expense(100, "<script>alert(1)</script>")],
            "R&D",
            &COLUMNS,
            generated_on(),
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;D"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_self_contained_with_auto_print() {
        let html = render(&[], "Report", &COLUMNS, generated_on());
        assert!(html.contains("window.print()"));
        assert!(!html.contains("href="));
        assert!(!html.contains("src="));
    }
}
