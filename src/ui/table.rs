//! Table rendering for the record list.

use crate::core::ledger::HourLedger;
use crate::utils::formatting::{format_money, format_number};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 8] = [
    "#",
    "Name",
    "Start Time",
    "End Time",
    "Hourly Rate",
    "Days",
    "Total Hours",
    "Total Compensation",
];

/// Cell text for every row, row numbers starting at 1.
pub fn rows(ledger: &HourLedger) -> Vec<[String; 8]> {
    ledger
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.name().to_string(),
                format_number(r.start_time()),
                format_number(r.end_time()),
                format_number(r.hourly_rate()),
                format_number(r.days()),
                format_number(r.total_hours()),
                format_number(r.total_compensation()),
            ]
        })
        .collect()
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

fn separator(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for w in widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('+');
    }
    out
}

fn line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (cell, w) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(&pad(cell.as_ref(), *w));
        out.push_str(" |");
    }
    out
}

/// Plain-text table followed by the running total.
pub fn render(ledger: &HourLedger, currency_symbol: &str) -> String {
    let body = rows(ledger);

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let sep = separator(&widths);
    let mut out = Vec::with_capacity(body.len() + 6);
    out.push(sep.clone());
    out.push(line(&HEADERS, &widths));
    out.push(sep.clone());
    for row in &body {
        out.push(line(row, &widths));
    }
    out.push(sep);
    out.push(String::new());
    out.push(format!(
        "Total Compensation: {}",
        format_money(currency_symbol, ledger.total_compensation())
    ));

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourEntry;

    fn ledger() -> HourLedger {
        let mut l = HourLedger::new();
        l.add(HourEntry {
            name: "José".into(),
            start_time: 8.0,
            end_time: 18.0,
            hourly_rate: 20.0,
            days: 5.0,
        });
        l.add(HourEntry {
            name: "Bo".into(),
            start_time: 9.0,
            end_time: 12.5,
            hourly_rate: 10.0,
            days: 1.0,
        });
        l
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let r = rows(&ledger());
        assert_eq!(r[0][0], "1");
        assert_eq!(r[1][0], "2");
        assert_eq!(r[0][6], "50");
        assert_eq!(r[0][7], "1000");
        assert_eq!(r[1][6], "3.5");
    }

    #[test]
    fn render_shows_total_footer() {
        let out = render(&ledger(), "$");
        assert!(out.contains("Total Compensation: $1035"));
        assert!(out.contains("José"));
    }

    #[test]
    fn lines_have_equal_display_width() {
        let out = render(&ledger(), "$");
        let widths: Vec<usize> = out
            .lines()
            .take_while(|l| !l.is_empty())
            .map(UnicodeWidthStr::width)
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_ledger_total_is_zero() {
        let out = render(&HourLedger::new(), "$");
        assert!(out.ends_with("Total Compensation: $0"));
    }
}
