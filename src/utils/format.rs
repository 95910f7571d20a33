/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Display formatting for dates and money amounts, es-ES conventions

use chrono::{DateTime, Utc};

/// Formats a timestamp as a Spanish-locale date, `dd/mm/yyyy`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats an amount as euros with Spanish grouping, e.g. `1.234,56 €`
///
/// Thousands are separated with `.`, decimals with `,`, always two decimal
/// places.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part} €")
}
