//! Currency and percentage formatting (pt-BR conventions)

/// Format an amount as `R$ 1.234,56`
///
/// Thousands are grouped with `.`, cents follow `,` and are rounded to two
/// places. Negative amounts carry a leading `-`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {},{:02}", sign, symbol, grouped, fraction)
}

/// Format a rate as a percentage, keeping up to two decimals (`12,5%`)
pub fn format_percent(rate: f64) -> String {
    let text = format!("{:.2}", rate * 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", text.replace('.', ","))
}
