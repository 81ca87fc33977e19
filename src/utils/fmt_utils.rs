/// Formats a price with "Trader Precision" adaptive decimals.
pub(crate) fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    // Determine magnitude
    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}
