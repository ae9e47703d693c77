/// Whole-dollar USD amount, e.g. `$15,000`.
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_count(amount))
}

/// Groups digits by thousands, e.g. `3,200`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
