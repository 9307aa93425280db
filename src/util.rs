use rust_decimal::{Decimal, RoundingStrategy};

/// Format a meso amount with thousand separators, rounded to whole meso.
/// e.g. `1234567` → `"1,234,567"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let whole = val
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.trunc().to_string();

    let mut with_commas = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(ch);
    }

    if val < Decimal::ZERO && !whole.is_zero() {
        format!("-{with_commas}")
    } else {
        with_commas
    }
}

/// Compact Korean-unit form used on summary cards.
/// e.g. `250000000` → `"2.5억"`, `35000` → `"4만"`, `9999` → `"9999"`
pub(crate) fn format_meso(val: Decimal) -> String {
    let eok = Decimal::from(100_000_000);
    let man = Decimal::from(10_000);
    if val >= eok {
        let units = (val / eok).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{units:.1}억")
    } else if val >= man {
        let units = (val / man).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{units:.0}만")
    } else {
        val.trunc().to_string()
    }
}

/// Shorten a description to at most `width` characters for one-line
/// listings. Cut text ends in "…".
pub(crate) fn truncate(s: &str, width: usize) -> String {
    match s.char_indices().nth(width) {
        None => s.to_string(),
        Some(_) if width == 0 => String::new(),
        Some(_) => {
            let keep = s
                .char_indices()
                .nth(width - 1)
                .map_or(s.len(), |(idx, _)| idx);
            format!("{}…", &s[..keep])
        }
    }
}
