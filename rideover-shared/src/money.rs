/// Monetary amounts are carried as integer pesewas (minor units of the
/// Ghanaian cedi) to keep fare arithmetic exact.
pub type Pesewas = i32;

pub const CEDI_SYMBOL: &str = "₵";

/// Format an amount for display, e.g. 2500 -> "₵25.00".
pub fn format_pesewas(amount: Pesewas) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}{}.{:02}", sign, CEDI_SYMBOL, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_pesewas(2500), "₵25.00");
        assert_eq!(format_pesewas(250), "₵2.50");
        assert_eq!(format_pesewas(0), "₵0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_pesewas(-4500), "-₵45.00");
    }
}
