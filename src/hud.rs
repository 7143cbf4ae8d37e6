//! HUD text formatting

/// Format an amount with K/M/B suffixes for display
pub fn format_amount(amount: f64) -> String {
    if amount >= 1e9 {
        format!("{:.2}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("{:.2}M", amount / 1e6)
    } else if amount >= 1e3 {
        format!("{:.2}K", amount / 1e3)
    } else {
        format!("{amount:.2}")
    }
}

/// Balance readout line
pub fn balance_label(balance: f64) -> String {
    format!("Balance: {} ZNC", format_amount(balance))
}

/// Mining rate readout line
pub fn rate_label(mining_rate: f64) -> String {
    format!("Mining Rate: {mining_rate:.2} ZNC/sec")
}

/// Upgrade button caption, showing the current cost
pub fn upgrade_label(upgrade_cost: f64) -> String {
    format!("Upgrade Mining (Cost: {} ZNC)", format_amount(upgrade_cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_suffixes() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1500.0), "1.50K");
        assert_eq!(format_amount(2_500_000.0), "2.50M");
        assert_eq!(format_amount(3_100_000_000.0), "3.10B");
    }

    #[test]
    fn test_labels() {
        assert_eq!(balance_label(12.5), "Balance: 12.50 ZNC");
        assert_eq!(rate_label(0.1), "Mining Rate: 0.10 ZNC/sec");
        assert_eq!(upgrade_label(5.0), "Upgrade Mining (Cost: 5.00 ZNC)");
    }
}
