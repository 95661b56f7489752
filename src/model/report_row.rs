use bigdecimal::BigDecimal;

/// One spreadsheet line. Amounts keep full precision; rounding to two
/// places happens only in the cell format or through
/// [`round_to_display`](crate::helpers::round_to_display). The hardware
/// counts are integral.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub rank: u32,
    pub label: String,
    pub address: String,
    pub total_puzzle_credits: BigDecimal,
    pub total_puzzle_credits_percentage: String,
    pub daily_puzzle_credits: BigDecimal,
    pub daily_puzzle_credits_percentage: String,
    pub network_speed_mega: BigDecimal,
    pub network_speed_percentage: String,
    pub gpu_count_3080: BigDecimal,
    pub gpu_count_4090: BigDecimal,
}
