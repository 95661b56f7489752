use bigdecimal::BigDecimal;
use serde::Deserialize;

/// One entry of the prover rank list, as returned by the API. Decimal
/// fields take either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prover {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "TotalPuzzleCredits")]
    pub total_puzzle_credits: BigDecimal,
    #[serde(rename = "TotalPuzzleCreditsPercentage")]
    pub total_puzzle_credits_percentage: String,
    #[serde(rename = "DailyPuzzleCredits")]
    pub daily_puzzle_credits: BigDecimal,
    #[serde(rename = "DailyPuzzleCreditsPercentage")]
    pub daily_puzzle_credits_percentage: String,
    #[serde(rename = "NetworkSpeed")]
    pub network_speed: BigDecimal,
    #[serde(rename = "NetworkSpeedPercentage")]
    pub network_speed_percentage: String,
}

#[derive(Debug, Deserialize)]
pub struct ProverRankList {
    pub data: Vec<Prover>,
}
