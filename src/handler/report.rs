use bigdecimal::{num_bigint::BigInt, BigDecimal};
use tracing::debug;

use crate::{
    helpers::{round_to_display, truncating_div},
    model::{LabelMap, ReportRow},
    types::Prover,
};

/// Decimal places between raw speed units and mega-units.
pub const SPEED_MEGA_EXPONENT: i64 = 6;
/// Raw speed of one RTX 3080.
pub const SPEED_PER_3080: u32 = 15_000;
/// Raw speed of one RTX 4090.
pub const SPEED_PER_4090: u32 = 43_000;

/// Joins provers with their labels, keeping API order. Ranks run
/// 1..=N whether or not a label was found.
pub fn build_rows(provers: &[Prover], labels: &LabelMap) -> Vec<ReportRow> {
    provers
        .iter()
        .zip(1..)
        .map(|(prover, rank)| build_row(rank, prover, labels))
        .collect()
}

fn build_row(rank: u32, prover: &Prover, labels: &LabelMap) -> ReportRow {
    let speed_mega = &prover.network_speed
        * BigDecimal::new(BigInt::from(1), SPEED_MEGA_EXPONENT);
    debug!(
        "#{} {} total {} speed {}M",
        rank,
        prover.address,
        round_to_display(&prover.total_puzzle_credits),
        round_to_display(&speed_mega)
    );

    ReportRow {
        rank,
        label: labels.label(&prover.address).to_owned(),
        address: prover.address.to_owned(),
        total_puzzle_credits: prover.total_puzzle_credits.clone(),
        total_puzzle_credits_percentage: prover
            .total_puzzle_credits_percentage
            .to_owned(),
        daily_puzzle_credits: prover.daily_puzzle_credits.clone(),
        daily_puzzle_credits_percentage: prover
            .daily_puzzle_credits_percentage
            .to_owned(),
        network_speed_mega: speed_mega,
        network_speed_percentage: prover.network_speed_percentage.to_owned(),
        gpu_count_3080: truncating_div(&prover.network_speed, SPEED_PER_3080),
        gpu_count_4090: truncating_div(&prover.network_speed, SPEED_PER_4090),
    }
}
