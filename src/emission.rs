//! Coin emission schedule
//!
//! Per-block emission starts at a base amount and decays once a year by a
//! fixed permille rate, stopping when it drops below the mint end line.
//! Cadence and cutoff travel in [`EmissionSchedule`] instead of globals so
//! alternative schedules can be evaluated side by side.

use crate::constants::*;
use crate::error::{ConsensusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emission parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionSchedule {
    /// Blocks produced per year
    pub blocks_per_year: i64,
    /// Emission ends below this per-block amount (base units)
    pub mint_end_line: i64,
}

impl Default for EmissionSchedule {
    fn default() -> Self {
        Self {
            blocks_per_year: BLOCKS_PER_YEAR,
            mint_end_line: MINT_END_LINE,
        }
    }
}

impl EmissionSchedule {
    /// Parse a schedule from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConsensusError::Emission(e.to_string()))
    }
}

/// One year of emission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionYear {
    /// 1-based year number
    pub year: u32,
    /// Total emitted up to and including this year
    pub cumulative: i64,
    /// Emitted during this year
    pub year_total: i64,
    /// Per-block amount during this year
    pub per_block: i64,
}

/// Year-by-year emission table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionReport {
    pub years: Vec<EmissionYear>,
    /// Total emission in base units
    pub total: i64,
}

/// AwardTotal: ℤ × ℤ × 𝒮 → ℤ
///
/// For base amount b (coins) and decay rate r (permille):
/// 1. p₀ = b × C
/// 2. While pₖ ≥ L: year total yₖ = pₖ × B, pₖ₊₁ = ⌊pₖ × r / 1000⌋
/// 3. Return Σ yₖ
///
/// Where:
/// - C = UNITS_PER_COIN
/// - B = blocks_per_year
/// - L = mint_end_line
pub fn award_total(base_coins: i64, rate_permille: i64, schedule: &EmissionSchedule) -> Result<EmissionReport> {
    if !(0..RATE_SCALE).contains(&rate_permille) {
        return Err(ConsensusError::Emission(format!(
            "rate must be in [0, {RATE_SCALE}) permille, got {rate_permille}"
        )));
    }
    if schedule.mint_end_line <= 0 {
        return Err(ConsensusError::Emission(format!(
            "mint end line must be positive, got {}",
            schedule.mint_end_line
        )));
    }

    let overflow = || ConsensusError::Emission("emission total overflows i64".to_string());

    let mut per_block = base_coins.checked_mul(UNITS_PER_COIN).ok_or_else(overflow)?;
    let mut total = 0i64;
    let mut years = Vec::new();
    let mut year = 0u32;

    while per_block >= schedule.mint_end_line {
        let year_total = per_block.checked_mul(schedule.blocks_per_year).ok_or_else(overflow)?;
        total = total.checked_add(year_total).ok_or_else(overflow)?;
        year += 1;
        years.push(EmissionYear {
            year,
            cumulative: total,
            year_total,
            per_block,
        });
        // per_block * rate stays below per_block * 1000; only the product can overflow
        per_block = per_block.checked_mul(rate_permille).ok_or_else(overflow)? / RATE_SCALE;
    }

    tracing::debug!(years = years.len(), total, "emission schedule computed");
    Ok(EmissionReport { years, total })
}

impl fmt::Display for EmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Year\tCumulative\t\t\t(Yearly)\t\tPer block")?;
        writeln!(f, "{}", "-".repeat(70))?;
        for y in &self.years {
            writeln!(f, "{}\t{} \t({})\t{}", y.year, y.cumulative, y.year_total, y.per_block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = EmissionSchedule::default();
        assert_eq!(schedule.blocks_per_year, 87_661);
        assert_eq!(schedule.mint_end_line, 300_000_000);
    }

    #[test]
    fn test_award_total_halving() {
        // 40 -> 20 -> 10 -> 5 -> 2.5 (stop)
        let report = award_total(40, 500, &EmissionSchedule::default()).unwrap();
        assert_eq!(report.years.len(), 4);

        let per_block: Vec<i64> = report.years.iter().map(|y| y.per_block).collect();
        assert_eq!(per_block, vec![40 * UNITS_PER_COIN, 20 * UNITS_PER_COIN, 10 * UNITS_PER_COIN, 5 * UNITS_PER_COIN]);
        assert_eq!(report.total, 75 * UNITS_PER_COIN * BLOCKS_PER_YEAR);
        assert_eq!(report.years.last().unwrap().cumulative, report.total);
    }

    #[test]
    fn test_award_total_year_totals() {
        let report = award_total(10, 900, &EmissionSchedule::default()).unwrap();
        let mut running = 0;
        for (i, y) in report.years.iter().enumerate() {
            assert_eq!(y.year as usize, i + 1);
            assert_eq!(y.year_total, y.per_block * BLOCKS_PER_YEAR);
            running += y.year_total;
            assert_eq!(y.cumulative, running);
            assert!(y.per_block >= MINT_END_LINE);
        }
        assert_eq!(report.total, running);
    }

    #[test]
    fn test_award_total_below_end_line() {
        let report = award_total(2, 900, &EmissionSchedule::default()).unwrap();
        assert!(report.years.is_empty());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_award_total_zero_rate_single_year() {
        let report = award_total(3, 0, &EmissionSchedule::default()).unwrap();
        assert_eq!(report.years.len(), 1);
        assert_eq!(report.total, 3 * UNITS_PER_COIN * BLOCKS_PER_YEAR);
    }

    #[test]
    fn test_award_total_invalid_rate() {
        assert!(award_total(50, 1000, &EmissionSchedule::default()).is_err());
        assert!(award_total(50, -1, &EmissionSchedule::default()).is_err());
    }

    #[test]
    fn test_award_total_overflow() {
        let result = award_total(i64::MAX / 10, 500, &EmissionSchedule::default());
        assert!(matches!(result, Err(ConsensusError::Emission(_))));
    }

    #[test]
    fn test_award_total_custom_schedule() {
        let schedule = EmissionSchedule {
            blocks_per_year: 10,
            mint_end_line: UNITS_PER_COIN,
        };
        let report = award_total(4, 500, &schedule).unwrap();
        // 4, 2, 1
        assert_eq!(report.years.len(), 3);
        assert_eq!(report.total, 70 * UNITS_PER_COIN);
    }

    #[test]
    fn test_schedule_from_json() {
        let schedule = EmissionSchedule::from_json(r#"{"blocks_per_year": 525600}"#).unwrap();
        assert_eq!(schedule.blocks_per_year, 525_600);
        assert_eq!(schedule.mint_end_line, MINT_END_LINE);
        assert!(EmissionSchedule::from_json("not json").is_err());
    }

    #[test]
    fn test_report_display() {
        let report = award_total(40, 500, &EmissionSchedule::default()).unwrap();
        let table = report.to_string();
        assert_eq!(table.lines().count(), 2 + 4);
        assert!(table.lines().nth(2).unwrap().starts_with("1\t"));
    }
}
