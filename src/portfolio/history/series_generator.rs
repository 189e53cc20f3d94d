//! Synthetic daily-series generation.
//!
//! The dashboard has no stored valuations; charts are backfilled from the
//! live totals. The generator walks a value from a start point to an end
//! point one calendar day at a time, keeping principal a step function of
//! its checkpoints and reflecting contributions in full on the day they
//! land.

use chrono::{Duration, NaiveDate};
use num_traits::FromPrimitive;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rust_decimal::Decimal;

use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// A (date, value) pair marking a known principal change.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub date: NaiveDate,
    pub principal: Decimal,
}

/// One generated day.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub total_assets: Decimal,
    pub principal: Decimal,
}

/// Daily standard deviation of the walk, as a fraction of the base value.
const WALK_SIGMA: f64 = 0.004;

/// Cap on the cumulative drift away from the linear base.
const MAX_DRIFT: f64 = 0.03;

/// Generates one point per calendar day in `[start_date, end_date]`.
///
/// - Principal at each day is the value of the last checkpoint on or
///   before it (days before the first checkpoint carry its value).
/// - Total assets interpolate linearly from `start_value` to `end_value`,
///   perturbed by a bounded random walk from `rng`.
/// - The first and last day are pinned exactly to `start_value` and
///   `end_value`; the end pin wins when the range is a single day.
/// - On a day where principal increases, the total is the prior day's
///   total plus exactly the principal delta.
///
/// Seeding `rng` makes the series reproducible.
pub fn generate_daily_series<R: Rng + ?Sized>(
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_value: Decimal,
    end_value: Decimal,
    checkpoints: &[Checkpoint],
    rng: &mut R,
) -> Result<Vec<SeriesPoint>> {
    if end_date < start_date {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Series range {} to {} is reversed",
            start_date, end_date
        ))));
    }

    let mut checkpoints: Vec<Checkpoint> = checkpoints.to_vec();
    checkpoints.sort_by_key(|c| c.date);

    let days = (end_date - start_date).num_days();
    let span = end_value - start_value;
    let step = Normal::new(0.0, WALK_SIGMA)
        .map_err(|e| Error::Calculation(format!("Invalid walk distribution: {}", e)))?;

    let mut points = Vec::with_capacity(days as usize + 1);
    let mut drift = 0.0_f64;
    let mut prev_total = start_value;
    let mut prev_principal = principal_at(&checkpoints, start_date);

    for i in 0..=days {
        let date = start_date + Duration::days(i);
        let principal = principal_at(&checkpoints, date);

        let total_assets = if i == days {
            end_value
        } else if i == 0 {
            start_value
        } else if principal > prev_principal {
            // A contribution shows up in full the day it lands.
            prev_total + (principal - prev_principal)
        } else {
            drift = (drift + step.sample(&mut *rng)).clamp(-MAX_DRIFT, MAX_DRIFT);
            let t = Decimal::from(i) / Decimal::from(days);
            let base = start_value + span * t;
            let factor = Decimal::from_f64(1.0 + drift)
                .ok_or_else(|| Error::Calculation("Walk drift is not a number".to_string()))?;
            (base * factor).round_dp(DECIMAL_PRECISION)
        };

        points.push(SeriesPoint {
            date,
            total_assets,
            principal,
        });
        prev_total = total_assets;
        prev_principal = principal;
    }

    Ok(points)
}

/// Principal in force on a date: the last checkpoint at or before it.
fn principal_at(checkpoints: &[Checkpoint], date: NaiveDate) -> Decimal {
    let mut current = match checkpoints.first() {
        Some(first) => first.principal,
        None => Decimal::ZERO,
    };
    for checkpoint in checkpoints {
        if checkpoint.date <= date {
            current = checkpoint.principal;
        } else {
            break;
        }
    }
    current
}
