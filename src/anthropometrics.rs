// ABOUTME: Weight resolution for parenteral nutrition dosing
// ABOUTME: BMI, Devine ideal body weight, adjusted body weight, and calculation-weight selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Weight Resolver Module
//!
//! Derives the single dosing weight every downstream formula uses. Obesity
//! handling is deliberately centralized here: the resolver selects between
//! actual and adjusted body weight once, so the nutrition engine never
//! branches on body habitus.
//!
//! # Scientific References
//!
//! - Devine, B.J. (1974). Gentamicin therapy.
//!   *Drug Intelligence and Clinical Pharmacy*, 8, 650-655.
//! - Krenitsky, J. (2005). Adjusted body weight, pro: evidence to support the
//!   use of adjusted body weight in calculating calorie requirements.
//!   *Nutrition in Clinical Practice*, 20(4), 468-473.

use crate::clinical_constants::{body_habitus, devine};
use crate::models::Sex;
use serde::{Deserialize, Serialize};

/// Derived weight values for one evaluation
///
/// Recomputed from scratch on every input change; carries no identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightProfile {
    /// Body mass index (kg/m2), 0 when height is not positive
    pub bmi: f64,

    /// Ideal body weight by the Devine formula (kg)
    pub ideal_body_weight_kg: f64,

    /// Adjusted body weight interpolating ideal and actual weight (kg)
    pub adjusted_body_weight_kg: f64,

    /// The weight every dosing formula uses (kg): adjusted when obese, actual otherwise
    pub calculation_weight_kg: f64,

    /// Whether BMI is at or above the obesity threshold of 30 kg/m2
    pub is_obese: bool,
}

/// Calculate body mass index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// Returns 0 when `height_cm` is not positive. This is a degenerate-input
/// guard, not an error: partially filled forms must never raise.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate ideal body weight using the Devine formula (1974)
///
/// Formula: IBW = base + 0.9 x (`height_cm` - 152)
/// - Men: base 50 kg
/// - Women: base 45.5 kg
///
/// The formula is applied uniformly for heights below the 152 cm reference
/// as well; no clamping is performed.
#[must_use]
pub fn calculate_ideal_body_weight(sex: Sex, height_cm: f64) -> f64 {
    let base_kg = match sex {
        Sex::Male => devine::MALE_BASE_KG,
        Sex::Female => devine::FEMALE_BASE_KG,
    };
    devine::KG_PER_CM_OVER_REFERENCE.mul_add(height_cm - devine::REFERENCE_HEIGHT_CM, base_kg)
}

/// Calculate adjusted body weight for obesity dosing
///
/// Formula: `AdjBW` = IBW + 0.25 x (actual - IBW)
///
/// Only a quarter of the excess over ideal weight counts as metabolically
/// active tissue.
#[must_use]
pub fn calculate_adjusted_body_weight(ideal_kg: f64, actual_kg: f64) -> f64 {
    body_habitus::ADJUSTED_WEIGHT_FACTOR.mul_add(actual_kg - ideal_kg, ideal_kg)
}

/// Select the weight used by every dosing formula
///
/// Adjusted body weight at or above BMI 30 (the boundary itself selects the
/// adjusted weight), actual body weight below it.
#[must_use]
pub fn select_calculation_weight(bmi: f64, actual_kg: f64, adjusted_kg: f64) -> f64 {
    if bmi >= body_habitus::OBESITY_BMI_THRESHOLD {
        adjusted_kg
    } else {
        actual_kg
    }
}

/// Resolve the complete weight profile for one evaluation
///
/// Combines BMI, Devine ideal body weight, adjusted body weight, and the
/// obesity gate into the [`WeightProfile`] consumed by the nutrition engine.
#[must_use]
pub fn resolve_weight_profile(sex: Sex, weight_kg: f64, height_cm: f64) -> WeightProfile {
    let bmi = calculate_bmi(weight_kg, height_cm);
    let ideal_body_weight_kg = calculate_ideal_body_weight(sex, height_cm);
    let adjusted_body_weight_kg = calculate_adjusted_body_weight(ideal_body_weight_kg, weight_kg);
    let is_obese = bmi >= body_habitus::OBESITY_BMI_THRESHOLD;
    let calculation_weight_kg =
        select_calculation_weight(bmi, weight_kg, adjusted_body_weight_kg);

    WeightProfile {
        bmi,
        ideal_body_weight_kg,
        adjusted_body_weight_kg,
        calculation_weight_kg,
        is_obese,
    }
}
