// ABOUTME: Single-call prescription pipeline combining weight resolution, calculation, and safety
// ABOUTME: Boundary validation of degenerate inputs and the flattened serializable output record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Prescription Pipeline Module
//!
//! The one logical call chain the presentation layer consumes:
//! weight resolution, nutrition calculation, then safety assessment, in that
//! order. Stateless and idempotent; every call recomputes from scratch.
//!
//! This module is also the validation boundary. The leaf formulas are total
//! over positive inputs and deliberately do not range-check (the BMI and GIR
//! guards excepted), so [`evaluate`] rejects degenerate values before any
//! formula runs.

use crate::anthropometrics::{resolve_weight_profile, WeightProfile};
use crate::errors::{AppError, AppResult};
use crate::infusion_safety::{assess_infusion_safety, SafetyAssessment};
use crate::models::{PatientProfile, PrescriptionTargets};
use crate::nutrition_calculator::{calculate_nutrition_plan, NutritionPlan};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Combined output record of one evaluation
///
/// Serializes as one flat record: the weight profile and plan fields are
/// flattened to the top level, with the safety classifications nested under
/// `safety`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionAssessment {
    /// Resolved weight values
    #[serde(flatten)]
    pub weight_profile: WeightProfile,

    /// Macronutrient and volume breakdown
    #[serde(flatten)]
    pub plan: NutritionPlan,

    /// Glucose and lipid safety classification
    pub safety: SafetyAssessment,
}

/// Reject degenerate or out-of-range inputs before any formula runs
fn validate_inputs(patient: &PatientProfile, targets: &PrescriptionTargets) -> AppResult<()> {
    if !patient.weight_kg.is_finite() || patient.weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be a positive number of kilograms, got {}",
            patient.weight_kg
        )));
    }
    if !patient.height_cm.is_finite() || patient.height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be a positive number of centimeters, got {}",
            patient.height_cm
        )));
    }
    if !targets.amino_acid_concentration_pct.is_finite()
        || targets.amino_acid_concentration_pct <= 0.0
        || targets.amino_acid_concentration_pct > 100.0
    {
        return Err(AppError::invalid_input(format!(
            "Amino acid concentration must be a percentage in (0, 100], got {}",
            targets.amino_acid_concentration_pct
        )));
    }
    if !targets.kcal_per_kg.is_finite() || targets.kcal_per_kg < 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "Caloric target must be non-negative kcal/kg, got {}",
            targets.kcal_per_kg
        )));
    }
    if !targets.protein_per_kg.is_finite() || targets.protein_per_kg < 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "Protein target must be non-negative g/kg, got {}",
            targets.protein_per_kg
        )));
    }
    if !targets.start_fraction.is_finite()
        || targets.start_fraction <= 0.0
        || targets.start_fraction > 1.0
    {
        return Err(AppError::value_out_of_range(format!(
            "Start fraction must be in (0, 1], got {}",
            targets.start_fraction
        )));
    }
    if !targets.glucose_fraction_pct.is_finite()
        || !(0.0..=100.0).contains(&targets.glucose_fraction_pct)
    {
        return Err(AppError::value_out_of_range(format!(
            "Glucose fraction must be a percentage in [0, 100], got {}",
            targets.glucose_fraction_pct
        )));
    }
    Ok(())
}

/// Run the full prescription pipeline for one set of inputs
///
/// Resolves the dosing weight, derives the nutrition plan, and classifies the
/// glucose and lipid provision, returning the combined record.
///
/// # Errors
///
/// Returns [`AppError`] when an input is degenerate (non-positive weight,
/// height, or amino acid concentration) or outside its documented range
/// (start fraction, glucose fraction, negative targets). The leaf formulas
/// are never reached with such values.
pub fn evaluate(
    patient: &PatientProfile,
    targets: &PrescriptionTargets,
) -> AppResult<PrescriptionAssessment> {
    validate_inputs(patient, targets)?;

    let weight_profile = resolve_weight_profile(patient.sex, patient.weight_kg, patient.height_cm);
    debug!(
        bmi = weight_profile.bmi,
        calculation_weight_kg = weight_profile.calculation_weight_kg,
        is_obese = weight_profile.is_obese,
        "resolved dosing weight"
    );

    let plan = calculate_nutrition_plan(weight_profile.calculation_weight_kg, targets);
    let safety = assess_infusion_safety(&plan, weight_profile.calculation_weight_kg);
    debug!(
        kcal_today = plan.kcal_today,
        volume_total_ml = plan.volume_total_ml,
        glucose_within_limit = safety.glucose.within_limit,
        lipid_status = ?safety.lipid.status,
        "prescription evaluated"
    );

    Ok(PrescriptionAssessment {
        weight_profile,
        plan,
        safety,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn standard_patient() -> PatientProfile {
        PatientProfile {
            sex: Sex::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
        }
    }

    fn standard_targets() -> PrescriptionTargets {
        PrescriptionTargets {
            kcal_per_kg: 25.0,
            protein_per_kg: 1.5,
            start_fraction: 0.8,
            glucose_fraction_pct: 65.0,
            amino_acid_concentration_pct: 15.0,
        }
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let patient = PatientProfile {
            weight_kg: 0.0,
            ..standard_patient()
        };
        let result = evaluate(&patient, &standard_targets());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_zero_amino_acid_concentration() {
        let targets = PrescriptionTargets {
            amino_acid_concentration_pct: 0.0,
            ..standard_targets()
        };
        let result = evaluate(&standard_patient(), &targets);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_start_fraction_above_one() {
        let targets = PrescriptionTargets {
            start_fraction: 1.2,
            ..standard_targets()
        };
        let result = evaluate(&standard_patient(), &targets);
        assert!(matches!(result, Err(AppError::ValueOutOfRange(_))));
    }
}
