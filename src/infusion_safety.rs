// ABOUTME: Safety classification of glucose and lipid infusion against clinical thresholds
// ABOUTME: Glucose infusion rate (GIR), lipid load bands, and advisory messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Safety Evaluator Module
//!
//! Classifies the calculated glucose and lipid provision against fixed
//! clinical thresholds. Pure classification over the nutrition plan and the
//! dosing weight; nothing here mutates or recomputes the plan.
//!
//! Thresholds follow the ESPEN guideline on clinical nutrition in the
//! intensive care unit (Singer et al. 2019): glucose at most 5 g/kg/day,
//! lipids between 0.7 and 1.5 g/kg/day.

use crate::clinical_constants::{glucose_limits, lipid_limits, time};
use crate::nutrition_calculator::NutritionPlan;
use serde::{Deserialize, Serialize};

/// Lipid load classification bands
///
/// The three bands partition the non-negative domain; exceeding the maximum
/// takes priority over the low-intake band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LipidLoadStatus {
    /// Below 0.7 g/kg/day: essential fatty acid deficit risk if sustained
    BelowRecommended,
    /// Between 0.7 and 1.5 g/kg/day inclusive
    Adequate,
    /// Above 1.5 g/kg/day: lipid overload
    ExceedsMaximum,
}

/// Glucose infusion safety result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlucoseSafety {
    /// Glucose infusion rate in g per kg of dosing weight per day
    pub gir_g_per_kg_day: f64,
    /// The same rate expressed in mg per kg per minute
    pub gir_mg_per_kg_min: f64,
    /// Whether the rate is at or below the 5 g/kg/day limit
    pub within_limit: bool,
    /// Fixed advisory message for the classification
    pub message: String,
}

/// Lipid load safety result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LipidSafety {
    /// Lipid provision in g per kg of dosing weight per day
    pub load_g_per_kg_day: f64,
    /// Band classification of the load
    pub status: LipidLoadStatus,
    /// Whether the load is at or below the 1.5 g/kg/day maximum
    pub within_limit: bool,
    /// Whether the load is below the 0.7 g/kg/day recommended minimum
    pub below_recommended: bool,
    /// Fixed advisory message for the classification
    pub message: String,
}

/// Combined safety assessment for one evaluation
///
/// Recomputed whenever the plan or the dosing weight changes; carries no
/// independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAssessment {
    /// Glucose infusion rate classification
    pub glucose: GlucoseSafety,
    /// Lipid load classification
    pub lipid: LipidSafety,
}

/// Glucose infusion rate in g/kg/day
///
/// Returns 0 when the dosing weight is not positive (degenerate-input guard,
/// mirroring the BMI guard).
#[must_use]
pub fn glucose_infusion_rate_g_per_kg_day(glucose_g: f64, calc_weight_kg: f64) -> f64 {
    if calc_weight_kg <= 0.0 {
        return 0.0;
    }
    glucose_g / calc_weight_kg
}

/// Glucose infusion rate in mg/kg/min
///
/// Returns 0 when the dosing weight is not positive.
#[must_use]
pub fn glucose_infusion_rate_mg_per_kg_min(glucose_g: f64, calc_weight_kg: f64) -> f64 {
    if calc_weight_kg <= 0.0 {
        return 0.0;
    }
    glucose_g * 1000.0 / (calc_weight_kg * time::MINUTES_PER_DAY)
}

/// Lipid provision in g/kg/day
///
/// Returns 0 when the dosing weight is not positive.
#[must_use]
pub fn lipid_load_g_per_kg_day(lipid_g: f64, calc_weight_kg: f64) -> f64 {
    if calc_weight_kg <= 0.0 {
        return 0.0;
    }
    lipid_g / calc_weight_kg
}

/// Classify a lipid load into its band
///
/// Exceeding the maximum takes priority over the low-intake check, so a load
/// is never flagged both ways. The band edges themselves classify as
/// [`LipidLoadStatus::Adequate`]: 0.7 g/kg/day meets the minimum and
/// 1.5 g/kg/day does not exceed the maximum.
#[must_use]
pub fn classify_lipid_load(load_g_per_kg_day: f64) -> LipidLoadStatus {
    if load_g_per_kg_day > lipid_limits::MAX_G_PER_KG_DAY {
        LipidLoadStatus::ExceedsMaximum
    } else if load_g_per_kg_day < lipid_limits::MIN_RECOMMENDED_G_PER_KG_DAY {
        LipidLoadStatus::BelowRecommended
    } else {
        LipidLoadStatus::Adequate
    }
}

/// Assess the plan's glucose and lipid provision against the fixed thresholds
#[must_use]
pub fn assess_infusion_safety(plan: &NutritionPlan, calc_weight_kg: f64) -> SafetyAssessment {
    let gir_g_per_kg_day = glucose_infusion_rate_g_per_kg_day(plan.glucose_g, calc_weight_kg);
    let gir_mg_per_kg_min = glucose_infusion_rate_mg_per_kg_min(plan.glucose_g, calc_weight_kg);
    let within_limit = gir_g_per_kg_day <= glucose_limits::MAX_GIR_G_PER_KG_DAY;
    let glucose_message = if within_limit {
        "Within safe range.".to_owned()
    } else {
        "Exceeds 5 g/kg/day. Risk of hyperglycemia and increased CO2 production.".to_owned()
    };

    let load_g_per_kg_day = lipid_load_g_per_kg_day(plan.lipid_g, calc_weight_kg);
    let status = classify_lipid_load(load_g_per_kg_day);
    let lipid_message = match status {
        LipidLoadStatus::ExceedsMaximum => "Exceeds 1.5 g/kg/day (lipid overload).".to_owned(),
        LipidLoadStatus::BelowRecommended => {
            "Low intake (below 0.7 g/kg/day). Risk of essential fatty acid deficit if sustained."
                .to_owned()
        }
        LipidLoadStatus::Adequate => "Adequate lipid intake.".to_owned(),
    };

    SafetyAssessment {
        glucose: GlucoseSafety {
            gir_g_per_kg_day,
            gir_mg_per_kg_min,
            within_limit,
            message: glucose_message,
        },
        lipid: LipidSafety {
            load_g_per_kg_day,
            status,
            within_limit: status != LipidLoadStatus::ExceedsMaximum,
            below_recommended: status == LipidLoadStatus::BelowRecommended,
            message: lipid_message,
        },
    }
}
