// ABOUTME: Macronutrient and volume derivation for a parenteral nutrition bag
// ABOUTME: Energy targets, protein and nitrogen, glucose/lipid split, component volumes and rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Nutrition Engine Module
//!
//! Turns the resolved dosing weight and the prescription targets into the
//! complete macronutrient and volume breakdown of the bag. The engine is a
//! pure derivation chain: each step is a formula over prior results, and the
//! order matters because later steps subtract or split earlier ones.
//!
//! The engine performs no range checking. Inputs are pre-validated at the
//! pipeline boundary; handed nonsensical values it produces out-of-range but
//! arithmetically defined results rather than guessing at corrections.

use crate::clinical_constants::{energy_density, nitrogen, solutions, time};
use crate::models::PrescriptionTargets;
use serde::{Deserialize, Serialize};

/// Complete macronutrient and volume breakdown for one evaluation
///
/// All values are non-negative given non-negative inputs. The total volume is
/// the sum of the three component volumes, and the infusion rate spreads that
/// total over 24 hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Full caloric target (kcal/day)
    pub kcal_target: f64,

    /// Calories delivered today after applying the start fraction (kcal/day)
    pub kcal_today: f64,

    /// Protein provision (g/day)
    pub protein_g: f64,

    /// Nitrogen equivalent of the protein provision (g/day)
    pub nitrogen_g: f64,

    /// Glucose provision (g/day)
    pub glucose_g: f64,

    /// Lipid provision (g/day)
    pub lipid_g: f64,

    /// Volume of amino acid solution at the prescribed concentration (ml/day)
    pub volume_amino_ml: f64,

    /// Volume of 50% dextrose (ml/day)
    pub volume_dextrose_ml: f64,

    /// Volume of 20% lipid emulsion (ml/day)
    pub volume_lipid_ml: f64,

    /// Total bag volume (ml/day)
    pub volume_total_ml: f64,

    /// Continuous infusion rate over 24 hours (ml/h)
    pub infusion_rate_ml_per_h: f64,
}

/// Calculate the complete nutrition plan from dosing weight and targets
///
/// Derivation order:
/// 1. Energy: full target from kcal/kg, today's delivery from the start fraction
/// 2. Protein: grams from g/kg, nitrogen at 6.25 g protein per g N, protein calories at 4 kcal/g
/// 3. Non-protein budget: today's calories minus protein calories, floored at zero
/// 4. Split: glucose share of the non-protein budget, lipid takes the remainder
/// 5. Mass: glucose at 3.4 kcal/g (IV dextrose), lipid at 9 kcal/g
/// 6. Volumes: 50% dextrose, 20% lipid emulsion, amino acids at the prescribed concentration
/// 7. Totals: component sum and the 24 h infusion rate
///
/// The floor in step 3 means an aggressive protein target can consume the
/// entire energy budget; the glucose/lipid split then zeroes out silently
/// rather than going negative or erroring.
///
/// Volume formulas divide by the amino acid concentration and are only
/// defined for positive concentrations; the pipeline boundary rejects
/// non-positive values before this function runs.
#[must_use]
pub fn calculate_nutrition_plan(
    calc_weight_kg: f64,
    targets: &PrescriptionTargets,
) -> NutritionPlan {
    // Step 1: Energy targets
    let kcal_target = targets.kcal_per_kg * calc_weight_kg;
    let kcal_today = kcal_target * targets.start_fraction;

    // Step 2: Protein provision and its derived values
    let protein_g = targets.protein_per_kg * calc_weight_kg;
    let nitrogen_g = protein_g / nitrogen::GRAMS_PROTEIN_PER_GRAM_NITROGEN;
    let kcal_from_protein = protein_g * energy_density::PROTEIN_KCAL_PER_G;

    // Step 3: Non-protein energy budget, floored at zero
    let kcal_nonprotein = (kcal_today - kcal_from_protein).max(0.0);

    // Step 4: Glucose/lipid split of the non-protein budget
    let kcal_glucose = kcal_nonprotein * (targets.glucose_fraction_pct / 100.0);
    let kcal_lipid = kcal_nonprotein - kcal_glucose;

    // Step 5: Macronutrient mass from caloric density
    let glucose_g = kcal_glucose / energy_density::DEXTROSE_KCAL_PER_G;
    let lipid_g = kcal_lipid / energy_density::LIPID_KCAL_PER_G;

    // Step 6: Component volumes from stock concentrations
    let volume_dextrose_ml = glucose_g / solutions::DEXTROSE_50_G_PER_ML;
    let volume_lipid_ml = lipid_g / solutions::LIPID_20_G_PER_ML;
    let volume_amino_ml = protein_g * 100.0 / targets.amino_acid_concentration_pct;

    // Step 7: Totals
    let volume_total_ml = volume_amino_ml + volume_dextrose_ml + volume_lipid_ml;
    let infusion_rate_ml_per_h = volume_total_ml / time::HOURS_PER_DAY;

    NutritionPlan {
        kcal_target,
        kcal_today,
        protein_g,
        nitrogen_g,
        glucose_g,
        lipid_g,
        volume_amino_ml,
        volume_dextrose_ml,
        volume_lipid_ml,
        volume_total_ml,
        infusion_rate_ml_per_h,
    }
}
