// ABOUTME: Integration tests for the macronutrient, volume, and rate calculation chain
// ABOUTME: Covers the standard adult scenario, the protein-dominated floor, and split edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tpn_calculator::models::PrescriptionTargets;
use tpn_calculator::nutrition_calculator::calculate_nutrition_plan;

fn standard_targets() -> PrescriptionTargets {
    PrescriptionTargets {
        kcal_per_kg: 25.0,
        protein_per_kg: 1.5,
        start_fraction: 0.8,
        glucose_fraction_pct: 65.0,
        amino_acid_concentration_pct: 15.0,
    }
}

// === Standard adult scenario ===

#[test]
fn test_standard_adult_energy_and_protein() {
    let plan = calculate_nutrition_plan(70.0, &standard_targets());

    // Expected: 25 * 70 = 1750, started at 80% = 1400
    assert!((plan.kcal_target - 1750.0).abs() < 1e-9);
    assert!((plan.kcal_today - 1400.0).abs() < 1e-9);

    // Expected: 1.5 * 70 = 105 g protein, nitrogen 105 / 6.25 = 16.8 g
    assert!((plan.protein_g - 105.0).abs() < 1e-9);
    assert!((plan.nitrogen_g - 16.8).abs() < 1e-9);
}

#[test]
fn test_standard_adult_nonprotein_split_and_grams() {
    let plan = calculate_nutrition_plan(70.0, &standard_targets());

    // Non-protein: 1400 - 420 = 980 kcal, glucose 65% = 637 kcal, lipid 343 kcal
    // Expected grams: 637 / 3.4 = 187.353 and 343 / 9 = 38.111
    assert!(
        (plan.glucose_g - 187.352_941_176).abs() < 1e-6,
        "glucose should be approximately 187.353 g, got {}",
        plan.glucose_g
    );
    assert!(
        (plan.lipid_g - 38.111_111_111).abs() < 1e-6,
        "lipid should be approximately 38.111 g, got {}",
        plan.lipid_g
    );
}

#[test]
fn test_standard_adult_volumes_and_rate() {
    let plan = calculate_nutrition_plan(70.0, &standard_targets());

    // Expected: dextrose 187.353 / 0.5 = 374.706 mL, lipid 38.111 / 0.2 = 190.556 mL,
    // amino acids 105 * 100 / 15 = 700 mL, total 1265.261 mL, rate 52.72 mL/h
    assert!((plan.volume_dextrose_ml - 374.705_882_353).abs() < 1e-6);
    assert!((plan.volume_lipid_ml - 190.555_555_556).abs() < 1e-6);
    assert!((plan.volume_amino_ml - 700.0).abs() < 1e-9);
    assert!(
        (plan.volume_total_ml - 1265.261_437_908).abs() < 1e-6,
        "total volume should be approximately 1265.26 mL, got {}",
        plan.volume_total_ml
    );
    assert!(
        (plan.infusion_rate_ml_per_h - 52.719_226_58).abs() < 1e-6,
        "rate should be approximately 52.72 mL/h, got {}",
        plan.infusion_rate_ml_per_h
    );
}

#[test]
fn test_volume_total_is_sum_of_components() {
    let plan = calculate_nutrition_plan(83.4, &standard_targets());

    let sum = plan.volume_amino_ml + plan.volume_dextrose_ml + plan.volume_lipid_ml;
    assert!((plan.volume_total_ml - sum).abs() < 1e-9);
    assert!((plan.infusion_rate_ml_per_h * 24.0 - plan.volume_total_ml).abs() < 1e-9);
}

// === Protein-dominated floor ===

#[test]
fn test_protein_kcal_above_today_floors_nonprotein_to_zero() {
    let targets = PrescriptionTargets {
        kcal_per_kg: 10.0,
        protein_per_kg: 3.0,
        start_fraction: 0.25,
        ..standard_targets()
    };
    let plan = calculate_nutrition_plan(70.0, &targets);

    // Today: 10 * 70 * 0.25 = 175 kcal; protein alone is 210 g * 4 = 840 kcal
    assert!((plan.kcal_today - 175.0).abs() < 1e-9);
    assert!((plan.protein_g - 210.0).abs() < 1e-9);
    assert!(
        plan.glucose_g.abs() < f64::EPSILON,
        "glucose must floor to zero, got {}",
        plan.glucose_g
    );
    assert!(plan.lipid_g.abs() < f64::EPSILON);
    assert!(plan.volume_dextrose_ml.abs() < f64::EPSILON);
    assert!(plan.volume_lipid_ml.abs() < f64::EPSILON);

    // Amino acid volume survives: 210 * 100 / 15 = 1400 mL
    assert!((plan.volume_amino_ml - 1400.0).abs() < 1e-9);
    assert!((plan.volume_total_ml - 1400.0).abs() < 1e-9);
}

// === Split edges ===

#[test]
fn test_glucose_fraction_one_hundred_sends_all_nonprotein_to_glucose() {
    let targets = PrescriptionTargets {
        glucose_fraction_pct: 100.0,
        ..standard_targets()
    };
    let plan = calculate_nutrition_plan(70.0, &targets);

    // All 980 non-protein kcal as glucose: 980 / 3.4 = 288.235 g
    assert!((plan.glucose_g - 288.235_294_118).abs() < 1e-6);
    assert!(plan.lipid_g.abs() < 1e-9);
    assert!(plan.volume_lipid_ml.abs() < 1e-9);
}

#[test]
fn test_glucose_fraction_zero_sends_all_nonprotein_to_lipid() {
    let targets = PrescriptionTargets {
        glucose_fraction_pct: 0.0,
        ..standard_targets()
    };
    let plan = calculate_nutrition_plan(70.0, &targets);

    assert!(plan.glucose_g.abs() < 1e-9);
    // All 980 non-protein kcal as lipid: 980 / 9 = 108.889 g
    assert!((plan.lipid_g - 108.888_888_889).abs() < 1e-6);
}

#[test]
fn test_full_target_when_start_fraction_is_one() {
    let targets = PrescriptionTargets {
        start_fraction: 1.0,
        ..standard_targets()
    };
    let plan = calculate_nutrition_plan(70.0, &targets);

    assert!((plan.kcal_today - plan.kcal_target).abs() < 1e-9);
    assert!((plan.kcal_today - 1750.0).abs() < 1e-9);
}

#[test]
fn test_obese_dosing_weight_scales_everything() {
    // Dosing weight 64.525 kg (obese female scenario)
    let plan = calculate_nutrition_plan(64.525, &standard_targets());

    // Expected: target 1613.125 kcal, today 1290.5 kcal, protein 96.788 g
    assert!((plan.kcal_target - 1613.125).abs() < 1e-9);
    assert!((plan.kcal_today - 1290.5).abs() < 1e-9);
    assert!((plan.protein_g - 96.7875).abs() < 1e-9);

    // Non-protein 903.35 kcal: glucose 587.1775 kcal = 172.699 g
    assert!(
        (plan.glucose_g - 172.699_264_706).abs() < 1e-6,
        "glucose should be approximately 172.699 g, got {}",
        plan.glucose_g
    );
}
