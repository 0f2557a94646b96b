// ABOUTME: Plain-text parenteral nutrition order rendering for chart transcription
// ABOUTME: Conditional additive lines driven by clinical flags, fixed monitoring block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Order Rendering Module
//!
//! Formats one evaluation as a printable order sheet. Rendering is pure: the
//! caller supplies the generation date, so the same inputs always produce the
//! same text.

use crate::models::{ClinicalFlags, PrescriptionTargets};
use crate::prescription::PrescriptionAssessment;
use chrono::NaiveDate;

/// Render the printable order sheet for one evaluation
///
/// Sections: patient summary, daily intake, bag composition, volume and rate,
/// suggested additives, and monitoring. Zinc and thiamine additive lines
/// appear only when the matching clinical flag is raised. Electrolyte doses
/// are starting suggestions and carry an explicit adjust-to-labs caveat.
#[must_use]
pub fn render_order(
    flags: ClinicalFlags,
    targets: &PrescriptionTargets,
    assessment: &PrescriptionAssessment,
    generated_on: NaiveDate,
) -> String {
    let weight = &assessment.weight_profile;
    let plan = &assessment.plan;

    let weight_label = if weight.is_obese {
        format!(
            "{:.1} kg (adjusted for obesity)",
            weight.calculation_weight_kg
        )
    } else {
        format!("{:.1} kg", weight.calculation_weight_kg)
    };
    let situation = if flags.high_stress {
        "Sepsis/High stress"
    } else {
        "Standard"
    };
    let refeeding_label = if flags.refeeding_risk {
        "Refeeding risk"
    } else {
        "No refeeding risk"
    };
    let glucose_pct = targets.glucose_fraction_pct;
    let lipid_pct = 100.0 - glucose_pct;

    let mut lines = vec![
        "PARENTERAL NUTRITION ORDER".to_owned(),
        format!("Generated: {generated_on}"),
        "----------------------------------------".to_owned(),
        "PATIENT:".to_owned(),
        format!("Dosing weight: {weight_label} (BMI {:.1})", weight.bmi),
        format!("Situation: {situation} | {refeeding_label}"),
        String::new(),
        format!(
            "DAILY INTAKE ({:.0}% of target today):",
            targets.start_fraction * 100.0
        ),
        format!("- Total calories: {:.0} kcal", plan.kcal_today),
        format!(
            "- Protein:        {:.0} g (nitrogen {:.1} g)",
            plan.protein_g, plan.nitrogen_g
        ),
        format!(
            "- Glucose:        {:.0} g ({glucose_pct:.0}% of non-protein)",
            plan.glucose_g
        ),
        format!(
            "- Lipids:         {:.0} g ({lipid_pct:.0}% of non-protein)",
            plan.lipid_g
        ),
        String::new(),
        "BAG COMPOSITION:".to_owned(),
        format!(
            "1. Amino acids ({:.0}%):  {:.0} mL",
            targets.amino_acid_concentration_pct, plan.volume_amino_ml
        ),
        format!("2. Dextrose 50%:       {:.0} mL", plan.volume_dextrose_ml),
        format!("3. Lipid emulsion 20%: {:.0} mL", plan.volume_lipid_ml),
        String::new(),
        "VOLUME AND RATE:".to_owned(),
        format!(
            "- Total volume:  {:.0} mL (plus additives)",
            plan.volume_total_ml
        ),
        format!(
            "- Infusion rate: {:.0} mL/h (over 24 h)",
            plan.infusion_rate_ml_per_h
        ),
        String::new(),
        "SUGGESTED ADDITIVES (adjust to labs):".to_owned(),
        "- Na/K: 1-2 mEq/kg/day".to_owned(),
        "- Phosphate: 20-40 mmol/day".to_owned(),
        "- Mg: 8-20 mEq/day | Ca: 10-15 mEq/day".to_owned(),
        "- Multivitamins + trace elements: 1 vial/day".to_owned(),
    ];

    if flags.fistula {
        lines.push("- EXTRA ZINC: 10-20 mg/day (fistula losses)".to_owned());
    }
    if flags.refeeding_risk {
        lines.push("- THIAMINE: 100-200 mg IV (refeeding alert)".to_owned());
    }

    lines.extend([
        String::new(),
        "MONITORING:".to_owned(),
        "- Blood glucose 140-180 mg/dL.".to_owned(),
        "- Triglycerides at 48-72 h (pause lipids if above 400 mg/dL).".to_owned(),
        "- Daily fluid balance and electrolytes at the start.".to_owned(),
    ]);

    let mut sheet = lines.join("\n");
    sheet.push('\n');
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatientProfile, Sex};
    use crate::prescription::evaluate;

    fn standard_inputs() -> (PatientProfile, PrescriptionTargets) {
        (
            PatientProfile {
                sex: Sex::Male,
                weight_kg: 70.0,
                height_cm: 175.0,
            },
            PrescriptionTargets {
                kcal_per_kg: 25.0,
                protein_per_kg: 1.5,
                start_fraction: 0.8,
                glucose_fraction_pct: 65.0,
                amino_acid_concentration_pct: 15.0,
            },
        )
    }

    #[test]
    fn test_standard_order_has_all_sections() {
        let (patient, targets) = standard_inputs();
        let assessment = evaluate(&patient, &targets).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let sheet = render_order(ClinicalFlags::default(), &targets, &assessment, date);

        assert!(sheet.starts_with("PARENTERAL NUTRITION ORDER"));
        assert!(sheet.contains("Generated: 2025-03-14"));
        assert!(sheet.contains("Dosing weight: 70.0 kg (BMI 22.9)"));
        assert!(sheet.contains("Situation: Standard | No refeeding risk"));
        assert!(sheet.contains("DAILY INTAKE (80% of target today):"));
        assert!(sheet.contains("BAG COMPOSITION:"));
        assert!(sheet.contains("MONITORING:"));
        assert!(!sheet.contains("adjusted for obesity"));
        assert!(!sheet.contains("EXTRA ZINC"));
        assert!(!sheet.contains("THIAMINE"));
    }

    #[test]
    fn test_flag_conditional_lines() {
        let (patient, targets) = standard_inputs();
        let assessment = evaluate(&patient, &targets).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let flags = ClinicalFlags {
            high_stress: true,
            refeeding_risk: true,
            copd: false,
            fistula: true,
        };
        let sheet = render_order(flags, &targets, &assessment, date);

        assert!(sheet.contains("Situation: Sepsis/High stress | Refeeding risk"));
        assert!(sheet.contains("- EXTRA ZINC: 10-20 mg/day (fistula losses)"));
        assert!(sheet.contains("- THIAMINE: 100-200 mg IV (refeeding alert)"));
    }

    #[test]
    fn test_obesity_marker_on_dosing_weight() {
        let patient = PatientProfile {
            sex: Sex::Female,
            weight_kg: 100.0,
            height_cm: 160.0,
        };
        let (_, targets) = standard_inputs();
        let assessment = evaluate(&patient, &targets).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let sheet = render_order(ClinicalFlags::default(), &targets, &assessment, date);

        assert!(sheet.contains("Dosing weight: 64.5 kg (adjusted for obesity)"));
        assert!(sheet.contains("(BMI 39.1)"));
    }
}
