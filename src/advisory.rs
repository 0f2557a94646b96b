// ABOUTME: Clinical advisory notes derived from patient flags and the computed plan
// ABOUTME: Suggested intake targets for high metabolic stress with nudge thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Clinical Advisory Module
//!
//! Presentation-layer guidance that sits NEXT TO the pipeline output, never
//! inside it. Clinical flags influence only the notes produced here; the
//! numeric results are identical with every flag raised or none.

use crate::clinical_constants::{energy_density, suggested_intake};
use crate::models::{ClinicalFlags, PrescriptionTargets};
use crate::nutrition_calculator::NutritionPlan;
use serde::{Deserialize, Serialize};

/// How strongly a note should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySeverity {
    /// Informational, no action required
    Info,
    /// Requires clinician attention before the order is signed
    Warning,
}

/// One advisory attached to an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryNote {
    /// Display severity
    pub severity: AdvisorySeverity,
    /// Human-readable guidance
    pub message: String,
}

/// Intake targets suggested for the current stress level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTargets {
    /// Suggested caloric target in kcal per kg per day
    pub kcal_per_kg: f64,
    /// Suggested protein target in g per kg per day
    pub protein_per_kg: f64,
}

/// Suggest intake targets for the patient's stress level
///
/// High metabolic stress (sepsis, trauma) raises the caloric suggestion
/// from 25 to 30 kcal/kg/day; the protein suggestion stays at 1.5 g/kg/day.
#[must_use]
pub fn suggested_targets(flags: ClinicalFlags) -> SuggestedTargets {
    if flags.high_stress {
        SuggestedTargets {
            kcal_per_kg: suggested_intake::HIGH_STRESS_KCAL_PER_KG,
            protein_per_kg: suggested_intake::STANDARD_PROTEIN_G_PER_KG,
        }
    } else {
        SuggestedTargets {
            kcal_per_kg: suggested_intake::STANDARD_KCAL_PER_KG,
            protein_per_kg: suggested_intake::STANDARD_PROTEIN_G_PER_KG,
        }
    }
}

/// Whether the configured targets sit below the suggestion for this stress level
///
/// Uses the nudge thresholds (under 26 kcal/kg or under 1.4 g/kg protein), not
/// strict equality with the suggestion, so mild deviations stay quiet.
#[must_use]
pub fn targets_below_suggestion(flags: ClinicalFlags, targets: &PrescriptionTargets) -> bool {
    flags.high_stress
        && (targets.kcal_per_kg < suggested_intake::KCAL_SHORTFALL_THRESHOLD
            || targets.protein_per_kg < suggested_intake::PROTEIN_SHORTFALL_THRESHOLD)
}

/// Build the advisory list for one evaluation
///
/// Flag-driven notes come first in fixed order (refeeding, COPD, fistula),
/// then notes computed from the plan itself. Returns an empty vector when
/// nothing applies.
#[must_use]
pub fn clinical_advisories(
    flags: ClinicalFlags,
    targets: &PrescriptionTargets,
    plan: &NutritionPlan,
) -> Vec<AdvisoryNote> {
    let mut notes = Vec::new();

    if flags.refeeding_risk {
        let start_pct = targets.start_fraction * 100.0;
        notes.push(AdvisoryNote {
            severity: AdvisorySeverity::Warning,
            message: format!(
                "Refeeding risk: start at 25-50% of target (currently {start_pct:.0}%) and add IV thiamine 100-200 mg. Monitor phosphate, potassium, and magnesium closely."
            ),
        });
    }

    if flags.copd {
        notes.push(AdvisoryNote {
            severity: AdvisorySeverity::Warning,
            message: "COPD: monitor CO2 production and avoid glucose overload (keep glucose at 50-60% of non-protein calories).".to_owned(),
        });
    }

    if flags.fistula {
        notes.push(AdvisoryNote {
            severity: AdvisorySeverity::Info,
            message: "Fistula losses: consider extra zinc (10-20 mg/day).".to_owned(),
        });
    }

    // Protein covers the whole day's energy when the start fraction or caloric
    // target is low. The non-protein split is zero, so the bag carries no
    // glucose or lipid; full protein dosing stays appropriate in that situation.
    let protein_kcal = plan.protein_g * energy_density::PROTEIN_KCAL_PER_G;
    if plan.kcal_today > 0.0 && protein_kcal >= plan.kcal_today {
        notes.push(AdvisoryNote {
            severity: AdvisorySeverity::Warning,
            message: "Protein provides the entire caloric intake today; no glucose or lipid is delivered. Keep protein at full dose even while total calories remain below target.".to_owned(),
        });
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition_calculator::calculate_nutrition_plan;

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
    fn test_no_flags_no_advisories() {
        let targets = standard_targets();
        let plan = calculate_nutrition_plan(70.0, &targets);
        let notes = clinical_advisories(ClinicalFlags::default(), &targets, &plan);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_flag_notes_keep_fixed_order() {
        let flags = ClinicalFlags {
            high_stress: false,
            refeeding_risk: true,
            copd: true,
            fistula: true,
        };
        let targets = standard_targets();
        let plan = calculate_nutrition_plan(70.0, &targets);
        let notes = clinical_advisories(flags, &targets, &plan);
        assert_eq!(notes.len(), 3);
        assert!(notes[0].message.starts_with("Refeeding risk"));
        assert!(notes[1].message.starts_with("COPD"));
        assert!(notes[2].message.starts_with("Fistula"));
        assert_eq!(notes[0].severity, AdvisorySeverity::Warning);
        assert_eq!(notes[2].severity, AdvisorySeverity::Info);
    }

    #[test]
    fn test_protein_dominant_note_when_floor_engages() {
        let targets = PrescriptionTargets {
            kcal_per_kg: 10.0,
            protein_per_kg: 3.0,
            start_fraction: 0.25,
            ..standard_targets()
        };
        let plan = calculate_nutrition_plan(70.0, &targets);
        let notes = clinical_advisories(ClinicalFlags::default(), &targets, &plan);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, AdvisorySeverity::Warning);
        assert!(notes[0].message.contains("Protein provides the entire"));
    }

    #[test]
    fn test_stress_suggestion_and_nudge_threshold() {
        let stressed = ClinicalFlags {
            high_stress: true,
            ..ClinicalFlags::default()
        };
        let suggestion = suggested_targets(stressed);
        assert!((suggestion.kcal_per_kg - 30.0).abs() < f64::EPSILON);
        assert!((suggestion.protein_per_kg - 1.5).abs() < f64::EPSILON);

        let low = PrescriptionTargets {
            kcal_per_kg: 25.0,
            ..standard_targets()
        };
        assert!(targets_below_suggestion(stressed, &low));
        assert!(!targets_below_suggestion(ClinicalFlags::default(), &low));

        let adequate = PrescriptionTargets {
            kcal_per_kg: 30.0,
            protein_per_kg: 1.5,
            ..standard_targets()
        };
        assert!(!targets_below_suggestion(stressed, &adequate));
    }
}
