// ABOUTME: Core data models for the parenteral nutrition calculator
// ABOUTME: Defines Sex, PatientProfile, ClinicalFlags and PrescriptionTargets input types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! This module contains the input types consumed by the prescription pipeline.
//! All of them are plain immutable value types: one evaluation takes a
//! [`PatientProfile`] and a set of [`PrescriptionTargets`] and derives
//! everything else from them. [`ClinicalFlags`] never enter the calculation
//! pipeline; they only drive advisory text and order annotations in the
//! presentation layer.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Patient sex, as used by the Devine ideal body weight formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (Devine base 50 kg)
    Male,
    /// Female (Devine base 45.5 kg)
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex '{other}' (expected 'male' or 'female')"
            ))),
        }
    }
}

/// Anthropometric description of the patient
///
/// These three fields are the only patient data the calculation pipeline
/// consumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Patient sex
    pub sex: Sex,
    /// Actual body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

/// Clinical context flags consumed only by the advisory and order layers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClinicalFlags {
    /// High metabolic stress (sepsis, major trauma, burns)
    pub high_stress: bool,
    /// Risk of refeeding syndrome (prolonged fasting, severe malnutrition)
    pub refeeding_risk: bool,
    /// Chronic obstructive pulmonary disease
    pub copd: bool,
    /// High-output digestive fistula
    pub fistula: bool,
}

/// Prescription targets set by the clinician
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrescriptionTargets {
    /// Caloric target per kilogram of dosing weight (kcal/kg/day)
    pub kcal_per_kg: f64,

    /// Protein target per kilogram of dosing weight (g/kg/day)
    pub protein_per_kg: f64,

    /// Fraction of the full caloric target delivered today, in (0, 1]
    /// Progressive starts (e.g. refeeding protocols) use values below 1
    pub start_fraction: f64,

    /// Share of non-protein calories given as glucose, in percent [0, 100]
    pub glucose_fraction_pct: f64,

    /// Concentration of the amino acid stock solution, in percent (0, 100]
    pub amino_acid_concentration_pct: f64,
}
