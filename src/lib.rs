// ABOUTME: Main library entry point for the TPN prescription calculator
// ABOUTME: Exposes the calculation pipeline, safety assessment, and order rendering modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # TPN Calculator
//!
//! Deterministic prescription arithmetic for adult total parenteral nutrition
//! (TPN). Given a patient's anthropometrics and a set of prescription targets,
//! the library derives the dosing weight, the macronutrient breakdown, the
//! bag composition from standard solutions, and the infusion safety profile.
//!
//! ## Features
//!
//! - **Dosing weight resolution**: Devine ideal body weight with a BMI-gated
//!   adjusted body weight for obesity
//! - **Two-stage caloric targeting**: full target scaled by a start fraction
//!   for progressive initiation
//! - **Non-protein split**: glucose/lipid distribution of non-protein calories
//!   with a silent floor when protein dominates
//! - **Standard solutions**: volumes from 50% dextrose, 20% lipid emulsion,
//!   and a configurable amino acid concentration
//! - **Safety assessment**: glucose infusion rate against the 5 g/kg/day
//!   ceiling and lipid load against the 0.7-1.5 g/kg/day band
//!
//! ## Architecture
//!
//! The pipeline is three pure stages composed behind one entry point:
//! weight resolution, nutrition calculation, then safety assessment. Clinical
//! flags (stress, refeeding risk, COPD, fistula) never reach the pipeline;
//! they only drive advisory notes and order rendering at the presentation
//! layer, so the numeric results are identical with every flag raised or none.
//!
//! ## Example Usage
//!
//! ```rust
//! use tpn_calculator::errors::AppResult;
//! use tpn_calculator::models::{PatientProfile, PrescriptionTargets, Sex};
//! use tpn_calculator::prescription::evaluate;
//!
//! fn main() -> AppResult<()> {
//!     let patient = PatientProfile {
//!         sex: Sex::Male,
//!         weight_kg: 70.0,
//!         height_cm: 175.0,
//!     };
//!     let targets = PrescriptionTargets {
//!         kcal_per_kg: 25.0,
//!         protein_per_kg: 1.5,
//!         start_fraction: 0.8,
//!         glucose_fraction_pct: 65.0,
//!         amino_acid_concentration_pct: 15.0,
//!     };
//!
//!     let assessment = evaluate(&patient, &targets)?;
//!     println!(
//!         "{} kcal today at {} mL/h",
//!         assessment.plan.kcal_today, assessment.plan.infusion_rate_ml_per_h
//!     );
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the CLI binary (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Clinical advisory notes and suggested intake targets
pub mod advisory;

/// Body size metrics and dosing weight resolution
pub mod anthropometrics;

/// Clinical constants and reference values for parenteral nutrition
pub mod clinical_constants;

/// Unified error handling for input validation
pub mod errors;

/// Glucose and lipid infusion safety assessment
pub mod infusion_safety;

/// Production logging and structured output
pub mod logging;

/// Common data models for patients and prescription targets
pub mod models;

/// Macronutrient, volume, and infusion rate calculation
pub mod nutrition_calculator;

/// Printable parenteral nutrition order rendering
pub mod order;

/// Full evaluation pipeline from patient inputs to assessed plan
pub mod prescription;
