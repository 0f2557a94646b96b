// ABOUTME: TPN CLI - command-line calculator for adult parenteral nutrition prescriptions
// ABOUTME: Prints a summary, a printable order sheet, or a JSON record for one patient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Command-line calculator for adult parenteral nutrition prescriptions.
//!
//! Usage:
//! ```bash
//! # Standard adult with defaults (male, 70 kg, 175 cm)
//! tpn-cli
//!
//! # Obese patient with high stress, printable order sheet
//! tpn-cli --sex female --weight 100 --height 160 --high-stress --output order
//!
//! # Refeeding-risk patient starting at 30% of target, JSON record
//! tpn-cli --weight 45 --refeeding-risk --start-fraction 0.3 --output json
//! ```

use anyhow::{bail, Result};
use chrono::Local;
use clap::Parser;
use serde_json::Value;
use tpn_calculator::advisory::{
    clinical_advisories, suggested_targets, targets_below_suggestion, AdvisorySeverity,
};
use tpn_calculator::clinical_constants::form_bounds;
use tpn_calculator::logging::LoggingConfig;
use tpn_calculator::models::{ClinicalFlags, PatientProfile, PrescriptionTargets, Sex};
use tpn_calculator::order::render_order;
use tpn_calculator::prescription::{evaluate, PrescriptionAssessment};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "tpn-cli",
    about = "TPN prescription calculator for adult ICU patients",
    long_about = "Calculates dosing weight, macronutrient amounts, bag composition, and infusion \
                  safety for one adult total parenteral nutrition prescription."
)]
struct Cli {
    /// Patient sex (male or female)
    #[arg(long, default_value = "male")]
    sex: String,

    /// Actual body weight in kg
    #[arg(long, default_value = "70")]
    weight: f64,

    /// Height in cm
    #[arg(long, default_value = "175")]
    height: f64,

    /// Caloric target in kcal per kg per day
    #[arg(long, default_value = "25")]
    kcal_per_kg: f64,

    /// Protein target in g per kg per day
    #[arg(long, default_value = "1.5")]
    protein_per_kg: f64,

    /// Fraction of the caloric target delivered today
    #[arg(long, default_value = "0.8")]
    start_fraction: f64,

    /// Glucose share of non-protein calories in percent
    #[arg(long, default_value = "65")]
    glucose_fraction: f64,

    /// Amino acid solution concentration in percent
    #[arg(long, default_value = "15")]
    aa_concentration: f64,

    /// High metabolic stress (sepsis, trauma)
    #[arg(long)]
    high_stress: bool,

    /// Refeeding risk (malnutrition, prolonged fasting)
    #[arg(long)]
    refeeding_risk: bool,

    /// COPD or chronic hypercapnia
    #[arg(long)]
    copd: bool,

    /// Enterocutaneous fistula or other high losses
    #[arg(long)]
    fistula: bool,

    /// Output mode: summary, order, or json
    #[arg(long, default_value = "summary")]
    output: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let sex = cli.sex.parse::<Sex>()?;
    validate_form_inputs(&cli)?;

    let patient = PatientProfile {
        sex,
        weight_kg: cli.weight,
        height_cm: cli.height,
    };
    let flags = ClinicalFlags {
        high_stress: cli.high_stress,
        refeeding_risk: cli.refeeding_risk,
        copd: cli.copd,
        fistula: cli.fistula,
    };
    let targets = PrescriptionTargets {
        kcal_per_kg: cli.kcal_per_kg,
        protein_per_kg: cli.protein_per_kg,
        start_fraction: cli.start_fraction,
        glucose_fraction_pct: cli.glucose_fraction,
        amino_acid_concentration_pct: cli.aa_concentration,
    };

    debug!(output = %cli.output, "computing prescription");
    let assessment = evaluate(&patient, &targets)?;

    match cli.output.as_str() {
        "summary" => print_summary(flags, &targets, &assessment),
        "order" => {
            let today = Local::now().date_naive();
            print!("{}", render_order(flags, &targets, &assessment, today));
        }
        "json" => print_json(flags, &targets, &assessment)?,
        other => bail!("Unknown output mode '{other}' (expected 'summary', 'order', or 'json')"),
    }

    Ok(())
}

/// Reject values outside the ranges the prescription form accepts
fn validate_form_inputs(cli: &Cli) -> Result<()> {
    check_range(
        "--weight",
        cli.weight,
        form_bounds::MIN_WEIGHT_KG,
        form_bounds::MAX_WEIGHT_KG,
    )?;
    check_range(
        "--height",
        cli.height,
        form_bounds::MIN_HEIGHT_CM,
        form_bounds::MAX_HEIGHT_CM,
    )?;
    check_range(
        "--kcal-per-kg",
        cli.kcal_per_kg,
        form_bounds::MIN_KCAL_PER_KG,
        form_bounds::MAX_KCAL_PER_KG,
    )?;
    check_range(
        "--protein-per-kg",
        cli.protein_per_kg,
        form_bounds::MIN_PROTEIN_G_PER_KG,
        form_bounds::MAX_PROTEIN_G_PER_KG,
    )?;
    check_range(
        "--start-fraction",
        cli.start_fraction,
        form_bounds::MIN_START_FRACTION,
        form_bounds::MAX_START_FRACTION,
    )?;
    check_range(
        "--glucose-fraction",
        cli.glucose_fraction,
        form_bounds::MIN_GLUCOSE_FRACTION_PCT,
        form_bounds::MAX_GLUCOSE_FRACTION_PCT,
    )?;
    check_range(
        "--aa-concentration",
        cli.aa_concentration,
        form_bounds::MIN_AMINO_ACID_PCT,
        form_bounds::MAX_AMINO_ACID_PCT,
    )?;
    Ok(())
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        bail!("{name} must be between {min} and {max}, got {value}")
    }
}

fn print_summary(
    flags: ClinicalFlags,
    targets: &PrescriptionTargets,
    assessment: &PrescriptionAssessment,
) {
    let weight = &assessment.weight_profile;
    let plan = &assessment.plan;
    let safety = &assessment.safety;

    println!("TPN PRESCRIPTION SUMMARY");
    println!("========================");
    println!();
    println!("Body metrics:");
    println!("  BMI:             {:.1} kg/m2", weight.bmi);
    println!("  Ideal weight:    {:.1} kg", weight.ideal_body_weight_kg);
    println!("  Adjusted weight: {:.1} kg", weight.adjusted_body_weight_kg);
    if weight.is_obese {
        println!(
            "  Dosing weight:   {:.1} kg (adjusted for obesity)",
            weight.calculation_weight_kg
        );
    } else {
        println!("  Dosing weight:   {:.1} kg", weight.calculation_weight_kg);
    }
    println!();
    println!(
        "Daily intake ({:.0}% of target):",
        targets.start_fraction * 100.0
    );
    println!(
        "  Calories: {:.0} kcal (target {:.0} kcal)",
        plan.kcal_today, plan.kcal_target
    );
    println!(
        "  Protein:  {:.0} g (nitrogen {:.1} g)",
        plan.protein_g, plan.nitrogen_g
    );
    println!("  Glucose:  {:.0} g", plan.glucose_g);
    println!("  Lipids:   {:.0} g", plan.lipid_g);
    println!();
    println!("Bag composition:");
    println!(
        "  Amino acids {:.0}%: {:.0} mL",
        targets.amino_acid_concentration_pct, plan.volume_amino_ml
    );
    println!("  Dextrose 50%:    {:.0} mL", plan.volume_dextrose_ml);
    println!("  Lipid 20%:       {:.0} mL", plan.volume_lipid_ml);
    println!(
        "  Total volume:    {:.0} mL at {:.1} mL/h",
        plan.volume_total_ml, plan.infusion_rate_ml_per_h
    );
    println!();
    println!("Safety:");
    println!(
        "  Glucose: {:.2} g/kg/day ({:.2} mg/kg/min). {}",
        safety.glucose.gir_g_per_kg_day, safety.glucose.gir_mg_per_kg_min, safety.glucose.message
    );
    println!(
        "  Lipids:  {:.2} g/kg/day. {}",
        safety.lipid.load_g_per_kg_day, safety.lipid.message
    );

    if targets_below_suggestion(flags, targets) {
        let suggestion = suggested_targets(flags);
        println!();
        println!(
            "Suggested for high stress: {:.0} kcal/kg, {:.1} g/kg protein.",
            suggestion.kcal_per_kg, suggestion.protein_per_kg
        );
    }

    let notes = clinical_advisories(flags, targets, plan);
    if notes.is_empty() {
        if safety.glucose.within_limit && safety.lipid.within_limit {
            println!();
            println!("All parameters within standard ranges.");
        }
    } else {
        println!();
        println!("Advisories:");
        for note in &notes {
            let tag = match note.severity {
                AdvisorySeverity::Info => "info",
                AdvisorySeverity::Warning => "warning",
            };
            println!("  [{tag}] {}", note.message);
        }
    }
}

fn print_json(
    flags: ClinicalFlags,
    targets: &PrescriptionTargets,
    assessment: &PrescriptionAssessment,
) -> Result<()> {
    let notes = clinical_advisories(flags, targets, &assessment.plan);

    let mut record = serde_json::to_value(assessment)?;
    if let Value::Object(map) = &mut record {
        map.insert("advisories".to_owned(), serde_json::to_value(&notes)?);
    }

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
