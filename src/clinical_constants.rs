//! Clinical constants for parenteral nutrition prescription
//!
//! This module contains the fixed clinical values used throughout the
//! prescription pipeline. These values come from published clinical
//! guidelines and pharmacology references; none of them is user-configurable.

/// Devine ideal body weight estimation coefficients
///
/// References:
/// - Devine, B.J. (1974). Gentamicin therapy. *Drug Intelligence and Clinical Pharmacy*, 8, 650-655.
/// - Pai, M.P. & Paloucek, F.P. (2000). The origin of the "ideal" body weight equations.
///   *Annals of Pharmacotherapy*, 34(9), 1066-1069.
pub mod devine {
    /// Base ideal weight for males at the reference height (kg)
    pub const MALE_BASE_KG: f64 = 50.0;

    /// Base ideal weight for females at the reference height (kg)
    pub const FEMALE_BASE_KG: f64 = 45.5;

    /// Ideal weight slope per centimeter of height above the reference (kg/cm)
    /// The original formula states 2.3 kg per inch; 0.9 kg/cm is its metric form
    pub const KG_PER_CM_OVER_REFERENCE: f64 = 0.9;

    /// Reference height of the Devine formula: 5 feet expressed in centimeters
    pub const REFERENCE_HEIGHT_CM: f64 = 152.0;
}

/// Body habitus classification and dosing-weight adjustment
///
/// References:
/// - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
///   WHO Technical Report Series 894.
/// - Krenitsky, J. (2005). Adjusted body weight, pro: evidence to support the use of
///   adjusted body weight in calculating calorie requirements.
///   *Nutrition in Clinical Practice*, 20(4), 468-473.
pub mod body_habitus {
    /// BMI at or above which dosing switches to the adjusted body weight (kg/m2)
    pub const OBESITY_BMI_THRESHOLD: f64 = 30.0;

    /// Fraction of the excess over ideal weight considered metabolically active
    pub const ADJUSTED_WEIGHT_FACTOR: f64 = 0.25;
}

/// Caloric densities of the administered macronutrients
///
/// References:
/// - Mirtallo, J.M. et al. (2004). Safe practices for parenteral nutrition.
///   *Journal of Parenteral and Enteral Nutrition*, 28(6), S39-S70.
pub mod energy_density {
    /// Energy yield of amino acids (kcal/g), standard Atwater factor
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Energy yield of intravenous dextrose monohydrate (kcal/g)
    /// Lower than the 4 kcal/g of dietary carbohydrate because the
    /// monohydrate form carries water of crystallization
    pub const DEXTROSE_KCAL_PER_G: f64 = 3.4;

    /// Energy yield of lipid emulsion triglycerides (kcal/g)
    pub const LIPID_KCAL_PER_G: f64 = 9.0;
}

/// Protein-to-nitrogen conversion
///
/// Reference: Jones, D.B. (1941). Factors for converting percentages of
/// nitrogen in foods and feeds into percentages of proteins. USDA Circular 183.
pub mod nitrogen {
    /// Grams of protein equivalent to one gram of nitrogen
    /// Proteins are on average 16% nitrogen by mass (1 / 0.16 = 6.25)
    pub const GRAMS_PROTEIN_PER_GRAM_NITROGEN: f64 = 6.25;
}

/// Concentrations of the stock solutions compounded into the bag
pub mod solutions {
    /// 50% dextrose stock solution (g of glucose per ml)
    pub const DEXTROSE_50_G_PER_ML: f64 = 0.5;

    /// 20% lipid emulsion (g of triglyceride per ml)
    pub const LIPID_20_G_PER_ML: f64 = 0.2;
}

/// Glucose infusion safety thresholds
///
/// References:
/// - Singer, P. et al. (2019). ESPEN guideline on clinical nutrition in the
///   intensive care unit. *Clinical Nutrition*, 38(1), 48-79.
///   <https://doi.org/10.1016/j.clnu.2018.08.037>
pub mod glucose_limits {
    /// Maximum tolerated glucose infusion (g per kg of dosing weight per day)
    /// Above this rate, oxidative capacity is exceeded: hyperglycemia,
    /// lipogenesis, and increased CO2 production
    pub const MAX_GIR_G_PER_KG_DAY: f64 = 5.0;
}

/// Lipid infusion safety thresholds
///
/// References:
/// - Singer, P. et al. (2019). ESPEN guideline on clinical nutrition in the
///   intensive care unit. *Clinical Nutrition*, 38(1), 48-79.
/// - Calder, P.C. et al. (2010). Lipid emulsions in parenteral nutrition of
///   intensive care patients. *Intensive Care Medicine*, 36(5), 735-749.
pub mod lipid_limits {
    /// Minimum recommended lipid provision (g/kg/day)
    /// Sustained intake below this level risks essential fatty acid deficit
    pub const MIN_RECOMMENDED_G_PER_KG_DAY: f64 = 0.7;

    /// Maximum tolerated lipid provision (g/kg/day)
    pub const MAX_G_PER_KG_DAY: f64 = 1.5;
}

/// Suggested intake targets used by the advisory layer
///
/// References:
/// - McClave, S.A. et al. (2016). Guidelines for the provision and assessment
///   of nutrition support therapy in the adult critically ill patient (SCCM/ASPEN).
///   *Journal of Parenteral and Enteral Nutrition*, 40(2), 159-211.
pub mod suggested_intake {
    /// Standard caloric target for a stable critically ill adult (kcal/kg/day)
    pub const STANDARD_KCAL_PER_KG: f64 = 25.0;

    /// Caloric target under high metabolic stress such as sepsis or major trauma (kcal/kg/day)
    pub const HIGH_STRESS_KCAL_PER_KG: f64 = 30.0;

    /// Protein target for the critically ill adult (g/kg/day)
    pub const STANDARD_PROTEIN_G_PER_KG: f64 = 1.5;

    /// Entered caloric targets below this value trigger the high-stress suggestion (kcal/kg/day)
    pub const KCAL_SHORTFALL_THRESHOLD: f64 = 26.0;

    /// Entered protein targets below this value trigger the high-stress suggestion (g/kg/day)
    pub const PROTEIN_SHORTFALL_THRESHOLD: f64 = 1.4;
}

/// Accepted entry ranges of the prescription form
///
/// The pipeline boundary rejects only degenerate values; these narrower
/// bounds describe what the collecting interface accepts for an adult
/// patient and mirror the original entry form.
pub mod form_bounds {
    /// Lowest accepted actual body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 20.0;

    /// Highest accepted actual body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Lowest accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;

    /// Highest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;

    /// Lowest accepted caloric target (kcal/kg/day)
    pub const MIN_KCAL_PER_KG: f64 = 10.0;

    /// Highest accepted caloric target (kcal/kg/day)
    pub const MAX_KCAL_PER_KG: f64 = 50.0;

    /// Lowest accepted protein target (g/kg/day)
    pub const MIN_PROTEIN_G_PER_KG: f64 = 0.5;

    /// Highest accepted protein target (g/kg/day)
    pub const MAX_PROTEIN_G_PER_KG: f64 = 3.0;

    /// Lowest accepted start fraction
    pub const MIN_START_FRACTION: f64 = 0.25;

    /// Highest accepted start fraction
    pub const MAX_START_FRACTION: f64 = 1.0;

    /// Lowest accepted glucose share of non-protein calories (percent)
    pub const MIN_GLUCOSE_FRACTION_PCT: f64 = 30.0;

    /// Highest accepted glucose share of non-protein calories (percent)
    pub const MAX_GLUCOSE_FRACTION_PCT: f64 = 90.0;

    /// Lowest accepted amino acid solution concentration (percent)
    pub const MIN_AMINO_ACID_PCT: f64 = 5.0;

    /// Highest accepted amino acid solution concentration (percent)
    pub const MAX_AMINO_ACID_PCT: f64 = 25.0;
}

/// Time conversions used by the infusion-rate formulas
pub mod time {
    /// Hours over which the bag is infused
    pub const HOURS_PER_DAY: f64 = 24.0;

    /// Minutes per day, used for the mg/kg/min form of the glucose infusion rate
    pub const MINUTES_PER_DAY: f64 = 1440.0;
}
