//! A collection of constants.

/// Upper cap on names (suppliers, products, diary entries).
pub const NAME_LENGTH: usize = 64;
/// Upper cap on derived slugs.
pub const SLUG_LENGTH: usize = 64;
/// Upper cap on free-text descriptions.
pub const DESCR_LENGTH: usize = 255;

/// Money is stored to whole cents.
pub const PRICE_DECIMALS: u32 = 2;
/// Weights are stored to whole grams (kilograms with three places).
pub const WEIGHT_DECIMALS: u32 = 3;

/// Tracked nutrients, in diary-column order.
pub const NUTRIENT_COLUMNS: [&str; 8] = [
    "kilojoules",
    "protein",
    "fat",
    "saturatedfat",
    "carbohydrate",
    "sugar",
    "fibre",
    "sodium",
];
pub const NUTRIENT_COUNT: usize = NUTRIENT_COLUMNS.len();

/// Built-in daily-intake reference ranges, one `(min, max)` pair per
/// entry of [`NUTRIENT_COLUMNS`].  A 0 means that bound is not set.
pub const REFERENCE_TARGETS: [(f64, f64); NUTRIENT_COUNT] = [
    (8000.0, 9500.0), // kilojoules
    (50.0, 100.0),    // protein, g
    (0.0, 70.0),      // fat, g
    (0.0, 24.0),      // saturatedfat, g
    (230.0, 310.0),   // carbohydrate, g
    (0.0, 90.0),      // sugar, g
    (25.0, 40.0),     // fibre, g
    (460.0, 2300.0),  // sodium, mg
];

/// Bars in the terminal preview never render narrower than this.
pub const MIN_BAR_COLS: usize = 10;
/// Fallback terminal width when geometry cannot be read.
pub const FALLBACK_TERM_COLS: usize = 80;
