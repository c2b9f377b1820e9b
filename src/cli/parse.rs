use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "nutribar",
    about = "Nutrient target-range bars as HTML fragments or terminal previews"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a diary CSV as a nutrient report
    Report(ReportArgs),
    /// Render a single target-range bar
    Bar(BarArgs),
    /// Price per kilogram for a price/weight pair
    PerKg(PerKgArgs),
    /// Show available class schemes
    Schemes,
    /// Print example invocations
    Examples,
}

/// `nutribar report …`
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Diary CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Report title
    #[arg(short, long, default_value = "Daily nutrient report")]
    pub title: String,

    /// Target CSV (`nutrient,min,max`) overriding the built-in ranges
    #[arg(long)]
    pub targets: Option<String>,

    /// Class scheme for the HTML output
    #[arg(long, default_value = "w3")]
    pub scheme: String,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Draw the report in the terminal instead of emitting HTML
    #[arg(long)]
    pub ansi: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `nutribar bar …`
#[derive(Parser, Debug)]
pub struct BarArgs {
    /// Measured value
    pub value: String,
    /// Minimum target
    pub min: Option<String>,
    /// Maximum target
    pub max: Option<String>,

    /// Class scheme for the HTML output
    #[arg(long, default_value = "w3")]
    pub scheme: String,

    /// Draw the bar in the terminal instead of emitting HTML
    #[arg(long)]
    pub ansi: bool,
}

/// `nutribar per-kg …`
#[derive(Parser, Debug)]
pub struct PerKgArgs {
    /// Price in dollars
    pub price: f64,
    /// Weight in kilograms
    pub weight: f64,
}
