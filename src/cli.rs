use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Write the generated dataset as CSV (one column per year)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,

    /// Seconds per frame (overrides config)
    #[arg(long)]
    pub delay: Option<f64>,

    /// Generator seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary table and exit without animating
    #[arg(long, default_value_t = false)]
    pub no_anim: bool,
}
