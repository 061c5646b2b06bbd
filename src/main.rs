use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use complexity_comp::compare::{run_search_comparison, run_sort_comparison, ComparisonConfig};
use complexity_comp::patterns;
use complexity_comp::render::{Render, SvgRenderer, TableRenderer};
use complexity_comp::self_check::self_check;

const CHART_DIR_ENV_VAR: &str = "CHART_DIR";
const DEFAULT_CHART_DIR: &str = "target/charts";

struct Config {
    chart_dir: PathBuf,
}

impl Config {
    fn from_env() -> Self {
        let chart_dir = env::var_os(CHART_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_DIR));

        Self { chart_dir }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr, so stdout only carries the results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("complexity_comp=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();

    println!("=== Self-check ===");
    println!("{}", self_check());

    let mut rng = patterns::seeded_rng();
    let mut renderers: Vec<Box<dyn Render>> = vec![
        Box::new(TableRenderer::new(io::stdout())),
        Box::new(SvgRenderer::new(config.chart_dir)),
    ];

    println!("\n=== Search comparison ===");
    run_search_comparison(&mut renderers, &ComparisonConfig::search(), &mut rng)?;

    println!("\n=== Sort comparison ===");
    run_sort_comparison(&mut renderers, &ComparisonConfig::sort(), &mut rng)?;

    Ok(())
}
