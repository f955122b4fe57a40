use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tariff_savings::config::{Config, ConfigOverrides};
use tariff_savings::cost::{calculate, CostReport, CostRequest};
use tariff_savings::output::csv::{export_csv, rates_to_csv, report_to_csv};
use tariff_savings::output::json::render_json;
use tariff_savings::output::table::{render_rates_table, render_report_table};
use tariff_savings::tariff::{parse_fee_assignment, Material, Origin, RateTable};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "tariff-savings",
    about = "Compare landed cost across shipment origins"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank origins by total landed cost
    Compare {
        #[arg(short, long)]
        material: Option<String>,
        #[arg(short = 'v', long = "order-value")]
        order_value: Option<f64>,
        /// Harbor Maintenance Fee as ORIGIN=AMOUNT, repeatable
        #[arg(long = "hmf", value_name = "ORIGIN=AMOUNT")]
        hmf: Vec<String>,
        /// Merchandise Processing Fee as ORIGIN=AMOUNT, repeatable
        #[arg(long = "mpf", value_name = "ORIGIN=AMOUNT")]
        mpf: Vec<String>,
        /// Comma-separated origins to compare, e.g. "bahrain,poland"
        #[arg(long)]
        origins: Option<String>,
        /// Currency symbol used for money columns
        #[arg(long)]
        currency: Option<String>,
        /// Also write the report as CSV; without a path uses the configured one
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
    /// Show the configured duty rates
    Rates {
        #[arg(short, long)]
        material: Option<String>,
    },
    /// Write a config template or print the effective config
    Config {
        #[arg(long)]
        init: bool,
        /// Replace an existing config file on --init
        #[arg(long, requires = "init")]
        force: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;

    match &cli.command {
        Commands::Compare {
            material,
            order_value,
            hmf,
            mpf,
            origins,
            currency,
            export,
        } => {
            config.apply_overrides(ConfigOverrides {
                enabled_origins: origins.as_deref().map(parse_origin_list).transpose()?,
                currency_symbol: currency.clone(),
            });
            let rates = load_rates(&config)?;
            let material = match material {
                Some(raw) => Material::from_str(raw)?,
                None => config.default_material()?,
            };
            let order_value = order_value.unwrap_or(config.calculator.default_order_value);

            let mut fees = config.fee_registry()?;
            for raw in hmf {
                let (origin, amount) = parse_fee_assignment(raw)?;
                fees.set_hmf(origin, amount);
            }
            for raw in mpf {
                let (origin, amount) = parse_fee_assignment(raw)?;
                fees.set_mpf(origin, amount);
            }

            let origins = config.enabled_origins()?;
            let request = CostRequest::new(material, order_value).with_fees(fees);
            let report = calculate(&rates, &origins, &request)?;
            let symbol = config.calculator.currency_symbol.as_str();
            print_report(&report, symbol, cli.output)?;

            if let Some(path) = export {
                let path = path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.export.csv_path));
                export_csv(&report, symbol, &path)?;
                info!("wrote CSV report to {}", path.display());
            }
        }
        Commands::Rates { material } => {
            let rates = load_rates(&config)?;
            let material = material.as_deref().map(Material::from_str).transpose()?;
            print_rates(&rates, material, cli.output)?;
        }
        Commands::Config { init, force, show } => {
            handle_config_command(&config, &config_path, *init, *force, *show)?;
        }
    }

    Ok(())
}

fn load_rates(config: &Config) -> Result<RateTable> {
    let rates = config.rate_table()?;
    if rates.is_empty() {
        warn!("rate table is empty; every comparison will fail");
    }
    Ok(rates)
}

fn handle_config_command(
    config: &Config,
    config_path: &Path,
    init: bool,
    force: bool,
    show: bool,
) -> Result<()> {
    if init {
        Config::write_template(config_path, force)?;
        println!("Wrote config template to {}", config_path.display());
        if show {
            println!("{}", Config::default_template());
        }
        return Ok(());
    }
    if show {
        println!("{}", config.to_toml()?);
    } else {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn parse_origin_list(raw: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for piece in raw.split(',') {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push(Origin::from_str(trimmed)?.to_string());
    }
    if out.is_empty() {
        return Err(anyhow!("origin filter is empty"));
    }
    Ok(out)
}

fn print_report(report: &CostReport, symbol: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_report_table(report, symbol)),
        OutputFormat::Json => println!("{}", render_json(report)?),
        OutputFormat::Csv => print!("{}", report_to_csv(report, symbol)?),
    }
    Ok(())
}

fn print_rates(rates: &RateTable, material: Option<Material>, format: OutputFormat) -> Result<()> {
    let selected = match material {
        Some(material) => rates
            .only(material)
            .ok_or_else(|| anyhow!("no duty rates configured for {material}"))?,
        None => rates.clone(),
    };
    match format {
        OutputFormat::Table => println!("{}", render_rates_table(&selected)),
        OutputFormat::Json => println!("{}", render_json(&selected)?),
        OutputFormat::Csv => print!("{}", rates_to_csv(&selected)?),
    }
    Ok(())
}
