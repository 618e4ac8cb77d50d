mod config;
mod logging;
mod pipeline;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use supplychain_api::AppState;
use supplychain_core::{part_json_schema, supplier_json_schema};
use supplychain_generate::{GenerateOptions, GenerationError};
use supplychain_store::{PostgresWarehouse, StoreError, SupplyStore, pull_suppliers};
use thiserror::Error;
use tokio::net::TcpListener;

use config::{AppConfig, ConfigError, Overrides, load_config, save_config};
use logging::{LoggingError, init_logging};
use pipeline::{GenerationRun, run_generation};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "supplychain", version, about = "Synthetic supplier and part data")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Config file (defaults to ./supplychain.toml when present).
    #[arg(long, global = true, env = "SUPPLYCHAIN_CONFIG")]
    config: Option<PathBuf>,
    /// Local store URL, e.g. sqlite://supplychain.db.
    #[arg(long, global = true, env = "SUPPLYCHAIN_DATABASE_URL")]
    database_url: Option<String>,
    /// Log filter directive.
    #[arg(long, global = true, env = "SUPPLYCHAIN_LOG_LEVEL")]
    log_level: Option<String>,
    /// Console logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Also append JSON logs to this file.
    #[arg(long, global = true, env = "SUPPLYCHAIN_LOG_FILE")]
    log_file: Option<PathBuf>,
    /// Remote warehouse URL (Postgres protocol).
    #[arg(long, global = true, env = "SUPPLYCHAIN_WAREHOUSE_URL")]
    warehouse_url: Option<String>,
}

impl GlobalArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            database_url: self.database_url.clone(),
            log_level: self.log_level.clone(),
            log_json: self.log_json,
            log_file: self.log_file.clone(),
            warehouse_url: self.warehouse_url.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate suppliers and parts, export CSV and insert them.
    Generate(GenerateArgs),
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Pull suppliers from the warehouse into the local store.
    Pull,
    /// Print the JSON schema of a record.
    Schema(SchemaArgs),
    /// Write a default config file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = 10_000)]
    suppliers: usize,
    #[arg(long, default_value_t = 10_000)]
    parts: usize,
    /// Tenant stamped on every record.
    #[arg(long)]
    tenant: Option<String>,
    /// Directory for CSV files and the run report.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Export only; skip the store.
    #[arg(long, default_value_t = false)]
    no_insert: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "SUPPLYCHAIN_LISTEN_ADDR")]
    listen: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Entity {
    Supplier,
    Part,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(value_enum)]
    entity: Entity,
    /// Write to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InitConfigArgs {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    path: PathBuf,
    /// Replace an existing file.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if let Command::InitConfig(args) = &cli.command {
        save_config(&args.path, &AppConfig::default(), args.force)?;
        println!("wrote {}", args.path.display());
        return Ok(());
    }

    let mut config = load_config(cli.global.config.as_deref())?;
    config.apply(cli.global.overrides());
    init_logging(&config.log)?;

    match cli.command {
        Command::Generate(args) => run_generate(&config, args).await,
        Command::Serve(args) => run_serve(&config, args).await,
        Command::Pull => run_pull(&config).await,
        Command::Schema(args) => run_schema(args),
        Command::InitConfig(_) => Ok(()),
    }
}

async fn open_store(config: &AppConfig) -> Result<SupplyStore, CliError> {
    let store = SupplyStore::connect(&config.database_url).await?;
    store.migrate().await?;
    Ok(store)
}

async fn connect_warehouse(config: &AppConfig) -> Result<Option<PostgresWarehouse>, CliError> {
    match &config.warehouse.url {
        Some(url) => Ok(Some(
            PostgresWarehouse::connect(url, config.warehouse.query.clone()).await?,
        )),
        None => Ok(None),
    }
}

async fn run_generate(config: &AppConfig, args: GenerateArgs) -> Result<(), CliError> {
    let tenant_id = args.tenant.unwrap_or_else(|| config.tenant.clone());
    if tenant_id.trim().is_empty() {
        return Err(CliError::InvalidConfig("tenant must not be empty".to_string()));
    }

    let run = GenerationRun {
        tenant_id,
        suppliers: args.suppliers,
        parts: args.parts,
        out_dir: args.out_dir.unwrap_or_else(|| config.out_dir.clone()),
        options: GenerateOptions {
            seed: args.seed,
            reference_time: None,
        },
    };

    let store = if args.no_insert {
        None
    } else {
        Some(open_store(config).await?)
    };

    let report = run_generation(&run, store.as_ref()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_serve(config: &AppConfig, args: ServeArgs) -> Result<(), CliError> {
    let listen = args.listen.unwrap_or_else(|| config.listen_addr.clone());
    let store = open_store(config).await?;

    let mut state = AppState::new(store);
    if let Some(warehouse) = connect_warehouse(config).await? {
        state = state.with_warehouse(Arc::new(warehouse));
    }

    let listener = TcpListener::bind(&listen).await?;
    supplychain_api::serve(listener, state).await?;
    Ok(())
}

async fn run_pull(config: &AppConfig) -> Result<(), CliError> {
    let Some(warehouse) = connect_warehouse(config).await? else {
        return Err(CliError::InvalidConfig(
            "no warehouse url configured (set warehouse.url or --warehouse-url)".to_string(),
        ));
    };
    let store = open_store(config).await?;

    let summary = pull_suppliers(&warehouse, &store).await?;
    tracing::info!(
        event = "pull_finished",
        source = summary.source,
        fetched = summary.fetched,
        inserted = summary.inserted,
    );
    println!("inserted {} suppliers from {}", summary.inserted, summary.source);
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let schema = match args.entity {
        Entity::Supplier => supplier_json_schema(),
        Entity::Part => part_json_schema(),
    };
    let json = serde_json::to_string_pretty(&schema)?;
    match args.out {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
