use clap::Parser;

use portfolio_devserver::config::{self, Config, Site};
use portfolio_devserver::error::ServerError;
use portfolio_devserver::index::{self, ContentKind};
use portfolio_devserver::{logger, server};

#[derive(Debug, Parser)]
#[command(name = "devserver")]
#[command(about = "Local development server for the portfolio site")]
struct Args {
    /// Config file path (without extension); missing files are ignored
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Listen address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve
    #[arg(short, long)]
    root: Option<String>,

    /// Print the content index for `blog` or `concepts` and exit
    #[arg(long, value_name = "KIND")]
    list: Option<ContentKind>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = Config::load_from(&args.config)
        .map_err(ServerError::from)?
        .with_overrides(args.host, args.port, args.root);
    let site = Site::from_config(&cfg)?;

    if let Some(kind) = args.list {
        print_listing(kind, &site);
        return Ok(());
    }

    logger::init(&cfg).map_err(ServerError::Logging)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;

    runtime.block_on(server::run(cfg, site))?;
    Ok(())
}

fn print_listing(kind: ContentKind, site: &Site) {
    let envelope = index::build_index_json(kind, site);
    let items = envelope.items();

    println!("Found {kind}:");
    for item in items {
        println!("  {item}");
    }
    println!("\nTotal: {} {kind}", items.len());
}
