use clap::Parser;
use digipet::config::GameConfig;
use digipet::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override the configured pet name
    #[arg(long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = GameConfig::load()?;
    if let Some(name) = args.name {
        config.pet.name = name;
    }
    if config.debug.verbose_logging {
        log::info!("Configuration: {:?}", config);
    }

    log::info!("Starting Digipet");
    pollster::block_on(run(config))
}

async fn run(config: GameConfig) -> anyhow::Result<()> {
    let (app, event_loop) = App::new(config).await?;
    App::run(event_loop, app)
}
