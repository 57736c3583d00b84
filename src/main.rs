use clap::Parser;
use draftbox::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "draftbox", about = "Message composer for the terminal")]
struct Args {
    /// Config file to use instead of ~/.draftbox/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upper bound for the composer height, in rows
    #[arg(long)]
    max_height: Option<u16>,

    /// Start with the composer disabled (Ctrl+D toggles)
    #[arg(long)]
    disabled: bool,

    /// Hide the attachment affordance
    #[arg(long)]
    no_attach: bool,

    /// Log level written to draftbox.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to draftbox.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("draftbox.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("draftbox starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{e}; falling back to defaults");
            eprintln!("draftbox: {e}; falling back to defaults");
            config::DraftboxConfig::default()
        }
    };

    let cli = CliOverrides {
        max_height: args.max_height,
        disabled: args.disabled,
        no_attach: args.no_attach,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::debug!("Resolved config: {:?}", resolved);

    draftbox::tui::run(resolved)
}
