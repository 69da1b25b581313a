use clap::{ArgAction, Parser};

use indexcard::{Config, catalog};

mod app;

#[derive(Parser, Debug)]
#[command(name = "indexcard")]
#[command(version, about = "Index card text entry with pen sounds")]
struct Cli {
    /// Start with keystroke sounds muted
    #[arg(long, action = ArgAction::SetTrue)]
    mute: bool,

    /// Starting font (catalog name or CSS family)
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Starting pen (catalog name)
    #[arg(long, value_name = "NAME")]
    pen: Option<String>,

    /// Print the font and pen catalogs and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list {
        print_catalogs();
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Failed to load config: {err:#}; using defaults");
            Config::default()
        }
    };

    if cli.mute {
        config.sound.enabled = false;
    }
    if let Some(font) = cli.font {
        config.card.font = font;
    }
    if let Some(pen) = cli.pen {
        config.card.pen = pen;
    }
    config.validate_and_clamp();

    // Cue playback runs on this runtime; it must outlive the window
    let runtime = tokio::runtime::Runtime::new()?;

    log::info!(
        "Starting with font '{}', pen '{}', sound {}",
        config.card.font,
        config.card.pen,
        if config.sound.enabled { "on" } else { "off" }
    );

    app::run(app::Flags {
        config,
        runtime: runtime.handle().clone(),
    })?;

    log::info!("Window closed.");
    Ok(())
}

fn print_catalogs() {
    println!("Fonts:");
    for group in catalog::font_groups() {
        println!("  {}:", group.label);
        for font in group.options {
            println!("    {:<18} {} ({})", font.name, font.family, font.size);
        }
    }

    println!();
    println!("Pens:");
    for pen in catalog::pens() {
        println!(
            "  {:<18} {}, opacity {}, {}",
            pen.name, pen.color, pen.opacity, pen.font_weight
        );
    }
}
