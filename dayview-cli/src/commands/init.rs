use anyhow::Result;
use dayview_core::config::DayviewConfig;
use owo_colors::OwoColorize;

use crate::DayArgs;

pub fn run(args: DayArgs) -> Result<()> {
    let config_path = DayviewConfig::config_path()?;

    if args.is_empty() {
        if config_path.exists() {
            println!(
                "{} {}",
                "Config already exists at".dimmed(),
                config_path.display()
            );
            return Ok(());
        }

        DayviewConfig::create_default_config(&config_path)?;
        println!("{} {}", "Created".green(), config_path.display());
        return Ok(());
    }

    let current = DayviewConfig::load_from(&config_path)?;
    let config = DayviewConfig {
        start_hour: args.start_hour.unwrap_or(current.start_hour),
        end_hour: args.end_hour.unwrap_or(current.end_hour),
        viewport_height: args.height.unwrap_or(current.viewport_height),
        events_file: args.events.or(current.events_file),
    };

    // Refuse to persist settings no layout pass could use
    config.window()?;
    config.viewport_height()?;

    config.save(&config_path)?;
    println!("{} {}", "Saved".green(), config_path.display());

    Ok(())
}
