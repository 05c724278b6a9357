use anyhow::Result;
use dayview_core::config::DayviewConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = DayviewConfig::config_path()?;
    let config = DayviewConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!(
        "  Events:     {}",
        config
            .events_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".dimmed().to_string())
    );

    println!();
    println!("{}", "Day".bold());
    match config.window() {
        Ok(window) => println!(
            "  Window:     {:02}:00-{:02}:00",
            window.start_hour(),
            window.end_hour()
        ),
        Err(e) => println!("  Window:     {}", e.to_string().red()),
    }
    match config.viewport_height() {
        Ok(height) => println!("  Height:     {}", height),
        Err(e) => println!("  Height:     {}", e.to_string().red()),
    }

    Ok(())
}
