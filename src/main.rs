use site_icons::{IconConfig, IconGenerator};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Paths are relative to the repository root the tool is run from
    let config = match std::env::current_dir() {
        Ok(cwd) => IconConfig::default().rooted_at(&cwd),
        Err(e) => {
            log::warn!("Could not read working directory, using relative paths: {}", e);
            IconConfig::default()
        }
    };

    println!("Generating site icons from brand logo...");
    match IconGenerator::new(config).run().await {
        Ok(icons) => {
            for icon in icons.iter() {
                println!("✓ Generated: {}", icon.path.display());
            }
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Icon generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
