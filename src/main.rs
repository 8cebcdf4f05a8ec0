use std::io;

use bones::config::GameConfig;
use bones::console::{self, Console};
use bones::game::Character;
use bones::item::ItemRegistry;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::load_or_default();

    let registry = match &config.catalog_path {
        Some(path) => ItemRegistry::load_from_file(path)
            .map_err(|e| format!("Failed to load catalog {}: {}", path.display(), e))?,
        None => ItemRegistry::create_default()
            .map_err(|e| format!("Failed to build item catalog: {}", e))?,
    };
    log::info!("Loaded {} catalog items", registry.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let name = console::ask_name(&mut input, &mut output)
        .map_err(|e| format!("Failed to read name: {}", e))?;
    let character = Character::new(name, &config, &registry)
        .map_err(|e| format!("Failed to create character: {}", e))?;

    println!("\nThey call you {}. You wake up in the Bones.", character.name);

    Console::new(&registry, character, input, output)
        .run()
        .map_err(|e| format!("Console error: {}", e))
}
