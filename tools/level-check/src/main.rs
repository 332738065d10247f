//! level-check: validate a game configuration and preview its levels.
//!
//! Usage:
//!   level-check check [--config game.json]
//!   level-check dump-default --output game.json

use std::path::PathBuf;
use std::process;

use tank_core::config::GameConfig;
use tank_core::enums::{EnemyKind, Tile};
use tank_core::types::Rect;
use tank_terrain::TileMap;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "dump-default" => cmd_dump_default(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "level-check: tank battle level validation tool\n\
         \n\
         Commands:\n\
         \n\
         check        Validate a configuration and print every level\n\
         \n\
           --config <path>  JSON configuration (optional, default: built-in campaign)\n\
         \n\
         dump-default Write the built-in configuration as JSON\n\
         \n\
           --output <path>  Output file path\n\
         \n\
         Examples:\n\
         \n\
           level-check check --config levels/custom.json\n\
           level-check dump-default --output levels/default.json\n"
    );
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn cmd_check(args: &[String]) {
    let config = match parse_path(args, "--config") {
        Some(path) => match GameConfig::from_json_file(&path) {
            Ok(config) => {
                eprintln!("Loaded {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut warnings = 0;
    for (index, level) in config.levels.iter().enumerate() {
        let map = TileMap::from_layout(&level.layout, config.grid);
        println!(
            "Level {} \"{}\": {}x{} tiles, {} brick, {} steel",
            index + 1,
            level.name,
            map.width(),
            map.height(),
            map.count(Tile::Destructible),
            map.count(Tile::Indestructible),
        );

        let queue: Vec<String> = level
            .enemies
            .iter()
            .map(|entry| format!("{}x {:?}", entry.count, entry.kind))
            .collect();
        println!(
            "  Enemies: {} ({})",
            level.total_enemies(),
            queue.join(", ")
        );

        // Solid tiles under a spawn point are legal but trap the tank there
        let player = Rect::from_center(config.player.spawn, config.player.size);
        if map.is_blocked(&player) {
            eprintln!(
                "  Warning: player spawn {} overlaps solid tiles",
                config.player.spawn
            );
            warnings += 1;
        }
        let mut kinds: Vec<EnemyKind> = level.enemies.iter().map(|entry| entry.kind).collect();
        kinds.sort();
        kinds.dedup();
        for point in &config.session.enemy_spawn_points {
            for &kind in &kinds {
                let Some(stats) = config.stats(kind) else {
                    continue;
                };
                if map.is_blocked(&Rect::from_center(*point, stats.size)) {
                    eprintln!("  Warning: enemy spawn {point} overlaps solid tiles for {kind:?}");
                    warnings += 1;
                }
            }
        }

        for row in map.to_rows() {
            println!("  {row}");
        }
        println!();
    }

    println!(
        "OK: {} level(s), {} warning(s)",
        config.levels.len(),
        warnings
    );
}

fn cmd_dump_default(args: &[String]) {
    let output = match parse_path(args, "--output") {
        Some(p) => p,
        None => {
            eprintln!("Error: --output is required");
            process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&GameConfig::default()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(&output, json) {
        eprintln!("Error writing {}: {e}", output.display());
        process::exit(1);
    }
    println!("Wrote {}", output.display());
}
