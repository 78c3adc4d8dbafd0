use crate::cli::Cli;
use rotas_core::config::RotasConfig;
use rotas_core::format::{format_duration, ranked_destinations, render_mode};
use rotas_core::graph::{ShortestPaths, TransportMode};

const RULE_WIDTH: usize = 78;

/// Glyphs of the modes used, joined with arrows
pub fn render_modes(modes: &[TransportMode], config: &RotasConfig) -> String {
    modes
        .iter()
        .map(|mode| render_mode(mode, config))
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn render_path(path: &[String], config: &RotasConfig) -> String {
    path.join(&config.path_separator)
}

/// Output the destination table in human-readable format
pub fn output_routes_human(cli: &Cli, config: &RotasConfig, paths: &ShortestPaths<String>) {
    let ranked = ranked_destinations(paths);

    if !cli.quiet {
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("FASTEST ROUTES FROM {}", paths.origin().to_uppercase());
        println!("{}", "=".repeat(RULE_WIDTH));
        println!(
            "{:<18}{:<14}{:<20}{}",
            "DESTINATION", "TIME", "MODES", "ROUTE"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    for (destination, result) in &ranked {
        if result.is_reachable() {
            println!(
                "{:<18}{:<14}{:<20}{}",
                destination,
                format_duration(result.distance),
                render_modes(&result.modes, config),
                render_path(&result.path, config)
            );
        } else {
            println!(
                "{:<18}{:<14}{:<20}{}",
                destination, "unreachable", "N/A", "no route available"
            );
        }
    }

    if !cli.quiet {
        let reachable = ranked.iter().filter(|(_, r)| r.is_reachable()).count();
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "{} of {} destinations reachable",
            reachable,
            ranked.len()
        );
    }
}
