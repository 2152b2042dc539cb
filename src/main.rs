use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use plate_picker::{
    Generator,
    catalog::PlateCatalog,
    export::CombosPayload,
    family::Family,
    lookup::{self, SortMode},
    preferences::Preferences,
    report::ResultView,
    search_config::SearchConfig,
    target::Target,
};
use tracing::{Level, info};

const FIND_CAP: usize = 6;

#[derive(Parser)]
#[command(version, about = "Find symmetric barbell plate loads for a target weight")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog JSON with a `meta` object; the built-in gym set when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Preferences JSON; the built-in profile when omitted.
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// Bar weight in kg; the catalog's bar when omitted.
    #[arg(long, global = true)]
    bar: Option<f64>,

    /// Only use plates of this family (kg or lb).
    #[arg(long, global = true, value_parser = clap::value_parser!(Family))]
    unit: Option<Family>,

    /// Extra kg searched above the window.
    #[arg(long, global = true, default_value_t = 0.0)]
    margin: f64,

    /// Combos kept per weight; 6 for `find`, the preferences' limit for `export`.
    #[arg(long, global = true)]
    cap: Option<usize>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the best loads for one or more targets: 60, 80..120 or 85%140.
    Find {
        #[arg(value_parser = clap::value_parser!(Target), required = true)]
        targets: Vec<Target>,

        /// Allowed distance from a single-weight target, in kg.
        #[arg(long, default_value_t = 0.05)]
        tolerance: f64,

        #[arg(long, default_value_t = SortMode::Asc)]
        sort: SortMode,

        #[arg(long)]
        min_plates: Option<usize>,

        #[arg(long)]
        max_plates: Option<usize>,
    },
    /// Write every reachable total in the catalog range as a JSON table.
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => PlateCatalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => PlateCatalog::standard(),
    };
    let prefs = match &cli.prefs {
        Some(path) => Preferences::load(path)
            .with_context(|| format!("loading preferences {}", path.display()))?,
        None => Preferences::standard(),
    };
    let bar = cli.bar.unwrap_or(catalog.bar_kg());
    let generator = Generator::new(catalog);

    match cli.command {
        Command::Find {
            targets,
            tolerance,
            sort,
            min_plates,
            max_plates,
        } => {
            let windows = targets
                .iter()
                .map(|target| target.window(tolerance))
                .collect::<Vec<_>>();
            let lowest = windows.iter().map(|w| w.0).fold(f64::INFINITY, f64::min);
            let highest = windows.iter().map(|w| w.1).fold(f64::NEG_INFINITY, f64::max);

            let config = SearchConfig::new(bar, lowest, highest)
                .with_margin(cli.margin)
                .with_family(cli.unit)
                .with_cap(cli.cap.unwrap_or(FIND_CAP));
            let results = generator.generate(&config, &prefs);
            info!(targets = targets.len(), weights = results.len(), "search finished");

            for (target, (low, high)) in targets.iter().zip_eq(windows) {
                let matching = match target.reference() {
                    Some(kg) => lookup::nearest(&results, kg, tolerance),
                    None => lookup::within(&results, low, high),
                };
                let matching = lookup::filter_by_plates(matching, min_plates, max_plates);
                let matching = lookup::sort_results(matching, sort, target.reference());

                println!("{target}");
                if matching.is_empty() {
                    println!("  no loads found");
                }
                for result in &matching {
                    let view = ResultView {
                        result,
                        catalog: generator.catalog(),
                        target: target.reference(),
                    };
                    println!("{view}");
                }
            }
        }
        Command::Export { out, pretty } => {
            let mut config = SearchConfig::full_range(generator.catalog())
                .with_margin(cli.margin)
                .with_family(cli.unit)
                .with_cap(cli.cap.unwrap_or(prefs.combos_per_total()));
            config.bar_kg = bar;
            let payload = CombosPayload::build(&generator, &config, &prefs);
            info!(totals = payload.totals.len(), "built combos table");

            match out {
                Some(path) => payload
                    .write(&path, pretty)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => println!("{}", payload.to_json(pretty)?),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_is_accepted_by_every_command() {
        let export = Cli::try_parse_from(["plate-picker", "export", "--cap", "3"]).unwrap();
        assert_eq!(export.cap, Some(3));

        let find = Cli::try_parse_from(["plate-picker", "find", "60", "--cap", "2"]).unwrap();
        assert_eq!(find.cap, Some(2));

        let leading = Cli::try_parse_from(["plate-picker", "--cap", "4", "export"]).unwrap();
        assert_eq!(leading.cap, Some(4));
    }

    #[test]
    fn cap_is_unset_by_default() {
        let cli = Cli::try_parse_from(["plate-picker", "export", "--pretty"]).unwrap();
        assert_eq!(cli.cap, None);
        assert!(matches!(cli.command, Command::Export { pretty: true, .. }));
    }
}
