use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffp::config::FFPConfig;
use ffp::io::cli::Cli;
use ffp::io::layout_to_svg::s_layout_to_svg;
use ffp::io::output::Output;
use ffp::opt::FFPOptimizer;
use ffp::{EPOCH, io};
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFPConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFPConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = freerects::io::import(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let sol = FFPOptimizer::new(instance, config, rng).solve();

    {
        let output = Output {
            instance: ext_instance,
            solution: freerects::io::export(&sol, *EPOCH),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = s_layout_to_svg(&sol.layout_snapshot, config.svg_draw_options, "");

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
