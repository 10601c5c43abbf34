extern crate clap;

use anyhow::Context;
use clap::{App, Arg, ErrorKind};
use log::info;

use namematch::*;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let parsed = App::new("namematch")
        .version("0.1")
        .about("Finds candidate duplicate pairs in a corpus of person names")
        .arg(
            Arg::with_name("input")
                .help("Input JSON file with all_names, word_to_matches and pair_to_names")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Output file, one accepted pair per line")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("workers")
                .long("workers")
                .short("j")
                .help("Number of worker threads (defaults to the number of logical CPUs)")
                .takes_value(true),
        )
        .get_matches_from_safe(std::env::args_os());

    //usage and argument errors belong on stdout, not stderr
    let args = match parsed {
        Ok(args) => args,
        Err(e) => {
            println!("{}", e.message);
            match e.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => return Ok(()),
                _ => std::process::exit(1),
            }
        }
    };

    let input_path = args.value_of("input").expect("input is required");
    let output_path = args.value_of("output").expect("output is required");
    let num_workers = match args.value_of("workers") {
        Some(n) => n
            .parse::<usize>()
            .context("--workers must be a positive integer")?
            .max(1),
        None => num_cpus::get(),
    };

    info!("Loading JSON data from {}", input_path);
    let raw = read_input(input_path).with_context(|| format!("could not load {}", input_path))?;

    info!("Interning strings to integers");
    let model = MatchModel::build(raw);

    let written =
        find_matches(&model, output_path, num_workers).context("match phase failed")?;

    info!("Done, wrote {} pairs to {}", written, output_path);
    Ok(())
}
