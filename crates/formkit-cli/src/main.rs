use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use formkit_cli::{
    build_form, kinds, list_forms, read_json, resolve_store_dir, show_form, validate_answers,
};
use formkit_core::{telemetry, FormController, FormkitConfig};
use formkit_model::AnswerSet;
use formkit_repository::FileBackend;
use formkit_store::Action;
use serde::Serialize;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("formkit")
        .version(formkit_cli::VERSION)
        .about("Build, store and validate forms")
        .subcommand_required(true)
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding saved forms"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .subcommand(Command::new("list").about("List saved forms"))
        .subcommand(
            Command::new("show").about("Print a saved form").arg(
                Arg::new("id")
                    .required(true)
                    .help("Saved form id"),
            ),
        )
        .subcommand(
            Command::new("build")
                .about("Replay a JSON array of actions on a new form and save it")
                .arg(
                    Arg::new("actions")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the actions file"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check answers against a saved form")
                .arg(Arg::new("id").required(true).help("Saved form id"))
                .arg(
                    Arg::new("answers")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to a JSON object of field id to answer"),
                ),
        )
        .subcommand(Command::new("kinds").about("List supported field kinds"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<FormkitConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(FormkitConfig::from_file(path)?),
        None => Ok(FormkitConfig::default()),
    }
}

/// Returns `Ok(false)` when answers fail validation
fn run(matches: &ArgMatches) -> Result<bool> {
    let config = load_config(matches)?;
    telemetry::init_tracing(&config.log_filter);

    let dir = resolve_store_dir(matches.get_one::<PathBuf>("store").map(PathBuf::as_path), &config);
    tracing::debug!(dir = %dir.display(), "using store");
    let mut ctl = FormController::open(config, FileBackend::new(dir))?;

    match matches.subcommand() {
        Some(("list", _)) => print_json(&list_forms(&ctl))?,
        Some(("show", args)) => {
            let id = args.get_one::<String>("id").map_or("", String::as_str);
            print_json(&show_form(&mut ctl, id)?)?;
        }
        Some(("build", args)) => {
            let Some(path) = args.get_one::<PathBuf>("actions") else {
                anyhow::bail!("missing actions file");
            };
            let actions: Vec<Action> = read_json(path)?;
            print_json(&build_form(&mut ctl, actions)?)?;
        }
        Some(("validate", args)) => {
            let id = args.get_one::<String>("id").map_or("", String::as_str);
            let Some(path) = args.get_one::<PathBuf>("answers") else {
                anyhow::bail!("missing answers file");
            };
            let answers: AnswerSet = read_json(path)?;
            let errors = validate_answers(&mut ctl, id, &answers)?;
            print_json(&errors)?;
            return Ok(errors.is_empty());
        }
        Some(("kinds", _)) => print_json(&kinds())?,
        _ => unreachable!("subcommand_required"),
    }
    Ok(true)
}

fn main() {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(passed) => std::process::exit(if passed { 0 } else { 1 }),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
