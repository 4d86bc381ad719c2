use clap::{Arg, ArgAction, Command};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::path::PathBuf;
use std::process;

use dbcanlight_rs::writer::OutputTarget;
use dbcanlight_rs::{annotate_substrates, load_mapping_table};

/// Default location of the dbCAN substrate mapping table.
fn default_db_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dbcanlight")
        .join("substrate_mapping.tsv")
}

fn spinner(template: &str, msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template(template)
            .expect("Invalid spinner template"),
    );
    spinner.set_message(msg.to_string());
    spinner
}

fn main() {
    let matches = Command::new("dbcanlight-subparser")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Maps dbcan-sub hmmsearch hits against the dbCAN substrate \
             mapping table and writes rows enriched with the decoded \
             subfamily, EC codes and predicted substrates",
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .help("dbcan-sub searching output in dbcan format (.tsv or .tsv.gz)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory (default=stdout)"),
        )
        .arg(
            Arg::new("db")
                .short('d')
                .long("db")
                .help("Substrate mapping table (default=$HOME/.dbcanlight/substrate_mapping.tsv)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Verbose mode for debug"),
        )
        .get_matches();

    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let db = matches
        .get_one::<String>("db")
        .map(PathBuf::from)
        .unwrap_or_else(default_db_path);

    // Keep stdout clean of log noise when it carries the result rows
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else if output.is_none() {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    let target = match &output {
        Some(dir) => OutputTarget::Dir(dir.clone()),
        None => OutputTarget::Stdout,
    };

    let load_spinner = spinner("{spinner:.blue} {msg}", "Loading substrate mapping table...");
    let table = match load_mapping_table(&db) {
        Ok(table) => table,
        Err(e) => {
            load_spinner.finish_and_clear();
            eprintln!("{e}");
            process::exit(1);
        }
    };
    load_spinner.finish_with_message(format!(
        "Loaded substrate mapping table ({} keys).",
        table.len()
    ));

    let map_spinner = spinner("{spinner:.green} {msg}", "Mapping substrates...");
    match annotate_substrates(&input, &table, &target) {
        Ok(written) => {
            map_spinner.finish_with_message(format!("Annotated {written} row(s)."));
        }
        Err(e) => {
            map_spinner.finish_and_clear();
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
