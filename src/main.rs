use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use iconprep::PrepareOptions;
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project-root")
                .short('C')
                .long("project-root")
                .help("App directory holding resources/ and android/")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .help("Logo image to copy, relative to the project root [default: ../image/logo.png]")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Show what would be created without touching the disk")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    if let Err(error) = iconprep::prepare_assets(&options_from(&matches)) {
        eprintln!("{:?}", miette::Report::new(error));
        std::process::exit(1);
    }
}

fn init_logger(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn options_from(args: &ArgMatches) -> PrepareOptions {
    let project_root = args
        .get_one::<PathBuf>("project-root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    PrepareOptions {
        project_root,
        source: args.get_one::<PathBuf>("source").cloned(),
        dry_run: args.get_flag("dry-run"),
    }
}
