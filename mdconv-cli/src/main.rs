// Command-line interface for mdconv
//
// This binary exposes the markdown filters used by templates so they can be run
// on files or stdin, mostly for checking what a template will render.
//
// Usage:
//  mdconv <filter> [input] [-o <file>] [-- <pandoc args>...]          - Apply a named filter (default)
//  mdconv filter <filter> [input] [-o <file>] [-- <pandoc args>...]   - Same as above (explicit)
//  mdconv convert [input] --from <dialect> --to <dialect> [-- <args>] - Any pair through pandoc
//  mdconv filters [--json]                                            - List available filters
//  mdconv backends                                                    - Report backend availability
//
// Input defaults to stdin ("-" also means stdin); output defaults to stdout.
// Everything after "--" is handed to pandoc verbatim.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdconv_config::{Loader, MdconvConfig};
use mdconv_filters::backends::embedded::availability;
use mdconv_filters::backends::Availability;
use mdconv_filters::{FilterRegistry, Filters};
use std::fs;
use std::io::{self, Read};

const SUBCOMMANDS: &[&str] = &["filter", "convert", "filters", "backends", "help"];

// Mirror of FilterRegistry::with_defaults, for argument validation and completions
const FILTER_NAMES: &[&str] = &[
    "markdown_to_html",
    "markdown_to_html_embedded",
    "markdown_to_html_pandoc",
    "markdown_to_latex",
    "markdown_to_rst",
];

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path (stdin when omitted or '-')")
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn extra_arg() -> Arg {
    Arg::new("extra")
        .help("Arguments passed to pandoc verbatim (after --)")
        .num_args(0..)
        .last(true)
        .allow_hyphen_values(true)
}

fn build_cli() -> Command {
    Command::new("mdconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown with the template filters")
        .long_about(
            "mdconv runs the markdown filters used by templates.\n\n\
            Commands:\n  \
            - filter:   Apply a named filter (default command)\n  \
            - convert:  Convert between any two dialects through pandoc\n  \
            - filters:  List available filters\n  \
            - backends: Report embedded renderer and pandoc availability\n\n\
            Examples:\n  \
            mdconv markdown_to_html README.md                 # Embedded HTML renderer\n  \
            mdconv markdown_to_latex doc.md -- --standalone   # Pandoc with extra flags\n  \
            mdconv convert doc.md --from gfm --to docbook     # Unified conversion",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdconv.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("pandoc")
                .long("pandoc")
                .value_name("EXECUTABLE")
                .help("Pandoc executable name or path")
                .value_hint(ValueHint::CommandName)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log verbosity (RUST_LOG takes precedence)")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .default_value("warn")
                .global(true),
        )
        .subcommand(
            Command::new("filter")
                .about("Apply a named filter (default command)")
                .arg(
                    Arg::new("name")
                        .help("Filter to apply")
                        .required(true)
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(FILTER_NAMES)),
                )
                .arg(input_arg().index(2))
                .arg(output_arg())
                .arg(extra_arg().index(3)),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between dialects through pandoc")
                .arg(input_arg().index(1))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Reader dialect")
                        .default_value("markdown")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Writer dialect (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg())
                .arg(extra_arg().index(2)),
        )
        .subcommand(
            Command::new("filters").about("List available filters").arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the list as JSON")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(Command::new("backends").about("Report backend availability"))
}

fn setup_logging(level: &str) {
    let filter = match level {
        "error" => log::LevelFilter::Error,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // `mdconv <filter> ...` is shorthand for `mdconv filter <filter> ...`
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "filter".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let level = matches
        .get_one::<String>("log-level")
        .map(|s| s.as_str())
        .unwrap_or("warn");
    setup_logging(level);

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("pandoc").map(|s| s.as_str()),
    );
    let filters = Filters::from(&config);

    match matches.subcommand() {
        Some(("filter", sub_matches)) => handle_filter_command(sub_matches, &filters),
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &filters),
        Some(("filters", sub_matches)) => handle_filters_command(sub_matches.get_flag("json")),
        Some(("backends", _)) => handle_backends_command(&filters),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the filter command
fn handle_filter_command(matches: &ArgMatches, filters: &Filters) {
    let name = matches
        .get_one::<String>("name")
        .expect("name is required");
    let source = read_input(matches);
    let extra = extra_args(matches);

    let registry = FilterRegistry::default();
    let output = registry
        .apply(filters, name, &source, extra.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(matches, &output);
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, filters: &Filters) {
    let from = matches
        .get_one::<String>("from")
        .expect("from has a default");
    let to = matches.get_one::<String>("to").expect("to is required");
    let source = read_input(matches);
    let extra = extra_args(matches).unwrap_or_default();

    let output = filters
        .generic_convert(&source, from, to, &extra)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(matches, &output);
}

/// Handle the filters command
fn handle_filters_command(json: bool) {
    let infos = FilterRegistry::default().infos();
    if json {
        match serde_json::to_string_pretty(&infos) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Available filters:\n");
    for info in infos {
        let deprecated = if info.deprecated { " [deprecated]" } else { "" };
        println!(
            "  {:<28} {:<9} -> {:<6}{}",
            info.name, info.backend, info.target, deprecated
        );
        println!("      {}", info.description);
    }
}

/// Handle the backends command
fn handle_backends_command(filters: &Filters) {
    match availability() {
        Availability::Available => println!("embedded: available (comrak)"),
        Availability::Unavailable(reason) => println!("embedded: unavailable ({reason})"),
    }

    let pandoc = filters.pandoc();
    match pandoc.resolve() {
        Ok(path) => match pandoc.check_version() {
            Ok(version) => println!("pandoc:   {} (version {version})", path.display()),
            Err(e) => println!("pandoc:   {} (version unknown: {e})", path.display()),
        },
        Err(e) => println!("pandoc:   unavailable ({e})"),
    }
}

fn extra_args(matches: &ArgMatches) -> Option<Vec<String>> {
    matches
        .get_many::<String>("extra")
        .map(|values| values.cloned().collect())
}

fn read_input(matches: &ArgMatches) -> String {
    match matches.get_one::<String>("input").map(|s| s.as_str()) {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {e}");
                    std::process::exit(1);
                });
            source
        }
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{path}': {e}");
            std::process::exit(1);
        }),
    }
}

fn write_output(matches: &ArgMatches, output: &str) {
    match matches.get_one::<String>("output") {
        Some(path) => fs::write(path, output).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{output}"),
    }
}

fn load_cli_config(config_path: Option<&str>, pandoc: Option<&str>) -> MdconvConfig {
    let mut loader = Loader::new().with_optional_file("mdconv.toml");
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(exe) = pandoc {
        loader = loader
            .set_override("pandoc.executable", exe)
            .unwrap_or_else(|e| {
                eprintln!("Error applying --pandoc: {e}");
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {e}");
        std::process::exit(1);
    })
}
