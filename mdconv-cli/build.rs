use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the filter names from mdconv-filters' registry
// We need to duplicate this here since build scripts can't access src/ modules
const FILTER_NAMES: &[&str] = &[
    "markdown_to_html",
    "markdown_to_html_embedded",
    "markdown_to_html_pandoc",
    "markdown_to_latex",
    "markdown_to_rst",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = Arg::new("input")
        .help("Input file path")
        .value_hint(ValueHint::FilePath);
    let output = Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path")
        .value_hint(ValueHint::FilePath);
    let extra = Arg::new("extra")
        .help("Arguments passed to pandoc verbatim (after --)")
        .num_args(0..)
        .last(true)
        .allow_hyphen_values(true);

    let mut cmd = Command::new("mdconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown with the template filters")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("pandoc")
                .long("pandoc")
                .value_hint(ValueHint::CommandName)
                .global(true),
        )
        .subcommand(
            Command::new("filter")
                .arg(
                    Arg::new("name")
                        .required(true)
                        .index(1)
                        .value_parser(clap::builder::PossibleValuesParser::new(FILTER_NAMES)),
                )
                .arg(input.clone().index(2))
                .arg(output.clone())
                .arg(extra.clone().index(3)),
        )
        .subcommand(
            Command::new("convert")
                .arg(input.index(1))
                .arg(Arg::new("from").long("from").value_hint(ValueHint::Other))
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(output)
                .arg(extra.index(2)),
        )
        .subcommand(
            Command::new("filters").arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("backends"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdconv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdconv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdconv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
