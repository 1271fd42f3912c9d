use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["source-json", "fragments-json", "unicode-names", "csv"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // Keep in sync with build_cli() in src/main.rs
    let mut cmd = Command::new("mam")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reduce MAM-XML verses and render them as CSV or Unicode names")
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mam.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate representations of a MAM-XML file")
                .arg(
                    Arg::new("path")
                        .help("Path to the MAM-XML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'unicode-names'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render every book of a MAM-XML group (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input MAM-XML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (repeatable; defaults to all)")
                        .action(ArgAction::Append)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output root directory (defaults to stdout)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("names")
                .about("Print the comma-separated short names of a string")
                .arg(
                    Arg::new("text")
                        .help("Text to spell out")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("fragments")
                        .long("fragments")
                        .help("Read TEXT as a JSON fragment array and print its names listing")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mam", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mam", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mam", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
