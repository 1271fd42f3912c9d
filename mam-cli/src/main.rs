// Command-line interface for mam
//
// This binary reduces MAM-XML book groups and renders each book as CSV and/or
// as a Unicode-names listing.
//
// Converting:
//
// Every book of the input group is rendered in every requested format. With an output directory,
// files land in <dir>/<format folder><path_qual>/<Book name>.<ext>; without one, the renderings
// are printed to stdout one after the other.
// Usage:
//  mam <input.xml> [--to <format>]... [--output <dir>]          - Convert (default)
//  mam convert <input.xml> [--to <format>]... [--output <dir>]  - Same as above (explicit)
//  mam inspect <input.xml> [<transform>]                         - Execute a transform (defaults to "unicode-names")
//  mam names <text>                                              - Print the short names of a string
//  mam names --fragments <json>                                  - Names listing of a fragment array
//  mam --list-transforms                                         - List available transforms
//
// Extra Parameters:
//
// Configuration overrides can be passed using --extra-<parameter-name> <value> or
// --extra-<parameter-name>=<value>. Values may start with '-' (e.g. a path_qual of -ajf).
// The CLI layer strips the "extra-" prefix; known keys update the configuration, the rest are
// handed to the inspect transforms.
// Example:
//  mam group.xml --extra-vtrad bhs --extra-alternates

use mam_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use mam_babel::book_group::read_book_group;
use mam_babel::names::comma_names;
use mam_babel::publish::{publish, PublishArtifact, PublishSpec};
use mam_babel::FormatRegistry;
use mam_config::{Loader, MamConfig};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FORMATS: &[&str] = &["csv", "unicode-names"];

/// Extra keys that are boolean flags and may omit their value.
const BOOL_EXTRAS: &[&str] = &[
    "alternates",
    "include-alternates",
    "exclude-header",
    "csv-exclude-header",
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value, taken verbatim even if it starts with `-`)
/// - `--extra-<key>=<value>` (inline value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
///
/// Boolean keys only consume the next argument when it is a boolean literal.
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            let next = args.get(i + 1);
            let has_value = match next {
                Some(next) if BOOL_EXTRAS.contains(&key) => is_bool_literal(next),
                Some(_) => true,
                None => false,
            };

            match next {
                Some(value) if has_value => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                _ => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn is_bool_literal(raw: &str) -> bool {
    matches!(
        raw.to_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "false" | "0" | "no" | "n"
    )
}

fn build_cli() -> Command {
    Command::new("mam")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reduce MAM-XML verses and render them as CSV or Unicode names")
        .long_about(
            "mam reads a MAM-XML book group, reduces every verse to a fragment sequence\n\
            and writes one file per book and output format.\n\n\
            Commands:\n  \
            - convert: Render every book of a group (default command)\n  \
            - inspect: View intermediate representations\n  \
            - names:   Spell out the characters of a string\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> or --extra-<name>=<value> to override configuration values.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mam group.xml                          # Print all renderings to stdout\n  \
            mam group.xml --to csv -o out          # Write out/csv/<Book>.csv\n  \
            mam group.xml -o out --extra-alternates  # Include cant_alef/cant_bet\n  \
            mam inspect group.xml fragments-json   # View reduced verses",
        )
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
                .long_about(
                    "View a MAM-XML book group at different processing stages.\n\n\
                    Transforms:\n  \
                    - source-json:    verse trees as parsed\n  \
                    - fragments-json: reduced verses grouped by book\n  \
                    - unicode-names:  names listing of every book (default)\n  \
                    - csv:            CSV rows of every book\n\n\
                    Extra Parameters:\n  \
                    --extra-book <id>   Only show one book (OSIS id, e.g. Gen)",
                )
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
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Render every book of a MAM-XML group (default command)")
                .long_about(
                    "Reduce a MAM-XML book group and render each book.\n\n\
                    Supported formats:\n  \
                    - csv:           one row per verse (.csv)\n  \
                    - unicode-names: one line per text piece, characters by name (.txt)\n\n\
                    Without --to, both formats are produced.\n\
                    Output goes to stdout by default, or use -o to write one file per book\n\
                    under <dir>/<format folder><path_qual>/.",
                )
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
        )
}

fn main() {
    let started = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["inspect", "convert", "names", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("unicode-names");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let formats: Vec<&str> = match sub_matches.get_many::<String>("to") {
                Some(values) => values.map(|s| s.as_str()).collect(),
                None => DEFAULT_FORMATS.to_vec(),
            };
            if let Some(dir) = sub_matches.get_one::<String>("output") {
                config.output.dir = dir.clone();
            }
            warn_unused_extras(&extra_params);
            handle_convert_command(input, &formats, &config);
        }
        Some(("names", sub_matches)) => {
            let text = sub_matches
                .get_one::<String>("text")
                .expect("text is required");
            if sub_matches.get_flag("fragments") {
                let output = transforms::fragment_names(text, &config.output.indent_string)
                    .unwrap_or_else(|e| {
                        eprintln!("Execution error: {e}");
                        std::process::exit(1);
                    });
                print!("{output}");
            } else {
                println!("{}", comma_names(text));
            }
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MamConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&source, transform, config, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(input: &str, formats: &[&str], config: &MamConfig) {
    let registry = FormatRegistry::default();
    for format in formats {
        if let Err(e) = registry.get(format) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let group = read_book_group(&source, &config.handler_registry(), &config.reduce.vtrad)
        .unwrap_or_else(|e| {
            eprintln!("Reduction error in '{input}': {e}");
            std::process::exit(1);
        });

    let mut spec = PublishSpec::new(&group, formats)
        .with_path_qual(config.output.path_qual.as_str())
        .with_options(config.render_options());
    let output_root: Option<PathBuf> = config.output.dir();
    if let Some(root) = &output_root {
        spec = spec.with_output_root(root);
    }

    let artifacts = publish(spec).unwrap_or_else(|e| {
        eprintln!("Output error: {e}");
        std::process::exit(1);
    });

    for artifact in artifacts {
        match artifact {
            PublishArtifact::InMemory { content, .. } => print!("{content}"),
            PublishArtifact::File(path) => info!(path = %path.display(), "written"),
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MamConfig {
    let loader = Loader::new().with_optional_file("mam.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MamConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("vtrad") {
        config.reduce.vtrad = raw;
    }
    if let Some(raw) = take_override(extra_params, &["path-qual", "qual"]) {
        config.output.path_qual = raw;
    }
    if let Some(raw) = take_override(extra_params, &["alternates", "include-alternates"]) {
        config.output.include_alternates = parse_bool_arg("alternates", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["indent", "indent-string"]) {
        config.output.indent_string = raw;
    }
    if let Some(raw) = take_override(extra_params, &["exclude-header", "csv-exclude-header"]) {
        config.csv.exclude_header = parse_bool_arg("exclude-header", &raw);
    }
}

fn warn_unused_extras(extra_params: &HashMap<String, String>) {
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
