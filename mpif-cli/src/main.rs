// Command-line interface for mpif
//
// This binary converts synthesis records between the MPIF tagged-text format and JSON, and
// reports on how cleanly an MPIF document decodes. The work itself lives in mpif-babel; this
// crate only wires files, configuration and logging to it.
//
// Converting:
//
// The source format is auto-detected from the input file extension and can be overridden
// with --from. Output goes to stdout unless -o is given.
// Usage:
//  mpif <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  mpif convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  mpif inspect <path>                    - Section counts and decode warnings
//  mpif --list-formats                    - List available formats
//
// Extra Parameters:
//
// Format parameters are passed as --extra-<name> [value]; a flag without a value means "true".
// Known parameters: parse-embedded (MPIF input), compact (JSON output), log-level.
// Example:
//  mpif run.mpif --to json --extra-compact --extra-parse-embedded false

use clap::{Arg, ArgAction, Command, ValueHint};
use mpif_babel::model::Embedded;
use mpif_babel::{load_record, DecodeOptions, Decoded, FormatRegistry, Input};
use mpif_config::{Loader, MpifConfig};
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut args = args.iter().peekable();

    while let Some(arg) = args.next() {
        let Some(key) = arg.strip_prefix("--extra-") else {
            cleaned_args.push(arg.clone());
            continue;
        };

        let value = match args.peek() {
            Some(next) if !next.starts_with('-') => args.next().cloned(),
            _ => None,
        };
        extra_params.insert(key.to_string(), value.unwrap_or_else(|| "true".to_string()));
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mpif")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and inspect MPIF synthesis records")
        .long_about(
            "mpif converts materials-synthesis records between the MPIF tagged-text format\n\
            and JSON.\n\n\
            Commands:\n  \
            - convert: Transform between formats (default when the first argument is a file)\n  \
            - inspect: Decode an MPIF file and report section counts and warnings\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mpif run.mpif --to json                    # MPIF to JSON (stdout)\n  \
            mpif run.json --to mpif -o run.mpif        # JSON to an MPIF file\n  \
            mpif run.mpif --to json --extra-compact    # Single-line JSON\n  \
            mpif inspect run.mpif                      # Counts and warnings",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mpif.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between record formats (default command)")
                .long_about(
                    "Convert a synthesis record between formats.\n\n\
                    Supported formats:\n  \
                    - mpif: MPIF tagged text (.mpif)\n  \
                    - json: JSON record (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Decode an MPIF document and report what was read")
                .long_about(
                    "Decode an MPIF document and print the number of entries found in each\n\
                    section followed by every decode warning (truncated rows, short loops,\n\
                    unreadable numbers, ...). The exit status is 0 even when warnings are\n\
                    reported; only unreadable input fails.",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the MPIF (or JSON) file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // Without a subcommand, a leading file argument means `convert`
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !["convert", "inspect", "help"].contains(&cleaned_args[1].as_str())
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

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    init_logging(matches.get_count("verbose"), &config.log.level);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.clone(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect_command(path, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8, configured: &str) {
    let log_level = match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MpifConfig,
) {
    let registry = FormatRegistry::default();

    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let record = registry
        .parse_with_options(&source, from, &parse_params_from_config(from, config))
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });

    let mut format_options = serialize_params_from_config(to, config);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }
    let text = registry
        .serialize_with_options(&record, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, &text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
    }
}

fn handle_inspect_command(path: &str, config: &MpifConfig) {
    let options = DecodeOptions::from(&config.decode);
    let decoded = load_record(Input::Path(path.into()), &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    print!("{}", inspect_report(&decoded));
}

/// Section counts followed by the decode warnings, one per line.
fn inspect_report(decoded: &Decoded) -> String {
    let record = &decoded.record;
    let details = &record.synthesis_details;
    let characterization = &record.characterization;

    let embedded = |parsed: Option<bool>| match parsed {
        Some(true) => "parsed",
        Some(false) => "raw",
        None => "none",
    };
    let cif = record
        .product_info
        .cif
        .as_ref()
        .map(|cif| matches!(cif, Embedded::Parsed(_)));
    let aif = characterization
        .aif
        .as_ref()
        .map(|aif| matches!(aif, Embedded::Parsed(_)));

    let mut lines = vec![
        format!("data block:  {}", record.metadata.data_name),
        format!("reaction:    {}", record.synthesis_general.reaction.type_name()),
        format!("substrates:  {}", details.substrates.len()),
        format!("solvents:    {}", details.solvents.len()),
        format!("vessels:     {}", details.vessels.len()),
        format!("hardware:    {}", details.hardware.len()),
        format!("steps:       {}", details.steps.len()),
        format!(
            "pxrd points: {}",
            characterization.pxrd.as_ref().map_or(0, |p| p.data.len())
        ),
        format!(
            "tga points:  {}",
            characterization.tga.as_ref().map_or(0, |t| t.data.len())
        ),
        format!("cif:         {}", embedded(cif)),
        format!("aif:         {}", embedded(aif)),
        format!("warnings:    {}", decoded.warnings.len()),
    ];
    lines.extend(decoded.warnings.iter().map(|w| format!("  - {w}")));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<6} {:<40} {extensions}", format.description());
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MpifConfig {
    let loader = Loader::new().with_optional_file("mpif.toml");
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

/// Move the extras that map onto configuration keys into `config`. Anything left is passed
/// to the target format.
fn apply_config_overrides(config: &mut MpifConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("parse-embedded") {
        config.decode.parse_embedded = parse_bool_arg("parse-embedded", &raw);
    }
    if let Some(raw) = extra_params.remove("compact") {
        config.json.pretty = !parse_bool_arg("compact", &raw);
    }
    if let Some(level) = extra_params.remove("log-level") {
        config.log.level = level;
    }
}

fn parse_params_from_config(from: &str, config: &MpifConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if from == "mpif" {
        params.insert(
            "parse-embedded".to_string(),
            config.decode.parse_embedded.to_string(),
        );
    }
    params
}

fn serialize_params_from_config(to: &str, config: &MpifConfig) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if to == "json" {
        params.insert("compact".to_string(), (!config.json.pretty).to_string());
    }
    params
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
