//! Command-line interface for sqfmin
//! This binary minifies SQF sources: comments go, whitespace collapses, and
//! preprocessor directives stay on their own lines.
//!
//! Usage:
//!   sqfmin `<input>`              - Print the minified source to stdout
//!   sqfmin `<input>` `<output>`   - Write the minified source to `<output>`
//!   sqfmin -d `<input>`           - Write to `<stem>-min<ext>` next to the input
//!   sqfmin --code `<text>` [`<output>`] - Minify inline code (or the file it names)
//!
//! Any other number of paths prints the usage text. With `--emit` token dumps,
//! `-d` derives a `.tokens` or `.json` path instead of reusing the input's
//! extension.

use clap::{Arg, ArgAction, ArgMatches, Command};
use sqfmin_config::{ConfigError, Loader, SqfminConfig};
use sqfmin_core::loader::{
    load_code, minify_file, output_path_with_extension, LoaderError, OutputTarget, SourceLoader,
};
use sqfmin_core::processor::{self, EmitFormat};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("sqfmin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minifies an SQF source file")
        .arg(
            Arg::new("paths")
                .help("Input file, optionally followed by the output file")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("code")
                .long("code")
                .value_name("TEXT")
                .help("Minify TEXT instead of an input file (an existing file path is read)")
                .conflicts_with("default-output"),
        )
        .arg(
            Arg::new("default-output")
                .long("default-output")
                .short('d')
                .help("Write to <stem>-min<ext> next to the input instead of printing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("string-aware")
                .long("string-aware")
                .help("Never treat // or /* inside string literals as comments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .help("What to produce: minified, tokens-simple, tokens-json")
                .default_value("minified"),
        )
}

fn main() {
    init_tracing();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let code = matches.get_one::<String>("code");
    let (input, target) = match (code, paths.as_slice()) {
        (Some(code), []) => (Input::Code(code.as_str()), OutputTarget::None),
        (Some(code), [output]) => (Input::Code(code.as_str()), OutputTarget::Path(output.clone())),
        (None, [input]) if matches.get_flag("default-output") => {
            (Input::File(input.as_path()), OutputTarget::Default)
        }
        (None, [input]) => (Input::File(input.as_path()), OutputTarget::None),
        (None, [input, output]) => (Input::File(input.as_path()), OutputTarget::Path(output.clone())),
        _ => {
            // Wrong path count is not an error, just a request for help
            if let Err(e) = cli.print_help() {
                eprintln!("Error: {}", e);
            }
            return;
        }
    };

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let emit = matches
        .get_one::<String>("emit")
        .map(String::as_str)
        .unwrap_or("minified");
    let format = EmitFormat::from_string(emit).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let result = match (input, format) {
        (Input::File(path), EmitFormat::Minified) => handle_minify(path, &target, &config),
        (input, _) => handle_emit(input, &target, format, &config),
    };

    match result {
        Ok(()) => {}
        Err(e @ LoaderError::NotFound(_)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Where the source text comes from
#[derive(Clone, Copy)]
enum Input<'a> {
    File(&'a Path),
    Code(&'a str),
}

/// Install a stderr subscriber when `RUST_LOG` is set, so stdout stays clean
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Defaults, then `./sqfmin.toml`, then `--config`, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<SqfminConfig, ConfigError> {
    let mut loader = Loader::new().with_project_file(".");
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("string-aware") {
        loader = loader.with_string_aware(true)?;
    }
    let config = loader.build()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Handle the default minify flow
fn handle_minify(
    input: &Path,
    target: &OutputTarget,
    config: &SqfminConfig,
) -> Result<(), LoaderError> {
    let minified = minify_file(
        input,
        target,
        &config.strip_options(),
        &config.output.suffix,
    )?;
    if *target == OutputTarget::None {
        println!("{}", minified);
    }
    Ok(())
}

/// Handle inline code and the token dump formats
fn handle_emit(
    input: Input<'_>,
    target: &OutputTarget,
    format: EmitFormat,
    config: &SqfminConfig,
) -> Result<(), LoaderError> {
    let loader = match input {
        Input::File(path) => SourceLoader::from_path(path)?,
        Input::Code(code) => load_code(code)?,
    };
    let rendered = processor::render(loader.source(), format, &config.strip_options())
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    match (target, input) {
        (OutputTarget::Path(path), _) => std::fs::write(path, &rendered)?,
        (OutputTarget::Default, Input::File(path)) => {
            let extension = format
                .output_extension()
                .map(OsStr::new)
                .or_else(|| path.extension());
            std::fs::write(
                output_path_with_extension(path, &config.output.suffix, extension),
                &rendered,
            )?
        }
        _ => println!("{}", rendered),
    }
    Ok(())
}
