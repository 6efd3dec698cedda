// Command-line interface for mdpeek
//
// Renders one Markdown file into a self-contained HTML page, the same page a file-manager
// previewer shows. All rendering decisions (flavor fallback, rewriting, theme, scripts) live in
// mdpeek-render; this binary only reads the file, layers configuration and writes the result.
//
// Usage:
//  mdpeek <file> [--flavor <name>] [--theme light|dark|auto] [--no-math] [--no-mermaid]
//         [--title <text>] [--config <path>] [-o <file>] [--verbose]
//  mdpeek --list-flavors
//
// Configuration is read from the embedded defaults, then ./mdpeek.toml if present, then the
// file given with --config. Flags win over every file.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdpeek_config::{ConfigError, Loader, PeekConfig, LOCAL_CONFIG_FILE};
use mdpeek_render::{
    list_flavors, BackendRegistry, Capabilities, FlavorId, GsettingsProbe, RenderDispatcher,
    RenderRequest, ThemeResolver,
};
use std::fs;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("mdpeek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown into a self-contained HTML preview")
        .long_about(
            "mdpeek renders a Markdown file into one self-contained HTML page.\n\n\
            The flavor selects the dialect. When a flavor's renderer is unavailable,\n\
            mdpeek quietly uses its fallback (pymdown -> gfm -> standard, everything\n\
            else -> standard); run with --verbose to see which renderer was used.\n\n\
            Examples:\n  \
            mdpeek README.md                       # GFM, detected from the file name\n  \
            mdpeek notes.md --flavor gitlab        # GitLab references (!123 links)\n  \
            mdpeek doc.md --theme dark -o doc.html # Dark page written to a file\n  \
            mdpeek --list-flavors                  # Show every flavor",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .help("Markdown file to render")
                .required_unless_present("list-flavors")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("flavor")
                .long("flavor")
                .short('f')
                .value_name("NAME")
                .help("Markdown flavor (see --list-flavors)")
                .long_help(
                    "Markdown flavor to render with.\n\n\
                    Without this flag the flavor is guessed from the file name\n\
                    (README.md -> gfm, *.mmd -> mmd) or taken from the configuration.\n\
                    Unknown names fall back to gfm.",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("THEME")
                .help("Color theme")
                .value_parser(clap::builder::PossibleValuesParser::new([
                    "light", "dark", "auto",
                ])),
        )
        .arg(
            Arg::new("no-math")
                .long("no-math")
                .help("Never load the math renderer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-mermaid")
                .long("no-mermaid")
                .help("Never load the diagram renderer")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Document title"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdpeek.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log renderer selection and fallbacks to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-flavors")
                .long("list-flavors")
                .help("List available Markdown flavors")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-flavors") {
        handle_list_flavors_command();
        return;
    }

    let path = matches
        .get_one::<String>("file")
        .expect("file is required");

    let config = load_cli_config(&matches).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let flavor = select_flavor(
        matches.get_one::<String>("flavor").map(|s| s.as_str()),
        path,
        &config,
    );
    tracing::info!(%flavor, file = %path, "rendering");

    let request = build_request(&config, source, flavor);
    let dispatcher = build_dispatcher(&config);
    let document = dispatcher.render(&request);

    match matches.get_one::<String>("output") {
        Some(output) => {
            fs::write(output, document.as_str()).unwrap_or_else(|e| {
                eprintln!("Error writing file '{output}': {e}");
                std::process::exit(1);
            });
            tracing::info!(output = %output, "HTML written");
        }
        None => print!("{document}"),
    }
}

/// `--verbose` enables INFO level, otherwise use RUST_LOG or default to WARN
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn handle_list_flavors_command() {
    println!("Available markdown flavors:");
    for (name, description) in list_flavors() {
        println!("  {name:12} - {description}");
    }
}

/// Defaults, then `./mdpeek.toml`, then `--config`, then flags.
fn load_cli_config(matches: &ArgMatches) -> Result<PeekConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    apply_flag_overrides(loader, matches)?.build()
}

fn apply_flag_overrides(
    mut loader: Loader,
    matches: &ArgMatches,
) -> Result<Loader, ConfigError> {
    if let Some(theme) = matches.get_one::<String>("theme") {
        loader = loader.set_override("render.theme", theme.as_str())?;
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.set_override("render.title", title.as_str())?;
    }
    if matches.get_flag("no-math") {
        loader = loader.set_override("render.math", false)?;
    }
    if matches.get_flag("no-mermaid") {
        loader = loader.set_override("render.diagrams", false)?;
    }
    Ok(loader)
}

/// An explicit `--flavor` wins; otherwise the file name may hint at one.
fn select_flavor(explicit: Option<&str>, path: &str, config: &PeekConfig) -> String {
    if let Some(flavor) = explicit {
        return flavor.to_string();
    }
    if config.render.detect_flavor {
        if let Some(detected) = FlavorId::detect_from_filename(path) {
            return detected.name().to_string();
        }
    }
    config.render.flavor.clone()
}

fn build_request(config: &PeekConfig, source: String, flavor: String) -> RenderRequest {
    config.request(source).with_flavor(flavor)
}

fn build_dispatcher(config: &PeekConfig) -> RenderDispatcher {
    let settings = config.backend_settings();
    RenderDispatcher::new(
        BackendRegistry::with_defaults(&settings),
        Capabilities::detect(&settings),
        ThemeResolver::new(GsettingsProbe::new(config.probe_timeout())),
    )
}
