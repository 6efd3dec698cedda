use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the flavor names in mdpeek-render's flavor catalogue
// We need to duplicate this here since build scripts can't access the library's modules
const AVAILABLE_FLAVORS: &[&str] = &[
    "standard",
    "gfm",
    "commonmark",
    "pymdown",
    "pandoc",
    "gitlab",
    "extra",
    "mmd",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdpeek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Markdown into a self-contained HTML preview")
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
                .help("Markdown flavor")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FLAVORS)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
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
        .arg(Arg::new("title").long("title").help("Document title"))
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a mdpeek.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log renderer selection and fallbacks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-flavors")
                .long("list-flavors")
                .help("List available Markdown flavors")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdpeek", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdpeek", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdpeek", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
