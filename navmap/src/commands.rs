use clap::{arg, value_parser};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("navmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("navmap")
        .styles(CLAP_STYLING)
        .about("Renders the site page navigation map in the terminal")
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(--"seed" <SEED>)
                .required(false)
                .help("Fix the layout RNG seed for a reproducible arrangement")
                .value_parser(value_parser!(u64)),
        )
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
