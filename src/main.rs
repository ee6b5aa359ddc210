use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use svgtidy::{
    FormatOptions, Options, SizeStats, SvgTidyError, format_svg_with_options,
    optimize_with_options,
};

#[derive(Parser)]
#[command(name = "svgtidy")]
#[command(about = "Shrink and pretty-print traced SVG", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Precision for coordinates (decimal places)
    #[arg(short, long, default_value = "1")]
    precision: u8,

    /// Keep XML declaration
    #[arg(long)]
    keep_xml_declaration: bool,

    /// Keep comments
    #[arg(long)]
    keep_comments: bool,

    /// Disable coordinate rounding
    #[arg(long)]
    no_round: bool,

    /// Disable collapsing of repeated path commands
    #[arg(long)]
    no_collapse_commands: bool,

    /// Skip optimization entirely
    #[arg(long)]
    raw: bool,

    /// Pretty-print the result
    #[arg(short, long)]
    format: bool,

    /// Spaces per indent level when formatting (1-16)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=16))]
    indent: u8,

    /// Re-indent inside xml:space="preserve" elements too
    #[arg(long)]
    no_preserve_whitespace: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let input = read_input(&cli.input)?;

    let options = if cli.raw {
        Options {
            precision: cli.precision,
            ..Options::none()
        }
    } else {
        Options {
            precision: cli.precision,
            remove_xml_declaration: !cli.keep_xml_declaration,
            remove_comments: !cli.keep_comments,
            round_coordinates: !cli.no_round,
            remove_redundant_commands: !cli.no_collapse_commands,
            ..Options::default()
        }
    };

    let optimized = optimize_with_options(&input, &options);
    let stats = SizeStats::measure(&input, &optimized);

    let output = if cli.format {
        let format_options = FormatOptions {
            indent_size: usize::from(cli.indent),
            preserve_whitespace: !cli.no_preserve_whitespace,
        };
        let mut formatted = format_svg_with_options(optimized.as_str(), &format_options);
        formatted.push('\n');
        formatted
    } else {
        optimized
    };

    write_output(&cli.output, &output)?;

    // Stats describe the optimized text, not the pretty-printed one
    if cli.stats {
        eprintln!("{}", stats);
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, SvgTidyError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: &Path, output: &str) -> Result<(), SvgTidyError> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(path, output)?;
    }
    Ok(())
}
