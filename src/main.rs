use clap::{ArgGroup, Parser};
use std::error::Error;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use udg_convert::{convert, parse_labels, read_labels_file, AsmFormat, ConvertOptions, InkColor};

#[derive(Debug, Parser)]
#[clap(group(ArgGroup::new("label-source").required(true)))]
struct Args {
    file: PathBuf,
    out_file: PathBuf,
    /// Comma-separated tile labels, consumed top to bottom
    #[clap(long, group = "label-source")]
    labels: Option<String>,
    /// File with one label per line; blank and `;` lines are skipped
    #[clap(long, group = "label-source")]
    labels_file: Option<PathBuf>,
    /// Ink color as R,G,B or #RRGGBB
    #[clap(long, default_value = "0,0,0")]
    ink: InkColor,
    #[clap(long, default_value = "gfx")]
    label_prefix: String,
    #[clap(long, default_value_t = 16)]
    column_width: usize,
    #[clap(long, default_value = "defb")]
    keyword: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(LevelFilter::INFO).init();
    let args = Args::parse();

    let labels = match (&args.labels, &args.labels_file) {
        (Some(spec), None) => parse_labels(spec),
        (None, Some(path)) => read_labels_file(path)?,
        _ => unreachable!("clap enforces exactly one label source"),
    };

    let options = ConvertOptions {
        ink: args.ink,
        labels,
        format: AsmFormat {
            label_prefix: args.label_prefix,
            column_width: args.column_width,
            keyword: args.keyword,
        },
    };
    convert(&args.file, &args.out_file, &options)?;
    Ok(())
}
