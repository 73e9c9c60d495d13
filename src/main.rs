use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wiretext::{
    DEFAULT_WIDTH, Format, RenderOptions, output_paths, render_file, render_source, write_rendered,
};

#[derive(Parser)]
#[command(version, about = "Compile WireText wireframes to ASCII layouts and HTML")]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,
    /// Layout width for ASCII output; values below 60 are raised to 60
    #[arg(short, long, env = "WIRETEXT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Write each rendering into this directory instead of stdout
    #[arg(long = "out-dir", requires = "files")]
    out_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// WireText files to render; reads stdin when omitted
    files: Vec<PathBuf>,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

/// Entry point for the command-line WireText compiler.
///
/// With no files the source is read from standard input and the rendering is
/// printed. Several files are rendered in parallel; their outputs are printed
/// in argument order, or written to `--out-dir` as `<stem>.txt`,
/// `<stem>.html` or `<stem>.ast.json`.
///
/// # Examples
///
/// ```sh
/// # ASCII preview at 100 columns
/// wiretext --width 100 form.wt
///
/// # HTML documents for a set of sketches
/// wiretext --format html --out-dir build/ sketches/*.wt
///
/// # Tree dump from standard input
/// cat form.wt | wiretext --format json
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let opts = RenderOptions::new(cli.format, cli.width);
    info!(format = %opts.format, width = opts.width(), files = cli.files.len(), "starting");

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let rendered = render_source(&input, opts)?;
        println!("{rendered}");
        return Ok(());
    }

    // Resolve every target before rendering so a name clash writes nothing.
    let plan = cli
        .out_dir
        .as_deref()
        .map(|dir| output_paths(&cli.files, dir, opts.format).map(|targets| (dir, targets)))
        .transpose()?;

    let outputs: Vec<String> = cli
        .files
        .par_iter()
        .map(|path| render_file(path, opts))
        .collect::<Result<_, _>>()?;

    if let Some((dir, targets)) = plan {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        for (target, rendered) in targets.iter().zip(&outputs) {
            write_rendered(target, rendered)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "wrote");
        }
        return Ok(());
    }

    for rendered in &outputs {
        println!("{rendered}");
    }
    Ok(())
}
