use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use involute::{Calculation, FieldKind, Form, PlotStyle, SvgRenderer};

#[derive(Parser, Debug)]
#[command(name = "involute", version, about = "Circle involute creator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sampled points, one `n x y` line per point.
    Points(FieldArgs),
    /// Draw the reference circle and the involute into an SVG file.
    Draw(DrawArgs),
}

/// Raw field texts. They are typed into the form keystroke by keystroke,
/// so characters the form would refuse are dropped.
#[derive(Args, Debug)]
struct FieldArgs {
    /// Radius of the base circle.
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    radius: String,

    /// Radial distance coefficient.
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    coefficient: String,

    /// Number of points.
    #[arg(long, allow_hyphen_values = true, default_value = "")]
    points: String,
}

#[derive(Args, Debug)]
struct DrawArgs {
    #[command(flatten)]
    fields: FieldArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Edge length of the square plot in pixels.
    #[arg(long, default_value_t = 800)]
    size: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Points(args) => cmd_points(args),
        Command::Draw(args) => cmd_draw(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn fill_form(args: &FieldArgs) -> Form {
    let mut form = Form::new();
    for (field, text) in [
        (FieldKind::Radius, &args.radius),
        (FieldKind::Coefficient, &args.coefficient),
        (FieldKind::PointCount, &args.points),
    ] {
        let rejected = form.type_str(field, text);
        if rejected > 0 {
            warn!(%field, rejected, kept = form.text(field), "dropped keystrokes");
        }
    }
    form
}

fn cmd_points(args: FieldArgs) -> anyhow::Result<()> {
    let mut form = fill_form(&args);
    if form.calculate() == Calculation::Unchanged {
        info!("nothing calculated");
        return Ok(());
    }
    if let Some(curve) = form.curve() {
        for (i, p) in curve.iter().enumerate() {
            println!("{} {} {}", i + 1, p.x(), p.y());
        }
    }
    Ok(())
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let mut form = fill_form(&args.fields);
    let style = PlotStyle {
        size: args.size,
        ..PlotStyle::default()
    };
    let mut renderer = SvgRenderer::new(style);

    let calculation = form
        .calculate_and_draw(&mut renderer)
        .context("draw involute")?;
    if calculation == Calculation::Unchanged {
        info!("nothing drawn");
        return Ok(());
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, renderer.svg())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
