use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use flicker::{
    Canvas, CpuSurface, Fps, FrameRGBA, PngSequenceSink, Readback, RunOpts, RunStats, Scene,
    SceneSettings, SinkScheduler, SystemClock, Unpaced, bouncing_pixel, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "flicker", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the bouncing-pixel scene and write every frame as a PNG.
    Run(RunArgs),
    /// Step the bouncing-pixel scene to one frame and save it as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Target frames per second (defaults to FLICKER_FPS or 60).
    #[arg(long)]
    fps: Option<u32>,

    /// Canvas width in pixels (defaults to FLICKER_WIDTH or 300).
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (defaults to FLICKER_HEIGHT or 300).
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for the PNG sequence.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Sleep out each frame budget instead of running as fast as possible.
    #[arg(long)]
    paced: bool,

    /// Print run statistics as JSON on stdout.
    #[arg(long)]
    stats: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print run statistics as JSON on stdout.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_settings(args: &SceneArgs) -> anyhow::Result<SceneSettings> {
    let mut settings = SceneSettings::from_env().context("read FLICKER_* settings")?;
    if let Some(fps) = args.fps {
        settings.fps = Fps::whole(fps)?;
    }
    settings.canvas = Canvas::new(
        args.width.unwrap_or(settings.canvas.width),
        args.height.unwrap_or(settings.canvas.height),
    )?;
    Ok(settings)
}

fn build_scene(settings: &SceneSettings) -> anyhow::Result<Scene<CpuSurface>> {
    let mut scene = Scene::cpu(settings, SystemClock::new()).context("create cpu surface")?;
    scene.root_mut().push(bouncing_pixel(settings.canvas));
    Ok(scene)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.scene)?;
    let mut scene = build_scene(&settings)?;

    let sink = PngSequenceSink::new(&args.out);
    let mut scheduler = SinkScheduler::new(sink).paced(args.paced);
    let stats = scene.run(&mut scheduler, RunOpts::frames(args.frames))?;

    eprintln!(
        "wrote {} frames to {}",
        scheduler.sink().written().len(),
        args.out.display()
    );
    if args.stats {
        print_stats(&stats)?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.scene)?;
    let mut scene = build_scene(&settings)?;

    let frames = args
        .index
        .checked_add(1)
        .context("frame index out of range")?;
    let stats = scene.run(&mut Unpaced, RunOpts::frames(frames))?;
    let frame: FrameRGBA = scene.surface_mut().readback()?;

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    if args.stats {
        print_stats(&stats)?;
    }
    Ok(())
}

fn print_stats(stats: &RunStats) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(stats).context("serialize run stats")?;
    println!("{json}");
    Ok(())
}
