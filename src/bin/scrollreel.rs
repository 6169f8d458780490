use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollreel::{
    CpuSurface, FrameRGBA, FrameSequenceRenderer, FsFrameLoader, PaintOutcome, ScrubDriver,
    SiteConfig, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one playback position as a PNG.
    Frame(FrameArgs),
    /// Scroll through the pinned span with the scrub driver, writing one PNG per step.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Site config JSON. Frame paths resolve relative to its directory.
    #[arg(long)]
    config: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    viewport: ViewportArgs,

    /// Playback position on `[0, frame_count - 1]`; fractional values round.
    #[arg(long, allow_negative_numbers = true)]
    position: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output directory for `frame-NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Scroll distance advanced per step, in pixels.
    #[arg(long, default_value_t = 250.0)]
    step_px: f64,

    /// Driver ticks per second; each step advances one tick.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn load_renderer(
    args: &ViewportArgs,
) -> anyhow::Result<(SiteConfig, FrameSequenceRenderer<CpuSurface>)> {
    let config = SiteConfig::from_path(&args.config)?;
    config.validate()?;

    let assets_root = args.config.parent().unwrap_or_else(|| Path::new("."));
    let surface = CpuSurface::new(
        Viewport::new(args.width, args.height),
        config.sequence.clear_rgba,
    );
    let mut renderer = FrameSequenceRenderer::configure(
        &config.sequence,
        Arc::new(FsFrameLoader::new(assets_root)),
        surface,
    )?;
    renderer
        .wait_ready()
        .context("wait for frame sequence to load")?;

    let loaded = renderer.state().frames().loaded_count();
    if loaded == 0 {
        anyhow::bail!(
            "no frames could be loaded from '{}'",
            assets_root.join(&config.sequence.path_template).display()
        );
    }
    Ok((config, renderer))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, mut renderer) = load_renderer(&args.viewport)?;
    match renderer.update(args.position) {
        PaintOutcome::Painted { frame, rect } => {
            tracing::info!(frame = frame.0, ?rect, "painted");
        }
        other => anyhow::bail!("position {} did not paint: {other:?}", args.position),
    }
    write_png(&renderer.surface().snapshot(), &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if !(args.step_px.is_finite() && args.step_px > 0.0) {
        anyhow::bail!("--step-px must be > 0");
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }

    let (config, mut renderer) = load_renderer(&args.viewport)?;
    let mut driver = ScrubDriver::new(config.sequence.frame_count, config.scrub.clone())?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let dt = 1.0 / args.fps;
    let mut scroll_y = driver.start_px();
    let mut step = 0usize;
    while scroll_y <= driver.end_px() {
        if let Some(PaintOutcome::Painted { frame, .. }) =
            driver.drive(&mut renderer, scroll_y, dt)
        {
            tracing::debug!(step, scroll_y, frame = frame.0, "sweep step");
        }
        let out = args.out_dir.join(format!("frame-{step:04}.png"));
        write_png(&renderer.surface().snapshot(), &out)?;
        step += 1;
        scroll_y += args.step_px;
    }

    eprintln!("wrote {step} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_png(frame: &FrameRGBA, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
