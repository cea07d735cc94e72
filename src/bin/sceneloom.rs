use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sceneloom", version)]
struct Cli {
    /// Diagnostic verbosity on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script: a still image, or every frame plus the assembled animation.
    Render(RenderArgs),
    /// Print the resolved animation metadata and knob table as JSON.
    Knobs(KnobsArgs),
    /// Render one frame of an animation as an image.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Run configuration JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the assembled animation.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Directory for per-frame images (overrides the config).
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Drop `display` commands instead of opening a viewer.
    #[arg(long, default_value_t = false)]
    no_display: bool,

    /// Keep the per-frame images but skip `ffmpeg` assembly.
    #[arg(long, default_value_t = false)]
    no_assemble: bool,

    /// Viewer program fed binary PPM on stdin.
    #[arg(long, default_value = "display")]
    display_program: String,
}

#[derive(Parser, Debug)]
struct KnobsArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Run configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Run configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output image path; the format follows the extension.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Leaves the frame sequence on disk and reports where it is.
struct SkipAssembly;

impl sceneloom::AnimationAssembler for SkipAssembly {
    fn assemble(&mut self, frames: &sceneloom::FrameSequence) -> sceneloom::LoomResult<PathBuf> {
        tracing::info!(dir = %frames.dir.display(), "assembly skipped");
        Ok(frames.dir.clone())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_target(false)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Knobs(args) => cmd_knobs(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_script(path: &Path) -> anyhow::Result<sceneloom::Script> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("open script '{}'", path.display()))?;
    let script = sceneloom::Script::from_json_str(&text)
        .with_context(|| format!("parse script '{}'", path.display()))?;
    Ok(script)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<sceneloom::RunConfig> {
    match path {
        Some(p) => Ok(sceneloom::RunConfig::from_json_file(p)?),
        None => Ok(sceneloom::RunConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path)?;
    let mut cfg = read_config(args.config.as_deref())?;
    if let Some(dir) = args.frames_dir {
        cfg.output.frames_dir = dir;
    }

    let mut backend = sceneloom::create_backend(sceneloom::BackendKind::Cpu);
    let mut display: Box<dyn sceneloom::DisplaySink> = if args.no_display {
        Box::new(sceneloom::NullDisplay)
    } else {
        Box::new(sceneloom::ExternalDisplay::new(args.display_program))
    };
    let mut images = sceneloom::ImageFileSink::new();
    let mut assembler: Box<dyn sceneloom::AnimationAssembler> = if args.no_assemble {
        Box::new(SkipAssembly)
    } else {
        Box::new(sceneloom::FfmpegAssembler::new(
            sceneloom::FfmpegAssemblerOpts {
                out_dir: args.out_dir,
                format: cfg.output.assembly_format.clone(),
                fps: cfg.output.assembly_fps,
                ..Default::default()
            },
        ))
    };

    let mut outputs = sceneloom::Outputs {
        display: display.as_mut(),
        images: &mut images,
        assembler: assembler.as_mut(),
    };
    let report = sceneloom::run_script(&script, &cfg, backend.as_mut(), &mut outputs)?;

    match &report.assembled {
        Some(path) => eprintln!(
            "rendered {} frames, wrote {}",
            report.frames_rendered,
            path.display()
        ),
        None => eprintln!("rendered {} frame", report.frames_rendered),
    }
    Ok(())
}

fn cmd_knobs(args: KnobsArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path)?;
    let cfg = read_config(args.config.as_deref())?;
    let plan = sceneloom::AnimationPlan::resolve(&script, &cfg)?;
    let json = serde_json::to_string_pretty(&plan).context("serialize knob table")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path)?;
    let cfg = read_config(args.config.as_deref())?;

    let mut backend = sceneloom::create_backend(sceneloom::BackendKind::Cpu);
    let mut display = sceneloom::NullDisplay;
    let mut images = sceneloom::ImageFileSink::new();
    let mut assembler = sceneloom::InMemoryAssembler::new();
    let mut outputs = sceneloom::Outputs {
        display: &mut display,
        images: &mut images,
        assembler: &mut assembler,
    };
    let frame = sceneloom::render_single_frame(
        &script,
        &cfg,
        sceneloom::FrameIndex(args.frame),
        backend.as_mut(),
        &mut outputs,
    )?;

    sceneloom::write_image(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
