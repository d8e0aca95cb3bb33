use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use vidgen::process::{convert_command, encode_command, render_command};
use vidgen::{
    Ease, FfmpegEncoder, FrameIndex, FrameParams, MogrifyConverter, ParamSource, PlotBrdfRenderer,
    RenderJob, Sequencer, TaskKind, TaskSelection, VidgenConfig,
};

#[derive(Parser, Debug)]
#[command(name = "vidgen", version, about = "Render animated BRDF plot videos")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every frame of every enabled task and encode the videos.
    Run(ConfigArgs),
    /// Print the commands `run` would execute, without executing them.
    Plan(PlanArgs),
    /// Print the per-frame angle and alpha values.
    Params(ParamsArgs),
    /// List tasks and whether they are enabled.
    Tasks(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output video frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Output video length in seconds.
    #[arg(long)]
    duration: Option<u32>,

    /// Enable only these tasks (repeatable).
    #[arg(long = "task", conflicts_with = "all_tasks")]
    tasks: Vec<TaskKind>,

    /// Enable every task.
    #[arg(long)]
    all_tasks: bool,

    /// Easing applied to sequence progress.
    #[arg(long, value_parser = parse_ease)]
    ease: Option<Ease>,

    /// Directory for frames and videos; external commands run here.
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Renderer executable.
    #[arg(long)]
    renderer: Option<PathBuf>,

    /// Shader directory passed to the renderer.
    #[arg(long)]
    shader_dir: Option<PathBuf>,

    /// Colormap passed to colormap-shaded tasks.
    #[arg(long)]
    cmap: Option<PathBuf>,

    /// Image converter executable.
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Video encoder executable (`ffmpeg` or `avconv`).
    #[arg(long)]
    encoder: Option<PathBuf>,

    /// Abort on the first failed step.
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Only plan this frame (0-based).
    #[arg(long)]
    frame: Option<u64>,
}

#[derive(Args, Debug)]
struct ParamsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Only print this frame (0-based).
    #[arg(long)]
    frame: Option<u64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Params(args) => cmd_params(args),
        Command::Tasks(args) => cmd_tasks(args),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        tracing::Level::WARN
    } else {
        match verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_ease(s: &str) -> Result<Ease, String> {
    match s {
        "linear" => Ok(Ease::Linear),
        "smoothstep" | "smooth_step" => Ok(Ease::SmoothStep),
        "smootherstep" | "smoother_step" => Ok(Ease::SmootherStep),
        _ => Err(format!(
            "unknown ease '{s}' (expected linear, smoothstep or smootherstep)"
        )),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<VidgenConfig> {
    let mut cfg = match &args.config {
        Some(path) => VidgenConfig::from_path(path)?,
        None => VidgenConfig::default(),
    };

    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    if let Some(duration) = args.duration {
        cfg.duration_secs = duration;
    }
    if args.all_tasks {
        cfg.tasks = TaskSelection::all();
    } else if !args.tasks.is_empty() {
        cfg.tasks = TaskSelection::only(args.tasks.iter().copied());
    }
    if let Some(ease) = args.ease {
        cfg.ease = ease;
    }
    if let Some(dir) = &args.work_dir {
        cfg.work_dir = dir.clone();
    }
    if let Some(exe) = &args.renderer {
        cfg.renderer.executable = exe.clone();
    }
    if let Some(dir) = &args.shader_dir {
        cfg.renderer.shader_dir = dir.clone();
    }
    if let Some(cmap) = &args.cmap {
        cfg.renderer.cmap = cmap.clone();
    }
    if let Some(exe) = &args.converter {
        cfg.converter.executable = exe.clone();
    }
    if let Some(exe) = &args.encoder {
        cfg.encoder.executable = exe.clone();
    }
    if args.fail_fast {
        cfg.fail_fast = true;
    }

    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn cmd_run(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;

    std::fs::create_dir_all(&cfg.work_dir)
        .with_context(|| format!("create work dir '{}'", cfg.work_dir.display()))?;
    preflight(&cfg);

    let mut renderer = PlotBrdfRenderer::new(cfg.renderer.clone(), &cfg.work_dir);
    let mut converter = MogrifyConverter::new(cfg.converter.clone());
    let mut encoder = FfmpegEncoder::new(cfg.encoder.clone());

    let report = Sequencer::new(&cfg, &mut renderer, &mut converter, &mut encoder)?.run()?;

    for (task, done) in &report.frames_done {
        eprintln!("{task}: {done}/{} frames", report.frame_count);
    }
    for video in &report.videos {
        eprintln!("wrote {}", video.display());
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} step(s) failed; first: {} {} at frame {:?}: {}",
            report.failures.len(),
            report.failures[0].task,
            report.failures[0].stage,
            report.failures[0].frame.map(|f| f.0),
            report.failures[0].message
        );
    }
    Ok(())
}

/// Warn early about tools that are clearly missing; the run itself still proceeds.
fn preflight(cfg: &VidgenConfig) {
    let renderer = &cfg.renderer.executable;
    if renderer.components().count() > 1 && !cfg.work_dir.join(renderer).is_file() {
        tracing::warn!(
            renderer = %renderer.display(),
            work_dir = %cfg.work_dir.display(),
            "renderer executable not found relative to work dir"
        );
    }
    for (what, exe) in [
        ("converter", &cfg.converter.executable),
        ("encoder", &cfg.encoder.executable),
    ] {
        if !vidgen::is_executable_available(exe, "-version") {
            tracing::warn!(executable = %exe.display(), "{what} does not appear to be runnable");
        }
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let count = cfg.frame_count()?;
    let frames: Vec<FrameIndex> = match args.frame {
        Some(f) => vec![FrameIndex(f)],
        None => count.iter().collect(),
    };

    let capture = cfg.work_dir.join(&cfg.renderer.capture_file);
    for frame in frames {
        let params = FrameParams::at(frame, count, cfg.ease)?;
        for task in cfg.tasks.enabled() {
            let job = RenderJob::new(task, params);
            let numbered = vidgen::numbered_capture_path(&cfg.work_dir, task, frame);
            println!(
                "{}",
                vidgen::display_command(&render_command(&job, &cfg.renderer, &cfg.work_dir))
            );
            println!(
                "mv {} {}",
                vidgen::display_path(&capture),
                vidgen::display_path(&numbered)
            );
            println!(
                "{}",
                vidgen::display_command(&convert_command(&cfg.converter, &numbered))
            );
            println!("rm {}", vidgen::display_path(&numbered));
        }
    }

    if args.frame.is_none() {
        for task in cfg.tasks.enabled() {
            let job = vidgen::encode_job(&cfg, task);
            println!(
                "{}",
                vidgen::display_command(&encode_command(&cfg.encoder, &job))
            );
        }
    }
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let count = cfg.frame_count()?;
    let params = match args.frame {
        Some(f) => vec![FrameParams::at(FrameIndex(f), count, cfg.ease)?],
        None => FrameParams::sequence(count, cfg.ease)?,
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&params).context("serialize frame params")?
        );
        return Ok(());
    }

    println!(
        "{:>9}  {:>8}  {:>8}  {:>8}  {:>9}  {:>8}",
        "frame", "u", "eased", "osc", "angle", "alpha"
    );
    for p in params {
        println!(
            "{:>9}  {:>8.5}  {:>8.5}  {:>8.5}  {:>9.4}  {:>8.5}",
            p.frame.0, p.u, p.eased, p.oscillation, p.angle, p.alpha
        );
    }
    Ok(())
}

fn cmd_tasks(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    for task in TaskKind::ALL {
        let spec = task.spec();
        let mark = if cfg.tasks.is_enabled(task) { "*" } else { " " };
        println!(
            "{mark} {:<18} angle: {:<12} alpha: {}",
            task.name(),
            describe(Some(spec.angle)),
            describe(spec.alpha)
        );
    }
    Ok(())
}

fn describe(src: Option<ParamSource>) -> String {
    match src {
        Some(ParamSource::Oscillating) => "oscillating".to_string(),
        Some(ParamSource::Fixed(v)) => format!("fixed {v}"),
        None => "default".to_string(),
    }
}
