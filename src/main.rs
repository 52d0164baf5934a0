//! vlab CLI
//!
//! Usage:
//!   vlab --replay poses.txt                 # Replay a recorded pose stream
//!   vlab --replay - < poses.txt             # Same, from stdin
//!   vlab --interactive                      # Type poses frame by frame
//!   vlab --serve                            # HTTP API server
//!   vlab --replay poses.txt --json          # JSON frame reports
//!   vlab --replay poses.txt --plan          # Full render plans as JSON

use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use vlab::core::{run_server, FrameOutput, LabConfig, PoseParser, VirtualLabSession};
use vlab::telemetry::init_tracing;
use vlab::types::{FrameReport, ReactionState};
use vlab::{LabError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "vlab",
    version = VERSION,
    about = "Virtual litmus lab - pour with a hand tilt, watch the paper react",
    long_about = "vlab drives a simulated test tube from per-frame hand poses.\n\n\
                  Tilt past 34 degrees to pour. When the stream lands on the litmus\n\
                  paper the paper changes color, and stays changed.\n\n\
                  Pose lines:\n  \
                  50 60 240                    angle x y\n  \
                  angle=50 x=60 y=240          key/value\n  \
                  {\"angle\":50,\"x\":60,\"y\":240}  JSON\n  \
                  -                            no hand this frame\n\n\
                  Variants:\n  \
                  base (red_litmus)   red paper turns blue\n  \
                  acid (blue_litmus)  blue paper turns red"
)]
struct Args {
    /// Replay poses from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    replay: Option<String>,

    /// Interactive mode - type one pose per frame
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// JSON config file (frame, tube, paper, strategy, variant, threshold)
    #[arg(short, long)]
    config: Option<String>,

    /// Reaction variant: base | acid (overrides config)
    #[arg(long)]
    variant: Option<String>,

    /// Stream trajectory: vertical_drop | angled (overrides config)
    #[arg(long)]
    strategy: Option<String>,

    /// Pour threshold in degrees (overrides config)
    #[arg(long)]
    threshold: Option<f64>,

    /// Output frame reports as JSON
    #[arg(long)]
    json: bool,

    /// Output full render plans as JSON
    #[arg(long)]
    plan: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show per-frame breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(if args.serve { "info" } else { "warn" });

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> vlab::Result<()> {
    let config = build_config(args)?;
    if args.serve {
        run_server(&args.addr, config).await
    } else if let Some(ref path) = args.replay {
        run_replay(path, config, args)
    } else {
        run_interactive(config, args)
    }
}

/// Defaults → config file → flags
fn build_config(args: &Args) -> vlab::Result<LabConfig> {
    let mut config = match args.config {
        Some(ref path) => LabConfig::load(path)?,
        None => LabConfig::default(),
    };
    if let Some(ref raw) = args.variant {
        config.variant = raw.parse()?;
    }
    if let Some(ref raw) = args.strategy {
        config.strategy = raw.parse()?;
    }
    if let Some(threshold) = args.threshold {
        config.pour_threshold_deg = threshold;
    }
    config.validate()?;
    Ok(config)
}

/// Replay a recorded pose stream
fn run_replay(path: &str, config: LabConfig, args: &Args) -> vlab::Result<()> {
    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };

    let parser = PoseParser::new();
    let mut session = VirtualLabSession::new(config)?;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if PoseParser::is_skippable(&line) {
            continue;
        }
        let pose = parser.parse_line(&line).map_err(|e| match e {
            LabError::PoseParse(msg) => LabError::PoseParse(format!("line {}: {}", index + 1, msg)),
            other => other,
        })?;
        let output = session.advance(pose.as_ref());
        print_output(&output, args)?;
    }

    if !args.json && !args.plan {
        print_summary(&session);
    }
    Ok(())
}

/// Interactive mode: one typed pose per frame
fn run_interactive(config: LabConfig, args: &Args) -> vlab::Result<()> {
    let parser = PoseParser::new();
    let mut session = VirtualLabSession::new(config)?;

    print_header(&session);
    println!("Type a pose per frame (e.g. '50 60 240'), '-' for no hand, 'quit' to exit.");
    println!("Goal: tilt past {:.0}° and pour onto the paper.", session.config().pour_threshold_deg);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&session));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if PoseParser::is_skippable(line) {
            continue;
        }

        match parser.parse_line(line) {
            Ok(pose) => {
                let output = session.advance(pose.as_ref());
                print_output(&output, args)?;
                print_reaction_message(&output.report);
            }
            Err(e) => println!("{}", format!("⚠ {}", e).yellow()),
        }
    }

    print_summary(&session);
    Ok(())
}

fn print_output(output: &FrameOutput, args: &Args) -> vlab::Result<()> {
    if args.plan {
        println!("{}", serde_json::to_string(&output.plan)?);
    } else if args.json {
        println!("{}", serde_json::to_string(&output.report)?);
    } else if args.verbose {
        print_verbose(output);
    } else if args.no_color {
        println!("{}", output.report.to_parseable_string());
    } else {
        println!("{}", output.report.to_terminal_string());
    }
    Ok(())
}

fn print_header(session: &VirtualLabSession) {
    let config = session.config();
    println!("{}", "========================================".bold());
    println!("{}", format!("  vlab v{} - {} on {}", VERSION, config.variant, config.variant.paper_label()).bold());
    println!("{}", "========================================".bold());
    println!("  strategy: {}", config.strategy);
    println!(
        "  paper:    ({}, {}) {}x{}",
        config.paper.x(),
        config.paper.y(),
        config.paper.width(),
        config.paper.height()
    );
    println!();
}

fn format_prompt(session: &VirtualLabSession) -> String {
    let state = session.reaction_state();
    format!("{} [{}] > ", state.emoji(), state.painted())
}

fn print_reaction_message(report: &FrameReport) {
    if report.hit {
        println!("{}", "  ✓ Reaction Complete! The litmus paper changed color.".green().bold());
    }
}

fn print_verbose(output: &FrameOutput) {
    let report = &output.report;
    let plan = &output.plan;
    let terminus = report
        .terminus
        .map(|t| format!("({}, {})", t.x, t.y))
        .unwrap_or_else(|| "-".to_string());

    println!("┌──────────────────────────────────────┐");
    println!("│ frame {} | hand: {}", report.frame, if report.hand_present { "yes" } else { "no" });
    println!("├──────────────────────────────────────┤");
    println!(
        "│ angle:    {:.1}°{}",
        report.angle,
        if report.angle_clamped { " (clamped)" } else { "" }
    );
    println!("│ pouring:  {}", report.pouring);
    println!("│ tube at:  ({}, {})", plan.tube.anchor.x, plan.tube.anchor.y);
    println!("│ terminus: {}", terminus);
    println!("│ hit:      {}", report.hit);
    println!("├──────────────────────────────────────┤");
    println!("│ reaction: {} | paper {}", report.reaction.painted(), plan.paper.fill.to_hex());
    println!("│ reason:   {}", report.reason);
    println!("└──────────────────────────────────────┘");
}

fn print_summary(session: &VirtualLabSession) {
    let state = session.reaction_state();
    let detail = match (state, session.triggered_at()) {
        (ReactionState::Triggered, Some(frame)) => format!(" at frame {}", frame),
        _ => String::new(),
    };
    println!();
    println!(
        "Session ended. Frames: {} | Reaction: {}{}",
        session.frame_count(),
        state.painted(),
        detail
    );
}
