use std::{path::PathBuf, rc::Rc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use folio::{
    FolioConfig, LetterSequencer, NavController, NavState,
    host::{PageLayout, ScrollSource as _, SimulatedWindow},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the built-in page content as JSON.
    Content(ContentArgs),
    /// Print the letter sequence of a headline, one glyph per line.
    Letters(LettersArgs),
    /// Drive a navigation controller over a simulated page and print its state after each step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct LettersArgs {
    /// Text to sequence.
    text: String,

    /// Delay of the first glyph, in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Optional config JSON (only the `letters` section is used).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Comma-separated user scroll offsets, applied in order.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    offsets: Vec<f64>,

    /// Section to navigate to after the offsets are applied.
    #[arg(long)]
    navigate: Option<String>,

    /// Page layout JSON. Defaults to the stock sections stacked top to bottom.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Height of each stacked section when no layout is given.
    #[arg(long, default_value_t = 900.0)]
    section_height: f64,

    /// Viewport height when no layout is given.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,
}

#[derive(serde::Serialize)]
struct StepReport<'a> {
    step: &'a str,
    scroll_y: f64,
    #[serde(flatten)]
    state: NavState,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Content(args) => cmd_content(args),
        Command::Letters(args) => cmd_letters(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FolioConfig> {
    match path {
        Some(p) => {
            FolioConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(FolioConfig::default()),
    }
}

fn cmd_content(args: ContentArgs) -> anyhow::Result<()> {
    let content = folio::builtin_content();
    content.validate()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&content)
    } else {
        serde_json::to_string(&content)
    }
    .context("serialize content")?;
    println!("{json}");
    Ok(())
}

fn cmd_letters(args: LettersArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let seq = LetterSequencer::new(&cfg.letters)?;
    for unit in seq.sequence(&args.text, args.start) {
        println!("{} {} {:.3}", unit.index, unit.glyph, unit.delay);
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let sections = folio::default_sections();
    let layout = match &args.layout {
        Some(p) => PageLayout::from_path(p)
            .with_context(|| format!("load layout '{}'", p.display()))?,
        None => {
            let layout = PageLayout::stacked(&sections, args.section_height, args.viewport_height);
            layout.validate()?;
            layout
        }
    };

    let window = Rc::new(SimulatedWindow::new(layout));
    let mut ctrl = NavController::attach(sections, window.clone(), &cfg)?;
    report("load", &window, &ctrl)?;

    for y in &args.offsets {
        window.advance_time(0.1);
        window.user_scroll_to(*y);
        report("scroll", &window, &ctrl)?;
    }

    if let Some(id) = &args.navigate {
        if ctrl.navigate_to(id) {
            report("navigate", &window, &ctrl)?;
            window.finish_smooth_scroll(30);
            report("settle", &window, &ctrl)?;
        } else {
            tracing::warn!(section = %id, "navigation ignored");
            report("ignored", &window, &ctrl)?;
        }
    }
    Ok(())
}

fn report(step: &str, window: &SimulatedWindow, ctrl: &NavController) -> anyhow::Result<()> {
    let line = serde_json::to_string(&StepReport {
        step,
        scroll_y: window.scroll_y(),
        state: ctrl.state(),
    })
    .context("serialize step")?;
    println!("{line}");
    Ok(())
}
