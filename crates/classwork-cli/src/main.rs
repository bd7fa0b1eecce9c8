use anyhow::Result;
use clap::Parser;
use classwork_cli::{run, DemoConfig, Section};
use classwork_plot::{ChartSink, JsonExport, SummarySink};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classwork - object-oriented idioms, worked through in Rust
#[derive(Parser)]
#[command(name = "classwork")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Points, callable lines and polynomials, robots and validated employees")]
struct Cli {
    #[command(subcommand)]
    section: Option<Section>,

    /// Seed for the random lines (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Sample points per plotted curve
    #[arg(long, global = true, default_value_t = 100)]
    samples: usize,

    /// Start of the plotted x-range
    #[arg(long, global = true, default_value_t = -5.0, allow_hyphen_values = true)]
    from: f64,

    /// End of the plotted x-range
    #[arg(long, global = true, default_value_t = 5.0, allow_hyphen_values = true)]
    to: f64,

    /// Number of random lines to plot
    #[arg(long, global = true, default_value_t = 4)]
    lines: usize,

    /// Text file whose first line names a factory-built employee
    #[arg(long, global = true, value_name = "PATH")]
    employee_file: Option<PathBuf>,

    /// Write every chart as JSON into this directory
    #[arg(long, global = true, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Open the charts in a native window
    #[cfg(feature = "gui")]
    #[arg(long, global = true)]
    window: bool,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        DemoConfig {
            seed: self.seed,
            samples: self.samples,
            from: self.from,
            to: self.to,
            lines: self.lines,
            employee_file: self.employee_file.clone(),
        }
    }

    fn sinks(&self) -> Result<Vec<Box<dyn ChartSink>>> {
        let mut sinks: Vec<Box<dyn ChartSink>> = vec![Box::new(SummarySink::new())];
        if let Some(dir) = &self.export {
            sinks.push(Box::new(JsonExport::new(dir)?));
        }
        #[cfg(feature = "gui")]
        if self.window {
            sinks.push(Box::new(classwork_plot::WindowSink::new("classwork")));
        }
        Ok(sinks)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let mut sinks = cli.sinks()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.section.unwrap_or_default(), &config, &mut out, &mut sinks)?;
    out.flush()?;
    Ok(())
}
