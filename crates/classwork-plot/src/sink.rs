use crate::chart::Chart;
use crate::error::PlotError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A terminal consumer of finished charts
pub trait ChartSink {
    fn show(&mut self, chart: &Chart) -> Result<(), PlotError>;

    /// Called once after the last chart; sinks that batch their output flush here
    fn finish(&mut self) -> Result<(), PlotError> {
        Ok(())
    }
}

/// Logs a one-line summary of every curve instead of drawing it
#[derive(Debug, Default)]
pub struct SummarySink {
    shown: usize,
}

impl SummarySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts seen so far
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl ChartSink for SummarySink {
    fn show(&mut self, chart: &Chart) -> Result<(), PlotError> {
        info!(title = %chart.title, curves = chart.curves.len(), "chart");
        for curve in &chart.curves {
            match curve.y_range() {
                Some((lo, hi)) => info!(
                    label = %curve.label,
                    samples = curve.points.len(),
                    y_min = lo,
                    y_max = hi,
                    "curve"
                ),
                None => info!(label = %curve.label, "empty curve"),
            }
        }
        self.shown += 1;
        Ok(())
    }
}

/// Writes every chart as pretty-printed JSON into a directory
#[derive(Debug)]
pub struct JsonExport {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonExport {
    /// Export into `dir`, creating it if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, PlotError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| PlotError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn file_name(&self, title: &str) -> String {
        let slug: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        let slug = if slug.is_empty() { "chart" } else { slug };
        format!("{:02}-{}.json", self.written.len(), slug)
    }
}

impl ChartSink for JsonExport {
    fn show(&mut self, chart: &Chart) -> Result<(), PlotError> {
        let path = self.dir.join(self.file_name(&chart.title));
        let json = serde_json::to_string_pretty(chart).map_err(|source| PlotError::Encode {
            title: chart.title.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| PlotError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "exported chart");
        self.written.push(path);
        Ok(())
    }
}

/// Fan one chart out to several sinks
impl ChartSink for Vec<Box<dyn ChartSink>> {
    fn show(&mut self, chart: &Chart) -> Result<(), PlotError> {
        for sink in self.iter_mut() {
            sink.show(chart)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), PlotError> {
        for sink in self.iter_mut() {
            sink.finish()?;
        }
        Ok(())
    }
}
