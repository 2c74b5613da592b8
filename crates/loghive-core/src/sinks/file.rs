//! File sink.

use loghive_types::{Layout, LogEvent, Result, Severity, Sink, SinkError};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::format::render;

/// Appends one line per event to a file.
///
/// The handle is shared by relayouts of the same sink so that lines from
/// differently formatted siblings never interleave mid-line.
#[derive(Debug, Clone)]
pub struct FileSink {
    name: String,
    path: PathBuf,
    file: Arc<Mutex<File>>,
    layout: Layout,
    label: Option<String>,
    level: Option<Severity>,
}

impl FileSink {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        debug!("Opened log file {:?}", path);

        Ok(Self {
            name: name.into(),
            path: path.to_path_buf(),
            file: Arc::new(Mutex::new(file)),
            layout: Layout::Pretty,
            label: None,
            level: None,
        })
    }

    /// Set the layout.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the sink-level minimum severity.
    pub fn min_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    /// Path being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Severity> {
        self.level
    }

    fn accept(&self, event: &LogEvent) -> std::result::Result<(), SinkError> {
        let mut line = render(event, self.layout, self.label.as_deref(), false)?;
        line.push('\n');
        self.file.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn with_layout(&self, layout: Layout) -> Option<Arc<dyn Sink>> {
        Some(Arc::new(self.clone().layout(layout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loghive_types::LoggerName;
    use tempfile::TempDir;

    #[test]
    fn test_appends_lines_and_creates_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("app.log");

        let sink = FileSink::open("file", &path).unwrap().layout(Layout::Simple).label("app");
        let origin = LoggerName::new("app").unwrap();
        sink.accept(&LogEvent::new(origin.clone(), Severity::Info, "first")).unwrap();
        sink.with_layout(Layout::Plain)
            .unwrap()
            .accept(&LogEvent::new(origin, Severity::Error, "second"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[app] info: first\nerror: second\n");
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        let origin = LoggerName::new("x").unwrap();

        for message in ["a", "b"] {
            let sink = FileSink::open("file", &path).unwrap().layout(Layout::Plain);
            sink.accept(&LogEvent::new(origin.clone(), Severity::Warn, message)).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["warn: a", "warn: b"]);
    }
}
