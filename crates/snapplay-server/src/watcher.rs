//! File watching for live reload.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The site config file changed
    ConfigModified(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Generic modification
    Modified(PathBuf),
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch the public directory recursively and the config file.
    ///
    /// Paths that do not exist are skipped. Returns the watcher and a channel
    /// to receive events; events stop when the watcher is dropped.
    pub fn new(
        public_dir: &Path,
        config_file: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        if public_dir.exists() {
            watcher
                .watch(public_dir, RecursiveMode::Recursive)
                .map_err(std::io::Error::other)?;
        }

        // Editors replace files on save, so watch the directory holding the config
        let config_dir = match config_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if config_dir.exists() {
            watcher
                .watch(&config_dir, RecursiveMode::NonRecursive)
                .map_err(std::io::Error::other)?;
        }

        let mut filter = EventFilter::new(public_dir, config_file);

        // Bridge notify's blocking callback channel into tokio
        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                for e in filter.accept(event, Instant::now()) {
                    if async_tx.blocking_send(e).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Drops events outside the public directory and config file, then debounces the rest.
struct EventFilter {
    public_roots: [PathBuf; 2],
    config_name: Option<OsString>,
    debounce: Duration,
    last_event: Option<Instant>,
}

impl EventFilter {
    fn new(public_dir: &Path, config_file: &Path) -> Self {
        Self {
            public_roots: [
                public_dir.to_path_buf(),
                public_dir
                    .canonicalize()
                    .unwrap_or_else(|_| public_dir.to_path_buf()),
            ],
            config_name: config_file.file_name().map(|n| n.to_os_string()),
            debounce: Duration::from_millis(100),
            last_event: None,
        }
    }

    fn accept(&mut self, event: notify::Event, now: Instant) -> Vec<WatchEvent> {
        let events: Vec<WatchEvent> = event
            .paths
            .iter()
            .filter_map(|path| {
                let in_public = self.public_roots.iter().any(|root| path.starts_with(root));
                let is_config = !in_public
                    && self.config_name.is_some()
                    && path.file_name() == self.config_name.as_deref();

                // Siblings of the config file are not ours to reload on
                if !in_public && !is_config {
                    return None;
                }

                classify_event(path, &event.kind, is_config)
            })
            .collect();

        if events.is_empty() {
            return events;
        }

        if self
            .last_event
            .is_some_and(|t| now.duration_since(t) < self.debounce)
        {
            return Vec::new();
        }
        self.last_event = Some(now);

        events
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind, is_config: bool) -> Option<WatchEvent> {
    use notify::EventKind;

    let path = path.to_path_buf();

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) if is_config => {
            Some(WatchEvent::ConfigModified(path))
        }
        EventKind::Create(_) => Some(WatchEvent::Created(path)),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path)),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path)),
        _ => None,
    }
}
