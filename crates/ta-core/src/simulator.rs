//! Upload service: the queue, its timers and the simulated analysis
//!
//! Each accepted file gets one lifecycle task:
//!
//! ```text
//! uploading --(bytes read | upload delay)--> processing --(analysis delay)--> completed
//! ```
//!
//! Tasks are registered by file id so that clearing the queue aborts them. A
//! task that wakes up for a file that is no longer queued does nothing.
//! Records restored from storage in a non-terminal state are left alone; no
//! task is rescheduled for them.

use crate::model::{AnalysisResult, FileId, UploadStatus, UploadedFile};
use crate::queue::{QueueStats, UploadQueue};
use crate::runtime::{Runtime, TaskRegistry};
use crate::storage::KeyValueStore;
use crate::validation::{self, Rejection};
use crate::verdict::VerdictGenerator;
use crate::{AppConfig, CoreError, CoreResult};
use futures::future::{abortable, LocalBoxFuture};
use futures::FutureExt;
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::{Rc, Weak};
use tracing::{debug, error, info, warn};

/// Reads the full content of a file being uploaded
pub type ContentReader = LocalBoxFuture<'static, CoreResult<Vec<u8>>>;

/// A file offered for analysis
pub struct UploadRequest {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub content: Option<ContentReader>,
}

impl UploadRequest {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            content: None,
        }
    }

    /// Leave `uploading` once this reader resolves instead of after the upload delay
    pub fn with_content<F>(mut self, reader: F) -> Self
    where
        F: Future<Output = CoreResult<Vec<u8>>> + 'static,
    {
        self.content = Some(reader.boxed_local());
        self
    }
}

impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .field("content", &self.content.is_some())
            .finish()
    }
}

/// Something observable happened to the queue
#[derive(Debug, Clone, PartialEq)]
pub enum QueueEvent {
    Enqueued { id: FileId, name: String },
    Rejected { name: String, rejection: Rejection },
    StatusChanged { id: FileId, status: UploadStatus },
    Completed { id: FileId, name: String, result: AnalysisResult },
    ReadFailed { id: FileId, name: String, reason: String },
    Cleared { removed: usize, cancelled: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Short message for the user (a toast on the web)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl QueueEvent {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            QueueEvent::Rejected { rejection, .. } => Some(Notice {
                title: rejection.title().to_string(),
                description: rejection.description(),
                variant: NoticeVariant::Destructive,
            }),
            QueueEvent::Completed { name, .. } => Some(Notice {
                title: "Analysis completed".to_string(),
                description: format!("{} has been processed", name),
                variant: NoticeVariant::Default,
            }),
            QueueEvent::ReadFailed { name, .. } => Some(Notice {
                title: "Upload failed".to_string(),
                description: format!("Could not read {}", name),
                variant: NoticeVariant::Destructive,
            }),
            _ => None,
        }
    }
}

type Listener = Rc<dyn Fn(&QueueEvent, &[UploadedFile])>;

struct Inner<S, R> {
    store: S,
    runtime: R,
    config: AppConfig,
    queue: RefCell<UploadQueue>,
    tasks: RefCell<TaskRegistry>,
    verdicts: RefCell<VerdictGenerator>,
    listeners: RefCell<Vec<Listener>>,
}

/// Upload queue plus analysis simulator. Clones share state.
pub struct UploadService<S, R> {
    inner: Rc<Inner<S, R>>,
}

impl<S, R> Clone for UploadService<S, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore + 'static, R: Runtime> UploadService<S, R> {
    /// Restore the persisted queue (when persistence is enabled) and start idle
    pub fn open(store: S, runtime: R, config: AppConfig) -> CoreResult<Self> {
        config.validate()?;

        let queue = if config.persist_uploads {
            match UploadQueue::restore(&store, &config.uploads_key) {
                Ok(queue) => queue,
                Err(CoreError::Json(e)) => {
                    warn!("Discarding unreadable upload queue: {}", e);
                    store.remove(&config.uploads_key)?;
                    UploadQueue::new()
                }
                Err(e) => return Err(e),
            }
        } else {
            UploadQueue::new()
        };

        let stalled = queue.in_flight().count();
        if stalled > 0 {
            warn!("{} restored upload(s) were interrupted and will not resume", stalled);
        }

        let verdicts =
            VerdictGenerator::new().with_authentic_probability(config.authentic_probability);

        Ok(Self {
            inner: Rc::new(Inner {
                store,
                runtime,
                config,
                queue: RefCell::new(queue),
                tasks: RefCell::new(TaskRegistry::new()),
                verdicts: RefCell::new(verdicts),
                listeners: RefCell::new(Vec::new()),
            }),
        })
    }

    /// Pin verdict randomness
    pub fn with_seed(self, seed: u64) -> Self {
        let generator = VerdictGenerator::seeded(seed)
            .with_authentic_probability(self.inner.config.authentic_probability);
        *self.inner.verdicts.borrow_mut() = generator;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Called after every mutation with the event and the resulting records
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&QueueEvent, &[UploadedFile]) + 'static,
    {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn files(&self) -> Vec<UploadedFile> {
        self.inner.queue.borrow().files().to_vec()
    }

    pub fn get(&self, id: &FileId) -> Option<UploadedFile> {
        self.inner.queue.borrow().get(id).cloned()
    }

    pub fn stats(&self) -> QueueStats {
        self.inner.queue.borrow().stats()
    }

    /// Lifecycles still scheduled
    pub fn pending_tasks(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    /// Validate, queue in `uploading` and schedule the lifecycle
    pub fn enqueue(&self, request: UploadRequest) -> CoreResult<FileId> {
        let UploadRequest {
            name,
            mime_type,
            size_bytes,
            content,
        } = request;

        if let Err(rejection) = validation::validate(&mime_type, size_bytes, &self.inner.config) {
            warn!("Rejected {}: {}", name, rejection);
            self.inner.emit(QueueEvent::Rejected {
                name,
                rejection: rejection.clone(),
            });
            return Err(rejection.into());
        }

        let file = UploadedFile::new(name, mime_type, size_bytes);
        let id = file.id.clone();
        let name = file.name.clone();
        info!("Queued {} ({}, {} bytes) as {}", name, file.mime_type, size_bytes, id);

        self.inner.queue.borrow_mut().push(file);
        self.inner.persist();
        self.inner.emit(QueueEvent::Enqueued {
            id: id.clone(),
            name,
        });

        self.schedule(id.clone(), content);
        Ok(id)
    }

    /// Enqueue each request independently; one rejection does not stop the rest
    pub fn enqueue_all<I>(&self, requests: I) -> Vec<CoreResult<FileId>>
    where
        I: IntoIterator<Item = UploadRequest>,
    {
        requests.into_iter().map(|r| self.enqueue(r)).collect()
    }

    /// Abort every pending lifecycle and drop all records, in memory and in storage
    pub fn clear(&self) -> CoreResult<()> {
        let cancelled = self.inner.tasks.borrow_mut().cancel_all();
        let removed = {
            let mut queue = self.inner.queue.borrow_mut();
            let removed = queue.len();
            queue.clear();
            removed
        };

        let outcome = if self.inner.config.persist_uploads {
            self.inner.store.remove(&self.inner.config.uploads_key)
        } else {
            Ok(())
        };
        info!("Cleared {} upload(s), cancelled {} pending task(s)", removed, cancelled);
        self.inner.emit(QueueEvent::Cleared { removed, cancelled });
        outcome
    }

    fn schedule(&self, id: FileId, content: Option<ContentReader>) {
        let (task, handle) = abortable(lifecycle(Rc::downgrade(&self.inner), id.clone(), content));
        self.inner.tasks.borrow_mut().insert(id, handle);
        self.inner.runtime.spawn(
            async move {
                let _ = task.await;
            }
            .boxed_local(),
        );
    }
}

async fn lifecycle<S, R>(inner: Weak<Inner<S, R>>, id: FileId, content: Option<ContentReader>)
where
    S: KeyValueStore + 'static,
    R: Runtime,
{
    let sha256 = match content {
        Some(reader) => match reader.await {
            Ok(bytes) => Some(hex::encode(Sha256::digest(&bytes))),
            Err(e) => {
                if let Some(inner) = inner.upgrade() {
                    inner.read_failed(&id, e);
                }
                return;
            }
        },
        None => {
            let Some(delay) = inner
                .upgrade()
                .map(|i| i.runtime.sleep(i.config.upload_delay()))
            else {
                return;
            };
            delay.await;
            None
        }
    };

    let delay = {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        if !inner.mark_processing(&id, sha256) {
            return;
        }
        inner.runtime.sleep(inner.config.analysis_delay())
    };
    delay.await;

    if let Some(inner) = inner.upgrade() {
        inner.complete(&id);
    }
}

impl<S: KeyValueStore, R> Inner<S, R> {
    fn persist(&self) {
        if !self.config.persist_uploads {
            return;
        }
        if let Err(e) = self.queue.borrow().persist(&self.store, &self.config.uploads_key) {
            error!("Failed to persist upload queue: {}", e);
        }
    }

    fn emit(&self, event: QueueEvent) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.queue.borrow().files().to_vec();
        for listener in listeners {
            listener(&event, &snapshot);
        }
    }

    fn mark_processing(&self, id: &FileId, sha256: Option<String>) -> bool {
        let outcome = self
            .queue
            .borrow_mut()
            .mark_processing(id, sha256)
            .map(|f| f.status);

        match outcome {
            Ok(status) => {
                debug!("{} is now {}", id, status);
                self.persist();
                self.emit(QueueEvent::StatusChanged {
                    id: id.clone(),
                    status,
                });
                true
            }
            Err(CoreError::NotFound(_)) => {
                debug!("{} left the queue before processing", id);
                self.tasks.borrow_mut().finish(id);
                false
            }
            Err(e) => {
                warn!("Skipping lifecycle of {}: {}", id, e);
                self.tasks.borrow_mut().finish(id);
                false
            }
        }
    }

    fn complete(&self, id: &FileId) {
        self.tasks.borrow_mut().finish(id);

        let result = self.verdicts.borrow_mut().draw();
        let outcome = self
            .queue
            .borrow_mut()
            .complete(id, result.clone())
            .map(|f| f.name.clone());

        match outcome {
            Ok(name) => {
                info!(
                    "Analysis of {} finished: {} at {}% ({} risk)",
                    name,
                    result.verdict_label(),
                    result.confidence,
                    result.risk_level
                );
                self.persist();
                self.emit(QueueEvent::StatusChanged {
                    id: id.clone(),
                    status: UploadStatus::Completed,
                });
                self.emit(QueueEvent::Completed {
                    id: id.clone(),
                    name,
                    result,
                });
            }
            Err(e) => debug!("Dropping verdict for {}: {}", id, e),
        }
    }

    fn read_failed(&self, id: &FileId, reason: CoreError) {
        self.tasks.borrow_mut().finish(id);

        let removed = self.queue.borrow_mut().remove(id);
        let Some(file) = removed else {
            return;
        };

        error!("Failed to read {}: {}", file.name, reason);
        self.persist();
        self.emit(QueueEvent::ReadFailed {
            id: id.clone(),
            name: file.name,
            reason: reason.to_string(),
        });
    }
}

impl<S, R> Drop for Inner<S, R> {
    fn drop(&mut self) {
        self.tasks.get_mut().cancel_all();
    }
}
