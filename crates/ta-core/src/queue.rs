//! Ordered upload queue with its lifecycle rules

use crate::model::{AnalysisResult, FileId, UploadStatus, UploadedFile};
use crate::storage::{self, KeyValueStore};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Queue statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueStats {
    pub total: usize,
    pub uploading: usize,
    pub processing: usize,
    pub completed: usize,
    pub authentic: usize,
    pub suspicious: usize,
    /// Mean confidence over completed files, if any
    pub average_confidence: Option<f64>,
}

/// Append-only collection of uploads, in arrival order
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the queue persisted under `key`; a missing key is an empty queue
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> CoreResult<Self> {
        let files: Vec<UploadedFile> = storage::load_json(store, key)?.unwrap_or_default();
        Ok(Self { files })
    }

    /// Serialize the whole queue under `key`
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> CoreResult<()> {
        storage::save_json(store, key, &self.files)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: &FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| &f.id == id)
    }

    pub fn push(&mut self, file: UploadedFile) {
        self.files.push(file);
    }

    /// `uploading -> processing`, recording the content digest if one was taken
    pub fn mark_processing(
        &mut self,
        id: &FileId,
        sha256: Option<String>,
    ) -> CoreResult<&UploadedFile> {
        let file = self.transition(id, UploadStatus::Processing)?;
        if sha256.is_some() {
            file.sha256 = sha256;
        }
        Ok(file)
    }

    /// `processing -> completed` with the drawn verdict
    pub fn complete(&mut self, id: &FileId, result: AnalysisResult) -> CoreResult<&UploadedFile> {
        let file = self.transition(id, UploadStatus::Completed)?;
        file.result = Some(result);
        Ok(file)
    }

    pub fn remove(&mut self, id: &FileId) -> Option<UploadedFile> {
        let index = self.files.iter().position(|f| &f.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Files not yet completed
    pub fn in_flight(&self) -> impl Iterator<Item = &UploadedFile> {
        self.files.iter().filter(|f| !f.status.is_terminal())
    }

    pub fn stats(&self) -> QueueStats {
        let mut stats = QueueStats {
            total: self.files.len(),
            ..QueueStats::default()
        };
        let mut confidence_sum = 0u64;

        for file in &self.files {
            match file.status {
                UploadStatus::Uploading => stats.uploading += 1,
                UploadStatus::Processing => stats.processing += 1,
                UploadStatus::Completed => stats.completed += 1,
            }
            if let Some(result) = &file.result {
                if result.is_authentic {
                    stats.authentic += 1;
                } else {
                    stats.suspicious += 1;
                }
                confidence_sum += u64::from(result.confidence);
            }
        }

        let judged = stats.authentic + stats.suspicious;
        if judged > 0 {
            stats.average_confidence = Some(confidence_sum as f64 / judged as f64);
        }
        stats
    }

    fn transition(&mut self, id: &FileId, to: UploadStatus) -> CoreResult<&mut UploadedFile> {
        let file = self
            .files
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        if file.status.next() != Some(to) {
            return Err(CoreError::InvalidTransition {
                id: id.clone(),
                from: file.status,
                to,
            });
        }

        file.status = to;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::verdict::VerdictGenerator;

    fn file(name: &str) -> UploadedFile {
        UploadedFile::new(name, "image/png", 100)
    }

    #[test]
    fn test_lifecycle_in_order() {
        let mut queue = UploadQueue::new();
        let f = file("a.png");
        let id = f.id.clone();
        queue.push(f);

        let updated = queue.mark_processing(&id, Some("abcd".into())).unwrap();
        assert_eq!(updated.status, UploadStatus::Processing);
        assert_eq!(updated.sha256.as_deref(), Some("abcd"));

        let done = queue.complete(&id, VerdictGenerator::build(true, 95)).unwrap();
        assert!(done.is_completed());
        assert!(done.result.is_some());
    }

    #[test]
    fn test_no_skips_or_reversals() {
        let mut queue = UploadQueue::new();
        let f = file("a.png");
        let id = f.id.clone();
        queue.push(f);

        let err = queue.complete(&id, VerdictGenerator::build(true, 95)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: UploadStatus::Uploading,
                to: UploadStatus::Completed,
                ..
            }
        ));

        queue.mark_processing(&id, None).unwrap();
        assert!(queue.mark_processing(&id, None).is_err());
        queue.complete(&id, VerdictGenerator::build(false, 70)).unwrap();
        assert!(queue.mark_processing(&id, None).is_err());
        assert_eq!(queue.get(&id).unwrap().status, UploadStatus::Completed);
    }

    #[test]
    fn test_unknown_id() {
        let mut queue = UploadQueue::new();
        let err = queue.mark_processing(&FileId::from("ghost"), None).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn test_order_and_remove() {
        let mut queue = UploadQueue::new();
        let names = ["1.png", "2.png", "3.png"];
        for name in names {
            queue.push(file(name));
        }
        let middle = queue.files()[1].id.clone();
        assert_eq!(queue.remove(&middle).unwrap().name, "2.png");
        assert!(queue.remove(&middle).is_none());

        let remaining: Vec<_> = queue.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(remaining, vec!["1.png", "3.png"]);
    }

    #[test]
    fn test_persist_and_restore() {
        let store = MemoryStore::new();
        let mut queue = UploadQueue::new();
        queue.push(file("a.png"));
        queue.push(file("b.png"));
        let id = queue.files()[0].id.clone();
        queue.mark_processing(&id, None).unwrap();
        queue.persist(&store, "uploads").unwrap();

        let restored = UploadQueue::restore(&store, "uploads").unwrap();
        assert_eq!(restored.files(), queue.files());
        assert_eq!(restored.in_flight().count(), 2);

        let empty = UploadQueue::restore(&store, "other").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_stats() {
        let mut queue = UploadQueue::new();
        for name in ["a.png", "b.png", "c.png", "d.png"] {
            queue.push(file(name));
        }
        let ids: Vec<_> = queue.files().iter().map(|f| f.id.clone()).collect();

        queue.mark_processing(&ids[0], None).unwrap();
        queue.complete(&ids[0], VerdictGenerator::build(true, 90)).unwrap();
        queue.mark_processing(&ids[1], None).unwrap();
        queue.complete(&ids[1], VerdictGenerator::build(false, 80)).unwrap();
        queue.mark_processing(&ids[2], None).unwrap();

        let stats = queue.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.uploading, 1);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.authentic, 1);
        assert_eq!(stats.suspicious, 1);
        assert_eq!(stats.average_confidence, Some(85.0));

        assert_eq!(UploadQueue::new().stats().average_confidence, None);
    }
}
