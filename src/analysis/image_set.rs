use log::warn;

use crate::analysis::types::{AnalysisRecord, ImageHandle, RecordStatus};

/// Ordered set of uploaded images and their analysis records.
///
/// Records are addressed by uuid everywhere the run loop is concerned;
/// indices only exist at the command boundary, where the frontend refers to
/// list positions.
#[derive(Debug, Default)]
pub struct ImageSet {
    records: Vec<AnalysisRecord>,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record per image, in input order, all Pending. Existing
    /// records are never touched.
    pub fn add(&mut self, images: Vec<ImageHandle>) {
        self.records
            .extend(images.into_iter().map(AnalysisRecord::new));
    }

    /// Remove the record at `index`. Out-of-bounds indices are a silent
    /// no-op; callers holding indices must re-fetch after any mutation.
    pub fn remove(&mut self, index: usize) {
        if index < self.records.len() {
            self.records.remove(index);
        } else {
            warn!(
                "ignoring remove at index {index}, set holds {} records",
                self.records.len()
            );
        }
    }

    /// Drop every record unconditionally, in-flight or not.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record_mut(&mut self, id: &str) -> Option<&mut AnalysisRecord> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// Id of the first record still waiting for analysis, in list order.
    pub fn next_pending(&self) -> Option<String> {
        self.records
            .iter()
            .find(|r| r.status == RecordStatus::Pending)
            .map(|r| r.id.clone())
    }

    pub fn pending_count(&self) -> usize {
        self.count_status(RecordStatus::Pending)
    }

    pub fn completed_count(&self) -> usize {
        self.count_status(RecordStatus::Complete)
    }

    fn count_status(&self, status: RecordStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(n: usize) -> Vec<ImageHandle> {
        (0..n)
            .map(|i| ImageHandle::new(format!("fundus-{i}.png"), vec![0u8; 8]))
            .collect()
    }

    #[test]
    fn add_appends_pending_records_in_order() {
        let mut set = ImageSet::new();
        set.add(handles(3));
        set.add(handles(1));

        assert_eq!(set.len(), 4);
        for record in set.records() {
            assert_eq!(record.status, RecordStatus::Pending);
            assert!(record.findings.is_empty());
        }
        assert_eq!(set.records()[0].image.name, "fundus-0.png");
        assert_eq!(set.records()[2].image.name, "fundus-2.png");
    }

    #[test]
    fn remove_out_of_bounds_is_a_no_op() {
        let mut set = ImageSet::new();
        set.add(handles(2));

        set.remove(2);
        set.remove(usize::MAX);
        assert_eq!(set.len(), 2);

        set.remove(0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].image.name, "fundus-1.png");
    }

    #[test]
    fn clear_discards_everything() {
        let mut set = ImageSet::new();
        set.add(handles(3));
        let id = set.next_pending().unwrap();
        set.record_mut(&id).unwrap().begin_analysis();

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.next_pending(), None);
    }

    #[test]
    fn next_pending_skips_non_pending_records() {
        let mut set = ImageSet::new();
        set.add(handles(3));

        let first = set.next_pending().unwrap();
        set.record_mut(&first).unwrap().begin_analysis();

        let second = set.next_pending().unwrap();
        assert_ne!(first, second);
        assert_eq!(second, set.records()[1].id);
        assert_eq!(set.records()[0].status, RecordStatus::Analyzing);
    }
}
