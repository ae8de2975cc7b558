use super::calculation::Calculation;

/// Ordered log of completed calculations.
pub trait HistoryStore {
    fn append(&mut self, calculation: Calculation);
    /// Returns at most `limit` of the newest entries, oldest first.
    fn recent(&self, limit: usize) -> Vec<Calculation>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type HistoryStoreBox = Box<dyn HistoryStore>;
