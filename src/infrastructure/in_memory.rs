use crate::domain::calculation::Calculation;
use crate::domain::ports::HistoryStore;

/// Calculation history held in process memory.
///
/// Grows without bound for the lifetime of the session; display limits are
/// applied by readers through `recent`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryHistory {
    entries: Vec<Calculation>,
}

impl InMemoryHistory {
    /// Creates a new, empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, calculation: Calculation) {
        self.entries.push(calculation);
    }

    fn recent(&self, limit: usize) -> Vec<Calculation> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries[start..].to_vec()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
