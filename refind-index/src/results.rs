use crate::arena::NodeId;

/// Best-first candidate list for one k-NN search.
///
/// Holds at least `num` entries once full, plus any entries tied with the
/// `num`-th distance.
pub(crate) struct Candidates {
    num: usize,
    entries: Vec<(f64, NodeId)>,
}

impl Candidates {
    pub(crate) fn new(num: usize) -> Self {
        Self {
            num,
            entries: Vec::with_capacity(num + 1),
        }
    }

    /// Distance a new candidate has to beat or tie. Infinite until `num`
    /// candidates are held.
    pub(crate) fn worst(&self) -> f64 {
        if self.entries.len() < self.num {
            return f64::INFINITY;
        }
        self.entries.last().map_or(f64::INFINITY, |(d, _)| *d)
    }

    pub(crate) fn offer(&mut self, distance: f64, id: NodeId) {
        if self.num == 0 {
            return;
        }
        if self.entries.len() >= self.num && distance > self.worst() {
            return;
        }
        let at = self.entries.partition_point(|(d, _)| *d <= distance);
        self.entries.insert(at, (distance, id));

        // Drop the tail once it is strictly worse than the num-th entry.
        while self.entries.len() > self.num {
            let cutoff = self.entries[self.num - 1].0;
            match self.entries.last() {
                Some((d, _)) if *d > cutoff => {
                    self.entries.pop();
                }
                _ => break,
            }
        }
    }

    pub(crate) fn into_sorted(mut self) -> Vec<(f64, NodeId)> {
        self.entries.truncate(self.num);
        self.entries
    }
}
