//! Stream storage: one recorded trajectory per seed particle.

use drift_core::Particle;
use glam::DVec3;
use smallvec::SmallVec;

/// One entry in a recorded trajectory.
#[derive(Clone, Debug)]
pub enum StreamEntry {
    /// A trajectory sample produced by seeding or integration.
    Sample(Particle),
    /// Marks that advancement halted at this point (the particle left the
    /// field's valid volume, or the field could not answer).
    Separator,
}

impl StreamEntry {
    /// The contained particle, or `None` for a separator.
    pub fn sample(&self) -> Option<&Particle> {
        match self {
            Self::Sample(p) => Some(p),
            Self::Separator => None,
        }
    }

    /// `true` if this entry is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

/// An ordered trajectory for a single seed particle.
///
/// Entry 0 is always the seed sample. Interior separators mark where
/// advancement halted and was later resumed under a field whose volume
/// covered the trajectory again.
///
/// The separator count is cached; the only two mutators
/// ([`push_sample`](Stream::push_sample) and
/// [`push_separator`](Stream::push_separator)) keep it equal to the number
/// of [`StreamEntry::Separator`] entries.
#[derive(Clone, Debug)]
pub struct Stream {
    entries: Vec<StreamEntry>,
    separators: usize,
}

impl Stream {
    /// History window consumed by the curvature controller.
    pub(crate) const HISTORY: usize = 3;

    pub(crate) fn from_seed(seed: Particle) -> Self {
        Self {
            entries: vec![StreamEntry::Sample(seed)],
            separators: 0,
        }
    }

    /// Total number of entries, separators included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the stream holds no entries. Never the case for a stream
    /// created from a seed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in trajectory order.
    pub fn entries(&self) -> &[StreamEntry] {
        &self.entries
    }

    /// Number of separator entries.
    pub fn separator_count(&self) -> usize {
        self.separators
    }

    /// Number of completed integration steps: entries minus separators
    /// minus the seed.
    pub fn step_count(&self) -> usize {
        self.entries.len() - self.separators - 1
    }

    /// The seed sample this stream grew from.
    pub fn seed(&self) -> &Particle {
        match &self.entries[0] {
            StreamEntry::Sample(p) => p,
            StreamEntry::Separator => unreachable!("stream entry 0 is always the seed"),
        }
    }

    /// The most recent sample, skipping any trailing separator.
    pub fn last_sample(&self) -> Option<&Particle> {
        self.entries.iter().rev().find_map(StreamEntry::sample)
    }

    /// `true` if the last entry is a separator, i.e. advancement halted
    /// and has not resumed.
    pub fn is_halted(&self) -> bool {
        self.entries
            .last()
            .is_some_and(StreamEntry::is_separator)
    }

    /// All samples in trajectory order, skipping separators.
    pub fn samples(&self) -> impl Iterator<Item = &Particle> {
        self.entries.iter().filter_map(StreamEntry::sample)
    }

    pub(crate) fn samples_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.entries.iter_mut().filter_map(|e| match e {
            StreamEntry::Sample(p) => Some(p),
            StreamEntry::Separator => None,
        })
    }

    pub(crate) fn push_sample(&mut self, p: Particle) {
        self.entries.push(StreamEntry::Sample(p));
    }

    pub(crate) fn push_separator(&mut self) {
        self.entries.push(StreamEntry::Separator);
        self.separators += 1;
    }

    /// Positions of the most recent contiguous samples (no separator in
    /// between), oldest first, at most [`HISTORY`](Self::HISTORY) of them.
    pub(crate) fn recent_positions(&self) -> SmallVec<[DVec3; Self::HISTORY]> {
        let mut recent: SmallVec<[DVec3; Self::HISTORY]> = self
            .entries
            .iter()
            .rev()
            .map_while(StreamEntry::sample)
            .take(Self::HISTORY)
            .map(|p| p.position)
            .collect();
        recent.reverse();
        recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64) -> Particle {
        Particle::new(DVec3::new(x, 0.0, 0.0), x)
    }

    #[test]
    fn seeded_stream_has_one_entry_and_zero_steps() {
        let s = Stream::from_seed(p(0.0));
        assert_eq!(s.len(), 1);
        assert_eq!(s.separator_count(), 0);
        assert_eq!(s.step_count(), 0);
        assert!(!s.is_halted());
        assert_eq!(s.seed().time, 0.0);
    }

    #[test]
    fn step_count_excludes_seed_and_separators() {
        let mut s = Stream::from_seed(p(0.0));
        s.push_sample(p(1.0));
        s.push_sample(p(2.0));
        s.push_separator();
        assert_eq!(s.len(), 4);
        assert_eq!(s.separator_count(), 1);
        assert_eq!(s.step_count(), 2);
    }

    #[test]
    fn last_sample_skips_trailing_separator() {
        let mut s = Stream::from_seed(p(0.0));
        s.push_sample(p(1.0));
        s.push_separator();
        assert!(s.is_halted());
        assert_eq!(s.last_sample().unwrap().time, 1.0);
    }

    #[test]
    fn resumed_stream_keeps_interior_separator() {
        let mut s = Stream::from_seed(p(0.0));
        s.push_separator();
        s.push_sample(p(1.0));
        assert!(!s.is_halted());
        assert_eq!(s.separator_count(), 1);
        let times: Vec<f64> = s.samples().map(|p| p.time).collect();
        assert_eq!(times, vec![0.0, 1.0]);
    }

    #[test]
    fn recent_positions_stop_at_a_separator() {
        let mut s = Stream::from_seed(p(0.0));
        s.push_sample(p(1.0));
        s.push_separator();
        s.push_sample(p(2.0));
        s.push_sample(p(3.0));
        let recent = s.recent_positions();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].x, 2.0);
        assert_eq!(recent[1].x, 3.0);
    }

    #[test]
    fn recent_positions_cap_at_history_window() {
        let mut s = Stream::from_seed(p(0.0));
        for i in 1..6 {
            s.push_sample(p(i as f64));
        }
        let recent = s.recent_positions();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].x, 3.0);
        assert_eq!(recent[2].x, 5.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn separator_cache_matches_entry_count(
                pushes in prop::collection::vec(prop::bool::ANY, 0..64),
            ) {
                let mut s = Stream::from_seed(p(0.0));
                for (i, push_sep) in pushes.iter().enumerate() {
                    if *push_sep {
                        s.push_separator();
                    } else {
                        s.push_sample(p(i as f64));
                    }
                }
                let counted = s
                    .entries()
                    .iter()
                    .filter(|e| e.is_separator())
                    .count();
                prop_assert_eq!(s.separator_count(), counted);
                prop_assert_eq!(
                    s.step_count(),
                    s.len() - s.separator_count() - 1
                );
            }
        }
    }
}
