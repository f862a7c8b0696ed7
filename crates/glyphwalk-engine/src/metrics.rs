//! Per-walk counters.
//!
//! [`WalkMetrics`] is filled in by the solver for one solve, and kept
//! running by the walker for the lifetime of a session.

/// Counters collected while walking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkMetrics {
    /// Cells entered.
    pub steps: usize,
    /// Steps whose direction differed from the previous step's.
    pub turns: usize,
    /// Letters credited to the collected letters.
    pub letters_credited: usize,
    /// Letter cells entered again after being credited.
    pub letter_revisits: usize,
    /// Walker moves rejected as illegal. Always 0 for the solver.
    pub rejected_moves: usize,
}

impl WalkMetrics {
    /// Account for one accepted step onto `c`.
    pub(crate) fn record_step(&mut self, c: char, credited: bool, turned: bool) {
        self.steps += 1;
        if turned {
            self.turns += 1;
        }
        if credited {
            self.letters_credited += 1;
        } else if glyphwalk_core::is_letter(c) {
            self.letter_revisits += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = WalkMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.turns, 0);
        assert_eq!(m.letters_credited, 0);
        assert_eq!(m.letter_revisits, 0);
        assert_eq!(m.rejected_moves, 0);
    }

    #[test]
    fn record_step_classifies_letters() {
        let mut m = WalkMetrics::default();
        m.record_step('A', true, false);
        m.record_step('A', false, true);
        m.record_step('-', false, false);
        assert_eq!(m.steps, 3);
        assert_eq!(m.turns, 1);
        assert_eq!(m.letters_credited, 1);
        assert_eq!(m.letter_revisits, 1);
    }
}
