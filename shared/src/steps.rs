/// Reveals form steps one at a time.
///
/// Step 0 is active from the start. The cursor only moves forward, one step
/// per completed current step, and never past the last step. Clearing a value
/// in an earlier step does not retract later steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSequence {
    len: usize,
    current: usize,
}

impl StepSequence {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index < self.len && index <= self.current
    }

    pub fn is_terminal(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Feeds the values of every control in step `index` after one of them
    /// changed. Returns the newly activated step, if any.
    pub fn on_step_input<S: AsRef<str>>(&mut self, index: usize, values: &[S]) -> Option<usize> {
        if index != self.current || !step_filled(values) {
            return None;
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<usize> {
        if self.is_terminal() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }
}

/// A step is filled when none of its controls is blank after trimming.
pub fn step_filled<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|v| !v.as_ref().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_active_initially() {
        let steps = StepSequence::new(3);
        assert!(steps.is_active(0));
        assert!(!steps.is_active(1));
        assert_eq!(steps.current(), 0);
    }

    #[test]
    fn test_advances_when_current_step_filled() {
        let mut steps = StepSequence::new(3);
        assert_eq!(steps.on_step_input(0, &["Ada", "ada@example.com"]), Some(1));
        assert!(steps.is_active(1));
        assert!(!steps.is_active(2));
    }

    #[test]
    fn test_whitespace_does_not_count_as_filled() {
        let mut steps = StepSequence::new(3);
        assert_eq!(steps.on_step_input(0, &["Ada", "   "]), None);
        assert_eq!(steps.current(), 0);
    }

    #[test]
    fn test_only_current_step_advances() {
        let mut steps = StepSequence::new(3);
        steps.on_step_input(0, &["x"]);
        // re-filling step 0 must not skip ahead
        assert_eq!(steps.on_step_input(0, &["x"]), None);
        // inputs in a step that is not yet current are ignored
        assert_eq!(steps.on_step_input(2, &["y"]), None);
        assert_eq!(steps.current(), 1);
    }

    #[test]
    fn test_stops_at_last_step() {
        let mut steps = StepSequence::new(2);
        assert_eq!(steps.on_step_input(0, &["x"]), Some(1));
        assert!(steps.is_terminal());
        assert_eq!(steps.on_step_input(1, &["y"]), None);
        assert_eq!(steps.current(), 1);
    }

    #[test]
    fn test_clearing_earlier_step_does_not_retract() {
        let mut steps = StepSequence::new(3);
        steps.on_step_input(0, &["x"]);
        assert_eq!(steps.on_step_input(0, &[""]), None);
        assert!(steps.is_active(1));
    }

    #[test]
    fn test_empty_sequence_never_advances() {
        let mut steps = StepSequence::new(0);
        assert!(steps.is_empty());
        assert!(!steps.is_active(0));
        assert_eq!(steps.on_step_input(0, &["x"]), None);
    }

    #[test]
    fn test_step_without_controls_counts_as_filled() {
        let values: [&str; 0] = [];
        assert!(step_filled(&values));
    }
}
