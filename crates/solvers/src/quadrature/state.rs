use super::{Event, Solution, Status};

/// The most recent completed pass and how it compares to the one before.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    estimate: f64,
    partitions: usize,
    passes: usize,
    relative_error: Option<f64>,
}

impl State {
    /// Starts from the first completed pass.
    pub(super) fn first(estimate: f64, partitions: usize) -> Self {
        Self {
            estimate,
            partitions,
            passes: 1,
            relative_error: None,
        }
    }

    pub(super) fn partitions(&self) -> usize {
        self.partitions
    }

    pub(super) fn passes(&self) -> usize {
        self.passes
    }

    /// Records a refined pass and returns its relative change.
    pub(super) fn refine(&mut self, estimate: f64, partitions: usize) -> f64 {
        let error = relative_change(self.estimate, estimate);
        self.estimate = estimate;
        self.partitions = partitions;
        self.passes += 1;
        self.relative_error = Some(error);
        error
    }

    pub(super) fn event(&self) -> Event {
        Event {
            pass: self.passes,
            partitions: self.partitions,
            estimate: self.estimate,
            relative_error: self.relative_error,
        }
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            value: self.estimate,
            partitions: self.partitions,
            passes: self.passes,
            relative_error: self.relative_error,
        }
    }
}

/// Relative change `|current - previous| / |current|`, zero when equal.
fn relative_change(previous: f64, current: f64) -> f64 {
    #[allow(clippy::float_cmp)]
    if current == previous {
        return 0.0;
    }
    (current - previous).abs() / current.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn relative_change_is_scaled_by_new_estimate() {
        assert_relative_eq!(relative_change(9.0, 10.0), 0.1);
        assert_relative_eq!(relative_change(-9.0, -10.0), 0.1);
    }

    #[test]
    fn equal_estimates_have_no_change() {
        assert_eq!(relative_change(0.0, 0.0), 0.0);
        assert_eq!(relative_change(2.5, 2.5), 0.0);
    }

    #[test]
    fn change_to_zero_is_infinite() {
        assert!(relative_change(1.0, 0.0).is_infinite());
    }

    #[test]
    fn refine_tracks_passes() {
        let mut state = State::first(25.5, 1);
        let error = state.refine(22.125, 2);

        assert_relative_eq!(error, 3.375 / 22.125);
        let solution = state.into_solution(Status::Converged);
        assert_eq!(solution.passes, 2);
        assert_eq!(solution.partitions, 2);
        assert_relative_eq!(solution.value, 22.125);
        assert_eq!(solution.relative_error, Some(error));
    }
}
