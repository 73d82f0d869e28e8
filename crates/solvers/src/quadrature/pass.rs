use numerus_core::{Deadline, Function, Interval};

use super::{Error, InvalidPartition, Rule};

/// Samples between deadline polls within a pass.
const POLL_STRIDE: usize = 64;

/// One composite-rule evaluation over a fixed partition.
///
/// A pass visits nodes `0..=n` in order, accumulating weighted samples.
pub(super) struct Pass {
    rule: Rule,
    interval: Interval,
    partitions: usize,
    next_node: usize,
    sum: f64,
}

impl Pass {
    /// Starts a pass of `rule` over `interval` with `partitions` subintervals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartition` if the rule cannot use that many subintervals.
    pub(super) fn new(
        rule: Rule,
        interval: Interval,
        partitions: usize,
    ) -> Result<Self, InvalidPartition> {
        rule.check(partitions)?;
        Ok(Self {
            rule,
            interval,
            partitions,
            next_node: 0,
            sum: 0.0,
        })
    }

    /// Runs the pass to completion and returns its estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if the function fails or yields a non-finite sample.
    pub(super) fn complete<F: Function>(mut self, function: &F) -> Result<f64, Error<F::Error>> {
        while self.sample_next(function)? {}
        Ok(self.estimate())
    }

    /// Runs the pass, abandoning it with `None` once `deadline` expires.
    ///
    /// # Errors
    ///
    /// Returns an error if the function fails or yields a non-finite sample.
    pub(super) fn complete_before<F: Function>(
        mut self,
        function: &F,
        deadline: &Deadline,
    ) -> Result<Option<f64>, Error<F::Error>> {
        while self.sample_next(function)? {
            if self.next_node % POLL_STRIDE == 0 && deadline.is_expired() {
                return Ok(None);
            }
        }
        Ok(Some(self.estimate()))
    }

    /// Samples the next node, returning false once every node is sampled.
    fn sample_next<F: Function>(&mut self, function: &F) -> Result<bool, Error<F::Error>> {
        let i = self.next_node;
        if i > self.partitions {
            return Ok(false);
        }

        let x = self.interval.node(i, self.partitions);
        let value = function
            .call(x)
            .map_err(|source| Error::Function { x, source })?;
        if !value.is_finite() {
            return Err(Error::NonFiniteSample { x, value });
        }

        self.sum += self.rule.weight(i, self.partitions) * value;
        self.next_node += 1;
        Ok(true)
    }

    fn estimate(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let h = self.interval.width() / self.partitions as f64;
        self.sum * self.rule.scale(h)
    }
}
