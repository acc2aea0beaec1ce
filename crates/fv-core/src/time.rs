//! Simulation clock shared between the solver loop and the schemes.

use std::sync::{PoisonError, RwLock};

use crate::dimensioned::DimensionedScalar;
use crate::error::{FvError, FvResult};
use crate::numeric::ensure_finite;
use crate::units::{Time, s, seconds};

/// Snapshot of the clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeState {
    pub value: Time,
    pub delta_t: Time,
    pub index: u64,
}

/// Current time, time-step size and time index.
///
/// Readers (schemes evaluating at the current step) and the writer (the
/// solver loop changing the step between evaluations) share one `RunTime`
/// behind an `Arc`.
#[derive(Debug)]
pub struct RunTime {
    state: RwLock<TimeState>,
}

impl RunTime {
    pub fn new(start: Time, delta_t: Time) -> FvResult<Self> {
        ensure_finite(seconds(start), "start time")?;
        validate_delta_t(delta_t)?;
        Ok(Self {
            state: RwLock::new(TimeState {
                value: start,
                delta_t,
                index: 0,
            }),
        })
    }

    /// Clock starting at t = 0 with the given step in seconds.
    pub fn from_seconds(delta_t: f64) -> FvResult<Self> {
        Self::new(s(0.0), s(delta_t))
    }

    pub fn state(&self) -> TimeState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn value(&self) -> Time {
        self.state().value
    }

    pub fn delta_t(&self) -> Time {
        self.state().delta_t
    }

    /// Time-step size in seconds.
    pub fn delta_t_value(&self) -> f64 {
        seconds(self.delta_t())
    }

    pub fn delta_t_dimensioned(&self) -> DimensionedScalar {
        DimensionedScalar::from(self.delta_t()).renamed("deltaT")
    }

    pub fn time_index(&self) -> u64 {
        self.state().index
    }

    /// Name of the current time, as used for field output directories.
    pub fn name(&self) -> String {
        format!("{}", seconds(self.value()))
    }

    pub fn set_delta_t(&self, delta_t: Time) -> FvResult<()> {
        validate_delta_t(delta_t)?;
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .delta_t = delta_t;
        Ok(())
    }

    /// Advance by one step and return the new state.
    pub fn advance(&self) -> TimeState {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let delta_t = state.delta_t;
        state.value += delta_t;
        state.index += 1;
        *state
    }
}

fn validate_delta_t(delta_t: Time) -> FvResult<()> {
    let dt = ensure_finite(seconds(delta_t), "time step")?;
    if dt <= 0.0 {
        return Err(FvError::InvalidArg {
            what: "time step must be positive",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::DIM_TIME;

    #[test]
    fn advance_accumulates_time() {
        let time = RunTime::from_seconds(0.1).unwrap();
        time.advance();
        let state = time.advance();
        assert_eq!(state.index, 2);
        assert!((seconds(state.value) - 0.2).abs() < 1e-15);
        assert_eq!(time.time_index(), 2);
    }

    #[test]
    fn delta_t_can_change_between_steps() {
        let time = RunTime::from_seconds(0.1).unwrap();
        time.set_delta_t(s(0.5)).unwrap();
        assert_eq!(time.delta_t_value(), 0.5);
        assert_eq!(time.delta_t_dimensioned().dimensions(), DIM_TIME);
        assert_eq!(time.delta_t_dimensioned().name(), "deltaT");
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(RunTime::from_seconds(0.0).is_err());
        assert!(RunTime::from_seconds(-1.0).is_err());
        assert!(RunTime::from_seconds(f64::NAN).is_err());

        let time = RunTime::from_seconds(1.0).unwrap();
        assert!(time.set_delta_t(s(-0.1)).is_err());
        assert_eq!(time.delta_t_value(), 1.0);
    }
}
