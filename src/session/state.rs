//! Session lifecycle as an explicit state machine.

use crate::domain::{compute, DayBoundary, GeoCoordinate, Instant, VariableTimeOfDay};
use crate::error::ClockError;

/// Where a clock session is in its start-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Waiting for a coordinate.
    Initializing,
    /// Coordinate known; waiting for sun times.
    LocationResolved {
        /// The resolved coordinate.
        coordinate: GeoCoordinate,
    },
    /// Everything needed to compute the time of day is known.
    Ready {
        /// The resolved coordinate.
        coordinate: GeoCoordinate,
        /// Today's sunrise and sunset.
        boundary: DayBoundary,
    },
}

/// Results delivered by the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A coordinate (real or fallback) is available.
    LocationResolved(GeoCoordinate),
    /// A day boundary (real or fallback) is available.
    SunTimesResolved(DayBoundary),
}

impl SessionState {
    /// Returns the state after `event`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidTransition`] for events out of order or
    /// repeated; the current state is unaffected.
    pub fn transition(&self, event: SessionEvent) -> Result<Self, ClockError> {
        match (*self, event) {
            (Self::Initializing, SessionEvent::LocationResolved(coordinate)) => {
                Ok(Self::LocationResolved { coordinate })
            }
            (Self::LocationResolved { coordinate }, SessionEvent::SunTimesResolved(boundary)) => {
                Ok(Self::Ready {
                    coordinate,
                    boundary,
                })
            }
            (state, event) => Err(ClockError::InvalidTransition { state, event }),
        }
    }

    /// Whether the session is still waiting on a resolver.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        !matches!(self, Self::Ready { .. })
    }

    /// The variable time of day at `now`, or `None` while loading.
    #[must_use]
    pub fn time_of_day(&self, now: Instant) -> Option<VariableTimeOfDay> {
        match self {
            Self::Ready { boundary, .. } => Some(compute(now, boundary)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: DayBoundary = DayBoundary::new(
        Instant::from_millis(6 * 3_600_000),
        Instant::from_millis(18 * 3_600_000),
    );
    const LOCATED: SessionEvent = SessionEvent::LocationResolved(GeoCoordinate::FALLBACK);
    const SUN_TIMES: SessionEvent = SessionEvent::SunTimesResolved(BOUNDARY);
    const READY: SessionState = SessionState::Ready {
        coordinate: GeoCoordinate::FALLBACK,
        boundary: BOUNDARY,
    };

    #[test]
    fn walks_initializing_to_ready() {
        let state = SessionState::Initializing;
        assert!(state.is_loading());

        let state = state.transition(LOCATED).unwrap();
        let coordinate = GeoCoordinate::FALLBACK;
        assert_eq!(state, SessionState::LocationResolved { coordinate });
        assert!(state.is_loading());

        let state = state.transition(SUN_TIMES).unwrap();
        assert_eq!(state, READY);
        assert!(!state.is_loading());
    }

    #[test]
    fn sun_times_before_location_are_rejected() {
        let state = SessionState::Initializing;
        let err = state.transition(SUN_TIMES).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTransition { .. }));
        assert_eq!(state, SessionState::Initializing);
    }

    #[test]
    fn ready_accepts_no_further_events() {
        assert!(READY.transition(SUN_TIMES).is_err());
        assert!(READY.transition(LOCATED).is_err());
    }

    #[test]
    fn time_of_day_is_gated_on_ready() {
        let nine_am = Instant::from_millis(9 * 3_600_000);
        assert_eq!(SessionState::Initializing.time_of_day(nine_am), None);
        let coordinate = GeoCoordinate::FALLBACK;
        let resolved = SessionState::LocationResolved { coordinate };
        assert_eq!(resolved.time_of_day(nine_am), None);

        let time = READY.time_of_day(nine_am).unwrap();
        assert_eq!(time.hour_index, 4);
        assert!(time.is_daytime);
    }
}
