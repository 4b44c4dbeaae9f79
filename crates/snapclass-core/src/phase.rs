//! UI phase state machine.
//!
//! The page shows exactly one primary region (upload, preview, or
//! results) at a time. While a prediction is in flight the spinner
//! replaces the primary region entirely; the error banner overlays
//! whatever phase is current and is managed separately.

/// Which primary region of the page is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No image selected yet; the drop zone is shown.
    #[default]
    AwaitingUpload,
    /// An image is selected and previewed, awaiting predict.
    Preview,
    /// A prediction request is in flight; only the spinner is visible.
    Predicting,
    /// A prediction result is on screen.
    Results,
}

impl Phase {
    /// Whether the upload drop zone is visible.
    #[must_use]
    pub const fn shows_upload(self) -> bool {
        matches!(self, Self::AwaitingUpload)
    }

    /// Whether the preview panel is visible.
    #[must_use]
    pub const fn shows_preview(self) -> bool {
        matches!(self, Self::Preview)
    }

    /// Whether the loading spinner is visible.
    #[must_use]
    pub const fn shows_spinner(self) -> bool {
        matches!(self, Self::Predicting)
    }

    /// Whether the results panel is visible.
    #[must_use]
    pub const fn shows_results(self) -> bool {
        matches!(self, Self::Results)
    }

    /// Whether a prediction request is currently in flight.
    ///
    /// Used to ignore a second predict trigger (button mash, rapid
    /// double Enter) while one is outstanding.
    #[must_use]
    pub const fn is_predicting(self) -> bool {
        matches!(self, Self::Predicting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [
        Phase::AwaitingUpload,
        Phase::Preview,
        Phase::Predicting,
        Phase::Results,
    ];

    #[test]
    fn initial_phase_awaits_upload() {
        assert_eq!(Phase::default(), Phase::AwaitingUpload);
    }

    #[test]
    fn at_most_one_primary_region_per_phase() {
        for phase in ALL {
            let visible = [
                phase.shows_upload(),
                phase.shows_preview(),
                phase.shows_results(),
            ]
            .iter()
            .filter(|v| **v)
            .count();

            if phase == Phase::Predicting {
                // The spinner replaces the primary region entirely.
                assert_eq!(visible, 0, "{phase:?} should hide all primary regions");
            } else {
                assert_eq!(visible, 1, "{phase:?} should show exactly one region");
            }
        }
    }

    #[test]
    fn spinner_only_while_predicting() {
        for phase in ALL {
            assert_eq!(
                phase.shows_spinner(),
                phase == Phase::Predicting,
                "spinner visibility wrong for {phase:?}"
            );
        }
    }

    #[test]
    fn predict_guard_tracks_in_flight_state() {
        for phase in ALL {
            assert_eq!(phase.is_predicting(), phase == Phase::Predicting);
        }
    }
}
