use log::Level;
use thiserror::Error;

/// localStorage key remembering that the curtain intro was already shown.
pub const INTRO_SEEN_KEY: &str = "hasSeenCurtainAnimation";

pub const INTRO_PARTICLE_COUNT: usize = 50;
pub const CURTAIN_SPARKLE_COUNT: usize = 20;
pub const BURST_PARTICLE_COUNT: usize = 20;

/// Viewports narrower than this never get the custom cursor.
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 768.0;

/// How long the outer cursor ring trails the inner dot.
pub const OUTER_FOLLOW_LAG_MS: u32 = 8;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
pub const REVEAL_OFFSET_PX: f64 = 150.0;

pub const CONTACT_SENDING_MS: u32 = 1_500;
pub const CONTACT_SUCCESS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimingError {
    #[error("intro completes after {completion_ms}ms but its visuals run until {visual_end_ms}ms")]
    CompletionBeforeVisuals { completion_ms: u32, visual_end_ms: u32 },
}

/// Every stage of the curtain reveal, in milliseconds from the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTiming {
    pub curtain_delay_ms: u32,
    pub curtain_duration_ms: u32,
    pub fade_delay_ms: u32,
    pub fade_duration_ms: u32,
    pub burst_duration_ms: u32,
    pub dismiss_after_ms: u32,
}

pub const INTRO_TIMING: IntroTiming = IntroTiming {
    curtain_delay_ms: 200,
    curtain_duration_ms: 1_500,
    fade_delay_ms: 1_500,
    fade_duration_ms: 500,
    burst_duration_ms: 1_500,
    dismiss_after_ms: 2_500,
};

pub const CURTAIN_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

impl IntroTiming {
    pub fn curtain_end_ms(&self) -> u32 {
        self.curtain_delay_ms + self.curtain_duration_ms
    }

    pub fn fade_end_ms(&self) -> u32 {
        self.fade_delay_ms + self.fade_duration_ms
    }

    /// The moment the last visual stage has finished.
    pub fn visual_end_ms(&self) -> u32 {
        self.curtain_end_ms()
            .max(self.fade_end_ms())
            .max(self.burst_duration_ms)
    }

    /// Delay between the click and the completion callback. Never shorter
    /// than the visuals, even if `dismiss_after_ms` is misconfigured.
    pub fn completion_delay_ms(&self) -> u32 {
        self.dismiss_after_ms.max(self.visual_end_ms())
    }

    pub fn validate(&self) -> Result<(), TimingError> {
        if self.dismiss_after_ms < self.visual_end_ms() {
            return Err(TimingError::CompletionBeforeVisuals {
                completion_ms: self.dismiss_after_ms,
                visual_end_ms: self.visual_end_ms(),
            });
        }
        Ok(())
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_is_valid() {
        assert_eq!(INTRO_TIMING.validate(), Ok(()));
        assert_eq!(INTRO_TIMING.completion_delay_ms(), 2_500);
    }

    #[test]
    fn completion_never_precedes_any_visual_stage() {
        let t = INTRO_TIMING;
        let delay = t.completion_delay_ms();
        assert!(delay >= t.curtain_delay_ms + t.curtain_duration_ms);
        assert!(delay >= t.fade_delay_ms + t.fade_duration_ms);
        assert!(delay >= t.burst_duration_ms);
    }

    #[test]
    fn short_dismiss_delay_is_rejected_and_clamped() {
        let t = IntroTiming {
            dismiss_after_ms: 1_000,
            ..INTRO_TIMING
        };
        assert_eq!(
            t.validate(),
            Err(TimingError::CompletionBeforeVisuals {
                completion_ms: 1_000,
                visual_end_ms: 2_000,
            })
        );
        assert_eq!(t.completion_delay_ms(), 2_000);
    }
}
