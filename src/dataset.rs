//! Dataset panel state
//!
//! Visibility phases of the VizIQ panel and the four-step processing
//! animation shown while an upload is analysed.

/// Which part of the panel is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Upload area
    #[default]
    Idle,
    /// Upload in flight, progress steps animating
    Processing,
    /// Summary rendered
    Dashboard,
}

pub struct ProgressStep {
    pub id: &'static str,
    pub label: &'static str,
    pub status: &'static str,
}

pub static PROGRESS_STEPS: [ProgressStep; 4] = [
    ProgressStep { id: "step-upload", label: "Upload", status: "Uploading your data..." },
    ProgressStep { id: "step-preprocess", label: "Preprocess", status: "Preprocessing and cleaning..." },
    ProgressStep { id: "step-analyze", label: "Analyze", status: "Analyzing patterns and trends..." },
    ProgressStep { id: "step-visualize", label: "Visualize", status: "Generating visualizations..." },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

impl StepState {
    pub fn class(self) -> &'static str {
        match self {
            StepState::Pending => "processing-step",
            StepState::Active => "processing-step active",
            StepState::Completed => "processing-step completed",
        }
    }
}

/// Processing animation: every advance completes the active step and
/// activates the next one; the advance after the last step marks every
/// step completed and ends the animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    started: usize,
}

impl Progress {
    /// Returns false once every step is completed
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.started += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.started > PROGRESS_STEPS.len()
    }

    pub fn state(&self, step: usize) -> StepState {
        if step + 1 < self.started {
            StepState::Completed
        } else if step + 1 == self.started {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn status(&self) -> &'static str {
        let shown = self.started.clamp(1, PROGRESS_STEPS.len());
        PROGRESS_STEPS[shown - 1].status
    }

    pub fn reset(&mut self) {
        self.started = 0;
    }
}

/// KPI icon glyph by backend icon name
pub fn kpi_icon(name: &str) -> &'static str {
    match name {
        "database" => "🗄️",
        "trending-up" => "📈",
        "layers" => "🧱",
        _ => "📊",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_walks_all_steps() {
        let mut progress = Progress::default();
        assert!((0..4).all(|i| progress.state(i) == StepState::Pending));

        assert!(progress.advance());
        assert_eq!(progress.state(0), StepState::Active);
        assert_eq!(progress.status(), "Uploading your data...");

        assert!(progress.advance());
        assert!(progress.advance());
        assert!(progress.advance());
        assert_eq!(progress.state(0), StepState::Completed);
        assert_eq!(progress.state(2), StepState::Completed);
        assert_eq!(progress.state(3), StepState::Active);
        assert_eq!(progress.status(), "Generating visualizations...");
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_final_advance_completes_every_step() {
        let mut progress = Progress::default();
        let advances = std::iter::from_fn(|| progress.advance().then_some(())).count();
        assert_eq!(advances, PROGRESS_STEPS.len() + 1);

        assert!(progress.is_complete());
        assert!((0..4).all(|i| progress.state(i) == StepState::Completed));
        assert_eq!(progress.status(), "Generating visualizations...");
        assert!(!progress.advance());
    }

    #[test]
    fn test_reset() {
        let mut progress = Progress::default();
        progress.advance();
        progress.advance();
        progress.reset();
        assert_eq!(progress, Progress::default());
        assert_eq!(progress.state(0), StepState::Pending);
    }

    #[test]
    fn test_kpi_icon_fallback() {
        assert_eq!(kpi_icon("trending-up"), "📈");
        assert_eq!(kpi_icon("whatever"), "📊");
    }
}
