//! Generation request state machine

/// States of a single generation request
///
/// State transitions:
/// ```text
/// Idle → Validating → Building → Built → Rendered
///             │                    │
///             ↓                    └──→ Cancelled (destination dismissed)
///           Failed
/// ```
///
/// A request never leaves a terminal state; a new request starts a fresh
/// machine in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Request created, nothing inspected yet
    #[default]
    Idle,
    /// Checking the target description and its eligibility
    Validating,
    /// Selecting fields, mapping annotations, assembling the AST
    Building,
    /// AST assembled and waiting to be rendered
    Built,
    /// Source text produced
    Rendered,
    /// Destination was dismissed; completed without output
    Cancelled,
    /// Validation rejected the request
    Failed,
}

impl GenerationState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: GenerationState) -> bool {
        use GenerationState::*;
        matches!(
            (self, target),
            (Idle, Validating)
                | (Validating, Building)
                | (Validating, Failed)
                | (Building, Built)
                | (Built, Rendered)
                | (Built, Cancelled)
        )
    }

    /// Check if an AST is available for rendering in this state
    pub fn can_render(&self) -> bool {
        matches!(self, GenerationState::Built)
    }

    /// Check if the request has finished
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationState::Rendered | GenerationState::Cancelled | GenerationState::Failed
        )
    }

    /// Get a human-readable description of this state
    pub fn description(&self) -> &'static str {
        match self {
            GenerationState::Idle => "Request has not started",
            GenerationState::Validating => "Target type is being validated",
            GenerationState::Building => "Editor AST is being assembled",
            GenerationState::Built => "Editor AST is ready to render",
            GenerationState::Rendered => "Editor source has been rendered",
            GenerationState::Cancelled => "Request was cancelled without output",
            GenerationState::Failed => "Request failed validation",
        }
    }
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "Idle"),
            GenerationState::Validating => write!(f, "Validating"),
            GenerationState::Building => write!(f, "Building"),
            GenerationState::Built => write!(f, "Built"),
            GenerationState::Rendered => write!(f, "Rendered"),
            GenerationState::Cancelled => write!(f, "Cancelled"),
            GenerationState::Failed => write!(f, "Failed"),
        }
    }
}

#[cfg(test)]
#[path = "lifecycle/lifecycle_tests.rs"]
mod lifecycle_tests;
