use crate::{Tolerance, editor::Parameters, history::HistoryConfig};

/// Configuration of an [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// The tolerance every geometric comparison is performed with.
    pub tolerance: Tolerance<f64>,
    /// The bounds of the undo/redo history.
    pub history: HistoryConfig,
    /// The capacity parameters of a fresh editor.
    pub parameters: Parameters,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::absolute(1e-9),
            history: HistoryConfig::default(),
            parameters: Parameters::default(),
        }
    }
}

impl EditorConfig {
    pub fn with_tolerance(self, tolerance: Tolerance<f64>) -> Self {
        Self { tolerance, ..self }
    }

    pub fn with_history(self, history: HistoryConfig) -> Self {
        Self { history, ..self }
    }

    pub fn with_parameters(self, parameters: Parameters) -> Self {
        Self { parameters, ..self }
    }
}
