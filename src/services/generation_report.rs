use serde::Serialize;

/// Pipeline stages that can degrade without failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Generation,
    Sanitization,
    Parsing,
    Validation,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Generation => write!(f, "generation"),
            PipelineStage::Sanitization => write!(f, "sanitization"),
            PipelineStage::Parsing => write!(f, "parsing"),
            PipelineStage::Validation => write!(f, "validation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDiagnostic {
    pub stage: PipelineStage,
    pub message: String,
}

/// Diagnostic trail for one generation run. Only ever logged; callers see
/// the quiz or a single terminal error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub attempts: u32,
    pub diagnostics: Vec<StageDiagnostic>,
}

impl GenerationReport {
    pub fn record(&mut self, stage: PipelineStage, message: impl Into<String>) {
        let diagnostic = StageDiagnostic {
            stage,
            message: message.into(),
        };
        log::warn!("Pipeline degraded at {}: {}", diagnostic.stage, diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn degraded_at(&self, stage: PipelineStage) -> bool {
        self.diagnostics.iter().any(|d| d.stage == stage)
    }
}

impl std::fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempts={}", self.attempts)?;
        if self.diagnostics.is_empty() {
            return write!(f, " clean");
        }
        for diagnostic in &self.diagnostics {
            write!(f, " [{}: {}]", diagnostic.stage, diagnostic.message)?;
        }
        Ok(())
    }
}
