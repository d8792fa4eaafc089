/// Kind of run being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Simulation,
    Optimization,
    PowerSurface,
}

impl RunMode {
    pub fn label(&self) -> &'static str {
        match self {
            RunMode::Simulation => "simulate",
            RunMode::Optimization => "optimize",
            RunMode::PowerSurface => "surface",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingScenario,
    Compiling,
    Integrating,
    EvaluatingGrid,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            RunStage::LoadingScenario => "loading",
            RunStage::Compiling => "compiling",
            RunStage::Integrating => "integrating",
            RunStage::EvaluatingGrid => "grid",
            RunStage::Completed => "done",
        }
    }
}

/// Grid progress, counted in completed damping-coefficient rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SweepProgress {
    pub rows_done: usize,
    pub rows_total: usize,
    pub fraction_complete: f64,
}

impl SweepProgress {
    pub fn new(rows_done: usize, rows_total: usize) -> Self {
        let fraction_complete = if rows_total == 0 {
            1.0
        } else {
            rows_done as f64 / rows_total as f64
        };
        Self {
            rows_done,
            rows_total,
            fraction_complete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub mode: RunMode,
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub sweep: Option<SweepProgress>,
}

impl RunProgressEvent {
    pub fn stage(
        mode: RunMode,
        stage: RunStage,
        elapsed_wall_s: f64,
        message: Option<String>,
    ) -> Self {
        Self {
            mode,
            stage,
            elapsed_wall_s,
            message,
            sweep: None,
        }
    }

    pub fn with_sweep(mut self, sweep: Option<SweepProgress>) -> Self {
        self.sweep = sweep;
        self
    }
}
