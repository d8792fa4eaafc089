//! Compilation of scenario definitions into engine inputs.

use wec_optim::{DampingGrid, GridAxis, OptimizerOptions};
use wec_project::schema::{DampingLawDef, OptimizerDef, ParametersDef, SimulationDef};
use wec_sim::{DampingLaw, HeaveState, SystemParameters, TimeWindow};

use crate::error::{AppError, AppResult};

/// Everything needed to integrate one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationPlan {
    pub initial: HeaveState,
    pub window: TimeWindow,
    pub law: DampingLaw,
}

pub fn compile_law(law: DampingLawDef) -> DampingLaw {
    match law {
        DampingLawDef::Linear => DampingLaw::Linear,
        DampingLawDef::Nonlinear => DampingLaw::Nonlinear,
    }
}

/// Convert and validate physical parameters.
pub fn compile_parameters(def: &ParametersDef) -> AppResult<SystemParameters> {
    let params = SystemParameters {
        m_a: def.m_a,
        m_b: def.m_b,
        m_add: def.m_add,
        k_e: def.k_e,
        c1: def.c1,
        c2: def.c2,
        f: def.f,
        omega: def.omega,
        rho0: def.rho0,
        g: def.g,
        h_cyl: def.h_cyl,
        h_cone: def.h_cone,
        r: def.r,
        x_a0: def.x_a0,
        x_a1: def.x_a1,
    };
    params
        .validated()
        .map_err(|e| AppError::Compile(format!("Invalid parameters: {}", e)))
}

pub fn compile_simulation(def: &SimulationDef) -> AppResult<SimulationPlan> {
    let initial = HeaveState::try_from(def.initial_state.as_slice())
        .map_err(|e| AppError::Compile(format!("Initial state: {}", e)))?;
    let window = TimeWindow::new(def.t0, def.t_end, def.dt);
    window
        .num_steps()
        .map_err(|e| AppError::Compile(format!("Time window: {}", e)))?;

    Ok(SimulationPlan {
        initial,
        window,
        law: compile_law(def.damping_law),
    })
}

pub fn compile_optimizer(def: &OptimizerDef) -> OptimizerOptions {
    OptimizerOptions {
        grid: DampingGrid {
            c1: GridAxis::new(def.c1_start, def.c1_stop, def.c1_step),
            alpha: GridAxis::new(def.alpha_start, def.alpha_stop, def.alpha_step),
        },
        periods: def.periods,
        dt: def.dt,
        law: compile_law(def.damping_law),
        initial_state: HeaveState::default(),
    }
}
