use crate::config::{Config, PhysicsConfig};
use crate::solver::{FluidSolver, diagnostics};
use crate::state::FluidGrid;

/// Build a solver from the physics section of the config.
pub fn create_solver(physics: &PhysicsConfig) -> FluidSolver {
    let grid = FluidGrid::new(physics.grid_size, physics.params());
    FluidSolver::new(grid, physics.iterations)
}

/// Per-step diagnostics reported by the headless runner.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: usize,
    pub total_density: f32,
    pub kinetic_energy: f32,
    pub max_divergence: f32,
}

impl StepReport {
    pub fn capture(step: usize, solver: &FluidSolver) -> Self {
        let grid = solver.grid();
        Self {
            step,
            total_density: diagnostics::total_density(grid),
            kinetic_energy: diagnostics::compute_kinetic_energy(grid),
            max_divergence: diagnostics::max_divergence(grid),
        }
    }
}

/// Seed one dye injection at the grid center, then run `steps` steps without a window.
///
/// Logs a [`StepReport`] every `log_every` steps (0 disables periodic logging) and
/// returns the report for the final state.
pub fn run_headless(cfg: &Config, steps: usize, log_every: usize) -> StepReport {
    let mut solver = create_solver(&cfg.physics);
    let mid = solver.size() / 2;
    solver.add_dye(mid, mid, cfg.input.dye_amount);
    tracing::info!(
        size = solver.size(),
        steps,
        dye = cfg.input.dye_amount,
        "headless run started"
    );

    for step in 1..=steps {
        solver.step();
        if cfg.input.fade > 0.0 {
            solver.fade(cfg.input.fade);
        }
        if log_every > 0 && step % log_every == 0 {
            let r = StepReport::capture(step, &solver);
            tracing::info!(
                "step={} mass={:.4} KE={:.6e} div={:.3e}",
                r.step, r.total_density, r.kinetic_energy, r.max_divergence
            );
            if diagnostics::has_non_finite(solver.grid()) {
                tracing::error!(step, "non-finite values in the grid");
            }
        }
    }

    let report = StepReport::capture(steps, &solver);
    tracing::info!(mass = report.total_density, "headless run complete");
    report
}
