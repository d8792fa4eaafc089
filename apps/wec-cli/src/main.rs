mod logging;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use wec_app::{
    AppResult, RunOverrides, RunProgressEvent, RunRequest, RunStage, RunTimingSummary, export,
    project_service, run_service,
};
use wec_sim::DampingLaw;

#[derive(Parser)]
#[command(name = "wec")]
#[command(about = "Two-body heave wave-energy converter simulator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML/JSON file
        scenario: PathBuf,
    },
    /// Integrate the scenario's heave motion
    Simulate {
        /// Path to the scenario YAML/JSON file
        scenario: PathBuf,
        #[command(flatten)]
        common: CommonOverrides,
        /// End time in seconds
        #[arg(long)]
        t_end: Option<f64>,
        /// Output TSV file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Search the damping grid for maximum average power
    Optimize {
        /// Path to the scenario YAML/JSON file
        scenario: PathBuf,
        #[command(flatten)]
        common: CommonOverrides,
        /// Wave frequency setting the search horizon (rad/s)
        #[arg(long)]
        omega: Option<f64>,
        /// Output TSV summary file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate average power over the whole damping grid
    Surface {
        /// Path to the scenario YAML/JSON file
        scenario: PathBuf,
        #[command(flatten)]
        common: CommonOverrides,
        /// Wave frequency setting the search horizon (rad/s)
        #[arg(long)]
        omega: Option<f64>,
        /// Output TSV file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CommonOverrides {
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// Damping law: linear or nonlinear
    #[arg(long)]
    law: Option<DampingLaw>,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!(version = env!("CARGO_PKG_VERSION"), "wec starting.");

    match cli.command {
        Commands::Validate { scenario } => cmd_validate(&scenario),
        Commands::Simulate {
            scenario,
            common,
            t_end,
            output,
        } => {
            let overrides = RunOverrides {
                dt: common.dt,
                t_end,
                law: common.law,
                omega: None,
            };
            cmd_simulate(&scenario, overrides, output.as_deref())
        }
        Commands::Optimize {
            scenario,
            common,
            omega,
            output,
        } => {
            let overrides = RunOverrides {
                dt: common.dt,
                t_end: None,
                law: common.law,
                omega,
            };
            cmd_optimize(&scenario, overrides, output.as_deref())
        }
        Commands::Surface {
            scenario,
            common,
            omega,
            output,
        } => {
            let overrides = RunOverrides {
                dt: common.dt,
                t_end: None,
                law: common.law,
                omega,
            };
            cmd_surface(&scenario, overrides, output.as_deref())
        }
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = project_service::load_project(scenario_path)?;
    project_service::validate_project(&scenario)?;
    let summary = project_service::summarize(&scenario)?;

    println!("✓ Scenario is valid: {} (v{})", summary.name, summary.version);
    println!("  Floater inertia: {:.3} kg", summary.floater_inertia_kg);
    println!("  Wave period:     {:.3} s", summary.wave_period_s);
    if let Some(steps) = summary.simulation_steps {
        println!("  Simulation steps: {}", steps);
    }
    if let Some(trials) = summary.optimizer_trials {
        println!("  Optimizer trials: {}", trials);
    }
    Ok(())
}

fn cmd_simulate(
    scenario_path: &Path,
    overrides: RunOverrides,
    output: Option<&Path>,
) -> AppResult<()> {
    let request = RunRequest {
        scenario_path,
        overrides,
    };

    let response = run_service::run_simulation(&request)?;

    match output {
        Some(path) => {
            export::export_trajectory(&response, path)?;
            println!("✓ Trajectory written to {}", path.display());
        }
        None => export::write_trajectory(&response, io::stdout().lock())?,
    }

    // stdout may carry the table
    let mut report = io::stderr().lock();
    writeln!(report, "\nScenario: {}", response.scenario_name)?;
    writeln!(
        report,
        "  Samples: {}  (dt = {} s, law = {})",
        response.trajectory.len(),
        response.plan.window.dt,
        response.plan.law
    )?;
    if let Some(last) = response.final_state() {
        writeln!(
            report,
            "  Final state: xA={:.6} xB={:.6} vA={:.6} vB={:.6}",
            last.x_a, last.x_b, last.v_a, last.v_b
        )?;
    }
    writeln!(report, "  Average damper power: {:.6} W", response.average_power)?;
    print_timing_summary(&mut report, &response.timing)?;
    Ok(())
}

fn cmd_optimize(
    scenario_path: &Path,
    overrides: RunOverrides,
    output: Option<&Path>,
) -> AppResult<()> {
    let request = RunRequest {
        scenario_path,
        overrides,
    };

    let mut throttle = ProgressThrottle::new();
    let response = run_service::run_optimization_with_progress(
        &request,
        Some(&mut |event| throttle.render(&event)),
    )?;
    clear_progress_line();

    let optimum = &response.optimum;
    println!("Scenario: {}", response.scenario_name);
    println!("Maximum output power: {} W", optimum.best_power);
    println!("Optimal damping coefficient: {} N·s/m", optimum.best_c1);
    println!("Optimal exponent: {}", optimum.best_alpha);
    if optimum.skipped > 0 {
        println!("  ({} trials skipped: non-finite power)", optimum.skipped);
    }

    if let Some(path) = output {
        let file = std::fs::File::create(path)?;
        export::write_optimum(&response, io::BufWriter::new(file))?;
        println!("✓ Summary written to {}", path.display());
    }

    print_timing_summary(&mut io::stdout().lock(), &response.timing)?;
    Ok(())
}

fn cmd_surface(
    scenario_path: &Path,
    overrides: RunOverrides,
    output: Option<&Path>,
) -> AppResult<()> {
    let request = RunRequest {
        scenario_path,
        overrides,
    };

    let mut throttle = ProgressThrottle::new();
    let response = run_service::run_power_surface_with_progress(
        &request,
        Some(&mut |event| throttle.render(&event)),
    )?;
    clear_progress_line();

    match output {
        Some(path) => {
            export::export_surface(&response, path)?;
            println!("✓ Power surface written to {}", path.display());
        }
        None => export::write_surface(&response, io::stdout().lock())?,
    }

    let mut report = io::stderr().lock();
    if let Some((c1, alpha, power)) = response.surface.peak() {
        writeln!(
            report,
            "\nPeak: {:.6} W at c1 = {} N·s/m, alpha = {}",
            power, c1, alpha
        )?;
    }
    if response.surface.replaced > 0 {
        writeln!(
            report,
            "  {} non-finite cells stored as 0",
            response.surface.replaced
        )?;
    }
    print_timing_summary(&mut report, &response.timing)?;
    Ok(())
}

/// Rate-limits progress output to stage changes and ~10 updates per second.
struct ProgressThrottle {
    last_emit: Instant,
    last_stage: Option<RunStage>,
}

impl ProgressThrottle {
    fn new() -> Self {
        Self {
            last_emit: Instant::now(),
            last_stage: None,
        }
    }

    fn render(&mut self, event: &RunProgressEvent) {
        let stage_changed = self.last_stage != Some(event.stage);
        let finished_grid = event
            .sweep
            .is_some_and(|s| s.rows_done == s.rows_total);
        if stage_changed || finished_grid || self.last_emit.elapsed().as_millis() >= 100 {
            render_cli_progress(event);
            self.last_stage = Some(event.stage);
            self.last_emit = Instant::now();
        }
    }
}

fn clear_progress_line() {
    eprint!("\r{}\r", " ".repeat(100));
    let _ = io::stderr().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match (event.stage, event.sweep) {
        (RunStage::EvaluatingGrid, Some(s)) => {
            let width = 28usize;
            let filled = ((s.fraction_complete * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            eprint!(
                "\r{} [{}] {:>6.2}%  c1 rows={}/{}  elapsed={:.1}s",
                event.mode.label(),
                bar,
                s.fraction_complete * 100.0,
                s.rows_done,
                s.rows_total,
                event.elapsed_wall_s
            );
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.mode.label(),
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            eprint!("{}", line);
        }
    }
    let _ = io::stderr().flush();
}

fn print_timing_summary<W: Write>(out: &mut W, timing: &RunTimingSummary) -> AppResult<()> {
    let total = timing.total_time_s.max(1.0e-12);
    let compute_pct = 100.0 * timing.compute_time_s / total;

    writeln!(out, "\nTiming summary:")?;
    writeln!(out, "  Load:    {:.3}s", timing.load_time_s)?;
    writeln!(out, "  Compile: {:.3}s", timing.compile_time_s)?;
    writeln!(
        out,
        "  Compute: {:.3}s ({:.1}%)",
        timing.compute_time_s, compute_pct
    )?;
    writeln!(out, "  Total:   {:.3}s", timing.total_time_s)?;
    if timing.trials > 0 {
        writeln!(out, "  Trials:  {}", timing.trials)?;
    } else {
        writeln!(out, "  Samples: {}", timing.samples)?;
    }
    Ok(())
}
