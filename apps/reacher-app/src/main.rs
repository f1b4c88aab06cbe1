//! Reacher IK demo CLI.
//!
//! Builds an articulated chain (arm or finger), solves it toward a
//! target with CCD or FABRIK, and prints the solved joints, interior
//! angles, and constraint report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector3;

use reacher_core::chain::Chain;
use reacher_core::math::Vec3;
use reacher_ik::{
    CcdSolver, FabrikSolver, IkSolver, SolveConfig, calculate_joint_angles,
    constraint_violations,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Inverse kinematics for articulated chains.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a 3-joint arm chain (shoulder, elbow, wrist).
    Arm {
        /// Target position: X Y Z.
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true)]
        target: Vec<f64>,

        /// Upper-arm bone length.
        #[arg(long, default_value_t = 1.0)]
        upper_arm: f64,

        /// Forearm bone length.
        #[arg(long, default_value_t = 0.9)]
        forearm: f64,

        #[command(flatten)]
        solve: SolveArgs,
    },

    /// Solve a finger chain laid out along +X.
    Finger {
        /// Target position: X Y Z.
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true)]
        target: Vec<f64>,

        /// Bone lengths, base to tip.
        #[arg(long, value_delimiter = ',', default_values_t = [0.4, 0.3, 0.2])]
        bone_lengths: Vec<f64>,

        #[command(flatten)]
        solve: SolveArgs,
    },

    /// Print crate information.
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverKind {
    Ccd,
    Fabrik,
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Which solver to run.
    #[arg(long, value_enum, default_value_t = SolverKind::Fabrik)]
    solver: SolverKind,

    /// Maximum solver iterations (overrides --config).
    #[arg(long)]
    iterations: Option<u32>,

    /// Convergence tolerance (overrides --config).
    #[arg(long)]
    tolerance: Option<f64>,

    /// TOML file with solve parameters.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SolveArgs {
    /// Resolve the effective config: file values (if any) overridden
    /// by explicit flags.
    fn resolve(&self) -> Result<SolveConfig, String> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
                SolveConfig::from_toml(&text).map_err(|e| e.to_string())?
            }
            None => SolveConfig::default(),
        };
        if let Some(iterations) = self.iterations {
            config.max_iterations = iterations;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    fn solver(&self, config: SolveConfig) -> Box<dyn IkSolver> {
        match self.solver {
            SolverKind::Ccd => Box::new(CcdSolver::new(config)),
            SolverKind::Fabrik => Box::new(FabrikSolver::new(config)),
        }
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_solve(chain: &Chain, target: Vec3, solve: &SolveArgs) -> Result<(), String> {
    let config = solve.resolve()?;
    let solver = solve.solver(config);

    let result = solver.solve(chain, target).map_err(|e| e.to_string())?;

    println!(
        "{}: converged={}, iterations={}, error={:.6}",
        solver.name(),
        result.converged,
        result.iterations,
        result.position_error
    );
    println!();

    for (i, joint) in result.chain.joints().iter().enumerate() {
        println!(
            "joint {i}: pos=({:8.4}, {:8.4}, {:8.4})  rot=(pitch {:7.2}, yaw {:7.2}, roll {:4.1})",
            joint.position.x,
            joint.position.y,
            joint.position.z,
            joint.rotation.x,
            joint.rotation.y,
            joint.rotation.z,
        );
    }

    let angles = calculate_joint_angles(&result.chain);
    if !angles.is_empty() {
        println!();
        for (i, angle) in angles.iter().enumerate() {
            println!("interior angle at joint {}: {:.2} deg", i + 1, angle);
        }
    }

    let violations = constraint_violations(&result.chain);
    if violations.is_empty() {
        println!("\nall joint angles within advisory limits");
    } else {
        for v in violations {
            println!(
                "\nWARNING: joint {} angle {:.2} deg outside [{:.2}, {:.2}]",
                v.joint_index, v.angle_deg, v.min_deg, v.max_deg
            );
        }
    }

    Ok(())
}

fn run_info() {
    println!("reacher v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  reacher-core {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-ik   {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("solvers: ccd, fabrik");
}

fn to_vec3(values: &[f64]) -> Vec3 {
    Vector3::new(values[0], values[1], values[2])
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Arm {
            target,
            upper_arm,
            forearm,
            solve,
        } => {
            let chain = Chain::arm(Vec3::zeros(), *upper_arm, *forearm);
            run_solve(&chain, to_vec3(target), solve)
        }
        Commands::Finger {
            target,
            bone_lengths,
            solve,
        } => {
            let chain = Chain::finger(Vec3::zeros(), bone_lengths, Vector3::new(1.0, 0.0, 0.0));
            run_solve(&chain, to_vec3(target), solve)
        }
        Commands::Info => {
            run_info();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
