//! Scores three candidate trajectories of a planar robot against a reach-avoid requirement:
//! always stay out of the obstacle and eventually reach the goal within 20 steps.

use std::error::Error;

use stl_rho::batch::rank;
use stl_rho::region::in_rectangle;
use stl_rho::Signal;

fn trajectory<F>(position: F) -> Result<Signal, stl_rho::Error>
where
    F: Fn(f64) -> [f64; 2],
{
    Signal::from_rows((0..25_u32).map(|i| position(f64::from(i))))
}

fn main() -> Result<(), Box<dyn Error>> {
    let hit_obstacle = in_rectangle(3.0, 5.0, 4.0, 6.0);
    let at_goal = in_rectangle(7.0, 8.0, 8.0, 9.0);

    let obstacle_avoidance = hit_obstacle.negate().always(0, 20)?;
    let reach_goal = at_goal.eventually(0, 20)?;
    let specification = obstacle_avoidance.and(&reach_goal);

    let candidates = [
        ("reaches the goal but crosses the obstacle", trajectory(|i| [0.4 * i, 0.45 * i])?),
        ("avoids the obstacle but misses the goal", trajectory(|i| [0.1 * i, 0.3 * i])?),
        ("avoids the obstacle and reaches the goal", trajectory(|i| [0.43 * i, 0.0015 * i.powi(3)])?),
    ];

    println!("Specification: {}", specification);
    println!();

    for (index, (description, signal)) in candidates.iter().enumerate() {
        println!("TRAJECTORY {} ({}):", index + 1, description);
        println!("Obstacle Avoidance Robustness Score: {}", obstacle_avoidance.robustness(signal, 0)?);
        println!("Goal Reaching Robustness Score: {}", reach_goal.robustness(signal, 0)?);
        println!("Full Specification Robustness Score: {}", specification.robustness(signal, 0)?);
        println!();
    }

    let ranking = rank(&specification, candidates.iter().map(|(_, signal)| signal), 0)?;

    println!("Ranking (most robust first):");
    for (index, rho) in ranking {
        println!("  trajectory {}: {:.3}", index + 1, rho);
    }

    Ok(())
}
