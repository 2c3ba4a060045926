// demos/tray_simulation.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_dice::apis::easy_dice::EasyDice;
use rs_dice::dice::DieType;
use rs_dice::models::{scale_vector, vector_magnitude, DieMotion, Quaternion};
use rs_dice::utils::DiceError;

const TICK: f64 = 1.0 / 60.0;
const MAX_TICKS: usize = 60 * 20;
const LINEAR_DAMPING: f64 = 3.0;
const ANGULAR_DAMPING: f64 = 2.0;

/// Stand-in for a physics engine: each die spins freely and slows down.
fn step(motion: &DieMotion, dt: f64) -> DieMotion {
    let spin = vector_magnitude(motion.angular_velocity);
    let turn = Quaternion::from_axis_angle(motion.angular_velocity, spin * dt);
    DieMotion::new(
        turn.multiply(&motion.rotation).normalized(),
        scale_vector(motion.linear_velocity, (-LINEAR_DAMPING * dt).exp()),
        scale_vector(motion.angular_velocity, (-ANGULAR_DAMPING * dt).exp()),
    )
}

fn main() -> Result<(), DiceError> {
    env_logger::init();

    let dice = EasyDice::new();
    let mut rng = StdRng::seed_from_u64(20);

    for (group, count) in [("D6", "3"), ("D100", "2"), ("d20", "150")] {
        let mut session = dice.new_session(group)?;
        let status = session.set_dice_count_from_input(count)?;
        println!("\nThrowing {} x {} ({:?})", session.dice_count(), session.group().name, status);

        let launches = dice.roll(&mut session, &mut rng);
        let mut motions: Vec<DieMotion> = launches
            .iter()
            .map(|launch| DieMotion::new(launch.rotation, launch.impulse, launch.torque))
            .collect();
        let die_types: Vec<&'static DieType> = launches.iter().map(|launch| launch.die_type).collect();

        let mut settled = None;
        for tick in 0..MAX_TICKS {
            motions = motions.iter().map(|motion| step(motion, TICK)).collect();
            if let Some(outcome) = session.tick(TICK, &motions)? {
                settled = Some((tick, outcome.clone()));
                break;
            }
        }

        match settled {
            Some((tick, outcome)) => {
                println!("Settled after {:.2}s", (tick + 1) as f64 * TICK);
                if die_types.len() <= 6 {
                    for (die, motion) in die_types.iter().zip(&motions) {
                        let face = dice.resolve(die.name, &motion.rotation)?;
                        println!("  {:>3}: {}", die.name, die.face_label(&face));
                    }
                }
                println!("Result: {}", outcome.display_value);
                println!("Total: {}", outcome.total);
            }
            None => println!("Dice never settled"),
        }
    }

    Ok(())
}
