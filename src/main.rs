use std::io::{self, Write};

use kinematics::report::{write_flight_summary, write_free_fall, write_trajectory};
use kinematics::{InputError, Projectile, ReportError, free_fall_time};
use log::info;
use thiserror::Error;

#[derive(Clone, Copy, Debug)]
struct Inputs {
    drop_height_m: f64,
    speed_mps: f64,
    angle_deg: f64,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn read_f64(prompt: &str, label: &'static str) -> Result<f64, InputError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(InputError::Eof);
        }

        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => return Ok(value),
            Ok(value) => return Err(InputError::NotFinite { label, value }),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user() -> Result<Inputs, InputError> {
    Ok(Inputs {
        drop_height_m: read_f64("Drop height (m): ", "drop height")?,
        speed_mps: read_f64("Velocity (m/s): ", "velocity")?,
        angle_deg: read_f64("Angle (degrees): ", "angle")?,
    })
}

fn run() -> Result<(), AppError> {
    let inputs = get_inputs_from_user()?;
    info!("read inputs {inputs:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Falling is downward, so the drop is passed with gravity's sign.
    let fall = -inputs.drop_height_m.abs();
    writeln!(out, "\nFree fall from {:.2} m:", fall.abs())?;
    let simulated = write_free_fall(fall, &mut out)?;
    writeln!(out, "Simulated fall time: {simulated:.2} s")?;
    writeln!(out, "Exact fall time: {:.4} s", free_fall_time(fall))?;

    let projectile = Projectile::new(inputs.speed_mps, inputs.angle_deg);
    writeln!(
        out,
        "\nProjectile at {:.1} deg, {:.2} m/s:",
        projectile.angle_deg(),
        projectile.speed()
    )?;
    write_trajectory(&projectile, &mut out)?;
    writeln!(out)?;
    write_flight_summary(&projectile, &mut out)?;

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
