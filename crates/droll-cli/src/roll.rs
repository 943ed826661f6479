use colored::Colorize;
use droll_core::{DieSpec, NotationError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::render;

/// How each roll is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// `3d6+2: [3, 4, 1] + 2 = 10`
    Line,
    /// The total alone.
    Total,
    /// One JSON object per roll.
    Json,
}

#[derive(Debug, Clone)]
pub struct RollOptions {
    pub seed: Option<u64>,
    pub times: u32,
    pub output: Output,
}

/// Roll every code `times` times. Bad codes are reported and skipped; the
/// run fails if any code was bad.
pub fn run(codes: &[String], options: &RollOptions) -> Result<(), String> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(seed = ?options.seed, times = options.times, codes = codes.len(), "rolling");

    let mut bad = 0;
    for code in codes {
        let spec = match checked(code) {
            Ok(spec) => spec,
            Err(err) => {
                report(&err);
                bad += 1;
                continue;
            }
        };

        for _ in 0..options.times {
            let outcome = spec.roll_with(&mut rng).map_err(|e| e.to_string())?;
            match options.output {
                Output::Line => println!("{}", render::outcome_line(&spec, &outcome)),
                Output::Total => println!("{}", outcome.total),
                Output::Json => println!("{}", render::json_line(&spec, &outcome)?),
            }
        }
    }

    if bad > 0 {
        Err(format!(
            "{bad} bad die code{}",
            if bad == 1 { "" } else { "s" }
        ))
    } else {
        Ok(())
    }
}

fn checked(code: &str) -> Result<DieSpec, NotationError> {
    let spec = droll_core::parse(code)?;
    spec.validate()?;
    Ok(spec)
}

fn report(err: &NotationError) {
    match err {
        NotationError::Malformed { code, reason, span } => {
            if !code.is_empty() {
                let color = colored::control::SHOULD_COLORIZE.should_colorize();
                let rendered =
                    render::render_malformed(code, span.clone(), &reason.to_string(), color);
                eprint!("{rendered}");
            }
            eprintln!("{}", render::bad_code_line(code).red());
        }
        NotationError::Degenerate { code, reason } => {
            eprintln!("{}", render::bad_code_line(code).red());
            eprintln!("  {}", reason.to_string().dimmed());
        }
    }
}
