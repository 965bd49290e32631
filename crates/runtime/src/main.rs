#![deny(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use matchmaking::{registry, Discrete, DynEnv};

const DEFAULT_STEPS: usize = 200;
const DEFAULT_SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| registry::PAIRING_ID.to_string());
    let steps = match std::env::args().nth(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid step count {raw:?}"))?,
        None => DEFAULT_STEPS,
    };

    tracing::info!("Constructing environment {id} for {steps} random steps...");
    let mut env = registry::make(&id)?;
    env.seed(DEFAULT_SEED);

    let total = run_random_episode(env.as_mut(), steps, DEFAULT_SEED);
    tracing::info!("Episode finished. Total return over {steps} steps: {total}");

    #[cfg(feature = "render")]
    {
        let path = std::path::Path::new("frame.png");
        render::Renderer::new()
            .draw_pixels(&env.snapshot())
            .save_png(path)?;
        tracing::info!("Wrote final frame to {}", path.display());
    }

    Ok(())
}

/// Drives one episode with uniformly random in-space actions and returns the
/// summed reward. Semantically invalid picks are part of the game; they just
/// collect the penalty.
fn run_random_episode(env: &mut dyn DynEnv, steps: usize, seed: u64) -> f32 {
    let mut rng = fastrand::Rng::with_seed(seed);
    let space = Discrete::new(env.action_size());
    env.reset();

    let mut total = 0.0;
    for i in 0..steps {
        let action: Vec<usize> = (0..env.action_arity())
            .map(|_| space.sample(&mut rng))
            .collect();
        // Sampled inside the declared space, so step cannot fail.
        let step = env
            .step(&action)
            .expect("sampled action must satisfy the action space");
        total += step.reward;
        if (i + 1) % 50 == 0 {
            tracing::info!(
                "Step {} complete. reward: {}, running return: {}",
                i + 1,
                step.reward,
                total
            );
        }
    }
    total
}
