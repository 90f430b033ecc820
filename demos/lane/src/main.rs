use rand::Rng;
use tenpin::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Bowler
// ---------------------------------------------------------------------------

/// Throws uniformly random balls at whatever pins are still standing.
struct Bowler<R: Rng> {
    rng: R,
}

impl<R: Rng> Bowler<R> {
    fn new(rng: R) -> Self {
        Self { rng }
    }

    fn throw(&mut self, standing: u8) -> Result<Roll, TenpinError> {
        let pins = self.rng.random_range(0..=standing);
        Ok(Roll::new(i32::from(pins))?)
    }

    fn bowl_round(&mut self) -> Result<Round, TenpinError> {
        let first = self.throw(MAX_PINS)?;
        let second = if first.is_strike() {
            Roll::ZERO
        } else {
            self.throw(MAX_PINS - first.pins_hit())?
        };
        Ok(Round::new(first, second)?)
    }

    /// Plays a whole game, bonus rolls included.
    fn bowl_game(&mut self, config: GameConfig) -> Result<Game, TenpinError> {
        let mut game = Game::with_config(config);
        for _ in 0..MAX_ROUNDS {
            game.play_round(self.bowl_round()?)?;
        }
        game.finish()?;

        let mut standing = MAX_PINS;
        while game.bonus_rolls_remaining() > 0 {
            let roll = self.throw(standing)?;
            game.play_extra_roll(roll)?;
            standing = if roll.is_strike() { MAX_PINS } else { standing - roll.pins_hit() };
        }
        game.complete()?;
        Ok(game)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut bowler = Bowler::new(rand::rng());
    let game = bowler.bowl_game(GameConfig::default())?;
    let score = game.calculate_score()?;
    tracing::info!(score, "lane closed");

    let card = game.scorecard();
    println!("{card}");
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
