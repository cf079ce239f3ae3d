use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gem_duel::cli::Cli;
use gem_duel::game::{Game, LineInput, WriterOutput};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");

    let mut game = Game::new(seed);
    let mut input = LineInput::new(io::stdin().lock());
    let mut output = WriterOutput::new(io::stdout().lock());

    let result = game.run(&mut input, &mut output)?;
    info!(?result, turns = game.turn_count(), "finished");

    Ok(())
}
