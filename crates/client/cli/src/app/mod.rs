//! Glue code tying the content loaders, the engine and the terminal together.
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use blast_content::{ConfigLoader, ContentBundle, SpriteTable, default_bundle, default_sprites};
use blast_core::{Game, GameError};

use crate::Args;
use crate::input::{self, Command, HELP};
use crate::presentation::{EventLog, Glyphs, render_board};

pub struct CliApp {
    game: Game,
    sprites: SpriteTable,
    glyphs: Glyphs,
    log: Arc<EventLog>,
}

pub struct CliAppBuilder {
    args: Args,
}

impl CliAppBuilder {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn build(self) -> Result<CliApp> {
        let bundle = load_content(self.args.config.as_deref())?;
        CliApp::from_bundle(bundle, self.args.seed, self.args.history)
    }
}

/// Reads a content bundle, or a bare game config paired with the default
/// sprites. Without a path the bundled default game is used.
fn load_content(path: Option<&Path>) -> Result<ContentBundle> {
    let Some(path) = path else {
        return default_bundle();
    };

    match ContentBundle::load(path) {
        Ok(bundle) => Ok(bundle),
        Err(bundle_error) => {
            tracing::debug!(%bundle_error, "not a content bundle, reading a game config");
            let game = ConfigLoader::load(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?;
            Ok(ContentBundle {
                game,
                sprites: default_sprites()?,
            })
        }
    }
}

impl CliApp {
    pub fn builder(args: Args) -> CliAppBuilder {
        CliAppBuilder::new(args)
    }

    fn from_bundle(
        bundle: ContentBundle,
        seed: u64,
        history: Option<NonZeroUsize>,
    ) -> Result<Self> {
        let ContentBundle { game, sprites } = bundle;

        let mut builder = Game::builder(game).seed(seed);
        if let Some(limit) = history {
            builder = builder.history_limit(limit);
        }
        let mut game = builder.build()?;

        let log = Arc::new(EventLog::default());
        game.add_listener(log.clone());

        let glyphs = Glyphs::new(game.rules());
        Ok(Self {
            game,
            sprites,
            glyphs,
            log,
        })
    }

    /// Plays on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<()> {
        tracing::info!(
            width = self.game.width(),
            height = self.game.height(),
            "CLI client starting"
        );
        writeln!(out, "{}", self.glyphs.legend(&self.sprites))?;
        self.show(&mut out)?;
        prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            match input::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.dispatch(command, &mut out)?,
                Err(e) => writeln!(out, "{e}")?,
            }
            prompt(&mut out)?;
        }

        tracing::info!(score = self.game.score(), "CLI client exiting");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let outcome = match command {
            Command::Pick { x, y } => self.game.pick_tile(x, y),
            Command::Undo => self.game.undo().map(|undone| {
                if !undone {
                    self.log.push("Nothing to undo");
                }
            }),
            Command::Restart => self.game.restart(None),
            Command::Show => return self.show(out),
            Command::Help => return writeln!(out, "{HELP}"),
            Command::Quit => return Ok(()),
        };

        for message in self.log.drain() {
            writeln!(out, "{message}")?;
        }
        if let Err(e) = outcome {
            let severity = e.severity();
            if severity.is_internal() {
                tracing::error!(
                    severity = severity.as_str(),
                    code = e.error_code(),
                    error = %e,
                    "command failed"
                );
            } else {
                tracing::warn!(code = e.error_code(), error = %e, "command rejected");
            }
            writeln!(out, "error: {e}")?;
        }
        self.show(out)
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render_board(self.game.grid(), &self.glyphs))?;
        write!(
            out,
            "score {}/{}  moves {}  root {}",
            self.game.score(),
            self.game.rules().win_score(),
            self.game.moves_left(),
            hex::encode(self.game.grid().state_root())
        )?;
        if self.game.is_game_over() {
            write!(out, "  (game over, `restart` to play again)")?;
        }
        writeln!(out)
    }
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
