//! Win/lose tracking, restart, listeners, history and error paths.

mod common;

use std::num::NonZeroUsize;
use std::sync::Arc;

use blast_core::{
    Command, CommandEnv, CommandError, CommandResult, ConfigField, DefaultReactionFactory,
    EngineError, ErrorSeverity, Game, GameError, GameEvent, GameListener, Position,
    ReactionFactory, SuperAction, TileKind,
};
use common::{Recorder, Scripted, config, first_pick, grid, row, striped};

fn burn_all_board(win_score: u32) -> Game {
    let mut cfg = config(23, 23);
    cfg.moves = 1;
    cfg.win_score = win_score;
    let mut board = striped(23, 23);
    board.set(Position::new(0, 0), TileKind::new("burn_all"));
    Game::builder(cfg)
        .grid(board)
        .rng(first_pick())
        .build()
        .unwrap()
}

#[test]
fn reaching_the_target_on_the_last_move_wins() {
    let mut game = burn_all_board(500);
    let recorder = Recorder::attach(&mut game);

    game.pick_tile(0, 0).unwrap();

    assert_eq!(game.score(), 528);
    assert_eq!(game.moves_left(), 0);
    assert!(game.is_game_over());
    assert_eq!(recorder.take_kinds(), ["burned", "moved", "refilled", "win"]);
}

#[test]
fn missing_the_target_on_the_last_move_loses() {
    let mut game = burn_all_board(600);
    let recorder = Recorder::attach(&mut game);

    game.pick_tile(0, 0).unwrap();

    assert_eq!(recorder.take_kinds(), ["burned", "moved", "refilled", "lose"]);
}

#[test]
fn finished_game_ignores_picks() {
    let mut game = burn_all_board(500);
    game.pick_tile(0, 0).unwrap();
    let recorder = Recorder::attach(&mut game);
    let root = game.grid().state_root();

    game.pick_tile(1, 1).unwrap();

    assert!(recorder.take().is_empty());
    assert_eq!(game.grid().state_root(), root);
    assert_eq!(game.history_len(), 1);
}

#[test]
fn running_out_of_pairs_loses_early() {
    // Refill draws yellow, then purple: no equal neighbors remain.
    let mut game = Game::builder(config(4, 1))
        .grid(grid(4, 1, &["red red blue green"]))
        .rng(Scripted::new([4, 3]))
        .build()
        .unwrap();
    let recorder = Recorder::attach(&mut game);

    game.pick_tile(0, 0).unwrap();

    assert_eq!(row(&game, 0), ["yellow", "purple", "blue", "green"]);
    assert_eq!(game.moves_left(), 9);
    assert!(game.is_game_over());
    assert_eq!(
        recorder.take_kinds(),
        ["group_cleared", "moved", "refilled", "lose"]
    );
}

#[test]
fn lone_tile_pick_costs_nothing() {
    let mut game = Game::builder(config(3, 1))
        .grid(grid(3, 1, &["red green green"]))
        .build()
        .unwrap();
    let recorder = Recorder::attach(&mut game);

    game.pick_tile(0, 0).unwrap();

    assert!(recorder.take().is_empty());
    assert_eq!(game.history_len(), 0);
    assert_eq!((game.score(), game.moves_left()), (0, 10));
}

#[test]
fn picking_nothing_pickable_is_an_error() {
    let mut game = Game::builder(config(3, 1))
        .grid(grid(3, 1, &["empty green green"]))
        .build()
        .unwrap();

    assert_eq!(
        game.pick_tile(0, 0),
        Err(EngineError::UnpickableTile {
            position: Position::new(0, 0),
            tile: TileKind::empty(),
        })
    );
    let err = game.pick_tile(3, 0).unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfBounds {
            position: Position::new(3, 0)
        }
    );
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(game.history_len(), 0);
}

#[test]
fn super_without_actions_fails_fast() {
    let cfg = config(3, 1).with_super("dud", []);
    let mut game = Game::builder(cfg)
        .grid(grid(3, 1, &["dud green green"]))
        .build()
        .unwrap();

    let err = game.pick_tile(0, 0).unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingSuperActions {
            tile: TileKind::new("dud")
        }
    );
    assert_eq!(err.error_code(), "ENGINE_MISSING_SUPER_ACTIONS");
}

#[test]
fn super_with_empty_burns_fails_fast() {
    let cfg = config(3, 1).with_super("fizzle", [SuperAction::burn([])]);
    let mut game = Game::builder(cfg)
        .grid(grid(3, 1, &["fizzle green green"]))
        .build()
        .unwrap();

    let err = game.pick_tile(0, 0).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Command {
            command: "burn",
            source: CommandError::NoBurnRules { .. }
        }
    ));
}

/// Fails every reaction lookup after gravity.
struct BrokenGravity;

impl ReactionFactory for BrokenGravity {
    fn super_command(
        &self,
        actions: &[SuperAction],
        position: Position,
        cost: u32,
    ) -> Result<Command, CommandError> {
        DefaultReactionFactory.super_command(actions, position, cost)
    }

    fn reactions(
        &self,
        result: &CommandResult,
        env: &mut CommandEnv<'_>,
    ) -> Result<Vec<Command>, CommandError> {
        if matches!(result, CommandResult::Moved { .. }) {
            return Err(CommandError::NotApplied);
        }
        DefaultReactionFactory.reactions(result, env)
    }
}

#[test]
fn failed_cascade_keeps_what_ran_undoable() {
    let mut game = Game::builder(config(2, 2))
        .grid(grid(2, 2, &["red red", "blue green"]))
        .rng(first_pick())
        .factory(BrokenGravity)
        .build()
        .unwrap();
    let root = game.grid().state_root();
    let recorder = Recorder::attach(&mut game);

    let err = game.pick_tile(0, 0).unwrap_err();

    assert!(matches!(err, EngineError::Command { command: "fall", .. }));
    assert_eq!(recorder.take_kinds(), ["group_cleared", "moved"]);
    assert_eq!(row(&game, 1), ["empty", "empty"]);
    assert_eq!(game.history_len(), 1);

    assert!(game.undo().unwrap());
    assert_eq!(game.grid().state_root(), root);
    assert_eq!((game.score(), game.moves_left()), (0, 10));
}

#[test]
fn restart_deals_a_fresh_board() {
    let mut game = Game::builder(config(3, 3))
        .grid(grid(
            3,
            3,
            &["red red red", "blue yellow burn_row", "green green green"],
        ))
        .seed(11)
        .build()
        .unwrap();
    game.pick_tile(2, 1).unwrap();
    let recorder = Recorder::attach(&mut game);

    game.restart(None).unwrap();

    assert_eq!((game.score(), game.moves_left()), (0, 10));
    assert_eq!(game.history_len(), 0);
    assert!(!game.undo().unwrap());
    assert!(
        game.grid()
            .tiles()
            .iter()
            .all(|tile| game.rules().is_color_tile(tile))
    );
    let events = recorder.take();
    assert!(matches!(
        &events[..],
        [GameEvent::Restart { config }] if config.width == 3 && config.height == 3
    ));
}

#[test]
fn restart_can_switch_configuration() {
    let mut game = Game::builder(config(3, 3)).seed(5).build().unwrap();
    let recorder = Recorder::attach(&mut game);

    let mut next = config(5, 4);
    next.moves = 7;
    game.restart(Some(next.clone())).unwrap();

    assert_eq!((game.width(), game.height()), (5, 4));
    assert_eq!(game.grid().tiles().len(), 20);
    assert_eq!(game.moves_left(), 7);
    assert_eq!(recorder.take(), [GameEvent::Restart { config: next }]);
}

#[test]
fn invalid_restart_changes_nothing() {
    let mut game = Game::builder(config(3, 3)).seed(5).build().unwrap();
    let root = game.grid().state_root();
    let recorder = Recorder::attach(&mut game);

    let mut broken = config(0, 3);
    broken.moves = 0;
    let err = game.restart(Some(broken)).unwrap_err();

    let EngineError::Config(config_error) = err else {
        panic!("expected a config error, got {err:?}");
    };
    assert_eq!(
        config_error.fields().collect::<Vec<_>>(),
        [ConfigField::Width, ConfigField::Moves]
    );
    assert_eq!(game.grid().state_root(), root);
    assert_eq!(game.width(), 3);
    assert!(recorder.take().is_empty());
}

#[test]
fn listeners_register_once_and_detach_cleanly() {
    let mut game = Game::builder(config(3, 3)).seed(1).build().unwrap();
    let recorder = Arc::new(Recorder::default());
    let listener: Arc<dyn GameListener> = recorder.clone();

    game.add_listener(Arc::clone(&listener));
    game.add_listener(Arc::clone(&listener));
    game.restart(None).unwrap();
    assert_eq!(recorder.take().len(), 1);

    game.remove_listener(&listener);
    game.remove_listener(&listener);
    game.restart(None).unwrap();
    assert!(recorder.take().is_empty());
}

#[test]
fn history_limit_drops_the_oldest_batches() {
    let mut board = striped(6, 6);
    board.set(Position::new(0, 0), TileKind::new("burn_row"));
    board.set(Position::new(0, 3), TileKind::new("burn_row"));
    let mut game = Game::builder(config(6, 6))
        .grid(board)
        .rng(Scripted::new([1, 2, 3, 4]))
        .history_limit(NonZeroUsize::MIN)
        .build()
        .unwrap();

    game.pick_tile(0, 0).unwrap();
    let after_first = game.grid().state_root();
    game.pick_tile(0, 2).unwrap();

    assert_eq!(game.history_len(), 1);
    assert!(game.undo().unwrap());
    assert_eq!(game.grid().state_root(), after_first);
    assert!(!game.undo().unwrap());
}

#[test]
fn same_seed_same_game() {
    let build = |seed| Game::builder(config(10, 11)).seed(seed).build().unwrap();
    let (a, b, c) = (build(42), build(42), build(43));

    assert_eq!(a.grid().state_root(), b.grid().state_root());
    assert_ne!(a.grid().state_root(), c.grid().state_root());
}
