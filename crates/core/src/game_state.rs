//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, RNG and scoring.
//! It handles gravity timing, piece movement, rotation, locking, line clears
//! and the session lifecycle (pause, game over, restart).
//!
//! Commands other than pause and restart are ignored while paused or after
//! game over; callers should treat an ended session as frozen.

use log::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_level, calculate_line_score, fall_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Session settings, kept across restarts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the piece sequence
    pub seed: u32,
    /// Whether the ghost piece starts visible
    pub ghost_enabled: bool,
    /// Keep the leftover time after a gravity step instead of discarding it.
    ///
    /// Off by default: the accumulator restarts from zero after each step, so
    /// gravity runs slightly slow when frames overshoot the interval.
    /// A lock always restarts the accumulator from zero, in either mode.
    pub carry_fall_remainder: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ghost_enabled: true,
            carry_fall_remainder: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current: Piece,
    next: Piece,
    pieces: PieceGenerator,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    paused: bool,
    game_over: bool,
    ghost_enabled: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and default settings
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// Create a new game on an empty board
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Create a new game on a prepared board.
    ///
    /// If the first piece cannot spawn the session starts already over.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let mut pieces = PieceGenerator::new(config.seed);
        let current = Piece::new(pieces.draw());
        let next = Piece::new(pieces.draw());
        let game_over = !current.is_valid(&board);

        Self {
            config,
            board,
            current,
            next,
            pieces,
            last_event: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_interval_ms: fall_interval_ms(START_LEVEL),
            fall_timer_ms: 0,
            paused: false,
            game_over,
            ghost_enabled: config.ghost_enabled,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn ghost_enabled(&self) -> bool {
        self.ghost_enabled
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Current gravity interval in seconds
    pub fn fall_interval_secs(&self) -> f64 {
        self.fall_interval_ms as f64 / 1000.0
    }

    /// Time accumulated toward the next gravity step
    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Check a piece against the board validity predicate
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.is_valid(&self.board)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.current = self.current;
        out.next = self.next;
        out.ghost_y = (self.ghost_enabled && !self.game_over).then(|| self.ghost_y());
        out.ghost_enabled = self.ghost_enabled;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Row the current piece would land on if hard-dropped.
    ///
    /// Works on a copy; the live piece is never touched.
    pub fn ghost_y(&self) -> i8 {
        let probe = self.current;
        probe.resting_y(&self.board)
    }

    /// Copy of the current piece at its landing row
    pub fn ghost_piece(&self) -> Piece {
        self.current.with_y(self.ghost_y())
    }

    fn accepts_input(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Try to move the current piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        self.current.try_move(&self.board, dx, dy)
    }

    pub fn move_left(&mut self) -> bool {
        self.accepts_input() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.accepts_input() && self.try_move(1, 0)
    }

    /// Move down one row, locking the piece if it is already resting
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Rotate clockwise with classic wall kicks
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        match self.current.try_rotate(&self.board) {
            Some(kick) => {
                if kick != 0 {
                    trace!("rotation kicked by {kick}");
                }
                true
            }
            None => {
                trace!("rotation blocked at x={} y={}", self.current.x, self.current.y);
                false
            }
        }
    }

    /// Drop the current piece to its resting row and lock it
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        while self.try_move(0, 1) {}
        self.lock_piece();
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        true
    }

    pub fn toggle_ghost(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.ghost_enabled = !self.ghost_enabled;
        true
    }

    /// Discard this session and start a fresh one.
    ///
    /// The piece stream continues from the current RNG state, so the new game
    /// does not replay the old sequence.
    pub fn restart(&mut self) -> bool {
        let config = GameConfig {
            seed: self.pieces.seed(),
            ..self.config
        };
        info!("restart (final score {}, lines {})", self.score, self.lines);
        *self = Self::with_config(config);
        true
    }

    /// Lock the current piece, clear lines, score and promote the next piece
    pub(crate) fn lock_piece(&mut self) {
        let piece = self.current;
        self.board.lock(&piece.matrix, piece.color, piece.x, piece.y);

        let cleared = self.board.clear_lines();
        let level_before = self.level;
        let score_delta = self.apply_line_clear(cleared);
        debug!(
            "locked {:?} at ({}, {}), cleared {}",
            piece.kind, piece.x, piece.y, cleared
        );

        self.current = self.next;
        self.next = Piece::new(self.pieces.draw());
        self.fall_timer_ms = 0;

        if !self.current.is_valid(&self.board) {
            self.game_over = true;
            info!(
                "game over: score {}, level {}, lines {}",
                self.score, self.level, self.lines
            );
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_delta,
            level_up: self.level > level_before,
            game_over: self.game_over,
        });
    }

    /// Update score, lines, level and gravity for a clear; returns points awarded
    fn apply_line_clear(&mut self, cleared: usize) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared as u32;

        let level = calculate_level(self.lines);
        if level != self.level {
            info!("level {} -> {}", self.level, level);
        }
        self.level = level;
        self.fall_interval_ms = fall_interval_ms(level);

        points
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the fall interval the piece moves down
    /// one row, or locks if it cannot. Returns true when a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms {
            return false;
        }

        let remainder = if self.config.carry_fall_remainder {
            self.fall_timer_ms - self.fall_interval_ms
        } else {
            0
        };

        if self.try_move(0, 1) {
            self.fall_timer_ms = remainder;
        } else {
            // Locking restarts the accumulator for the new piece.
            self.lock_piece();
        }
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !action.always_active() && !self.accepts_input() {
            trace!("ignored {} (paused={}, over={})", action.as_str(), self.paused, self.game_over);
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::ToggleGhost => self.toggle_ghost(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::get_shape;

    /// Game with a chosen current piece on an empty board
    fn game_with(kind: PieceKind) -> GameState {
        let mut state = GameState::new(12345);
        state.current = Piece::new(kind);
        state
    }

    /// Fill row `y` except the columns in `gaps`
    fn fill_row_except(board: &mut Board, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                board.set(x, y, Some(Color::Red));
            }
        }
    }

    /// Prepare `n` bottom rows with a gap at column 0 and a vertical I ready to fill it
    fn setup_clear(state: &mut GameState, n: i8) {
        for y in (BOARD_HEIGHT as i8 - n)..BOARD_HEIGHT as i8 {
            fill_row_except(&mut state.board, y, &[0]);
        }
        let mut piece = Piece::new(PieceKind::I);
        piece.matrix = get_shape(PieceKind::I).matrix.rotate();
        piece.x = 0;
        state.current = piece;
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert!(!state.paused);
        assert!(state.ghost_enabled);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.fall_interval_ms, 500);
        assert_eq!(state.current.y, 0);
        assert!(state.current.is_valid(&state.board));
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.current, b.current);
        assert_eq!(a.next, b.next);
    }

    #[test]
    fn test_try_move() {
        let mut state = game_with(PieceKind::T);
        let initial_x = state.current.x;

        assert!(state.move_right());
        assert_eq!(state.current.x, initial_x + 1);

        assert!(state.move_left());
        assert_eq!(state.current.x, initial_x);
    }

    #[test]
    fn test_move_stops_at_wall() {
        let mut state = game_with(PieceKind::O);
        let mut moved = 0;
        for _ in 0..10 {
            if state.move_left() {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.current.x, 0);
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let mut state = game_with(PieceKind::O);
        state.current.y = 18;
        let next = state.next;

        assert!(state.soft_drop());
        assert!(state.board.is_occupied(4, 19));
        assert_eq!(state.current, next);
        assert!(state.take_last_event().is_some());
    }

    #[test]
    fn test_hard_drop_locks_at_bottom() {
        let mut state = game_with(PieceKind::O);
        let next = state.next;

        assert!(state.hard_drop());
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board.get(x, y), Some(Some(Color::Yellow)));
        }
        assert_eq!(state.current, next);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_rotate_wall_kick_from_right_edge() {
        let mut state = game_with(PieceKind::T);
        state.current.matrix = state.current.matrix.rotate();
        state.current.x = 8;
        state.current.y = 4;
        let rotated = state.current.matrix.rotate();

        assert!(state.rotate());
        assert_eq!(state.current.x, 7);
        assert_eq!(state.current.matrix, rotated);
    }

    #[test]
    fn test_rotate_blocked_is_noop() {
        let mut state = game_with(PieceKind::I);
        state.current.matrix = state.current.matrix.rotate();
        state.current.x = 9;
        state.current.y = 4;
        let before = state.current;

        assert!(!state.rotate());
        assert_eq!(state.current, before);
    }

    #[test]
    fn test_ghost_y_does_not_mutate() {
        let mut state = game_with(PieceKind::T);
        state.board.set(4, 15, Some(Color::Blue));
        let piece = state.current;
        let board = state.board.clone();

        let first = state.ghost_y();
        for _ in 0..5 {
            assert_eq!(state.ghost_y(), first);
        }
        assert_eq!(first, 14);
        assert_eq!(state.current, piece);
        assert_eq!(state.board, board);
        assert_eq!(state.ghost_piece(), piece.with_y(14));
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let mut state = GameState::new(12345);
        setup_clear(&mut state, 1);

        state.hard_drop();
        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 1);
        assert_eq!(ev.score_delta, 100);
        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        // The I sticks out three rows above the cleared one; they shift down.
        assert!(state.board.is_occupied(0, 19));
        assert!(state.board.is_occupied(0, 17));
        assert!(!state.board.is_occupied(0, 16));
    }

    #[test]
    fn test_line_clear_scores_by_count_at_level_one() {
        for (n, expected) in [(1, 100), (2, 300), (3, 500), (4, 800)] {
            let mut state = GameState::new(12345);
            setup_clear(&mut state, n);
            state.hard_drop();
            assert_eq!(state.score, expected, "{} lines", n);
            assert_eq!(state.lines, n as u32);
        }
    }

    #[test]
    fn test_line_clear_scores_at_level_three() {
        for (n, expected) in [(1, 300), (2, 900), (3, 1500), (4, 2400)] {
            let mut state = GameState::new(12345);
            state.lines = 20;
            state.level = 3;
            state.fall_interval_ms = fall_interval_ms(3);
            setup_clear(&mut state, n);
            state.hard_drop();
            assert_eq!(state.score, expected, "{} lines", n);
        }
    }

    #[test]
    fn test_leveling_after_23_lines() {
        let mut state = GameState::new(12345);
        state.lines = 19;
        state.level = 2;
        setup_clear(&mut state, 4);

        state.hard_drop();
        let ev = state.take_last_event().unwrap();
        assert!(ev.level_up);
        assert_eq!(state.lines, 23);
        assert_eq!(state.level, 3);
        assert_eq!(state.fall_interval_ms, 400);
        assert!((state.fall_interval_secs() - 0.40).abs() < 1e-9);
        // Scored at the level the clear happened on.
        assert_eq!(state.score, 800 * 2);
    }

    #[test]
    fn test_game_over_when_next_cannot_spawn() {
        let mut state = game_with(PieceKind::O);
        // Block row 0 in the spawn columns of every shape, away from the O.
        state.current.x = 0;
        state.current.y = 10;
        fill_row_except(&mut state.board, 0, &[0, 1, 2, 8, 9]);
        fill_row_except(&mut state.board, 1, &[0, 1, 2, 8, 9]);

        state.hard_drop();
        assert!(state.game_over);
        assert!(state.take_last_event().unwrap().game_over);

        let frozen = state.snapshot();
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::HardDrop,
            GameAction::ToggleGhost,
        ] {
            assert!(!state.apply_action(action));
        }
        assert!(!state.tick(10_000));
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new(12345);
        state.game_over = true;
        state.score = 4200;
        state.board.set(0, 19, Some(Color::Red));

        assert!(state.apply_action(GameAction::Restart));
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_pause_blocks_commands_and_gravity() {
        let mut state = game_with(PieceKind::T);
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused);

        let before = state.current;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.tick(5_000));
        assert_eq!(state.current, before);

        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_toggle_ghost_hides_ghost_in_snapshot() {
        let mut state = game_with(PieceKind::T);
        assert!(state.snapshot().ghost_y.is_some());

        assert!(state.apply_action(GameAction::ToggleGhost));
        let snap = state.snapshot();
        assert!(!snap.ghost_enabled);
        assert_eq!(snap.ghost_y, None);
    }

    #[test]
    fn test_tick_gravity_strictly_after_interval() {
        let mut state = game_with(PieceKind::T);

        assert!(!state.tick(250));
        assert!(!state.tick(250)); // exactly 500: not yet
        assert_eq!(state.current.y, 0);

        assert!(state.tick(1));
        assert_eq!(state.current.y, 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_tick_resets_accumulator_by_default() {
        let mut state = game_with(PieceKind::T);
        assert!(state.tick(900));
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_tick_carries_remainder_when_configured() {
        let mut state = GameState::with_config(GameConfig {
            seed: 12345,
            carry_fall_remainder: true,
            ..GameConfig::default()
        });
        state.current = Piece::new(PieceKind::T);

        assert!(state.tick(600));
        assert_eq!(state.fall_timer_ms, 100);
        assert!(!state.tick(400));
        assert!(state.tick(1));
        assert_eq!(state.current.y, 2);
    }

    #[test]
    fn test_gravity_lock_resets_accumulator_when_carrying() {
        let mut state = GameState::with_config(GameConfig {
            seed: 12345,
            carry_fall_remainder: true,
            ..GameConfig::default()
        });
        state.current = Piece::new(PieceKind::O);
        state.current.y = 18;
        let next = state.next;

        assert!(state.tick(900));
        assert!(state.board.is_occupied(4, 19));
        assert_eq!(state.current, next);
        assert_eq!(state.fall_timer_ms, 0);

        // The new piece waits a full interval before its first step.
        assert!(!state.tick(500));
        assert_eq!(state.current.y, 0);
    }

    #[test]
    fn test_tick_locks_resting_piece() {
        let mut state = game_with(PieceKind::O);
        state.current.y = 18;
        let next = state.next;

        assert!(state.tick(501));
        assert!(state.board.is_occupied(5, 18));
        assert_eq!(state.current, next);
    }

    #[test]
    fn test_with_board_blocked_spawn_starts_over() {
        let mut board = Board::new();
        fill_row_except(&mut board, 0, &[]);
        let state = GameState::with_board(GameConfig::default(), board);
        assert!(state.game_over);
    }
}
