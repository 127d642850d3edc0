//! Guess controller: one session, one surface.
//!
//! Reads the entry field, runs the session transition, and writes the
//! result back onto the surface. Hosts only ever call [`GuessController::handle`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::report::{attempts_message, invalid_guess_message, outcome_message};
use crate::session::GameSession;
use crate::surface::{Key, Surface, Trigger};
use crate::types::{DIAGNOSTICS_TARGET, GameConfig, Outcome};

#[derive(Debug)]
pub struct GuessController<S: Surface> {
    session: GameSession,
    surface: S,
}

impl<S: Surface> GuessController<S> {
    /// Start a fresh session on `surface` with a random target.
    ///
    /// A configured seed makes the target reproducible.
    pub fn new(surface: S, config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = GameSession::random(&mut rng);
        Self::with_session(surface, session, config)
    }

    /// Attach an existing session to `surface`.
    pub fn with_session(surface: S, session: GameSession, config: &GameConfig) -> Self {
        if config.diagnostics_enabled {
            info!(target: DIAGNOSTICS_TARGET, target_value = session.target(), "secret number chosen");
        }
        GuessController { session, surface }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Host-side access for editing the form (typing, focus moves).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Single entry point for host input.
    ///
    /// Submit activation and Enter both submit; any other key is ignored.
    pub fn handle(&mut self, trigger: Trigger) -> Outcome {
        match trigger {
            Trigger::SubmitActivated | Trigger::KeyPressed(Key::Enter) => self.submit_guess(),
            Trigger::KeyPressed(_) => Outcome::Ignored,
        }
    }

    /// Submit whatever is in the entry field.
    pub fn submit_guess(&mut self) -> Outcome {
        if self.session.is_over() {
            return Outcome::Ignored;
        }

        let raw = self.surface.entry_text();
        let outcome = self.session.evaluate(&raw);

        match &outcome {
            Outcome::Ignored => return outcome,
            Outcome::Invalid { input, reason } => {
                debug!(input = %input, reason = %reason, "rejected guess");
                self.surface.set_message(&invalid_guess_message());
                return outcome;
            }
            Outcome::Hint { guess, attempts_remaining, .. } => {
                debug!(guess, attempts_remaining, "wrong guess");
                if let Some(message) = outcome_message(&outcome) {
                    self.surface.set_message(&message);
                }
                self.surface.set_attempts_message(&attempts_message(*attempts_remaining));
            }
            Outcome::Won { .. } | Outcome::Lost { .. } => {
                if let Some(message) = outcome_message(&outcome) {
                    self.surface.set_message(&message);
                }
                self.end_session();
            }
        }

        // Every valid submission, including the last one.
        self.surface.clear_entry();
        self.surface.focus_entry();
        outcome
    }

    /// Lock the game: session over, submit control disabled. Idempotent.
    fn end_session(&mut self) {
        self.session.finish();
        self.surface.disable_submit();
        info!(attempts_remaining = self.session.attempts_remaining(), "session over");
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    use crate::error::GuessError;
    use crate::surface::{Focus, TextSurface};
    use crate::types::{Direction, MAX_ATTEMPTS, Phase};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under a scoped subscriber and return what it logged.
    fn logs_during(level: tracing::Level, f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(level)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn start_on_73(diagnostics_enabled: bool) {
        let config = GameConfig { diagnostics_enabled, seed: None };
        let session = GameSession::with_target(73).unwrap();
        let _game = GuessController::with_session(TextSurface::new(), session, &config);
    }

    fn game_50() -> GuessController<TextSurface> {
        let session = GameSession::with_target(50).unwrap();
        GuessController::with_session(TextSurface::new(), session, &GameConfig::default())
    }

    fn guess(game: &mut GuessController<TextSurface>, raw: &str) -> Outcome {
        game.surface_mut().set_entry(raw);
        game.handle(Trigger::SubmitActivated)
    }

    #[test]
    fn new_controller_starts_active_with_full_budget() {
        let game = GuessController::new(TextSurface::new(), &GameConfig::default());
        assert_eq!(game.session().phase(), Phase::Active);
        assert_eq!(game.session().attempts_remaining(), MAX_ATTEMPTS);
        assert!((1..=100).contains(&game.session().target()));
        assert!(game.surface().submit_enabled);
    }

    #[test]
    fn seeded_controllers_agree_on_target() {
        let config = GameConfig { seed: Some(99), ..Default::default() };
        let a = GuessController::new(TextSurface::new(), &config);
        let b = GuessController::new(TextSurface::new(), &config);
        assert_eq!(a.session().target(), b.session().target());
    }

    #[test]
    fn diagnostics_flag_does_not_change_the_game() {
        let config = GameConfig { diagnostics_enabled: true, seed: Some(3) };
        let game = GuessController::new(TextSurface::new(), &config);
        assert_eq!(game.session().phase(), Phase::Active);
        assert!(game.surface().message.is_empty());
    }

    #[test]
    fn diagnostics_on_logs_the_secret_number() {
        let logs = logs_during(tracing::Level::INFO, || start_on_73(true));
        assert!(logs.contains(DIAGNOSTICS_TARGET), "logs: {logs}");
        assert!(logs.contains("target_value=73"), "logs: {logs}");
    }

    #[test]
    fn diagnostics_off_keeps_the_secret() {
        let logs = logs_during(tracing::Level::INFO, || start_on_73(false));
        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn rejected_guess_logs_the_reason() {
        let logs = logs_during(tracing::Level::DEBUG, || {
            let mut game = game_50();
            guess(&mut game, "abc");
        });
        assert!(logs.contains("'abc' is not a number"), "logs: {logs}");
    }

    #[test]
    fn decimal_guess_spends_an_attempt() {
        let mut game = game_50();
        let outcome = guess(&mut game, "4.5");

        assert_eq!(
            outcome,
            Outcome::Hint { guess: 4, direction: Direction::TooLow, attempts_remaining: 4 }
        );
        assert!(game.surface().message.starts_with("Too low"));
        assert!(game.surface().entry.is_empty());
    }

    #[test]
    fn trailing_text_after_a_number_is_dropped() {
        let mut game = game_50();
        guess(&mut game, "70 apples");
        assert!(game.surface().message.starts_with("Too high"));
        assert_eq!(game.session().attempts_remaining(), 4);
    }

    #[test]
    fn scenario_win_on_first_guess() {
        let mut game = game_50();
        let outcome = guess(&mut game, "50");

        assert_eq!(outcome, Outcome::Won { guess: 50, attempts_remaining: 4 });
        assert_eq!(game.surface().message, "You won!");
        assert_eq!(game.session().phase(), Phase::Over);
        assert_eq!(game.session().attempts_remaining(), 4);
        assert!(!game.surface().submit_enabled);
    }

    #[test]
    fn scenario_five_misses_lose_and_reveal() {
        let mut game = game_50();
        for _ in 0..4 {
            guess(&mut game, "10");
            assert_eq!(game.session().phase(), Phase::Active);
        }
        let outcome = guess(&mut game, "10");

        assert_eq!(outcome, Outcome::Lost { guess: 10, target: 50 });
        assert!(game.surface().message.contains("50"));
        assert_eq!(game.session().phase(), Phase::Over);
        assert_eq!(game.session().attempts_remaining(), 0);
        assert!(!game.surface().submit_enabled);
    }

    #[test]
    fn scenario_non_numeric_input() {
        let mut game = game_50();
        let outcome = guess(&mut game, "abc");

        assert_eq!(
            outcome,
            Outcome::Invalid {
                input: "abc".into(),
                reason: GuessError::NotANumber("abc".into()),
            }
        );
        assert_eq!(game.surface().message, "Please enter a valid number between 1 and 100");
        assert_eq!(game.session().attempts_remaining(), 5);
        assert_eq!(game.session().phase(), Phase::Active);
    }

    #[test]
    fn scenario_out_of_range_input() {
        let mut game = game_50();
        guess(&mut game, "200");

        assert_eq!(game.surface().message, "Please enter a valid number between 1 and 100");
        assert_eq!(game.session().attempts_remaining(), 5);
    }

    #[test]
    fn scenario_too_high_hint() {
        let mut game = game_50();
        let outcome = guess(&mut game, "70");

        assert_eq!(
            outcome,
            Outcome::Hint { guess: 70, direction: Direction::TooHigh, attempts_remaining: 4 }
        );
        assert!(game.surface().message.starts_with("Too high"));
        assert_eq!(game.surface().attempts_message, "You have 4 attempts left");
        assert_eq!(game.session().phase(), Phase::Active);
    }

    #[test]
    fn too_low_hint() {
        let mut game = game_50();
        guess(&mut game, "20");
        assert!(game.surface().message.starts_with("Too low"));
    }

    #[test]
    fn invalid_input_keeps_entry_text() {
        let mut game = game_50();
        guess(&mut game, " x4 ");
        assert_eq!(game.surface().entry, " x4 ");
    }

    #[test]
    fn valid_input_clears_and_refocuses_entry() {
        let mut game = game_50();
        game.surface_mut().focus = Focus::Submit;
        guess(&mut game, "70");
        assert!(game.surface().entry.is_empty());
        assert_eq!(game.surface().focus, Focus::Entry);
    }

    #[test]
    fn winning_input_is_cleared_and_refocused_too() {
        let mut game = game_50();
        game.surface_mut().focus = Focus::Submit;
        guess(&mut game, "50");
        assert!(game.surface().entry.is_empty());
        assert_eq!(game.surface().focus, Focus::Entry);
    }

    #[test]
    fn win_and_loss_leave_attempts_region_alone() {
        let mut game = game_50();
        guess(&mut game, "50");
        assert!(game.surface().attempts_message.is_empty());
    }

    #[test]
    fn enter_key_submits_like_the_button() {
        let mut game = game_50();
        game.surface_mut().set_entry("70");
        let outcome = game.handle(Trigger::KeyPressed(Key::Enter));
        assert!(matches!(outcome, Outcome::Hint { .. }));
        assert_eq!(game.session().attempts_remaining(), 4);
    }

    #[test]
    fn other_keys_do_not_submit() {
        let mut game = game_50();
        game.surface_mut().set_entry("70");
        assert_eq!(game.handle(Trigger::KeyPressed(Key::Char('7'))), Outcome::Ignored);
        assert_eq!(game.handle(Trigger::KeyPressed(Key::Other)), Outcome::Ignored);
        assert_eq!(game.session().attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.surface().entry, "70");
    }

    #[test]
    fn invalid_inputs_never_change_state() {
        let mut game = game_50();
        for raw in ["", "   ", "abc", "x4", "0", "101", "-3", "0.9", "200.5"] {
            guess(&mut game, raw);
        }
        assert_eq!(game.session().attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.session().phase(), Phase::Active);
        assert!(game.surface().submit_enabled);
    }

    #[test]
    fn attempts_drop_by_one_per_valid_guess() {
        let mut game = game_50();
        for expected in (1..MAX_ATTEMPTS).rev() {
            guess(&mut game, "99");
            assert_eq!(game.session().attempts_remaining(), expected);
        }
    }

    #[test]
    fn over_session_renders_nothing_new() {
        let mut game = game_50();
        guess(&mut game, "50");
        let surface_before = game.surface().clone();
        let session_before = game.session().clone();

        for raw in ["10", "abc", "50"] {
            assert_eq!(guess(&mut game, raw), Outcome::Ignored);
        }
        assert_eq!(game.handle(Trigger::KeyPressed(Key::Enter)), Outcome::Ignored);

        assert_eq!(game.session(), &session_before);
        assert_eq!(game.surface().message, surface_before.message);
        assert_eq!(game.surface().attempts_message, surface_before.attempts_message);
    }

    #[test]
    fn end_session_is_idempotent() {
        let mut game = game_50();
        game.end_session();
        let snapshot = game.surface().clone();
        game.end_session();
        assert_eq!(game.surface(), &snapshot);
        assert!(game.session().is_over());
    }
}
