//! Top-level game menu: play the current level, read the instructions, quit, or jump
//! to another level. Beating a level advances to the next; beating the last one wins.

use log::{debug, info, warn};
use rand::Rng;

use super::errors::{InputError, SelectLevelError};
use super::level::{Level, LevelOutcome};
use super::roster::LEVEL_ROSTER;
use crate::presenter::Presenter;

/// Where a menu session left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every level beaten.
    Won,
    /// Player chose "Quit Game".
    Quit,
    /// Input ran out.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play,
    Instructions,
    Quit,
    SelectLevel,
}

impl MenuChoice {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(MenuChoice::Play),
            2 => Some(MenuChoice::Instructions),
            3 => Some(MenuChoice::Quit),
            4 => Some(MenuChoice::SelectLevel),
            _ => None,
        }
    }
}

pub struct Game {
    levels: Vec<Level>,
    current: usize,
    won: bool,
}

impl Game {
    /// Game with the first `level_count` levels of the roster (clamped to 1..=roster size).
    pub fn new(level_count: usize) -> Self {
        let count = level_count.clamp(1, LEVEL_ROSTER.len());
        if count != level_count {
            warn!(
                "requested {} levels; playing {} (roster has {})",
                level_count,
                count,
                LEVEL_ROSTER.len()
            );
        }
        Game::with_levels((0..count).filter_map(Level::new).collect())
    }

    /// Game over an explicit list of levels.
    pub fn with_levels(levels: Vec<Level>) -> Self {
        Game {
            levels,
            current: 0,
            won: false,
        }
    }

    pub fn current_level(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Jump to a level by index.
    pub fn select_level(&mut self, requested: i64) -> Result<(), SelectLevelError> {
        let available = self.levels.len();
        match usize::try_from(requested) {
            Ok(index) if index < available => {
                self.current = index;
                Ok(())
            }
            _ => Err(SelectLevelError::OutOfRange {
                requested,
                available,
            }),
        }
    }

    /// Apply a finished level's outcome to the level index.
    pub fn apply_outcome<P: Presenter + ?Sized>(&mut self, outcome: LevelOutcome, presenter: &mut P) {
        match outcome {
            LevelOutcome::ClimbDown => {
                presenter.narrate("climbDown......");
                self.advance();
            }
            LevelOutcome::ClimbUp => {
                presenter.narrate("climbUp......");
                self.current = self.current.saturating_sub(1);
            }
            LevelOutcome::WonGame => {
                presenter.narrate("wonGame......");
                self.won = true;
            }
            LevelOutcome::Died => presenter.narrate("Exiting the current level."),
            LevelOutcome::KilledEnemy => {
                presenter.narrate("You beat the level and advanced to the next one!");
                self.advance();
            }
        }
    }

    fn advance(&mut self) {
        self.current += 1;
        if self.current >= self.levels.len() {
            self.won = true;
        }
    }

    /// Play the current level once. A game without levels has nothing to play and
    /// reports `Died` without touching the level index.
    pub fn play_current<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> LevelOutcome
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(level) = self.levels.get_mut(self.current) else {
            warn!("no level {} to play ({} levels)", self.current, self.levels.len());
            presenter.narrate("No such level.");
            return LevelOutcome::Died;
        };
        presenter.narrate(&format!("Playing level {}", self.current));
        let outcome = level.play(presenter, rng);
        self.apply_outcome(outcome, presenter);
        outcome
    }

    pub fn print_instructions<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.show("instructions", 0);
        presenter.read_ack();
    }

    /// Menu loop until the player wins, quits, or input runs out.
    pub fn run<P, R>(&mut self, presenter: &mut P, rng: &mut R) -> SessionEnd
    where
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        presenter.narrate("Welcome to Wump.2");
        let end = loop {
            if self.won {
                break SessionEnd::Won;
            }
            presenter.narrate(&format!("1> Play Game Level {}", self.current));
            presenter.narrate("2> Print Instructions");
            presenter.narrate("3> Quit Game");
            presenter.narrate("Please make a selection> ");
            let choice = match presenter.read_int() {
                Ok(choice) => MenuChoice::from_choice(choice),
                Err(InputError::Invalid(_)) => None,
                Err(InputError::Closed) => break SessionEnd::InputClosed,
            };
            match choice {
                Some(MenuChoice::Play) => {
                    self.play_current(presenter, rng);
                }
                Some(MenuChoice::Instructions) => self.print_instructions(presenter),
                Some(MenuChoice::Quit) => {
                    presenter.narrate("Quitting game.");
                    break SessionEnd::Quit;
                }
                Some(MenuChoice::SelectLevel) => {
                    presenter.narrate("SELECT LEVEL");
                    let picked = match presenter.read_int() {
                        Ok(n) => self.select_level(n).map_err(|e| debug!("{}", e)),
                        Err(e) => {
                            debug!("level selection: {}", e);
                            Err(())
                        }
                    };
                    if picked.is_err() {
                        presenter.narrate("No such level.");
                    }
                }
                None => presenter.narrate("Invalid choice. Please try again."),
            }
        };

        if end == SessionEnd::Won {
            presenter.show("gold", 1);
            presenter.narrate("You won the game!");
        }
        info!("session ended: {:?} at level {}", end, self.current);
        end
    }
}
