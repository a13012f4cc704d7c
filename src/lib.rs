//! # Wump.2 - Hunt the Wumpus, four levels deep
//!
//! A console text adventure after Gregory Yob's 1973 *Hunt the Wumpus*. Each level is
//! the same twenty-room dodecahedron cave with two bottomless pits, two colonies of
//! superbats, a hidden weapon and an enemy: a spider, a snake, a frost mage and
//! finally the Wumpus. Find the weapon, find the enemy, kill it, descend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wump2::config::Config;
//! use wump2::game::Game;
//! use wump2::presenter::ConsolePresenter;
//!
//! let config = Config::default();
//! let mut presenter = ConsolePresenter::stdio(&config.presentation);
//! let mut rng = StdRng::from_entropy();
//! Game::new(config.game.levels).run(&mut presenter, &mut rng);
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - cave map, level simulation and menu controller
//! - [`presenter`] - narration and input: console and scripted implementations
//! - [`config`] - TOML configuration
//! - [`intro`] - the title sequence shown before the menu

pub mod config;
pub mod game;
pub mod intro;
pub mod presenter;
