#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub(crate) mod assignment;
pub(crate) mod side_load;

pub mod bridge;
pub mod catalog;
pub mod combo;
pub mod dominance;
pub mod export;
pub mod family;
pub mod generator;
pub mod lookup;
pub mod picker_error;
pub mod plate;
pub mod preferences;
pub mod ranking;
pub mod report;
pub mod search_config;
pub mod target;
pub mod weight_key;
pub mod weight_result;

pub use generator::{Generator, generate_combos};
