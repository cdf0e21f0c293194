//! Small presentational widgets layered above the particle background.

pub mod action_menu;
pub mod button;
pub mod glossary;
pub mod progress;
