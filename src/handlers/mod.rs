pub mod auth;
pub mod health;
pub mod journal;
pub mod moods;
pub mod planner;
pub mod todo;
