pub mod journal;
pub mod mood;
pub mod planner;
pub mod todo;
pub mod user;
