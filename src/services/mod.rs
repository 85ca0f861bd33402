pub mod activities;
pub mod todos;
