pub mod app;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use engine::QuizEngine;
pub use error::QuizError;
