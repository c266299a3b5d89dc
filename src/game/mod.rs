pub mod config;
pub mod display;
pub mod engine;
pub mod input_source;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod observer;
pub mod position_counter;
pub mod renderer;
pub mod state;

pub use config::{Controller, EngineConfig, PlayerConfig};
pub use engine::{Engine, EngineError};
pub use observer::{GameObserver, NoopObserver, TurnStatus};
