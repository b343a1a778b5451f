pub mod collision_table;
pub mod config;
pub mod scene;

pub use collision_table::{CollisionTable, PairKey, ShapeId};
pub use config::SceneConfig;
pub use scene::{Scene, StepStats};
