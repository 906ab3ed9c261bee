#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod export;
pub mod grid;
pub mod id_generator;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod tools;

pub use app::ConfiguratorApp;
pub use element::{Element, ElementKind, Material};
pub use export::{FloorPlanDocument, export_snapshot, import_scene, import_snapshot};
pub use grid::{GridConfig, snap_point};
pub use id_generator::ElementId;
pub use scene::{Scene, SceneSummary};
pub use tools::Tool;
