use egui::Pos2;
use log::{error, info};
use std::path::Path;

use crate::export;
use crate::grid::{self, GridConfig};
use crate::panels;
use crate::scene::Scene;
use crate::tools::Tool;

/// The configurator application: one scene, one active tool, one grid
/// configuration.
///
/// The scene lives for a single editing session and is deliberately not
/// persisted across restarts; the export snapshot is the only way it leaves
/// the process.
pub struct ConfiguratorApp {
    scene: Scene,
    active_tool: Tool,
    grid: GridConfig,
    status: Option<String>,
}

impl Default for ConfiguratorApp {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            active_tool: Tool::default(),
            grid: GridConfig::default(),
            status: None,
        }
    }
}

impl ConfiguratorApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridConfig {
        &mut self.grid
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Interpret a click at a canvas-space position according to the active
    /// tool: the select tool picks (or clears) the selection, every other
    /// tool places a new element at the snapped coordinate.
    pub fn handle_canvas_click(&mut self, canvas_pos: Pos2) {
        if self.active_tool == Tool::Select {
            match self.scene.element_at(canvas_pos) {
                Some(id) => self.scene.select_element(id),
                None => self.scene.clear_selection(),
            }
        } else {
            let snapped = grid::snap_point(canvas_pos, &self.grid);
            self.scene.place_element(self.active_tool, snapped);
        }
    }

    /// Write the current scene to the snapshot file next to the working
    /// directory.
    pub fn export(&mut self) {
        let document = export::export_snapshot(&self.scene, &self.grid);
        match document.save_to(Path::new(export::EXPORT_FILE_NAME)) {
            Ok(()) => {
                info!(
                    "exported {} elements to {}",
                    document.elements.len(),
                    export::EXPORT_FILE_NAME
                );
                self.status = Some(format!("Exported to {}", export::EXPORT_FILE_NAME));
            }
            Err(err) => {
                error!("export failed: {err}");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

impl eframe::App for ConfiguratorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::stats_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
