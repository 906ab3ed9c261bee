use egui::vec2;

use crate::app::ConfiguratorApp;
use crate::element::Material;
use crate::tools::Tool;

pub fn tools_panel(app: &mut ConfiguratorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            // Create selectable buttons for each tool
            for tool in Tool::ALL {
                let is_selected = app.active_tool() == tool;
                let label = ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, tool.tint());
                    ui.selectable_label(is_selected, tool.name())
                });
                if label.inner.clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_active_tool(tool);
                }
            }

            ui.separator();

            // Material swatch palette. Decorative for now: per-element
            // material editing is not wired up.
            ui.label("Materials");
            ui.horizontal_wrapped(|ui| {
                for material in Material::ALL {
                    ui.add(
                        egui::Button::new("")
                            .fill(material.swatch())
                            .min_size(vec2(24.0, 24.0)),
                    )
                    .on_hover_text(material.name());
                }
            });

            ui.separator();

            ui.checkbox(&mut app.grid_mut().enabled, "Grid");
            ui.checkbox(&mut app.grid_mut().snap_enabled, "Snap to grid");

            ui.separator();

            // Actions for the current selection
            let selected = app.scene().selected_element().map(|e| (e.id, e.kind));
            if let Some((id, kind)) = selected {
                ui.label(format!("Selected: {} #{id}", kind.name()));
                ui.horizontal(|ui| {
                    if ui.button("Rotate").clicked() {
                        app.scene_mut().rotate_element(id);
                    }
                    if ui.button("Duplicate").clicked() {
                        app.scene_mut().duplicate_element(id);
                    }
                    if ui.button("Delete").clicked() {
                        app.scene_mut().delete_element(id);
                    }
                });
            } else {
                ui.label("Nothing selected");
            }

            ui.separator();

            if ui.button("Export").clicked() {
                app.export();
            }
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
