use crate::app::ConfiguratorApp;

pub fn stats_panel(app: &mut ConfiguratorApp, ctx: &egui::Context) {
    let summary = app.scene().summary();

    egui::TopBottomPanel::bottom("stats_panel").show(ctx, |ui| {
        ui.columns(4, |columns| {
            columns[0].vertical_centered(|ui| {
                ui.strong(summary.elements.to_string());
                ui.small("Elements");
            });
            columns[1].vertical_centered(|ui| {
                ui.strong(summary.walls.to_string());
                ui.small("Walls");
            });
            columns[2].vertical_centered(|ui| {
                ui.strong(summary.furniture.to_string());
                ui.small("Furniture");
            });
            columns[3].vertical_centered(|ui| {
                ui.strong(format!("{:.0} m²", summary.total_area_m2));
                ui.small("Total Area");
            });
        });
    });
}
