use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.engine.summary() else {
        return;
    };

    let mut clicked_restart = false;
    centered_panel(ctx, 260.0, 480.0, |ui| {
        let button_width = ui.available_width() / 2.0;
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏆").size(64.0).color(Color32::GOLD));
            ui.add_space(8.0);
            ui.heading("Quiz Complete!");
            ui.add_space(12.0);
            ui.label(RichText::new(summary.label()).size(20.0));
            ui.add_space(24.0);

            // Única acción disponible
            if big_button(ui, "⟲ Try Again", button_width, 40.0) {
                clicked_restart = true;
            }
        });
    });

    if clicked_restart {
        app.restart();
    }
}
