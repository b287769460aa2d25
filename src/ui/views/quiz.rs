use crate::QuizApp;
use crate::ui::helpers::{big_button, option_button};
use crate::ui::layout::centered_panel;
use egui::{Align, Color32, Context, Layout, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question_idx) = app.engine.current_index() else {
        return;
    };

    // Todo lo que se pinta sale del motor; los clics se aplican al final
    let prompt = app
        .engine
        .current_question()
        .map(|q| q.prompt.clone())
        .unwrap_or_default();
    let options = app.engine.option_views();
    let advance_label = app.engine.advance_label();
    let progress = app.engine.progress_label().unwrap_or_default();
    let score = app.engine.score_label();

    let mut clicked_option = None;
    let mut clicked_advance = false;

    centered_panel(ctx, 460.0, 640.0, |ui| {
        let width = ui.available_width();

        ui.horizontal(|ui| {
            ui.label(RichText::new(progress).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(score).strong().color(Color32::LIGHT_BLUE));
            });
        });
        ui.add_space(12.0);

        ui.label(RichText::new(prompt).heading().strong());
        ui.add_space(16.0);

        for option in &options {
            if option_button(ui, option, width, 44.0) {
                clicked_option = Some(option.idx);
            }
            ui.add_space(6.0);
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }

        if let Some(label) = advance_label {
            ui.add_space(12.0);
            if big_button(ui, &format!("{label}  ➡"), width, 40.0) {
                clicked_advance = true;
            }
        }
    });

    if let Some(option_idx) = clicked_option {
        app.choose_option(question_idx, option_idx);
    }
    if clicked_advance {
        app.next_question();
    }
}
