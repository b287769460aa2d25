// src/ui/helpers.rs
use crate::view_models::{OptionStatus, OptionView};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add_sized([width, height], Button::new(label)).clicked()
}

/// Botón de opción a ancho completo, coloreado según su estado.
/// Solo responde al clic mientras la pregunta no esté respondida.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32, height: f32) -> bool {
    let (fill, stroke) = match option.status {
        OptionStatus::Correct => (Color32::DARK_GREEN, Stroke::new(2.0, Color32::GREEN)),
        OptionStatus::Incorrect => (Color32::DARK_RED, Stroke::new(2.0, Color32::RED)),
        OptionStatus::Available | OptionStatus::Locked => {
            (ui.visuals().widgets.inactive.weak_bg_fill, Stroke::NONE)
        }
    };

    let button = Button::new(RichText::new(option.label()).size(16.0))
        .min_size(Vec2::new(width, height))
        .fill(fill)
        .stroke(stroke);

    ui.add_enabled(option.enabled(), button).clicked()
}
