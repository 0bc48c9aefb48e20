use std::fs;
use std::time::{Duration, Instant};

use eframe::egui::{self, RichText};

use crate::label::{FieldSlot, Side};
use crate::preview::TexturePreviews;
use crate::wizard::{Step, Wizard};

const APP_TITLE: &str = "Fiber Optic Label Generator";
const APP_TAGLINE: &str =
    "Fill in the source and destination details to create a standardized fiber optic cable label.";
const COPIED_FLASH: Duration = Duration::from_secs(2);
const PREVIEW_MAX_HEIGHT: f32 = 96.0;
const PREVIEW_MAX_WIDTH: f32 = 170.0;

/// One user intent gathered while drawing a frame. Widget closures only
/// collect these; the wizard is mutated after the panels are done, keeping it
/// the single writer.
enum FormAction {
    SetProject(String),
    SetFieldName(Side, FieldSlot, String),
    PickImage(Side, FieldSlot),
    RemoveImage(Side, FieldSlot),
    Next,
    Back,
    Generate,
    Restart,
    CopyText(String),
}

pub struct LabelWizardApp {
    wizard: Wizard,
    previews: TexturePreviews,
    copied_at: Option<Instant>,
}

impl LabelWizardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_context(cc.egui_ctx.clone())
    }

    fn with_context(ctx: egui::Context) -> Self {
        Self {
            wizard: Wizard::new(),
            previews: TexturePreviews::new(ctx),
            copied_at: None,
        }
    }

    fn copied_flash_active(&self) -> bool {
        self.copied_at
            .is_some_and(|copied_at| copied_at.elapsed() < COPIED_FLASH)
    }

    fn apply(&mut self, action: FormAction, ctx: &egui::Context) {
        match action {
            FormAction::SetProject(project) => self.wizard.set_project(project),
            FormAction::SetFieldName(side, slot, name) => {
                self.wizard.set_field_name(side, slot, name);
            }
            FormAction::PickImage(side, slot) => {
                if let Some(bytes) = pick_image_bytes() {
                    self.wizard
                        .attach_image(side, slot, bytes, &mut self.previews);
                }
            }
            FormAction::RemoveImage(side, slot) => {
                self.wizard.remove_image(side, slot, &mut self.previews);
            }
            FormAction::Next => self.wizard.next(),
            FormAction::Back => self.wizard.back(),
            FormAction::Generate => self.wizard.generate(),
            FormAction::Restart => {
                self.wizard.restart(&mut self.previews);
                self.copied_at = None;
            }
            FormAction::CopyText(text) => {
                ctx.copy_text(text);
                self.copied_at = Some(Instant::now());
            }
        }
    }

    fn show_project_field(&self, ui: &mut egui::Ui, actions: &mut Vec<FormAction>) {
        ui.label(RichText::new("Project Name").strong());
        let mut project = self.wizard.label().project.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut project)
                .hint_text("e.g., Central City Expansion")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            actions.push(FormAction::SetProject(project));
        }
    }

    fn show_part_form(&self, ui: &mut egui::Ui, side: Side, actions: &mut Vec<FormAction>) {
        let title = match side {
            Side::From => "From (Source)",
            Side::To => "To (Destination)",
        };
        ui.heading(title);
        ui.add_space(4.0);

        let part = self.wizard.label().part(side);
        for slot in FieldSlot::ALL {
            let field = part.field(slot);

            ui.horizontal(|ui| {
                ui.label(RichText::new(slot.title()).strong());
                if slot.is_optional() {
                    ui.weak("(Optional)");
                }
            });

            let mut name = field.name.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut name)
                    .hint_text(slot.hint())
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                actions.push(FormAction::SetFieldName(side, slot, name));
            }

            match field.preview.and_then(|handle| self.previews.texture(handle)) {
                Some(texture) => {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Image::new(texture)
                                .max_height(PREVIEW_MAX_HEIGHT)
                                .max_width(PREVIEW_MAX_WIDTH),
                        );
                        if ui.button("Remove").clicked() {
                            actions.push(FormAction::RemoveImage(side, slot));
                        }
                    });
                }
                None => {
                    ui.horizontal(|ui| {
                        if ui.button("Upload").clicked() {
                            actions.push(FormAction::PickImage(side, slot));
                        }
                        // Desktop stand-in for camera capture: the same
                        // native picker, yielding zero or one blob.
                        if ui.button("Camera").clicked() {
                            actions.push(FormAction::PickImage(side, slot));
                        }
                    });
                }
            }
            ui.add_space(10.0);
        }
    }

    fn show_form_step(&self, ui: &mut egui::Ui, side: Side, actions: &mut Vec<FormAction>) {
        self.show_project_field(ui, actions);
        ui.add_space(12.0);
        self.show_part_form(ui, side, actions);
        ui.separator();

        ui.horizontal(|ui| match side {
            Side::From => {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Next: Destination Info").clicked() {
                        actions.push(FormAction::Next);
                    }
                });
            }
            Side::To => {
                if ui.button("Back").clicked() {
                    actions.push(FormAction::Back);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Generate Label").clicked() {
                        actions.push(FormAction::Generate);
                    }
                });
            }
        });
    }

    fn show_result_step(&self, ui: &mut egui::Ui, actions: &mut Vec<FormAction>) {
        let Some(summary) = self.wizard.summary() else {
            return;
        };

        ui.horizontal(|ui| {
            ui.heading("Generated Label");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copy_label = if self.copied_flash_active() {
                    "Copied!"
                } else {
                    "Copy Text"
                };
                if ui.button(copy_label).clicked() {
                    actions.push(FormAction::CopyText(summary.copy_text.clone()));
                }
                if ui.button("Start Over").clicked() {
                    actions.push(FormAction::Restart);
                }
            });
        });
        ui.add_space(12.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&summary.project_display).strong().size(18.0));
            });
            ui.separator();
            egui::Grid::new("label-card").num_columns(2).show(ui, |ui| {
                ui.label(RichText::new("Fm:").strong());
                ui.label(&summary.from_display);
                ui.end_row();
                ui.label(RichText::new("To:").strong());
                ui.label(&summary.to_display);
                ui.end_row();
            });
        });
    }
}

impl eframe::App for LabelWizardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Let the "Copied!" flash clear itself with the frame loop.
        if let Some(copied_at) = self.copied_at {
            let elapsed = copied_at.elapsed();
            if elapsed >= COPIED_FLASH {
                self.copied_at = None;
            } else {
                ctx.request_repaint_after(COPIED_FLASH - elapsed);
            }
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading(APP_TITLE);
                ui.weak(APP_TAGLINE);
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.wizard.step() {
                Step::From => self.show_form_step(ui, Side::From, &mut actions),
                Step::To => self.show_form_step(ui, Side::To, &mut actions),
                Step::Result => self.show_result_step(ui, &mut actions),
            });
        });

        for action in actions {
            self.apply(action, ctx);
        }
    }
}

fn pick_image_bytes() -> Option<Vec<u8>> {
    let path = rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
        .pick_file()?;

    match fs::read(&path) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => {
            log::warn!("Ignoring empty image file {}", path.display());
            None
        }
        Err(err) => {
            log::warn!("Failed to read {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_action_arms_the_copied_flash() {
        let ctx = egui::Context::default();
        let mut app = LabelWizardApp::with_context(ctx.clone());
        assert!(!app.copied_flash_active());

        app.apply(
            FormAction::CopyText("Project: \nFm: \nTo: ".to_string()),
            &ctx,
        );
        assert!(app.copied_flash_active());
    }

    #[test]
    fn restart_action_clears_the_copied_flash() {
        let ctx = egui::Context::default();
        let mut app = LabelWizardApp::with_context(ctx.clone());

        app.apply(FormAction::Next, &ctx);
        app.apply(FormAction::Generate, &ctx);
        app.apply(FormAction::CopyText(String::new()), &ctx);
        app.apply(FormAction::Restart, &ctx);

        assert!(!app.copied_flash_active());
        assert_eq!(app.wizard.step(), Step::From);
    }
}
