use eframe::egui;
use egui_extras::{Size, StripBuilder};

use super::{
    GREEN, PendingRequest, RED, action_button, field_label, output_area, single_line,
    spawn_request,
};
use crate::config::TesterConfig;
use crate::form::TesterForm;
use crate::presenter::{Presenter, TESTER_STYLE};
use crate::probe::run_api_request;

/// Generic API tester window.
pub struct TesterApp {
    config: TesterConfig,
    form: TesterForm,
    presenter: Presenter,
    pending: Option<PendingRequest>,
}

impl TesterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: TesterConfig) -> Self {
        Self {
            form: TesterForm::with_key_param(config.default_key_param.clone()),
            config,
            presenter: Presenter::new(TESTER_STYLE),
            pending: None,
        }
    }

    pub fn name() -> &'static str {
        "Generic API Tester"
    }

    fn send_request(&mut self, ctx: &egui::Context) {
        if !self.presenter.begin() {
            return;
        }
        let request = self.form.to_request();
        let timeout = self.config.timeout;
        self.pending = Some(spawn_request(ctx, move || async move {
            run_api_request(&request, timeout).await
        }));
    }

    fn clear_fields(&mut self) {
        self.form.clear();
        self.presenter.clear();
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let editable = self.presenter.trigger_enabled();

        field_label(ui, "API Endpoint URL (e.g., https://api.chucknorris.io/jokes/random):");
        single_line(ui, editable, &mut self.form.api_url);

        field_label(ui, "API Key (optional, leave blank if not needed):");
        single_line(ui, editable, &mut self.form.api_key);

        field_label(
            ui,
            "Key Parameter Name (e.g., appid, key, token - if key is in URL query):",
        );
        single_line(ui, editable, &mut self.form.key_param);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if action_button(ui, self.presenter.trigger_enabled(), "Make API Request", GREEN) {
                self.send_request(ui.ctx());
            }
            if action_button(ui, self.presenter.clear_enabled(), "Clear All", RED) {
                self.clear_fields();
            }
        });
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.presenter.alert() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("api_request_error")).show(ctx, |ui| {
            ui.heading("API Request Error");
            ui.add_space(6.0);
            ui.label(message);
            ui.add_space(10.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            self.presenter.dismiss_alert();
        }
    }
}

impl eframe::App for TesterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.pending.as_ref().and_then(PendingRequest::poll) {
            self.pending = None;
            self.presenter.finish(&outcome);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(230.0))
                .size(Size::exact(24.0))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| self.render_form(ui));
                    strip.cell(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong("API Response / Error Details:");
                            if self.pending.is_some() {
                                ui.spinner();
                            }
                        });
                    });
                    strip.cell(|ui| output_area(ui, "tester_output", self.presenter.output()));
                });
        });

        self.render_alert(ctx);
    }
}
