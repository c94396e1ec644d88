use eframe::egui;

use super::{
    GREEN, PendingRequest, RED, action_button, field_label, output_area, single_line,
    spawn_request,
};
use crate::config::ValidatorConfig;
use crate::presenter::{Presenter, VALIDATOR_STYLE};
use crate::probe::run_key_validation;
use crate::session::ValidatorSession;

/// API key validator window.
pub struct ValidatorApp {
    config: ValidatorConfig,
    api_key: String,
    session: ValidatorSession,
    presenter: Presenter,
    // Key submitted with the in-flight request, remembered once it validates.
    pending: Option<(String, PendingRequest)>,
}

impl ValidatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ValidatorConfig) -> Self {
        Self {
            config,
            api_key: String::new(),
            session: ValidatorSession::default(),
            presenter: Presenter::new(VALIDATOR_STYLE),
            pending: None,
        }
    }

    pub fn name() -> &'static str {
        "API Key Validator"
    }

    fn perform_validation(&mut self, ctx: &egui::Context) {
        if !self.presenter.begin() {
            return;
        }
        let key = self.api_key.trim().to_string();
        let config = self.config.clone();
        let job_key = key.clone();
        let pending = spawn_request(ctx, move || async move {
            run_key_validation(&job_key, &config).await
        });
        self.pending = Some((key, pending));
    }

    /// Dropping the pending receiver discards a result that is still on its way.
    fn clear_fields(&mut self) {
        self.api_key.clear();
        self.pending = None;
        self.presenter.clear();
        self.session.clear();
    }
}

impl eframe::App for ValidatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some((key, outcome)) = self
            .pending
            .as_ref()
            .and_then(|(key, pending)| pending.poll().map(|outcome| (key.clone(), outcome)))
        {
            self.pending = None;
            self.session.record(&key, outcome.is_success());
            self.presenter.finish(&outcome);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            field_label(ui, "Enter API Key:");
            single_line(ui, self.presenter.trigger_enabled(), &mut self.api_key);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if action_button(ui, self.presenter.trigger_enabled(), "Validate Key", GREEN) {
                    self.perform_validation(ui.ctx());
                }
                if action_button(ui, self.presenter.clear_enabled(), "Clear", RED) {
                    self.clear_fields();
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.strong("Validation Status:");
                if self.pending.is_some() {
                    ui.spinner();
                }
            });
            output_area(ui, "validator_status", self.presenter.output());
        });
    }
}
