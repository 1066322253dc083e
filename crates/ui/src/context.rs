use std::sync::Arc;

use quiz_core::model::{QuestionBank, QuizConfig};

/// What the binary hands the UI: the fixed question bank and the session
/// configuration. Both are immutable for the app's lifetime.
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn quiz_config(&self) -> QuizConfig;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            config: app.quiz_config(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn quiz_config(&self) -> QuizConfig {
        self.config
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from the binary's app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
