use std::collections::HashMap;
use std::sync::Arc;

use codelet_callbacks::TracingCallback;
use codelet_core::{CallbackHandler, ChatModel, CodeletError, RunEvent, RunnableConfig};
use codelet_eval::{Dataset, EvalReport, Evaluator};
use codelet_models::{HttpBackend, ProviderBackend};
use codelet_ollama::OllamaChatModel;
use codelet_prompts::PromptTemplate;
use codelet_runnables::{BoxRunnable, Runnable};
use serde_json::Value;

use crate::chain::build_chain;
use crate::config::GeneratorConfig;
use crate::prompt::python_snippet_prompt;

/// Turns a question into a Python snippet with one model round trip.
///
/// The model is injected, never global: each `Generator` owns its own chain.
pub struct Generator {
    config: GeneratorConfig,
    prompt: PromptTemplate,
    model: Arc<dyn ChatModel>,
    callback: Option<Arc<dyn CallbackHandler>>,
    chain: BoxRunnable<HashMap<String, Value>, String>,
}

impl Generator {
    /// Build a generator around an existing chat model.
    ///
    /// If `config.tracing.enabled`, run events go to a `TracingCallback` for
    /// the configured project.
    pub fn new(config: GeneratorConfig, model: Arc<dyn ChatModel>) -> Self {
        let callback = config.tracing.enabled.then(|| {
            Arc::new(TracingCallback::new(config.tracing.project.clone()))
                as Arc<dyn CallbackHandler>
        });
        let prompt = python_snippet_prompt();
        let chain = build_chain(prompt.clone(), model.clone(), callback.clone());
        Self {
            config,
            prompt,
            model,
            callback,
            chain,
        }
    }

    /// Ollama over HTTP, as described by `config`.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self::with_backend(config, Arc::new(HttpBackend::new()))
    }

    /// Ollama over a caller-supplied backend.
    pub fn with_backend(config: GeneratorConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        let model = Arc::new(OllamaChatModel::new(config.ollama_config(), backend));
        Self::new(config, model)
    }

    /// Replace the callback handler, whatever the tracing settings say.
    pub fn with_callback(mut self, callback: Arc<dyn CallbackHandler>) -> Self {
        self.callback = Some(callback);
        self.chain = build_chain(
            self.prompt.clone(),
            self.model.clone(),
            self.callback.clone(),
        );
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn prompt(&self) -> &PromptTemplate {
        &self.prompt
    }

    /// Answer one question. Model failures are returned unchanged; there is
    /// no retry and the reply text is not post-processed.
    pub async fn generate(&self, question: &str) -> Result<String, CodeletError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let project = self.config.tracing.project.clone();

        self.emit(RunEvent::RunStarted {
            run_id: run_id.clone(),
            project: project.clone(),
        })
        .await?;

        let input = HashMap::from([(
            "question".to_string(),
            Value::String(question.to_string()),
        )]);
        let run_config = RunnableConfig::default()
            .with_run_id(run_id.clone())
            .with_run_name("generate")
            .with_metadata("project", Value::String(project));

        tracing::debug!(run_id = %run_id, question_len = question.len(), "generating snippet");
        let result = self.chain.invoke(input, &run_config).await;

        match &result {
            Ok(output) => {
                self.emit(RunEvent::RunFinished {
                    run_id,
                    output: output.clone(),
                })
                .await?;
            }
            Err(err) => {
                tracing::warn!(run_id = %run_id, error = %err, "generation failed");
                // the model error wins over a callback error
                if let Err(cb_err) = self
                    .emit(RunEvent::RunFailed {
                        run_id,
                        error: err.to_string(),
                    })
                    .await
                {
                    tracing::warn!(error = %cb_err, "failed to report run failure");
                }
            }
        }

        result
    }

    /// Answer several questions one after another.
    pub async fn generate_batch(&self, questions: &[&str]) -> Vec<Result<String, CodeletError>> {
        let mut results = Vec::with_capacity(questions.len());
        for question in questions {
            results.push(self.generate(question).await);
        }
        results
    }

    /// Answer every question of `dataset` and score the answers against their
    /// references. A generation error aborts the whole evaluation.
    pub async fn evaluate(
        &self,
        evaluator: &dyn Evaluator,
        dataset: &Dataset,
    ) -> Result<EvalReport, CodeletError> {
        let mut predictions = Vec::with_capacity(dataset.len());
        for question in dataset.questions() {
            predictions.push(self.generate(question).await?);
        }
        codelet_eval::evaluate(evaluator, dataset, &predictions).await
    }

    async fn emit(&self, event: RunEvent) -> Result<(), CodeletError> {
        match &self.callback {
            Some(callback) => callback.on_event(event).await,
            None => Ok(()),
        }
    }
}
