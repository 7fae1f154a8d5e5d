//! Background executor for the two suspending operations: image upload and
//! description generation.
//!
//! The UI thread sends [`UiCommand`]s; each one runs on its own task and the
//! outcome is delivered back as an [`AppEvent`]. The operation itself runs
//! on an inner task so a panic still produces a failed result.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::generation::DescriptionBackend;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use crate::upload::{upload_path, ImageStore};

const UPLOAD_ABORTED: &str = "The upload failed unexpectedly. Try again.";
const GENERATION_ABORTED: &str = "The generation service failed unexpectedly. Try again.";

pub struct Worker {
    receiver: mpsc::Receiver<UiCommand>,
    store: Arc<dyn ImageStore>,
    backend: Arc<dyn DescriptionBackend>,
}

impl Worker {
    pub fn new(
        receiver: mpsc::Receiver<UiCommand>,
        store: Arc<dyn ImageStore>,
        backend: Arc<dyn DescriptionBackend>,
    ) -> Self {
        Self {
            receiver,
            store,
            backend,
        }
    }

    /// Run until every command sender is dropped.
    pub async fn run(mut self, events: Sender<AppEvent>) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                UiCommand::Upload { path } => {
                    let store = Arc::clone(&self.store);
                    let events = events.clone();
                    tokio::spawn(async move {
                        let task_path = path.clone();
                        let upload = tokio::spawn(async move {
                            upload_path(store.as_ref(), &task_path).await
                        });
                        let result = match upload.await {
                            Ok(Ok(url)) => Ok(url),
                            Ok(Err(err)) => {
                                tracing::warn!(
                                    path = %path.display(),
                                    error = %err,
                                    "Upload failed"
                                );
                                Err(err.user_message().to_string())
                            }
                            Err(err) => {
                                tracing::error!(
                                    path = %path.display(),
                                    error = %err,
                                    "Upload task aborted"
                                );
                                Err(UPLOAD_ABORTED.to_string())
                            }
                        };
                        if events.send(AppEvent::UploadFinished { path, result }).is_err() {
                            tracing::trace!("Upload result dropped (UI gone)");
                        }
                    });
                }
                UiCommand::Generate {
                    request_id,
                    request,
                } => {
                    let backend = Arc::clone(&self.backend);
                    let events = events.clone();
                    let span = tracing::info_span!("generation", %request_id);
                    tokio::spawn(
                        async move {
                            let generation = tokio::spawn(
                                async move { backend.generate(&request).await }.in_current_span(),
                            );
                            let result = match generation.await {
                                Ok(Ok(results)) => Ok(results),
                                Ok(Err(err)) => {
                                    tracing::warn!(error = %err, "Generation failed");
                                    Err(err.user_message())
                                }
                                Err(err) => {
                                    tracing::error!(error = %err, "Generation task aborted");
                                    Err(GENERATION_ABORTED.to_string())
                                }
                            };
                            let event = AppEvent::GenerationFinished { request_id, result };
                            if events.send(event).is_err() {
                                tracing::trace!("Generation result dropped (UI gone)");
                            }
                        }
                        .instrument(span),
                    );
                }
            }
        }
        tracing::debug!("Worker stopped");
    }
}
