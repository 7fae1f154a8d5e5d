use std::path::PathBuf;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::catalog::{LengthChoice, ModelChoice, LANGUAGES};
use crate::config::Config;
use crate::generation::{check_eligibility, GenerationRequest, LanguageDescription};
use crate::ui::generation::{GenerationIntent, GenerationReducer, GenerationState};
use crate::ui::mvi::Reducer;
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use crate::ui::upload::{UploadIntent, UploadReducer, UploadState};

/// Form rows, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Image,
    Model,
    Languages,
    Length,
    Generate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Image,
        Field::Model,
        Field::Languages,
        Field::Length,
        Field::Generate,
    ];
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing the path of an image to upload.
    ImagePath { buffer: String },
}

/// Work handed to the background worker.
#[derive(Debug)]
pub enum UiCommand {
    Upload {
        path: PathBuf,
    },
    Generate {
        request_id: Uuid,
        request: GenerationRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Field,
    input_mode: InputMode,
    model_cursor: usize,
    language_cursor: usize,
    length_cursor: usize,
    sample_image_url: String,
    /// User choices (MVI pattern).
    selection: SelectionState,
    /// Generation lifecycle (MVI pattern).
    generation: GenerationState,
    /// Upload progress (MVI pattern).
    upload: UploadState,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let model = config.defaults.model;
        let length = config.defaults.length;
        Self {
            should_quit: false,
            focus: Field::Image,
            input_mode: InputMode::Normal,
            model_cursor: ModelChoice::ALL.iter().position(|m| *m == model).unwrap_or(0),
            language_cursor: 0,
            length_cursor: LengthChoice::ALL.iter().position(|l| *l == length).unwrap_or(0),
            sample_image_url: config.storage.sample_image_url.clone(),
            selection: SelectionState::new(model, length),
            generation: GenerationState::default(),
            upload: UploadState::default(),
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Cursor position inside a choice row.
    pub fn cursor(&self, field: Field) -> usize {
        match field {
            Field::Model => self.model_cursor,
            Field::Languages => self.language_cursor,
            Field::Length => self.length_cursor,
            Field::Image | Field::Generate => 0,
        }
    }

    /// Selection controls are frozen while a request is in flight.
    pub fn controls_locked(&self) -> bool {
        self.generation.is_loading()
    }

    fn image_locked(&self) -> bool {
        self.controls_locked() || self.upload.is_uploading()
    }

    pub fn can_submit(&self) -> bool {
        check_eligibility(&self.selection, &self.generation).is_ok()
    }

    pub fn on_tick(&mut self) {
        if self.generation.is_loading() {
            self.dispatch_generation(GenerationIntent::AnimationTick);
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn move_focus(&mut self, direction: i32) {
        let len = Field::ALL.len();
        let current = Field::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = wrap_index(current, len, direction);
        self.focus = Field::ALL[next];
    }

    pub fn move_cursor(&mut self, direction: i32) {
        match self.focus {
            Field::Model => {
                self.model_cursor = wrap_index(self.model_cursor, ModelChoice::ALL.len(), direction)
            }
            Field::Languages => {
                self.language_cursor = wrap_index(self.language_cursor, LANGUAGES.len(), direction)
            }
            Field::Length => {
                self.length_cursor =
                    wrap_index(self.length_cursor, LengthChoice::ALL.len(), direction)
            }
            Field::Image | Field::Generate => {}
        }
    }

    /// Enter/Space on the focused row.
    pub fn activate(&mut self) {
        match self.focus {
            Field::Image => {
                if self.upload.retry_path().is_some() {
                    self.retry_upload();
                } else {
                    self.begin_image_path();
                }
            }
            Field::Model => {
                self.set_model(ModelChoice::ALL[self.model_cursor]);
            }
            Field::Languages => {
                self.toggle_language(LANGUAGES[self.language_cursor].code);
            }
            Field::Length => {
                self.set_length(LengthChoice::ALL[self.length_cursor]);
            }
            Field::Generate => {
                self.submit();
            }
        }
    }

    // ========================================================================
    // Selection (MVI pattern)
    // ========================================================================

    fn dispatch_selection(&mut self, intent: SelectionIntent) {
        dispatch_mvi!(self, selection, SelectionReducer, intent);
    }

    /// Returns false when the toggle was refused (locked or cap reached).
    pub fn toggle_language(&mut self, code: &str) -> bool {
        if self.controls_locked() || !self.selection.can_toggle(code) {
            return false;
        }
        self.dispatch_selection(SelectionIntent::ToggleLanguage {
            code: code.to_string(),
        });
        true
    }

    pub fn set_model(&mut self, model: ModelChoice) -> bool {
        if self.controls_locked() {
            return false;
        }
        self.dispatch_selection(SelectionIntent::SetModel(model));
        true
    }

    pub fn set_length(&mut self, length: LengthChoice) -> bool {
        if self.controls_locked() {
            return false;
        }
        self.dispatch_selection(SelectionIntent::SetLength(length));
        true
    }

    pub fn clear_image(&mut self) -> bool {
        if self.image_locked() || self.selection.image().is_none() {
            return false;
        }
        self.dispatch_selection(SelectionIntent::SetImage { url: None });
        true
    }

    /// "Use a sample image" shortcut; only offered while no image is set.
    pub fn use_sample_image(&mut self) -> bool {
        if self.image_locked() || self.selection.image().is_some() {
            return false;
        }
        self.dispatch_upload(UploadIntent::Dismiss);
        self.dispatch_selection(SelectionIntent::SetImage {
            url: Some(self.sample_image_url.clone()),
        });
        true
    }

    // ========================================================================
    // Upload (MVI pattern)
    // ========================================================================

    fn dispatch_upload(&mut self, intent: UploadIntent) {
        dispatch_mvi!(self, upload, UploadReducer, intent);
    }

    pub fn begin_image_path(&mut self) {
        if self.image_locked() || self.selection.image().is_some() {
            return;
        }
        self.input_mode = InputMode::ImagePath {
            buffer: String::new(),
        };
    }

    pub fn push_path_char(&mut self, ch: char) {
        if let InputMode::ImagePath { buffer } = &mut self.input_mode {
            buffer.push(ch);
        }
    }

    pub fn pop_path_char(&mut self) {
        if let InputMode::ImagePath { buffer } = &mut self.input_mode {
            buffer.pop();
        }
    }

    pub fn cancel_image_path(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn confirm_image_path(&mut self) -> bool {
        let InputMode::ImagePath { buffer } =
            std::mem::replace(&mut self.input_mode, InputMode::Normal)
        else {
            return false;
        };
        let trimmed = buffer.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.start_upload(PathBuf::from(trimmed))
    }

    /// Upload `path`; only allowed while no image is set.
    pub fn start_upload(&mut self, path: PathBuf) -> bool {
        if self.image_locked() || self.selection.image().is_some() {
            return false;
        }
        self.dispatch_upload(UploadIntent::Start { path: path.clone() });
        if !self.send_command(UiCommand::Upload { path: path.clone() }) {
            let message = self
                .last_command_error
                .clone()
                .unwrap_or_else(|| "Upload unavailable".to_string());
            self.dispatch_upload(UploadIntent::Failed { path, message });
        }
        true
    }

    pub fn retry_upload(&mut self) -> bool {
        let Some(path) = self.upload.retry_path().map(|p| p.to_path_buf()) else {
            return false;
        };
        self.start_upload(path)
    }

    pub fn on_upload_finished(&mut self, path: PathBuf, result: Result<String, String>) {
        if !matches!(&self.upload, UploadState::Uploading { path: current } if *current == path) {
            tracing::debug!(path = %path.display(), "Ignoring stale upload result");
            return;
        }
        match result {
            Ok(url) => {
                self.dispatch_upload(UploadIntent::Finished { path });
                self.dispatch_selection(SelectionIntent::SetImage { url: Some(url) });
            }
            Err(message) => {
                self.dispatch_upload(UploadIntent::Failed { path, message });
            }
        }
    }

    // ========================================================================
    // Generation (MVI pattern)
    // ========================================================================

    fn dispatch_generation(&mut self, intent: GenerationIntent) {
        dispatch_mvi!(self, generation, GenerationReducer, intent);
    }

    /// Submit a generation request. No-op unless eligible.
    pub fn submit(&mut self) -> bool {
        let request = match GenerationRequest::build(&self.selection, &self.generation) {
            Ok(request) => request,
            Err(reason) => {
                tracing::debug!(?reason, "Submit ignored");
                return false;
            }
        };

        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            languages = ?request.languages,
            model = request.model.id(),
            length = request.length.as_str(),
            "Submitting generation request"
        );
        self.dispatch_generation(GenerationIntent::Submit {
            request_id,
            languages: request.languages.clone(),
            length: request.length,
        });

        if !self.send_command(UiCommand::Generate {
            request_id,
            request,
        }) {
            let message = self
                .last_command_error
                .clone()
                .unwrap_or_else(|| "Generation unavailable".to_string());
            self.dispatch_generation(GenerationIntent::Failed {
                request_id,
                message,
            });
        }
        true
    }

    pub fn on_generation_finished(
        &mut self,
        request_id: Uuid,
        result: Result<Vec<LanguageDescription>, String>,
    ) {
        let intent = match result {
            Ok(results) => GenerationIntent::Completed {
                request_id,
                results,
            },
            Err(message) => GenerationIntent::Failed {
                request_id,
                message,
            },
        };
        self.dispatch_generation(intent);
    }

    /// Acknowledge failures: returns generation to idle and clears an upload error.
    pub fn dismiss_failure(&mut self) {
        self.dispatch_generation(GenerationIntent::Dismiss);
        self.dispatch_upload(UploadIntent::Dismiss);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("Background worker not running".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to queue command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}

fn wrap_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
