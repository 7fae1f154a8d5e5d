//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use descgen::config::Config;
use descgen::generation::{
    DescriptionBackend, GenerationError, GenerationRequest, LanguageDescription,
};
use descgen::ui::app::{App, UiCommand};
use descgen::upload::{ImageFile, ImageStore, UploadError};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// First bytes of a PNG file; enough for format detection.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

/// App wired to a command channel the test can inspect.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    make_app_with(&Config::default())
}

pub fn make_app_with(config: &Config) -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    (app, rx)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a small PNG into `dir`.
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, PNG_BYTES).expect("Failed to write image");
    path
}

/// Image store that answers with a fixed URL and records file names.
pub struct FakeStore {
    pub url: Result<String, String>,
    pub uploaded: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn ok(url: &str) -> Self {
        Self {
            url: Ok(url.to_string()),
            uploaded: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            url: Err(message.to_string()),
            uploaded: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImageStore for FakeStore {
    async fn upload(&self, file: ImageFile) -> Result<String, UploadError> {
        self.uploaded.lock().unwrap().push(file.file_name);
        self.url.clone().map_err(UploadError::InvalidResponse)
    }
}

/// Generation backend that echoes one description per requested language.
pub struct EchoBackend {
    pub requests: Mutex<Vec<GenerationRequest>>,
    pub fail: bool,
}

impl EchoBackend {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl DescriptionBackend for EchoBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<LanguageDescription>, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(request
            .languages
            .iter()
            .map(|code| LanguageDescription::new(code.clone(), format!("Text in {}", code)))
            .collect())
    }
}
