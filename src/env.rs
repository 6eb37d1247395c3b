//! The process-wide render environment.
//!
//! A [`RenderEnv`] bundles configuration, the check-in instruction text and
//! the barcode/document collaborators. It is built once, before the first
//! render, and never mutated afterwards. Resource loading happens here, so a
//! missing instruction file fails environment construction instead of an
//! individual render.

use crate::config::RenderConfig;
use crate::error::BoardingPassError;
use boardpass_barcode::{BarcodeEncoder, RxingEncoder};
use boardpass_render_lopdf::{DocumentRenderer, LopdfRenderer};
use boardpass_resource::{FilesystemResourceProvider, ResourceProvider};
use std::path::Path;
use std::sync::{Arc, OnceLock};

const BUNDLED_INSTRUCTIONS: &str =
    include_str!("../resources/electronic-boarding-pass-instructions.txt");

static SHARED: OnceLock<Arc<RenderEnv>> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct RenderEnv {
    config: RenderConfig,
    instructions: String,
    encoder: Arc<dyn BarcodeEncoder>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl RenderEnv {
    pub fn builder() -> RenderEnvBuilder {
        RenderEnvBuilder::default()
    }

    /// Default configuration with the instruction text compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            config: RenderConfig::default(),
            instructions: BUNDLED_INSTRUCTIONS.trim_end().to_string(),
            encoder: Arc::new(RxingEncoder),
            renderer: Arc::new(LopdfRenderer),
        }
    }

    /// Installs `env` as the process-wide environment.
    ///
    /// Only the first call has any effect; the environment is read-only once
    /// installed. Returns `false` if one was already in place.
    pub fn install(env: RenderEnv) -> bool {
        let installed = SHARED.set(Arc::new(env)).is_ok();
        if installed {
            log::info!("Render environment installed");
        } else {
            log::warn!("Render environment already installed; keeping the existing one");
        }
        installed
    }

    /// The installed environment, or the bundled one if nothing was installed.
    pub fn shared() -> Arc<RenderEnv> {
        SHARED.get_or_init(|| Arc::new(RenderEnv::bundled())).clone()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn encoder(&self) -> &dyn BarcodeEncoder {
        self.encoder.as_ref()
    }

    pub fn renderer(&self) -> &dyn DocumentRenderer {
        self.renderer.as_ref()
    }
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Builds a [`RenderEnv`]. Fails if the instruction text cannot be loaded.
#[derive(Debug)]
pub struct RenderEnvBuilder {
    config: RenderConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
    instructions: Option<String>,
    encoder: Arc<dyn BarcodeEncoder>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl Default for RenderEnvBuilder {
    fn default() -> Self {
        Self {
            config: RenderConfig::default(),
            resources: None,
            instructions: None,
            encoder: Arc::new(RxingEncoder),
            renderer: Arc::new(LopdfRenderer),
        }
    }
}

impl RenderEnvBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the instruction text from `provider` at build time.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Shorthand for a filesystem provider rooted at `dir`.
    pub fn with_resource_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_resource_provider(Arc::new(FilesystemResourceProvider::new(dir)))
    }

    /// Uses `text` directly; takes precedence over any resource provider.
    pub fn with_instructions(mut self, text: impl Into<String>) -> Self {
        self.instructions = Some(text.into());
        self
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn BarcodeEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn DocumentRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn build(self) -> Result<RenderEnv, BoardingPassError> {
        self.config.validate()?;
        let instructions = match (self.instructions, &self.resources) {
            (Some(text), _) => text,
            (None, Some(provider)) => {
                log::info!(
                    "Loading '{}' via {}",
                    self.config.instructions_resource,
                    provider.name()
                );
                provider.load_text(&self.config.instructions_resource)?
            }
            (None, None) => BUNDLED_INSTRUCTIONS.trim_end().to_string(),
        };

        Ok(RenderEnv {
            config: self.config,
            instructions,
            encoder: self.encoder,
            renderer: self.renderer,
        })
    }
}
