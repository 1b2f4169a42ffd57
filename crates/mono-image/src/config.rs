use std::env;
use std::fmt;

use mono_style::Palette;

use crate::error::RenderError;
use crate::mode::RenderMode;

const ENV_IMAGE_MODE: &str = "MONO_IMAGE_MODE";
const ENV_IMAGE_PALETTE: &str = "MONO_IMAGE_PALETTE";
const ENV_IMAGE_WIDTH: &str = "MONO_IMAGE_WIDTH";

/// Image render configuration (deterministic, env-overridable).
///
/// # Environment Variables
/// - `MONO_IMAGE_MODE` = blocks|pixels|dithered|super
/// - `MONO_IMAGE_PALETTE` = monochrome|ansi16|xterm256|truecolor
/// - `MONO_IMAGE_WIDTH` (columns; empty means native width)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub palette: Palette,
    pub width: Option<u32>,
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct RenderConfigParse {
    pub config: RenderConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl RenderConfig {
    #[must_use]
    pub const fn new(mode: RenderMode, palette: Palette) -> Self {
        Self {
            mode,
            palette,
            width: None,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> RenderConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> RenderConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Every rule the mode/palette/width combination breaks, in field order.
    fn violations(&self) -> Vec<RenderError> {
        let mut found = Vec::new();
        if self.width == Some(0) {
            found.push(RenderError::ZeroWidth);
        }
        if self.mode == RenderMode::Dithered && !self.palette.is_quantizing() {
            found.push(RenderError::NeedsQuantizingPalette {
                mode: self.mode,
                palette: self.palette,
            });
        }
        found
    }

    /// Check the mode/palette/width combination before rendering.
    ///
    /// Reports the first violation [`RenderConfig::validate`] would list.
    pub fn check(&self) -> Result<(), RenderError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let errors: Vec<ConfigError> = self
            .violations()
            .into_iter()
            .map(|err| match err {
                RenderError::ZeroWidth => ConfigError::new("width", "0", "width must be positive"),
                RenderError::NeedsQuantizingPalette { palette, .. } => ConfigError::new(
                    "palette",
                    palette.as_str(),
                    "dithered mode requires monochrome|ansi16|xterm256",
                ),
            })
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn from_env_with<F>(mut get: F) -> RenderConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = RenderConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_IMAGE_MODE) {
        match RenderMode::parse(&value) {
            Some(parsed) => config.mode = parsed,
            None => errors.push(ConfigError::new(
                "mode",
                value,
                "expected blocks|pixels|dithered|super",
            )),
        }
    }

    if let Some(value) = get(ENV_IMAGE_PALETTE) {
        match Palette::parse(&value) {
            Some(parsed) => config.palette = parsed,
            None => errors.push(ConfigError::new(
                "palette",
                value,
                "expected monochrome|ansi16|xterm256|truecolor",
            )),
        }
    }

    if let Some(value) = get(ENV_IMAGE_WIDTH) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            config.width = None;
        } else {
            match trimmed.parse::<u32>() {
                Ok(parsed) => config.width = Some(parsed),
                Err(_) => errors.push(ConfigError::new(
                    "width",
                    value,
                    "expected positive integer",
                )),
            }
        }
    }

    if let Err(mut validation) = config.validate() {
        errors.append(&mut validation);
    }

    RenderConfigParse { config, errors }
}
