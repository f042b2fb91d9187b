use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{FlickerError, FlickerResult};

/// Environment variable overriding the whole-number frame rate.
pub const ENV_FPS: &str = "FLICKER_FPS";
/// Environment variable overriding the canvas width.
pub const ENV_WIDTH: &str = "FLICKER_WIDTH";
/// Environment variable overriding the canvas height.
pub const ENV_HEIGHT: &str = "FLICKER_HEIGHT";

/// Frame rate, canvas and background used to build a [`crate::Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneSettings {
    pub fps: Fps,
    pub canvas: Canvas,
    pub background: Rgba8,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas {
                width: 300,
                height: 300,
            },
            background: Rgba8::WHITE,
        }
    }
}

impl SceneSettings {
    /// Defaults with `FLICKER_*` overrides from the process environment.
    pub fn from_env() -> FlickerResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults with `FLICKER_*` overrides resolved through `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> FlickerResult<Self> {
        let mut out = Self::default();
        if let Some(fps) = parse_var(&lookup, ENV_FPS)? {
            out.fps = Fps::whole(fps)?;
        }
        let width = parse_var(&lookup, ENV_WIDTH)?.unwrap_or(out.canvas.width);
        let height = parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(out.canvas.height);
        out.canvas = Canvas::new(width, height)?;
        Ok(out)
    }

    pub fn validate(&self) -> FlickerResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        Canvas::new(self.canvas.width, self.canvas.height)?;
        Ok(())
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> FlickerResult<Option<u32>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|e| FlickerError::validation(format!("{key}='{raw}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/driver/settings.rs"]
mod tests;
