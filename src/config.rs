// Command-line options. Defaults reproduce the classic 800x800 "Vector Draw" window.

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::Error;
use crate::scene::ERASE_RADIUS;

/// Largest accepted eraser reach: the whole canvas is 2 units across.
pub const MAX_ERASE_RADIUS: f32 = 2.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "vector-draw", version, about = "Freehand vector sketchpad with an eraser")]
pub struct Args {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: usize,

    #[arg(long, default_value = "Vector Draw")]
    pub title: String,

    /// Eraser reach in normalized device units (the canvas spans 2 units)
    #[arg(long, default_value_t = ERASE_RADIUS)]
    pub erase_radius: f32,

    /// Frame rate cap
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<tracing::Level>,
}

impl Args {
    /// Parse and validate `argv`. `Ok(None)` means help or version text was
    /// printed and the program should exit successfully.
    pub fn load<I, T>(argv: I) -> Result<Option<Self>, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(argv) {
            Ok(args) => {
                args.validate()?;
                Ok(Some(args))
            }
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                // Failing to write help to stdout leaves nothing else to report.
                let _ = e.print();
                Ok(None)
            }
            Err(e) => Err(Error::InvalidConfig(e.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.erase_radius > 0.0 && self.erase_radius <= MAX_ERASE_RADIUS) {
            return Err(Error::InvalidConfig(format!(
                "erase radius must be in (0, {MAX_ERASE_RADIUS}], got {}",
                self.erase_radius
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be at least 1".into()));
        }
        Ok(())
    }
}
