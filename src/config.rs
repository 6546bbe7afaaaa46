use clap::Parser;
use std::str::FromStr;

/// Command-line arguments for rescaling a COCO-style dataset to a fixed
/// target resolution.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the source annotation JSON files
    #[arg(long = "load_json_path")]
    pub load_json_path: String,

    /// Directory the rescaled annotation JSON files are written to
    #[arg(long = "save_json_path")]
    pub save_json_path: String,

    /// Directory containing the source images (used with --resize_images)
    #[arg(long = "load_image_path")]
    pub load_image_path: Option<String>,

    /// Directory the rescaled images are written to (used with --resize_images)
    #[arg(long = "save_image_path")]
    pub save_image_path: Option<String>,

    /// Edge length images and annotation geometry are rescaled to
    #[arg(long = "target_size", default_value_t = 2048, value_parser = validate_size)]
    pub target_size: u32,

    /// Edge length the source geometry is assumed to have
    #[arg(long = "source_size", default_value_t = 2024, value_parser = validate_size)]
    pub source_size: u32,

    /// Also decode, resize and re-encode the images themselves
    #[arg(long = "resize_images")]
    pub resize_images: bool,

    /// Suffix of the image files picked up by --resize_images
    #[arg(long = "image_suffix", default_value = ".jpg")]
    pub image_suffix: String,

    /// Remove the destination directories before writing
    #[arg(long = "clear_output")]
    pub clear_output: bool,
}

// Validate that a size is a positive pixel count
fn validate_size(s: &str) -> Result<u32, String> {
    match u32::from_str(s) {
        Ok(val) if val > 0 => Ok(val),
        _ => Err("SIZE must be a positive integer".to_string()),
    }
}

/// Named geometry constants for one rescale run.
#[derive(Debug, Clone, Copy)]
pub struct RescaleConfig {
    pub target_size: u32,
    pub source_size: u32,
}

impl RescaleConfig {
    pub fn new(target_size: u32, source_size: u32) -> Self {
        Self {
            target_size,
            source_size,
        }
    }

    /// Multiplicative factor mapping source geometry onto the target grid.
    pub fn rate(&self) -> f64 {
        self.target_size as f64 / self.source_size as f64
    }
}

impl From<&Args> for RescaleConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.target_size, args.source_size)
    }
}
