// ABOUTME: Validated domain types shared across modules.
// ABOUTME: Currently the opaque image identifier.

mod image_name;

pub use image_name::{ImageName, ImageNameError};
