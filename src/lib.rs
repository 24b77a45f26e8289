pub mod services;
pub mod types;

/// File extension shared by every image in the dataset. Identifiers in the
/// label table map onto `<id>.png` files in the flat source directory.
pub const IMAGE_EXTENSION: &str = "png";
