pub mod fs_utils;
pub mod staging;
