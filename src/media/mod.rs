pub mod descriptor;
pub mod file;
pub mod local_file;
pub mod metadata;
