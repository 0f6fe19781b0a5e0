pub mod adapter;
pub mod image_rs_adapter;
