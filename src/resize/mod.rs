pub mod resizer;
pub mod settings;
pub mod square;
