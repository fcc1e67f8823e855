mod wizard;

pub use wizard::{prompt_choice, prompt_export_path};
