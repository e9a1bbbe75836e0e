pub mod files;
pub mod history;
pub mod settings;

pub use files::{config_file, ensure_dir, get_data_dir, history_file, init_local_dir, log_file};
pub use history::HistoryStore;
pub use settings::{load_settings, save_settings, Settings};
