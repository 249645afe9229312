mod model;
mod resolver;

pub use model::{Config, ConfigLayer, DirectoryStrategy, Target};
pub use resolver::{default_config_path, resolve, validate};
