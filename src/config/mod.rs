mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config};
pub use model::{
    Config, DEFAULT_METHOD_PATTERN, DEFAULT_MIRROR_EXEMPT, ExpectationsConfig, MirrorConfig,
    ModelsConfig, NamingConfig, ParserConfig, RuleConfig, ScannerConfig,
};
pub use validation::validate_config;
