//! Report layout configuration: table sources and page definitions.

mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    CONFIG_VERSION, DEFAULT_OUTPUT, DEFAULT_SOURCES, PageConfig, PageKind, ReportConfig,
    ReportSettings, SeriesConfig, default_pages, default_sources,
};
pub use validation::validate_config;
