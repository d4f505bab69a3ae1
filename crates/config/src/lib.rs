//! Configuration loading and env substitution for devdict.
//!
//! Config files: `devdict.toml`, `devdict.yaml`, or `devdict.json`,
//! searched in `./` then the user config dir (`~/.config/devdict/`).
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, load_config},
    schema::{DevdictConfig, ServerConfig},
};
