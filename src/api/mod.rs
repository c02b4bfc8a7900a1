mod codec_config;
mod configuration;
mod json_contract;
mod layout;

pub use codec_config::CodecConfig;
pub use configuration::ChartConfiguration;
pub use json_contract::{CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigurationJsonContractV1};
pub use layout::{ElementKind, Layout, PresenceFlags};
