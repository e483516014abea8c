//! Configuration support for dropscope.
//!
//! The page can override element ids, CSS classes, the bridge function
//! names and the log level by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="dropscope-config">
//!   { "version": 1, "logLevel": "debug", "ids": { "gallery": "results" } }
//! </script>
//! ```
//!
//! Every field is optional and defaults to the values of the stock page.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Log level setting for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's Level (the console logger takes a Level).
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
pub const CONFIG_VERSION: u32 = 1;

/// Ids of the page elements the front end binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomIds {
    pub drop_area: String,
    pub file_input: String,
    pub file_select: String,
    pub gallery: String,
    pub legend_list: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            drop_area: constants::DROP_AREA_ID.to_string(),
            file_input: constants::FILE_INPUT_ID.to_string(),
            file_select: constants::FILE_SELECT_ID.to_string(),
            gallery: constants::GALLERY_ID.to_string(),
            legend_list: constants::LEGEND_LIST_ID.to_string(),
        }
    }
}

/// CSS classes applied to generated elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Styles {
    /// Added to the drop target while a drag is over it
    pub highlight: String,
    /// Wrapper around an image and its caption
    pub image_container: String,
    /// The `<img>` element
    pub image: String,
    /// The caption under the image
    pub image_label: String,
    /// The per-file error block
    pub error: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            highlight: constants::HIGHLIGHT_CLASS.to_string(),
            image_container: constants::IMAGE_CONTAINER_CLASS.to_string(),
            image: constants::IMAGE_CLASS.to_string(),
            image_label: constants::IMAGE_LABEL_CLASS.to_string(),
            error: constants::ERROR_CLASS.to_string(),
        }
    }
}

/// Where the backend functions live on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Global object holding the exposed functions
    pub namespace: String,
    /// Function taking a base64 image and returning the processing result
    pub process_image: String,
    /// Function returning the class-name list
    pub class_names: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            namespace: constants::BRIDGE_NAMESPACE.to_string(),
            process_image: constants::PROCESS_IMAGE_FN.to_string(),
            class_names: constants::CLASS_NAMES_FN.to_string(),
        }
    }
}

/// Front end configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontendConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Page element ids
    pub ids: DomIds,

    /// Generated element classes
    pub styles: Styles,

    /// Backend function locations
    pub bridge: BridgeConfig,

    /// MIME type used to display processed images
    pub processed_mime: String,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ids: DomIds::default(),
            styles: Styles::default(),
            bridge: BridgeConfig::default(),
            processed_mime: constants::PROCESSED_MIME.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl FrontendConfig {
    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = FrontendConfig::default();

        assert_eq!(config.ids.drop_area, "dropArea");
        assert_eq!(config.ids.file_input, "fileElem");
        assert_eq!(config.ids.legend_list, "legendList");
        assert_eq!(config.styles.highlight, "bg-gray-200");
        assert_eq!(config.bridge.namespace, "eel");
        assert_eq!(config.processed_mime, "image/png");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "logLevel": "debug", "ids": { "gallery": "results" } }"#;
        let config = FrontendConfig::from_json(json).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ids.gallery, "results");
        assert_eq!(config.ids.drop_area, "dropArea");
        assert_eq!(config.bridge, BridgeConfig::default());
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "version": 1,
            "bridge": { "namespace": "api", "processImage": "detect", "classNames": "labels" },
            "styles": { "highlight": "ring ring-blue-400" },
            "processedMime": "image/jpeg",
            "logLevel": "trace"
        }"#;
        let config = FrontendConfig::from_json(json).unwrap();

        assert_eq!(config.bridge.namespace, "api");
        assert_eq!(config.bridge.process_image, "detect");
        assert_eq!(config.bridge.class_names, "labels");
        assert_eq!(config.styles.highlight, "ring ring-blue-400");
        assert_eq!(config.styles.error, Styles::default().error);
        assert_eq!(config.processed_mime, "image/jpeg");
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = FrontendConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = FrontendConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }
}
