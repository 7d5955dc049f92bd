//! Plugin build requests
//!
//! A [`PluginRequest`] is what a user fills in; a [`BuildRequest`] is what
//! goes over the wire to the builder service.

use serde::{Deserialize, Serialize};

/// Content type sent with every build request
pub const TEXT_PLAIN: &str = "text/plain";

/// Kind of plugin a user can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Settings applied before the first settings window opens
    CustomDefaultSettings,
    /// Map a controller button to a touch screen position
    ButtonToTouch,
    /// Fixed window size
    WindowSize,
    /// Fixed window position
    WindowPosition,
    /// Log to a file
    LogFile,
}

impl RequestKind {
    /// All kinds, in menu order
    pub const ALL: [Self; 5] = [
        Self::CustomDefaultSettings,
        Self::ButtonToTouch,
        Self::WindowSize,
        Self::WindowPosition,
        Self::LogFile,
    ];

    /// Builder service endpoint path
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::CustomDefaultSettings => "custom-default-settings",
            Self::ButtonToTouch => "button-to-touch",
            Self::WindowSize => "window-size",
            Self::WindowPosition => "window-position",
            Self::LogFile => "log-file",
        }
    }

    /// Form fields shown for this kind
    #[must_use]
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::CustomDefaultSettings => &["custom_default_settings_lines"],
            Self::ButtonToTouch => &["button_to_touch_x", "button_to_touch_y", "button_to_touch_params"],
            Self::WindowSize => &["window_size_width", "window_size_height"],
            Self::WindowPosition => &["window_position_x", "window_position_y"],
            Self::LogFile => &["log_file_file_path"],
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// A user's plugin request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PluginRequest {
    /// Custom default settings, one directive per line
    CustomDefaultSettings {
        /// Editable text; normalized in place on submission
        lines: String,
    },
    /// Button to touch mapping
    ButtonToTouch {
        /// Touch X coordinate
        x: u16,
        /// Touch Y coordinate
        y: u16,
        /// Serialized input device parameters
        params: String,
    },
    /// Window size
    WindowSize {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Window position
    WindowPosition {
        /// X in pixels
        x: i32,
        /// Y in pixels
        y: i32,
    },
    /// Log file
    LogFile {
        /// Path of the log file
        path: String,
    },
}

impl PluginRequest {
    /// Kind of this request
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::CustomDefaultSettings { .. } => RequestKind::CustomDefaultSettings,
            Self::ButtonToTouch { .. } => RequestKind::ButtonToTouch,
            Self::WindowSize { .. } => RequestKind::WindowSize,
            Self::WindowPosition { .. } => RequestKind::WindowPosition,
            Self::LogFile { .. } => RequestKind::LogFile,
        }
    }

    /// Request body as sent to the builder
    ///
    /// Settings and log file requests are sent as-is; the others are JSON.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::CustomDefaultSettings { lines } => lines.clone(),
            Self::ButtonToTouch { x, y, params } => {
                serde_json::json!({ "x": x, "y": y, "params": params }).to_string()
            },
            Self::WindowSize { width, height } => {
                serde_json::json!({ "width": width, "height": height }).to_string()
            },
            Self::WindowPosition { x, y } => serde_json::json!({ "x": x, "y": y }).to_string(),
            Self::LogFile { path } => path.clone(),
        }
    }
}

/// An outbound request to the builder service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    /// Endpoint path, relative to the builder base URL
    pub endpoint: &'static str,
    /// Value of the `Content-Type` header
    pub content_type: &'static str,
    /// Request body
    pub body: String,
}

impl From<&PluginRequest> for BuildRequest {
    fn from(request: &PluginRequest) -> Self {
        Self {
            endpoint: request.kind().endpoint(),
            content_type: TEXT_PLAIN,
            body: request.body(),
        }
    }
}
