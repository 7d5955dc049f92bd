//! Supported custom default settings
//!
//! One entry per setter the plugin API exposes, grouped as in the emulator's
//! default ini file.

use crate::core::models::ValueSyntax;

/// A supported setting: directive key, value syntax and setter parameter type
#[derive(Debug, Clone, Copy)]
pub struct SettingSpec {
    /// Directive key, also the setter suffix
    pub key: &'static str,
    /// Accepted value syntax
    pub syntax: ValueSyntax,
    /// C type of the setter parameter
    pub c_type: &'static str,
}

/// Prefix of every setter function name
pub const SETTER_PREFIX: &str = "vvctre_settings_set_";

const fn setting(key: &'static str, syntax: ValueSyntax, c_type: &'static str) -> SettingSpec {
    SettingSpec {
        key,
        syntax,
        c_type,
    }
}

const fn flag(key: &'static str) -> SettingSpec {
    setting(key, ValueSyntax::Bool, "bool")
}

const fn text(key: &'static str) -> SettingSpec {
    setting(key, ValueSyntax::Text, "const char*")
}

const fn int(key: &'static str, min: i64, max: i64, c_type: &'static str) -> SettingSpec {
    setting(key, ValueSyntax::Integer { min, max }, c_type)
}

const fn float(key: &'static str, min: f64, max: f64) -> SettingSpec {
    setting(key, ValueSyntax::Float { min, max }, "float")
}

const AUDIO_ENGINES: &[&str] = &["auto", "null", "sdl2"];

/// The settings catalog, in rule priority order
pub const SETTINGS: &[SettingSpec] = &[
    // Controls
    text("button_a"),
    text("button_b"),
    text("button_x"),
    text("button_y"),
    text("button_up"),
    text("button_down"),
    text("button_left"),
    text("button_right"),
    text("button_l"),
    text("button_r"),
    text("button_start"),
    text("button_select"),
    text("button_debug"),
    text("button_gpio14"),
    text("button_zl"),
    text("button_zr"),
    text("button_home"),
    text("circle_pad"),
    text("c_stick"),
    text("motion_device"),
    text("touch_device"),
    setting("udp_input_address", ValueSyntax::Ipv4, "const char*"),
    int("udp_input_port", 1, 65535, "uint16_t"),
    int("udp_pad_index", 0, 3, "uint8_t"),
    // Core
    flag("use_cpu_jit"),
    int("cpu_clock_percentage", 5, 400, "int"),
    flag("use_custom_cpu_ticks"),
    int("custom_cpu_ticks", 1, 65535, "uint64_t"),
    text("multiplayer_url"),
    // Data storage
    flag("use_virtual_sd"),
    // System
    flag("is_new_3ds"),
    int("region_value", -1, 6, "int"),
    int("init_clock", 0, 1, "int"),
    setting("init_time", ValueSyntax::Timestamp, "uint64_t"),
    // Renderer
    flag("use_hw_renderer"),
    flag("use_hw_shader"),
    flag("use_disk_shader_cache"),
    flag("shaders_accurate_mul"),
    flag("use_shader_jit"),
    int("resolution_factor", 0, 10, "uint16_t"),
    flag("use_frame_limit"),
    int("frame_limit", 1, 9999, "uint16_t"),
    float("bg_red", 0.0, 1.0),
    float("bg_green", 0.0, 1.0),
    float("bg_blue", 0.0, 1.0),
    int("render_3d", 0, 2, "int"),
    int("factor_3d", 0, 100, "uint8_t"),
    flag("filter_mode"),
    text("pp_shader_name"),
    flag("use_vsync_new"),
    flag("sharper_distant_objects"),
    flag("ignore_format_reinterpretation"),
    flag("use_custom_screen_refresh_rate"),
    float("custom_screen_refresh_rate", 1.0, 1000.0),
    int("min_vertices_per_thread", 1, 65535, "int"),
    // Layout
    int("layout_option", 0, 4, "int"),
    flag("custom_layout"),
    int("custom_top_left", 0, 65535, "uint16_t"),
    int("custom_top_top", 0, 65535, "uint16_t"),
    int("custom_top_right", 0, 65535, "uint16_t"),
    int("custom_top_bottom", 0, 65535, "uint16_t"),
    int("custom_bottom_left", 0, 65535, "uint16_t"),
    int("custom_bottom_top", 0, 65535, "uint16_t"),
    int("custom_bottom_right", 0, 65535, "uint16_t"),
    int("custom_bottom_bottom", 0, 65535, "uint16_t"),
    flag("swap_screen"),
    flag("upright_screen"),
    // Utility
    flag("dump_textures"),
    flag("custom_textures"),
    flag("preload_textures"),
    // Audio
    flag("enable_dsp_lle"),
    flag("enable_dsp_lle_thread"),
    setting("output_engine", ValueSyntax::Choice(AUDIO_ENGINES), "const char*"),
    flag("enable_audio_stretching"),
    text("output_device"),
    float("volume", 0.0, 1.0),
    int("mic_input_type", 0, 2, "int"),
    text("mic_input_device"),
    float("audio_speed", 0.001, 100.0),
    // Camera
    text("camera_outer_right_name"),
    text("camera_outer_right_config"),
    int("camera_outer_right_flip", 0, 3, "int"),
    text("camera_outer_left_name"),
    text("camera_outer_left_config"),
    int("camera_outer_left_flip", 0, 3, "int"),
    text("camera_inner_name"),
    text("camera_inner_config"),
    int("camera_inner_flip", 0, 3, "int"),
    // Miscellaneous
    text("log_filter"),
    // Debugging
    flag("record_frame_times"),
    flag("use_gdbstub"),
    int("gdbstub_port", 1, 65535, "uint16_t"),
];
