//! Serialized input device parameters
//!
//! Parameter packages serialize as `key:value` pairs joined by `,`, with keys
//! in sorted order. Each entry here is one input engine's package.

/// Rule id and anchored pattern per input engine
pub const INPUT_PARAMS: &[(&str, &str)] = &[
    ("keyboard", r"^code:[0-9]+,engine:keyboard$"),
    (
        "sdl-button",
        r"^button:[0-9]+,engine:sdl,guid:[0-9a-fA-F]+,port:[0-9]+$",
    ),
    (
        "sdl-hat",
        r"^direction:(?:up|down|left|right),engine:sdl,guid:[0-9a-fA-F]+,hat:[0-9]+,port:[0-9]+$",
    ),
    (
        "sdl-axis",
        r"^axis:[0-9]+,direction:[+-],engine:sdl,guid:[0-9a-fA-F]+,port:[0-9]+,threshold:-?(?:0(?:\.[0-9]+)?|1(?:\.0+)?)$",
    ),
    (
        "sdl-analog",
        r"^axis_x:[0-9]+,axis_y:[0-9]+,engine:sdl,guid:[0-9a-fA-F]+,port:[0-9]+$",
    ),
    (
        "analog-from-button",
        r"^down:[^,\r\n]+,engine:analog_from_button,left:[^,\r\n]+,(?:modifier:[^,\r\n]+,modifier_scale:(?:0(?:\.[0-9]+)?|1(?:\.0+)?),)?right:[^,\r\n]+,up:[^,\r\n]+$",
    ),
    (
        "motion-emu",
        r"^engine:motion_emu(?:,sensitivity:[0-9]+(?:\.[0-9]+)?)?(?:,tilt_clamp:[0-9]+(?:\.[0-9]+)?)?(?:,update_period:[0-9]+)?$",
    ),
    ("emu-window", r"^engine:emu_window$"),
    (
        "cemuhookudp",
        r"^engine:cemuhookudp(?:,max_x:[0-9]+,max_y:[0-9]+,min_x:[0-9]+,min_y:[0-9]+)?$",
    ),
];
