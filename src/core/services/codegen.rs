//! C plugin source generation from extracted setter calls
//!
//! The emulator loads a plugin, asks it which API functions it needs, hands
//! over pointers to them in the same order, and later calls
//! `InitialSettingsOpening`. The generated plugin resolves every distinct
//! setter and issues the calls in submission order.

use std::fmt::Write as _;

use crate::core::models::Extraction;

const HEADER: &str = "#include <stdbool.h>
#include <stdint.h>

#ifdef _WIN32
#define VVCTRE_PLUGIN_EXPORT __declspec(dllexport)
#else
#define VVCTRE_PLUGIN_EXPORT
#endif
";

/// Distinct setters in first-seen order, with their parameter types
fn setters(extractions: &[Extraction]) -> Vec<(&str, &str)> {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for extraction in extractions {
        if !seen.iter().any(|(name, _)| *name == extraction.name) {
            seen.push((extraction.name.as_str(), extraction.value_type.as_str()));
        }
    }
    seen
}

/// Render a complete plugin source
#[must_use]
pub fn render_plugin_source(extractions: &[Extraction]) -> String {
    let setters = setters(extractions);
    let mut out = String::from(HEADER);

    out.push_str("\nstatic const char* required_function_names[] = {\n");
    for (name, _) in &setters {
        let _ = writeln!(out, "    \"{name}\",");
    }
    out.push_str("};\n\n");

    for (name, value_type) in &setters {
        let _ = writeln!(out, "typedef void (*{name}_t)({value_type} value);");
        let _ = writeln!(out, "static {name}_t {name};");
    }
    if !setters.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "VVCTRE_PLUGIN_EXPORT int GetRequiredFunctionCount() {{\n    return {};\n}}\n",
        setters.len()
    );
    out.push_str(
        "VVCTRE_PLUGIN_EXPORT const char** GetRequiredFunctionNames() {\n    \
         return required_function_names;\n}\n\n",
    );

    out.push_str(
        "VVCTRE_PLUGIN_EXPORT void PluginLoaded(void* core, void* plugin_manager,\n    \
         void* required_functions[]) {\n",
    );
    for (index, (name, _)) in setters.iter().enumerate() {
        let _ = writeln!(out, "    {name} = ({name}_t)required_functions[{index}];");
    }
    out.push_str("}\n\n");

    out.push_str("VVCTRE_PLUGIN_EXPORT void InitialSettingsOpening() {\n");
    for extraction in extractions {
        let _ = writeln!(out, "    {}", extraction.call);
    }
    out.push_str("}\n");

    out
}
