// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook message protocol types.

use crate::error::GuardError;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Hook event types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    /// Before tool execution
    PreToolUse,
}

/// Permission decision returned to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Ask,
    Deny,
}

/// Tool request received on stdin.
///
/// Real hosts send flat JSON with many fields; only `tool_input` matters here:
/// ```json
/// {"hook_event_name": "PreToolUse", "tool_name": "Write", "tool_input": {"file_path": "..."}}
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolRequest {
    tool_input: Map<String, Value>,
}

impl ToolRequest {
    /// Parse a request from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, GuardError> {
        let value: Value = serde_json::from_str(raw).map_err(GuardError::Parse)?;
        Self::from_value(value)
    }

    /// Build a request from a parsed JSON value.
    ///
    /// The top-level value must be an object. A missing or non-object
    /// `tool_input` is treated as empty.
    pub fn from_value(value: Value) -> Result<Self, GuardError> {
        let mut root = match value {
            Value::Object(root) => root,
            other => return Err(GuardError::NotAnObject(json_kind(&other))),
        };

        let tool_input = match root.remove("tool_input") {
            Some(Value::Object(input)) => input,
            _ => Map::new(),
        };

        Ok(Self { tool_input })
    }

    /// Extract the target file path.
    /// Checks "file_path" first, then "path" as fallback; empty or non-string values are skipped.
    pub fn target_path(&self) -> Option<&str> {
        self.non_empty_str("file_path")
            .or_else(|| self.non_empty_str("path"))
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.tool_input
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Hook response written to stdout.
///
/// Encoded on one line with `": "` and `", "` separators and every non-ASCII
/// character escaped:
/// ```json
/// {"hookSpecificOutput": {"hookEventName": "PreToolUse", "permissionDecision": "ask", "permissionDecisionReason": "\u26a0\ufe0f  ..."}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Event-specific part of a hook response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: HookEvent,
    pub permission_decision: PermissionDecision,
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Create a PreToolUse permission response
    pub fn pre_tool_use(decision: PermissionDecision, reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HookEvent::PreToolUse,
                permission_decision: decision,
                permission_decision_reason: reason.into(),
            },
        }
    }

    /// Encode as the single-line wire form.
    pub fn to_json(&self) -> Result<String, GuardError> {
        to_wire_json(self)
    }
}

/// Serialize `value` on one line with spaced separators and ASCII-only output.
fn to_wire_json<T: Serialize + ?Sized>(value: &T) -> Result<String, GuardError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, WireFormatter);
    value.serialize(&mut ser).map_err(GuardError::Serialize)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// JSON formatter writing `", "` / `": "` separators and `\uXXXX` escapes
/// (UTF-16 surrogate pairs above the BMP) for non-ASCII characters.
#[derive(Clone, Copy, Debug, Default)]
struct WireFormatter;

impl Formatter for WireFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
