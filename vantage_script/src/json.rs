// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Deserialize;
use serde_json::Value;

use crate::error::ScriptError;
use crate::recorder::{ItemsRecorder, ScriptHost};
use crate::value::ScriptValue;

/// Reference host whose scripts are JSON lists of emit calls.
///
/// ```json
/// [
///   { "emit": "points", "args": ["#ff0000", [1, 2], [[3, 4], [5, 6]]] },
///   { "emit": "segments", "args": [[0, 0], [2, 2]] }
/// ]
/// ```
///
/// Numbers become [`ScriptValue::Number`], arrays [`ScriptValue::List`],
/// `#rrggbb` strings [`ScriptValue::Color`], other strings
/// [`ScriptValue::Text`] and `null` [`ScriptValue::Nil`]. Objects and booleans
/// are carried as text so conversion reports them.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonScriptHost;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EmitKind {
    Points,
    Segments,
}

#[derive(Debug, Deserialize)]
struct EmitCall {
    emit: EmitKind,
    #[serde(default)]
    args: Vec<Value>,
}

impl JsonScriptHost {
    /// Converts a JSON value into the script value it stands for.
    #[must_use]
    pub fn to_script_value(value: &Value) -> ScriptValue {
        match value {
            Value::Null => ScriptValue::Nil,
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| ScriptValue::Text(n.to_string()), ScriptValue::Number),
            Value::String(s) => ScriptValue::parse_hex_color(s)
                .map_or_else(|| ScriptValue::Text(s.clone()), ScriptValue::Color),
            Value::Array(items) => {
                ScriptValue::List(items.iter().map(Self::to_script_value).collect())
            }
            Value::Bool(_) | Value::Object(_) => ScriptValue::Text(value.to_string()),
        }
    }
}

impl ScriptHost for JsonScriptHost {
    fn run(&mut self, source: &str, recorder: &mut ItemsRecorder) -> Result<(), ScriptError> {
        let calls: Vec<EmitCall> = serde_json::from_str(source).map_err(|err| {
            ScriptError::execution(
                format!("invalid script at line {}, column {}", err.line(), err.column()),
                err,
            )
        })?;
        for call in &calls {
            let args: Vec<ScriptValue> = call.args.iter().map(Self::to_script_value).collect();
            let added = match call.emit {
                EmitKind::Points => recorder.emit_points(&args)?,
                EmitKind::Segments => recorder.emit_segments(&args)?,
            };
            tracing::trace!(kind = ?call.emit, added, "emit call");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::Color;
    use serde_json::json;

    use super::JsonScriptHost;
    use crate::error::ScriptError;
    use crate::recorder::{ItemsRecorder, ScriptHost};
    use crate::value::ScriptValue;

    fn run(source: &str) -> Result<ItemsRecorder, ScriptError> {
        let mut recorder = ItemsRecorder::new();
        JsonScriptHost.run(source, &mut recorder)?;
        Ok(recorder)
    }

    #[test]
    fn converts_json_shapes() {
        assert_eq!(
            JsonScriptHost::to_script_value(&json!([1, 2.5])),
            ScriptValue::pair(1.0, 2.5)
        );
        assert_eq!(
            JsonScriptHost::to_script_value(&json!("#00ff00")),
            ScriptValue::rgb(0, 255, 0)
        );
        assert_eq!(
            JsonScriptHost::to_script_value(&json!("green")),
            ScriptValue::Text("green".into())
        );
        assert_eq!(JsonScriptHost::to_script_value(&json!(null)), ScriptValue::Nil);
        assert!(matches!(
            JsonScriptHost::to_script_value(&json!({"x": 1})),
            ScriptValue::Text(_)
        ));
    }

    #[test]
    fn runs_emit_calls_in_order() {
        let source = r##"[
            { "emit": "points", "args": ["#ff0000", [1, 1], [[3, 5]]] },
            { "emit": "segments", "args": [[0, 0], [2, 2]] },
            { "emit": "points" }
        ]"##;
        let items = run(source).unwrap().finish();
        assert_eq!(items.points().len(), 2);
        assert_eq!(items.points()[0].color, Color::from_rgb8(255, 0, 0));
        assert_eq!(items.segments().len(), 1);
        assert_eq!(items.min_coordinates(), Some(Point::new(0.0, 0.0)));
        assert_eq!(items.max_coordinates(), Some(Point::new(3.0, 5.0)));
    }

    #[test]
    fn syntax_errors_are_execution_errors() {
        let err = run("[{ \"emit\": \"points\", ").unwrap_err();
        assert!(matches!(err, ScriptError::Execution { .. }));
        assert!(std::error::Error::source(&err).is_some());

        let err = run(r#"[{ "emit": "circles", "args": [] }]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Execution { .. }));
    }

    #[test]
    fn bad_point_data_is_a_conversion_error() {
        let err = run(r#"[{ "emit": "points", "args": [[1, "two"]] }]"#).unwrap_err();
        match err {
            ScriptError::Conversion(conv) => assert_eq!(
                conv.value,
                ScriptValue::List(vec![ScriptValue::Number(1.0), ScriptValue::Text("two".into())])
            ),
            other => panic!("expected a conversion error, got {other:?}"),
        }
    }
}
