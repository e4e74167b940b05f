//! JSON Schema fragments advertised as each tool's `inputSchema`.

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    pub default: Option<Value>,
}

impl Param {
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn property(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), json!(self.kind.json_type()));
        property.insert("description".into(), json!(self.description));
        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }
        Value::Object(property)
    }
}

/// Builds `{"type": "object", "properties": ..., "required": [...]}`.
pub fn object_schema(params: &[Param]) -> Value {
    let properties: Map<String, Value> = params
        .iter()
        .map(|p| (p.name.to_string(), p.property()))
        .collect();
    let required: Vec<&str> = params.iter().filter(|p| p.required).map(|p| p.name).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_schema_lists_required_params_only() {
        let schema = object_schema(&[
            Param::required("team_abbr", ParamKind::String, "Team"),
            Param::optional("limit", ParamKind::Integer, "Page size").with_default(25),
        ]);

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["team_abbr"]));
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["properties"]["limit"]["default"], 25);
        assert!(schema["properties"]["team_abbr"].get("default").is_none());
    }

    #[test]
    fn test_empty_schema() {
        assert_eq!(
            object_schema(&[]),
            json!({"type": "object", "properties": {}, "required": []})
        );
    }
}
