use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryResponse {
    pub answer: Option<String>,
}

impl QueryResponse {
    /// Any JSON shape is accepted; only a string `answer` field counts.
    pub fn from_json(value: &Value) -> Self {
        Self {
            answer: value.get("answer").and_then(Value::as_str).map(str::to_string),
        }
    }
}
