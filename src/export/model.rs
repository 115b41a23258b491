use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct ActionExport {
    pub file_id: i64,
    pub file: String,
    pub action: String,
    pub seconds: Option<f64>,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["file_id", "file", "action", "seconds"]
}

pub(crate) fn action_to_row(a: &ActionExport) -> Vec<String> {
    vec![
        a.file_id.to_string(),
        a.file.clone(),
        a.action.clone(),
        a.seconds.map(|s| s.to_string()).unwrap_or_default(),
    ]
}
