/// One timed work step parsed from a study spreadsheet.
///
/// `seconds` stays `None` when the cell was blank; a blank *name* cell is
/// never represented here, because it terminates the table scan instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRow {
    pub name: String,
    pub seconds: Option<f64>,
}

impl ActionRow {
    pub fn new(name: impl Into<String>, seconds: Option<f64>) -> Self {
        Self {
            name: name.into(),
            seconds,
        }
    }
}
