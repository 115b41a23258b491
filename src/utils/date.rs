use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date as the ISO 8601 stamp appended to study folder names.
pub fn today_stamp() -> String {
    today().format("%Y-%m-%d").to_string()
}
