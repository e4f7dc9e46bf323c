use chrono::NaiveDate;

/// Formats a date for display using the viewer's locale conventions.
#[cfg(target_arch = "wasm32")]
pub fn locale_date(date: &NaiveDate) -> String {
    use chrono::Datelike;

    let js_date = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js_date
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Off-wasm there is no browser locale to ask, test builds get a fixed
/// day/month/year rendering instead.
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
