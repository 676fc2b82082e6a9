use crate::config::{RenderOptions, RenderStyle};
use crate::highlight_sql;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn highlight_sql_wasm(input: &str, style: &str, line_numbers: bool) -> String {
    let options = RenderOptions {
        style: RenderStyle::from_name(style),
        line_numbers,
    };

    highlight_sql(input, &options)
}
