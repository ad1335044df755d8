use wasm_bindgen::prelude::*;

use skyword_engine::*;

mod content;
mod lesson;

pub use lesson::AirportLesson;

skyword_web::export_lesson!(AirportLesson, "airport-lesson");
