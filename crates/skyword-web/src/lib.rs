pub mod runner;

pub use runner::LessonRunner;

/// Generate all `#[wasm_bindgen]` exports for a lesson.
///
/// This macro eliminates the per-lesson boilerplate by generating:
/// - `thread_local!` storage for the LessonRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lesson_init, lesson_tick, input handlers,
///   progress and view accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use skyword_engine::*;
///
/// mod lesson;
/// use lesson::MyLesson;
///
/// skyword_web::export_lesson!(MyLesson, "my-lesson");
/// ```
///
/// # Arguments
///
/// - `$lesson_type`: The lesson struct type that implements
///   `skyword_engine::Lesson`
/// - `$lesson_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_lesson {
    ($lesson_type:ty, $lesson_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::LessonRunner<$lesson_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::LessonRunner<$lesson_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Lesson not initialized. Call lesson_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn lesson_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let lesson = <$lesson_type>::new();
            let runner = $crate::LessonRunner::new(lesson);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $lesson_name);
        }

        #[wasm_bindgen]
        pub fn lesson_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn lesson_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn lesson_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn lesson_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn lesson_pointer_cancel() {
            with_runner(|r| r.push_input(InputEvent::PointerCancel));
        }

        #[wasm_bindgen]
        pub fn lesson_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn lesson_ui_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Ui { kind, a, b, c }));
        }

        // ---- Progress persistence ----

        #[wasm_bindgen]
        pub fn lesson_load_progress(json: &str) {
            with_runner(|r| r.load_progress(json));
        }

        #[wasm_bindgen]
        pub fn lesson_progress_json() -> String {
            with_runner(|r| r.progress_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn lesson_view_json() -> String {
            with_runner(|r| r.view_json())
        }

        #[wasm_bindgen]
        pub fn lesson_audio_json() -> String {
            with_runner(|r| r.audio_json())
        }

        #[wasm_bindgen]
        pub fn lesson_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn lesson_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn lesson_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn lesson_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }
    };
}
