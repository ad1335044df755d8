use skyword_engine::{
    FixedTimestep, InputEvent, InputQueue, Lesson, LessonConfig, LessonContext, ProgressSnapshot,
};

/// Generic lesson runner that wires up the engine loop.
///
/// Each concrete lesson (e.g., `airport-lesson`) creates a `thread_local!`
/// LessonRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct LessonRunner<L: Lesson> {
    lesson: L,
    ctx: LessonContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: LessonConfig,
    initialized: bool,
    /// JSON of the audio requests emitted during the most recent frame.
    audio_json: String,
}

impl<L: Lesson> LessonRunner<L> {
    pub fn new(lesson: L) -> Self {
        let config = lesson.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = LessonContext::new(config.seed);
        Self {
            lesson,
            ctx,
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
            audio_json: "[]".to_owned(),
        }
    }

    /// Initialize the lesson. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.lesson.config();
        self.lesson.init(&mut self.ctx);
        self.initialized = true;
        self.pack_audio();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates, then repack the outgoing buffers.
    /// Input is applied on the first fixed step of a frame and drained after
    /// the update, so a multi-step frame never replays the same events.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        let steps = self.timestep.accumulate(dt);
        if steps == 0 {
            return;
        }

        self.ctx.clear_frame_data();

        let empty = InputQueue::new();
        for step in 0..steps {
            let queue = if step == 0 { &self.input } else { &empty };
            self.lesson.update(&mut self.ctx, queue, self.timestep.dt());
        }
        self.input.drain();

        self.ctx.events.truncate(self.config.max_events);
        self.pack_audio();
    }

    fn pack_audio(&mut self) {
        self.audio_json =
            serde_json::to_string(&self.ctx.audio).unwrap_or_else(|_| "[]".to_owned());
    }

    // -- Progress persistence (the shell owns the actual store) --

    /// Restore a snapshot the shell loaded. Malformed JSON is logged and
    /// ignored; a bad store entry must not break the lesson.
    pub fn load_progress(&mut self, json: &str) {
        match ProgressSnapshot::from_json(json) {
            Ok(snapshot) => self.lesson.restore(snapshot),
            Err(err) => log::warn!("ignoring malformed progress snapshot: {err}"),
        }
    }

    pub fn progress_json(&self) -> String {
        self.lesson.progress().to_json()
    }

    // -- Accessors for the shell --

    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.lesson.view()).unwrap_or_else(|_| "{}".to_owned())
    }

    pub fn audio_json(&self) -> String {
        self.audio_json.clone()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
