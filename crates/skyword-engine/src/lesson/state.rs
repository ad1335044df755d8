use serde::Serialize;

use crate::api::lesson::LessonContext;
use crate::api::types::{event_kind, LessonEvent, TaskId};
use crate::audio::tone::jingle;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::UiAction;
use crate::lesson::plan::LessonPlan;
use crate::lesson::progress::ProgressSnapshot;
use crate::tasks::TaskView;

/// The running lesson: routes input to the current task, tracks completion,
/// and produces the view and progress snapshot for the shell.
pub struct LessonState {
    title: String,
    plan: LessonPlan,
    current: usize,
    completed: Vec<TaskId>,
    lesson_complete_fired: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonView {
    pub title: String,
    pub tasks: Vec<TaskSummary>,
    pub current: usize,
    pub completed_count: usize,
    pub total: usize,
    pub lesson_complete: bool,
    pub task: TaskView,
}

impl LessonState {
    pub fn new(title: &str, plan: LessonPlan) -> Self {
        Self {
            title: title.to_owned(),
            plan,
            current: 0,
            completed: Vec::new(),
            lesson_complete_fired: false,
        }
    }

    /// One-time task setup (deterministic shuffles).
    pub fn init(&mut self, ctx: &mut LessonContext) {
        for slot in self.plan.slots_mut() {
            slot.task.init(ctx);
        }
        log::info!("lesson {:?}: {} tasks", self.title, self.plan.len());
    }

    /// Route one frame's input to the shell and the current task, then
    /// advance the current task's timers.
    pub fn update(&mut self, ctx: &mut LessonContext, input: &InputQueue, dt: f32) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.plan.slot_mut(self.current).task.pointer_down(x, y, ctx);
                }
                InputEvent::PointerMove { x, y } => {
                    self.plan.slot_mut(self.current).task.pointer_move(x, y, ctx);
                }
                InputEvent::PointerUp { x, y } => {
                    self.plan.slot_mut(self.current).task.pointer_up(x, y, ctx);
                }
                InputEvent::PointerCancel => {
                    self.plan.slot_mut(self.current).task.pointer_cancel(ctx);
                }
                InputEvent::KeyDown { key_code } => {
                    self.plan.slot_mut(self.current).task.handle_key(key_code, ctx);
                }
                InputEvent::Ui { kind, a, b, c } => {
                    if let Some(action) = UiAction::decode(kind, a, b, c) {
                        self.handle_action(action, ctx);
                    }
                }
            }
        }
        self.plan.slot_mut(self.current).task.tick(dt, ctx);
    }

    fn handle_action(&mut self, action: UiAction, ctx: &mut LessonContext) {
        match action {
            UiAction::SelectTask(i) => self.select_task(i, ctx),
            UiAction::NextTask => self.select_task(self.current + 1, ctx),
            UiAction::PrevTask => {
                if self.current > 0 {
                    self.select_task(self.current - 1, ctx);
                }
            }
            UiAction::CompleteTask => self.complete_current(ctx),
            UiAction::ResetProgress => self.reset_progress(ctx),
            other => self.plan.slot_mut(self.current).task.handle_ui(other, ctx),
        }
    }

    fn select_task(&mut self, index: usize, ctx: &mut LessonContext) {
        if index >= self.plan.len() || index == self.current {
            return;
        }
        self.current = index;
        log::info!("switched to task {:?}", self.plan.slot(index).title);
        self.mark_dirty(ctx);
    }

    fn complete_current(&mut self, ctx: &mut LessonContext) {
        let slot = self.plan.slot(self.current);
        let id = slot.id;
        if self.completed.contains(&id) || !slot.task.can_complete() {
            return;
        }
        self.completed.push(id);
        ctx.play_tone(jingle::soft_success());
        ctx.emit(LessonEvent::new(event_kind::TASK_COMPLETED).with_a(id.0 as f32));
        log::info!(
            "task {:?} complete ({}/{})",
            self.plan.slot(self.current).title,
            self.completed.len(),
            self.plan.len()
        );
        self.mark_dirty(ctx);

        if self.completed.len() == self.plan.len() && !self.lesson_complete_fired {
            self.lesson_complete_fired = true;
            ctx.emit(LessonEvent::new(event_kind::LESSON_COMPLETED));
            ctx.play_tone(jingle::celebration());
        }
    }

    fn reset_progress(&mut self, ctx: &mut LessonContext) {
        self.completed.clear();
        self.current = 0;
        self.lesson_complete_fired = false;
        self.mark_dirty(ctx);
    }

    fn mark_dirty(&self, ctx: &mut LessonContext) {
        ctx.emit(LessonEvent::new(event_kind::PROGRESS_DIRTY));
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_task: self.plan.slot(self.current).id,
            completed: self.completed.clone(),
        }
    }

    /// Restore a snapshot the shell loaded. Unknown task ids are dropped;
    /// no events fire (this is the pre-existing state, not a change).
    pub fn restore(&mut self, snapshot: ProgressSnapshot) {
        if let Some(index) = self.plan.index_of(snapshot.current_task) {
            self.current = index;
        }
        self.completed = snapshot
            .completed
            .into_iter()
            .filter(|id| self.plan.index_of(*id).is_some())
            .collect();
        self.completed.dedup();
        // A fully completed lesson must not re-announce itself on reload
        self.lesson_complete_fired = self.completed.len() == self.plan.len();
    }

    pub fn view(&self) -> LessonView {
        let tasks = self
            .plan
            .slots()
            .iter()
            .enumerate()
            .map(|(i, slot)| TaskSummary {
                id: slot.id,
                title: slot.title.clone(),
                completed: self.completed.contains(&slot.id),
                current: i == self.current,
            })
            .collect();
        LessonView {
            title: self.title.clone(),
            tasks,
            current: self.current,
            completed_count: self.completed.len(),
            total: self.plan.len(),
            lesson_complete: self.completed.len() == self.plan.len(),
            task: self.plan.slot(self.current).task.view(),
        }
    }
}
