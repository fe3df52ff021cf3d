use crate::SceneState;

/// Interface notifications. Every hook defaults to doing nothing.
pub trait UiHooks {
    fn show_panel(&mut self, _state: SceneState) {}

    fn highlight_nav(&mut self, _state: SceneState) {}

    fn hide_link_notification(&mut self) {}

    fn paint_mode_changed(&mut self, _active: bool) {}

    fn paint_counter(&mut self, _placed: usize, _total: usize) {}
}

/// Headless runs.
pub struct NoUi;

impl UiHooks for NoUi {}
