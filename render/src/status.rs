use std::cell::RefCell;
use std::rc::Rc;

use particles::{SceneState, UiHooks};

/// What the on-screen status line shows.
#[derive(Debug, Clone)]
pub struct Status {
    pub panel: SceneState,
    pub nav: SceneState,
    pub link_notification: bool,
    pub painting: bool,
    pub placed: usize,
    pub total: usize,
}

impl Default for Status {
    fn default() -> Status {
        Status {
            panel: SceneState::Home,
            nav: SceneState::Home,
            link_notification: true,
            painting: false,
            placed: 0,
            total: 0,
        }
    }
}

impl Status {
    pub fn text(&self) -> String {
        if self.painting {
            format!("paint: {} / {}", self.placed, self.total)
        } else if self.link_notification {
            format!("panel: {} [nav: {}] (links available)", self.panel, self.nav)
        } else {
            format!("panel: {} [nav: {}]", self.panel, self.nav)
        }
    }
}

/// Forwards interface notifications into a shared `Status`.
pub struct StatusHooks(pub Rc<RefCell<Status>>);

impl UiHooks for StatusHooks {
    fn show_panel(&mut self, state: SceneState) {
        self.0.borrow_mut().panel = state;
    }

    fn highlight_nav(&mut self, state: SceneState) {
        self.0.borrow_mut().nav = state;
    }

    fn hide_link_notification(&mut self) {
        self.0.borrow_mut().link_notification = false;
    }

    fn paint_mode_changed(&mut self, active: bool) {
        self.0.borrow_mut().painting = active;
    }

    fn paint_counter(&mut self, placed: usize, total: usize) {
        let mut status = self.0.borrow_mut();
        status.placed = placed;
        status.total = total;
    }
}
