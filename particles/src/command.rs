use serde_derive::*;

use crate::{SceneState, SurfaceRect};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// What the pointer was over when pressed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    Canvas,
    PaintUi,
    Other,
}

/// Host events, queued and applied at the start of the next tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SurfaceResized {
        rect: SurfaceRect,
    },
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerPressed {
        button: PointerButton,
        x: f32,
        y: f32,
        target: PointerTarget,
    },
    PointerReleased {
        button: PointerButton,
    },
    KeyPressed {
        key: char,
    },
    StateRequested {
        state: SceneState,
    },
    ProjectsScrolled {
        offset: f32,
    },
    PaintEntered,
    PaintExited,
    BrushColor {
        hex: String,
    },
    BrushStrength {
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_read_from_yaml() {
        let yaml = r#"
- type: state_requested
  state: contact
- type: pointer_pressed
  button: primary
  x: 10
  y: 20
  target: canvas
- type: key_pressed
  key: B
- type: paint_entered
"#;
        let commands: Vec<Command> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], Command::StateRequested { state: SceneState::Contact });
        assert_eq!(
            commands[1],
            Command::PointerPressed {
                button: PointerButton::Primary,
                x: 10.,
                y: 20.,
                target: PointerTarget::Canvas,
            }
        );
        assert_eq!(commands[2], Command::KeyPressed { key: 'B' });
        assert_eq!(commands[3], Command::PaintEntered);
    }
}
