use serde_derive::*;

/// Easing curves mapping normalized time in [0, 1] to progress in [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    #[serde(rename = "linear")]
    Linear,
    /// Decelerating quadratic, the usual default for property tweens.
    #[serde(rename = "power1.out")]
    Power1Out,
    /// Cubic acceleration then deceleration.
    #[serde(rename = "power2.inOut")]
    Power2InOut,
}

fn smooth_begin(t: f32, power: i32) -> f32 {
    t.powi(power)
}

fn smooth_end(t: f32, power: i32) -> f32 {
    1. - (1. - t).powi(power)
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.max(0.).min(1.);

        match self {
            Easing::Linear => t,
            Easing::Power1Out => smooth_end(t, 2),
            Easing::Power2InOut => {
                if t < 0.5 {
                    smooth_begin(t * 2., 3) / 2.
                } else {
                    0.5 + smooth_end(t * 2. - 1., 3) / 2.
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Easing {
        Easing::Power1Out
    }
}
