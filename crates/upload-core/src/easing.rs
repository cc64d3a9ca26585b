use std::f32::consts::PI;

/// Progress curves for tween tracks. `apply` maps `[0, 1]` onto `[0, 1]`
/// with fixed endpoints; curves may overshoot in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    InQuad,
    InOutQuad,
    InBack,
    /// Elasticity in `1..=999`; higher values wobble faster.
    OutElastic { elasticity: f32 },
}

const BACK_OVERSHOOT: f32 = 1.70158;

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::InBack => {
                let c3 = BACK_OVERSHOOT + 1.0;
                c3 * t * t * t - BACK_OVERSHOOT * t * t
            }
            Easing::OutElastic { elasticity } => {
                let period = (1000.0 - elasticity.clamp(1.0, 999.0)) / 1000.0;
                1.0 - elastic_in(1.0 - t, period)
            }
        }
    }
}

fn elastic_in(t: f32, period: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let shift = period / (2.0 * PI) * 1.0_f32.asin();
    -(2.0_f32.powf(10.0 * (t - 1.0))) * (((t - 1.0) - shift) * (2.0 * PI) / period).sin()
}
