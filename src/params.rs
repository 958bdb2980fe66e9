/// Default fixed capacity of a [`ParticleStore`](crate::ParticleStore).
pub const MAX_DROPS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub active_count: usize,
    pub spacing: f32,
    pub radius: f32,
    pub smoothing_radius: f32,
    /// Signed magnitude, negative pulls along `-direction`.
    pub gravity: f32,
    /// Fraction of velocity kept after a wall bounce, `0..=1`.
    pub damping: f32,
    pub terminal_velocity: f32,
    pub domain_width: f32,
    pub domain_height: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            active_count: 50,
            spacing: 5.0,
            radius: 5.0,
            smoothing_radius: 1.0,
            gravity: -9.81,
            damping: 1.0,
            terminal_velocity: 50.0,
            domain_width: 800.0,
            domain_height: 600.0,
        }
    }
}

impl ParameterSet {
    /// Whether switching from `previous` to `self` invalidates the current
    /// layout. Domain size, gravity and damping apply on the next tick.
    pub fn needs_relayout(&self, previous: &ParameterSet) -> bool {
        self.active_count != previous.active_count
            || self.spacing != previous.spacing
            || self.radius != previous.radius
            || self.smoothing_radius != previous.smoothing_radius
    }

    /// Limits every field to the range the configuration surface allows.
    pub fn clamp_to_ranges(
        self,
        capacity: usize,
        max_width: f32,
        max_height: f32,
    ) -> Self {
        Self {
            active_count: self.active_count.clamp(1, capacity.max(1)),
            spacing: clamp_or(self.spacing, 0.0, 100.0),
            radius: clamp_or(self.radius, 1.0, 100.0),
            smoothing_radius: clamp_or(self.smoothing_radius, 1.0, 100.0),
            gravity: clamp_or(self.gravity, -50.0, 0.0),
            damping: clamp_or(self.damping, 0.0, 1.0),
            terminal_velocity: if self.terminal_velocity > 0.0 {
                self.terminal_velocity
            } else {
                ParameterSet::default().terminal_velocity
            },
            domain_width: clamp_or(self.domain_width, 100.0, max_width.max(100.0)),
            domain_height: clamp_or(
                self.domain_height,
                100.0,
                max_height.max(100.0),
            ),
        }
    }
}

// NaN falls back to the lower bound
fn clamp_or(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relayout_only_on_layout_fields() {
        let base = ParameterSet::default();
        let cases: Vec<(ParameterSet, bool)> = vec![
            (base, false),
            (ParameterSet { active_count: 51, ..base }, true),
            (ParameterSet { spacing: 6.0, ..base }, true),
            (ParameterSet { radius: 4.0, ..base }, true),
            (ParameterSet { smoothing_radius: 2.0, ..base }, true),
            (ParameterSet { gravity: -1.0, ..base }, false),
            (ParameterSet { damping: 0.5, ..base }, false),
            (ParameterSet { domain_width: 1000.0, ..base }, false),
            (ParameterSet { domain_height: 1000.0, ..base }, false),
        ];

        for (idx, (params, expect)) in cases.into_iter().enumerate() {
            assert_eq!(
                params.needs_relayout(&base),
                expect,
                "case: {idx}, params: {params:?}"
            );
        }
    }

    #[test]
    fn clamp_to_slider_ranges() {
        let wild = ParameterSet {
            active_count: 5000,
            spacing: -3.0,
            radius: 0.0,
            smoothing_radius: -1.0,
            gravity: 10.0,
            damping: 1.5,
            terminal_velocity: -2.0,
            domain_width: 10.0,
            domain_height: 1e6,
        };

        let clamped = wild.clamp_to_ranges(MAX_DROPS, 1920.0, 1080.0);
        assert_eq!(
            clamped,
            ParameterSet {
                active_count: MAX_DROPS,
                spacing: 0.0,
                radius: 1.0,
                smoothing_radius: 1.0,
                gravity: 0.0,
                damping: 1.0,
                terminal_velocity: 50.0,
                domain_width: 100.0,
                domain_height: 1080.0,
            }
        );
    }

    #[test]
    fn clamp_keeps_valid_values() {
        let params = ParameterSet::default();
        assert_eq!(params.clamp_to_ranges(MAX_DROPS, 1920.0, 1080.0), params);
    }

    #[test]
    fn clamp_nan_and_zero_count() {
        let params = ParameterSet {
            active_count: 0,
            smoothing_radius: f32::NAN,
            ..Default::default()
        }
        .clamp_to_ranges(MAX_DROPS, 1920.0, 1080.0);
        assert_eq!(params.active_count, 1);
        assert_eq!(params.smoothing_radius, 1.0);
    }
}
