// src/utils/constants_config.rs

/// Tuning values for the collision pipeline.
///
/// The defaults reproduce the reference simulation: half-elastic wall
/// bounces, a 0.005 simultaneity window, and a 0.001 separation nudge for
/// edge and vertex contacts.
#[derive(Debug, Clone, Copy)]
pub struct SimulationTuning {
    /// Restitution coefficient applied to bounces off static walls, in [0, 1].
    pub restitution: f64,
    /// Contacts whose times of impact differ by at most this value are
    /// treated as simultaneous and resolved in the same pass.
    pub contact_epsilon: f64,
    /// Distance objects are pushed apart along the contact normal after an
    /// edge or vertex hit, so the same contact is not re-detected.
    pub separation_bias: f64,
    /// Upper bound on slicing passes within a single frame. Purely a
    /// hardening measure; ordinary scenes never approach it.
    pub max_passes: usize,
}

pub const DEFAULT_SIMULATION_TUNING: SimulationTuning = SimulationTuning {
    restitution: 0.5,
    contact_epsilon: 0.005,
    separation_bias: 0.001,
    max_passes: 32,
};

impl Default for SimulationTuning {
    fn default() -> Self {
        DEFAULT_SIMULATION_TUNING
    }
}

impl SimulationTuning {
    pub fn new(
        restitution: Option<f64>,
        contact_epsilon: Option<f64>,
        separation_bias: Option<f64>,
        max_passes: Option<usize>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_TUNING;
        Self {
            restitution: restitution.unwrap_or(default.restitution),
            contact_epsilon: contact_epsilon.unwrap_or(default.contact_epsilon),
            separation_bias: separation_bias.unwrap_or(default.separation_bias),
            max_passes: max_passes.unwrap_or(default.max_passes),
        }
    }
}
