//! The five physiological axes of the radar profile

/// One radar axis: stable identifier plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub id: &'static str,
    pub label: &'static str,
}

/// Fixed presentation order of the radar axes.
///
/// Every radar payload carries all five, in this order, whether or not the
/// underlying record mentions them.
pub const AXES: [Axis; 5] = [
    Axis {
        id: "body_composition",
        label: "Body composition",
    },
    Axis {
        id: "strength_local_endurance",
        label: "Strength & local endurance",
    },
    Axis {
        id: "power_speed",
        label: "Power & speed",
    },
    Axis {
        id: "endurance",
        label: "Endurance",
    },
    Axis {
        id: "motor_control_skill",
        label: "Motor control & skill",
    },
];

/// Axis display labels in presentation order.
pub fn labels() -> Vec<String> {
    AXES.iter().map(|axis| axis.label.to_string()).collect()
}
