use serde::{Deserialize, Serialize};

/// Vehicle classification reported alongside a day of road passes.
///
/// The set of exempt classes is closed; anything the wire or the CLI hands
/// us that we do not recognize collapses into [`VehicleClass::Unknown`],
/// which is chargeable like an ordinary car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Car,
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
    #[serde(other)]
    Unknown,
}

impl VehicleClass {
    pub const fn label(self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Motorbike => "motorbike",
            VehicleClass::Tractor => "tractor",
            VehicleClass::Emergency => "emergency",
            VehicleClass::Diplomat => "diplomat",
            VehicleClass::Foreign => "foreign",
            VehicleClass::Military => "military",
            VehicleClass::Unknown => "unknown",
        }
    }

    /// Case-insensitive label lookup for CLI arguments and imports.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "car" => VehicleClass::Car,
            "motorbike" => VehicleClass::Motorbike,
            "tractor" => VehicleClass::Tractor,
            "emergency" => VehicleClass::Emergency,
            "diplomat" => VehicleClass::Diplomat,
            "foreign" => VehicleClass::Foreign,
            "military" => VehicleClass::Military,
            _ => VehicleClass::Unknown,
        }
    }
}
