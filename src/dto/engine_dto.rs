use serde::{Deserialize, Serialize};

// Request para crear o actualizar un motor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineRequest {
    pub displacement: i64,
    #[serde(rename = "noOfCylinders")]
    pub no_of_cylinders: i64,
    #[serde(rename = "carRange")]
    pub car_range: i64,
}
