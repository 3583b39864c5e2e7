use serde::{Deserialize, Serialize};

/// Paleomagnetic mean direction with a Kent-distribution confidence ellipse
///
/// Field names on the wire match the usual record keys
/// (`dec, inc, Zdec, Zinc, Edec, Einc, Zeta, Eta`). All values are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalMean {
    pub dec: f64,
    pub inc: f64,
    /// Direction of the ellipse axis with half-width `zeta`
    #[serde(rename = "Zdec")]
    pub z_dec: f64,
    #[serde(rename = "Zinc")]
    pub z_inc: f64,
    /// Direction of the ellipse axis with half-width `eta`
    #[serde(rename = "Edec")]
    pub e_dec: f64,
    #[serde(rename = "Einc")]
    pub e_inc: f64,
    #[serde(rename = "Zeta")]
    pub zeta: f64,
    #[serde(rename = "Eta")]
    pub eta: f64,
}

/// Paleomagnetic pole with its circle of 95% confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    pub lon: f64,
    pub lat: f64,
    pub a95: f64,
}
