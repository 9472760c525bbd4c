use serde::{Deserialize, Serialize};

/// The FPGA a generated project targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTarget {
    /// Quartus device family, e.g. `CYCLONE V`.
    pub family: String,
    /// Full part number including package and speed grade.
    pub part: String,
    /// Quartus release the settings were originally authored with.
    pub original_quartus_version: String,
    /// Core junction temperature range in degrees Celsius.
    pub min_junction_temp: i32,
    pub max_junction_temp: i32,
}

impl DeviceTarget {
    pub fn new(family: &str, part: &str) -> Self {
        Self {
            family: family.to_string(),
            part: part.to_string(),
            original_quartus_version: "16.0".to_string(),
            min_junction_temp: 0,
            max_junction_temp: 85,
        }
    }

    /// Cyclone V SoC on the Terasic DE1-SoC board.
    pub fn de1_soc() -> Self {
        Self::new("CYCLONE V", "5CSEMA5F31C6")
    }
}

impl Default for DeviceTarget {
    fn default() -> Self {
        Self::de1_soc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_de1_soc_target() {
        let dev = DeviceTarget::default();
        assert_eq!(dev.family, "CYCLONE V");
        assert_eq!(dev.part, "5CSEMA5F31C6");
        assert_eq!(dev.original_quartus_version, "16.0");
        assert_eq!((dev.min_junction_temp, dev.max_junction_temp), (0, 85));
    }
}
