use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::device::DeviceTarget;
use crate::manifest::SourceManifest;

/// Name of the top-level entity emitted by the Haddoc2 code generator.
pub const TOP_LEVEL_ENTITY: &str = "cnn_process";

/// Partition section holding the whole design.
const TOP_SECTION: &str = "Top";

/// Contents of a Quartus Settings File (`.qsf`): an ordered list of assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    assignments: Vec<Assignment>,
}

impl SettingsFile {
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Settings for the `cnn_process` design on the DE1-SoC.
    ///
    /// Arithmetic is mapped onto logic elements instead of DSP blocks so the
    /// constant multipliers generated by Haddoc2 stay in the fabric.
    pub fn cnn_process() -> Self {
        Self::for_design(&DeviceTarget::de1_soc(), &SourceManifest::cnn_process())
    }

    pub fn for_design(device: &DeviceTarget, manifest: &SourceManifest) -> Self {
        let mut qsf = Self::new();

        // Device
        qsf.push(Assignment::global("FAMILY", &device.family));
        qsf.push(Assignment::global("DEVICE", &device.part));
        qsf.push(Assignment::global(
            "ORIGINAL_QUARTUS_VERSION",
            &device.original_quartus_version,
        ));
        qsf.push(Assignment::global("TOP_LEVEL_ENTITY", TOP_LEVEL_ENTITY));
        qsf.push(Assignment::global(
            "MIN_CORE_JUNCTION_TEMP",
            &device.min_junction_temp.to_string(),
        ));
        qsf.push(Assignment::global(
            "MAX_CORE_JUNCTION_TEMP",
            &device.max_junction_temp.to_string(),
        ));

        // Partition and fitter
        qsf.push(Assignment::global("PARTITION_NETLIST_TYPE", "SOURCE").with_section(TOP_SECTION));
        qsf.push(
            Assignment::global("PARTITION_FITTER_PRESERVATION_LEVEL", "PLACEMENT_AND_ROUTING")
                .with_section(TOP_SECTION),
        );
        qsf.push(Assignment::global("PARTITION_COLOR", "16764057").with_section(TOP_SECTION));
        qsf.push(Assignment::global(
            "POWER_PRESET_COOLING_SOLUTION",
            "23 MM HEAT SINK WITH 200 LFPM AIRFLOW",
        ));
        qsf.push(Assignment::global("POWER_BOARD_THERMAL_MODEL", "NONE (CONSERVATIVE)"));
        qsf.push(Assignment::global("PROJECT_OUTPUT_DIRECTORY", "build"));
        qsf.push(Assignment::global("NUM_PARALLEL_PROCESSORS", "4"));

        // Logic-element arithmetic
        qsf.push(Assignment::global("DSP_BLOCK_BALANCING", "LOGIC ELEMENTS"));
        qsf.push(Assignment::global("AUTO_DSP_RECOGNITION", "OFF"));

        // HDL language versions
        qsf.push(Assignment::global("VHDL_INPUT_VERSION", "VHDL_2008"));
        qsf.push(Assignment::global("VHDL_SHOW_LMF_MAPPING_MESSAGES", "OFF"));
        qsf.push(Assignment::global("VERILOG_INPUT_VERSION", "SYSTEMVERILOG_2005"));
        qsf.push(Assignment::global("VERILOG_SHOW_LMF_MAPPING_MESSAGES", "OFF"));

        for source in manifest.sources() {
            qsf.push(Assignment::global("VHDL_FILE", &source.relative_path()));
        }

        qsf.push(
            Assignment::instance("PARTITION_HIERARCHY", "root_partition", "|")
                .with_section(TOP_SECTION),
        );
        qsf
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// First assignment with the given name.
    pub fn find(&self, name: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.name == name)
    }

    /// Paths of every `VHDL_FILE` assignment, in file order.
    pub fn vhdl_files(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.name == "VHDL_FILE")
            .map(|a| a.value.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Render as `.qsf` text, one newline-terminated line per assignment.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for assignment in &self.assignments {
            out.push_str(&assignment.to_string());
            out.push('\n');
        }
        out
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new()
    }
}
