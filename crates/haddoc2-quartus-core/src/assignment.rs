use std::fmt;

use serde::{Deserialize, Serialize};

/// Scope of a Quartus Settings File assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentScope {
    /// `set_global_assignment`: applies to the whole project.
    Global,
    /// `set_instance_assignment`: applies to the hierarchy node named by `to`.
    Instance { to: String },
}

/// A single `set_*_assignment` line of a `.qsf` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub scope: AssignmentScope,
    /// Assignment name, e.g. `DEVICE` or `VHDL_FILE`.
    pub name: String,
    pub value: String,
    /// Optional `-section_id` qualifier (partition sections such as `Top`).
    pub section_id: Option<String>,
}

impl Assignment {
    pub fn global(name: &str, value: &str) -> Self {
        Self {
            scope: AssignmentScope::Global,
            name: name.to_string(),
            value: value.to_string(),
            section_id: None,
        }
    }

    pub fn instance(name: &str, value: &str, to: &str) -> Self {
        Self {
            scope: AssignmentScope::Instance { to: to.to_string() },
            name: name.to_string(),
            value: value.to_string(),
            section_id: None,
        }
    }

    pub fn with_section(mut self, section_id: &str) -> Self {
        self.section_id = Some(section_id.to_string());
        self
    }

    pub fn is_global(&self) -> bool {
        matches!(self.scope, AssignmentScope::Global)
    }

    /// The value as it appears in the file. Quartus reads whitespace as an
    /// argument separator, so such values are wrapped in double quotes.
    pub fn quoted_value(&self) -> String {
        quote_value(&self.value)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            AssignmentScope::Global => {
                write!(f, "set_global_assignment -name {} {}", self.name, self.quoted_value())?
            }
            AssignmentScope::Instance { to } => write!(
                f,
                "set_instance_assignment -name {} {} -to {}",
                self.name,
                self.quoted_value(),
                quote_value(to)
            )?,
        }
        if let Some(section) = &self.section_id {
            write!(f, " -section_id {}", quote_value(section))?;
        }
        Ok(())
    }
}

fn quote_value(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_assignment_line() {
        let a = Assignment::global("DEVICE", "5CSEMA5F31C6");
        assert_eq!(a.to_string(), "set_global_assignment -name DEVICE 5CSEMA5F31C6");
        assert!(a.is_global());
    }

    #[test]
    fn test_values_with_spaces_are_quoted() {
        let a = Assignment::global("POWER_BOARD_THERMAL_MODEL", "NONE (CONSERVATIVE)");
        assert_eq!(
            a.to_string(),
            "set_global_assignment -name POWER_BOARD_THERMAL_MODEL \"NONE (CONSERVATIVE)\""
        );
        assert_eq!(Assignment::global("X", "build").quoted_value(), "build");
    }

    #[test]
    fn test_section_id_suffix() {
        let a = Assignment::global("PARTITION_COLOR", "16764057").with_section("Top");
        assert_eq!(
            a.to_string(),
            "set_global_assignment -name PARTITION_COLOR 16764057 -section_id Top"
        );
    }

    #[test]
    fn test_instance_assignment_line() {
        let a = Assignment::instance("PARTITION_HIERARCHY", "root_partition", "|")
            .with_section("Top");
        assert!(!a.is_global());
        assert_eq!(
            a.to_string(),
            "set_instance_assignment -name PARTITION_HIERARCHY root_partition -to | -section_id Top"
        );
    }
}
