//! Validation rules for metadata fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }
        if trimmed.is_empty() {
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must be at most {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("  ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(rules.validate_string("Jakarta", "Name").is_ok());
    }

    #[test]
    fn test_length() {
        let rules = ValidationRules {
            max_length: Some(3),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("IDR", "Code").is_ok());
        assert!(rules.validate_string("RUPIAH", "Code").is_err());
        assert!(rules.validate_string("", "Code").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(12.5, "Fee").is_ok());
        assert_eq!(
            rules.validate_number(-1.0, "Fee"),
            Err("Fee must be at least 0".to_string())
        );
        assert!(rules.validate_number(101.0, "Fee").is_err());
    }
}
