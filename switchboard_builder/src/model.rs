/// The inclusive range of standalone parameters a command line accepts.
///
/// Standalone parameters are the tokens which are neither a switch nor the value of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `[min, max]`: between `min` and `max` standalone parameters (inclusive).
    Range(usize, usize),
    /// `[min, ∞)`: at least `min` standalone parameters.
    Lower(usize),
}

impl Default for Bound {
    /// No standalone parameters are accepted.
    fn default() -> Self {
        Bound::Range(0, 0)
    }
}

impl Bound {
    /// Whether `count` standalone parameters satisfy this bound.
    pub fn contains(&self, count: usize) -> bool {
        match self {
            Bound::Range(min, max) => *min <= count && count <= *max,
            Bound::Lower(min) => *min <= count,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        match self {
            Bound::Range(min, max) => min <= max,
            Bound::Lower(_) => true,
        }
    }

    /// Describe the violation of this bound by `count` standalone parameters.
    pub(crate) fn violation(&self, count: usize) -> String {
        let requirement = match *self {
            Bound::Range(_, 0) => "Standalone parameters cannot be accepted".to_string(),
            Bound::Range(1, 1) => "Just 1 standalone parameter is required".to_string(),
            Bound::Range(min, max) if min == max => {
                format!("Just {min} standalone parameters are required")
            }
            Bound::Range(0, max) => {
                format!("At most {max} standalone parameters can be accepted")
            }
            Bound::Range(min, max) => {
                format!("Number of standalone parameters must be between {min} and {max}")
            }
            Bound::Lower(1) => "At least 1 standalone parameter is required".to_string(),
            Bound::Lower(min) => format!("At least {min} standalone parameters are required"),
        };

        format!("{requirement} (specified {count}).")
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Range(min, max) => write!(f, "[{min}, {max}]"),
            Bound::Lower(min) => write!(f, "[{min}, ∞)"),
        }
    }
}
