use core::fmt;

use serde::{Deserialize, Serialize};

/// Kind of air a network carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowType {
    Hot,
    Cold,
    Frozen,
    Any,
}

impl FlowType {
    pub const ALL: [FlowType; 4] = [
        FlowType::Hot,
        FlowType::Cold,
        FlowType::Frozen,
        FlowType::Any,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlowType::Hot => "Hot",
            FlowType::Cold => "Cold",
            FlowType::Frozen => "Frozen",
            FlowType::Any => "Any",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
