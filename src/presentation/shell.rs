// Page shell state derived from the submitted form
use crate::application::selection_service::SelectOption;
use crate::domain::granularity::Granularity;
use crate::domain::range_filter::{RangeInput, TimeRange, non_empty};
use serde::Deserialize;

/// Query string of the dashboard page. Every field arrives as text so that
/// an empty dropdown (`factory=`) reads as "nothing selected".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellQuery {
    pub factory: Option<String>,
    pub device: Option<String>,
    #[serde(flatten)]
    pub range: RangeInput,
    pub apply: Option<String>,
}

impl ShellQuery {
    pub fn factory_id(&self) -> Option<u32> {
        parse_id(self.factory.as_deref())
    }

    pub fn device_id(&self) -> Option<u32> {
        parse_id(self.device.as_deref())
    }

    pub fn applied(&self) -> bool {
        self.apply.is_some()
    }
}

fn parse_id(value: Option<&str>) -> Option<u32> {
    non_empty(value).and_then(|v| v.parse().ok())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellState {
    NoFactory,
    FactorySelected {
        factory: u32,
    },
    DeviceSelected {
        factory: u32,
        device: u32,
    },
    RangeApplied {
        factory: u32,
        device: u32,
        range: TimeRange,
    },
}

impl ShellState {
    /// A device only counts when it belongs to the selected factory. In the
    /// datetime variant the range only counts when the apply action was used.
    pub fn from_request(
        query: &ShellQuery,
        device_options: &[SelectOption],
        granularity: Granularity,
    ) -> Self {
        let Some(factory) = query.factory_id() else {
            return ShellState::NoFactory;
        };

        let device = query
            .device_id()
            .filter(|id| device_options.iter().any(|o| o.value == *id));
        let Some(device) = device else {
            return ShellState::FactorySelected { factory };
        };

        let range_active = !granularity.requires_apply() || query.applied();
        match query.range.to_range(granularity).filter(|_| range_active) {
            Some(range) => ShellState::RangeApplied {
                factory,
                device,
                range,
            },
            None => ShellState::DeviceSelected { factory, device },
        }
    }

    pub fn factory(&self) -> Option<u32> {
        match self {
            ShellState::NoFactory => None,
            ShellState::FactorySelected { factory }
            | ShellState::DeviceSelected { factory, .. }
            | ShellState::RangeApplied { factory, .. } => Some(*factory),
        }
    }

    pub fn device(&self) -> Option<u32> {
        match self {
            ShellState::NoFactory | ShellState::FactorySelected { .. } => None,
            ShellState::DeviceSelected { device, .. } | ShellState::RangeApplied { device, .. } => {
                Some(*device)
            }
        }
    }

    pub fn range(&self) -> Option<&TimeRange> {
        match self {
            ShellState::RangeApplied { range, .. } => Some(range),
            _ => None,
        }
    }
}
