//! Display toggles for the debug helpers

use serde::{Deserialize, Serialize};

/// One toggle per debug helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToggle {
    GridX,
    GridY,
    GridZ,
    Ground,
    Axes,
}

impl DisplayToggle {
    /// All toggles in the order they appear in the debug panel
    pub const ALL: [DisplayToggle; 5] = [
        DisplayToggle::GridX,
        DisplayToggle::GridY,
        DisplayToggle::GridZ,
        DisplayToggle::Ground,
        DisplayToggle::Axes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DisplayToggle::GridX => "Show XZ grid",
            DisplayToggle::GridY => "Show YZ grid",
            DisplayToggle::GridZ => "Show XY grid",
            DisplayToggle::Ground => "Show ground",
            DisplayToggle::Axes => "Show axes",
        }
    }
}

/// Which debug helpers are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToggles {
    pub grid_x: bool,
    pub grid_y: bool,
    pub grid_z: bool,
    pub ground: bool,
    pub axes: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            grid_x: false,
            grid_y: false,
            grid_z: false,
            ground: true,
            axes: false,
        }
    }
}

impl DisplayToggles {
    pub fn get(&self, toggle: DisplayToggle) -> bool {
        match toggle {
            DisplayToggle::GridX => self.grid_x,
            DisplayToggle::GridY => self.grid_y,
            DisplayToggle::GridZ => self.grid_z,
            DisplayToggle::Ground => self.ground,
            DisplayToggle::Axes => self.axes,
        }
    }

    pub fn get_mut(&mut self, toggle: DisplayToggle) -> &mut bool {
        match toggle {
            DisplayToggle::GridX => &mut self.grid_x,
            DisplayToggle::GridY => &mut self.grid_y,
            DisplayToggle::GridZ => &mut self.grid_z,
            DisplayToggle::Ground => &mut self.ground,
            DisplayToggle::Axes => &mut self.axes,
        }
    }

    pub fn set(&mut self, toggle: DisplayToggle, value: bool) {
        *self.get_mut(toggle) = value;
    }

    /// Toggles whose value differs from `other`
    pub fn changed_from(&self, other: &DisplayToggles) -> Vec<DisplayToggle> {
        DisplayToggle::ALL
            .into_iter()
            .filter(|&t| self.get(t) != other.get(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_show_only_ground() {
        let toggles = DisplayToggles::default();
        let shown: Vec<_> = DisplayToggle::ALL
            .into_iter()
            .filter(|&t| toggles.get(t))
            .collect();
        assert_eq!(shown, vec![DisplayToggle::Ground]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = DisplayToggle::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            [
                "Show XZ grid",
                "Show YZ grid",
                "Show XY grid",
                "Show ground",
                "Show axes"
            ]
        );
    }

    #[test]
    fn test_set_and_diff() {
        let before = DisplayToggles::default();
        let mut after = before;
        after.set(DisplayToggle::Axes, true);
        after.set(DisplayToggle::Ground, false);
        assert_eq!(
            after.changed_from(&before),
            vec![DisplayToggle::Ground, DisplayToggle::Axes]
        );
        assert!(before.changed_from(&before).is_empty());
    }
}
