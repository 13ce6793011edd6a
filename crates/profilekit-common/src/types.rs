use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Copy with negative extents clamped to zero.
    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
            ..*self
        }
    }
}

/// Identifies one embedding container to its delegates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_is_anchored_at_origin() {
        assert_eq!(
            Bounds::from_size(390.0, 844.0),
            Bounds::new(0.0, 0.0, 390.0, 844.0)
        );
    }

    #[test]
    fn clamped_zeroes_negative_sizes_and_keeps_origin() {
        let clamped = Bounds::new(12.0, 8.0, -10.0, 20.0).clamped();
        assert_eq!(clamped, Bounds::new(12.0, 8.0, 0.0, 20.0));
    }

    #[test]
    fn bounds_default_is_empty() {
        assert_eq!(Bounds::default(), Bounds::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn bounds_serialization() {
        let b = Bounds::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&b).unwrap();
        let deserialized: Bounds = serde_json::from_str(&json).unwrap();
        assert_eq!(b, deserialized);
    }

    #[test]
    fn view_id_display() {
        assert_eq!(ViewId(7).to_string(), "view-7");
    }

    #[test]
    fn view_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ViewId(1));
        set.insert(ViewId(1));
        set.insert(ViewId(2));
        assert_eq!(set.len(), 2);
    }
}
