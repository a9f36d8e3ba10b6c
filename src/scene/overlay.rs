//! Overlay definitions and the pure presenter
//!
//! Overlays are named text flags. The engine owns only their visibility;
//! absolute screen placement and styling belong to the presentation layer,
//! which re-reads the visible set every frame.

use serde::{Deserialize, Serialize};

/// Index of an overlay within its scene, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlayId(pub usize);

/// Screen-anchor hint passed through to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
}

/// A named text overlay declared by a scene script.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlayDef {
    pub name: String,
    pub text: String,
    pub anchor: Anchor,
    pub shown_at_start: bool,
}

/// One visible overlay in a presented frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayView {
    pub name: String,
    pub text: String,
    pub anchor: Anchor,
}

/// Derive the visible overlay set from the current flags.
///
/// Pure: no timing, no mutation. Every overlay whose flag is set appears,
/// in declaration order.
pub fn present(defs: &[OverlayDef], visible: &[bool]) -> Vec<OverlayView> {
    debug_assert_eq!(defs.len(), visible.len());
    defs.iter()
        .zip(visible)
        .filter(|(_, shown)| **shown)
        .map(|(def, _)| OverlayView {
            name: def.name.clone(),
            text: def.text.clone(),
            anchor: def.anchor,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<OverlayDef> {
        vec![
            OverlayDef {
                name: "title".into(),
                text: "Once upon a time...".into(),
                anchor: Anchor::Top,
                shown_at_start: true,
            },
            OverlayDef {
                name: "boom".into(),
                text: "BOOM!".into(),
                anchor: Anchor::Center,
                shown_at_start: false,
            },
            OverlayDef {
                name: "end".into(),
                text: "The End".into(),
                anchor: Anchor::Bottom,
                shown_at_start: false,
            },
        ]
    }

    #[test]
    fn test_present_filters_by_flag() {
        let views = present(&defs(), &[true, false, true]);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "title");
        assert_eq!(views[1].name, "end");
    }

    #[test]
    fn test_present_keeps_declaration_order() {
        let views = present(&defs(), &[true, true, true]);
        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["title", "boom", "end"]);
    }

    #[test]
    fn test_present_is_pure() {
        let defs = defs();
        let flags = [false, true, false];
        let first = present(&defs, &flags);
        let second = present(&defs, &flags);
        assert_eq!(first, second);
        assert_eq!(defs.len(), 3);
    }

    #[test]
    fn test_present_empty_flags_yield_nothing() {
        assert!(present(&defs(), &[false, false, false]).is_empty());
        assert!(present(&[], &[]).is_empty());
    }
}
