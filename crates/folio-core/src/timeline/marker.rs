//! Marker discovery
//!
//! Markers are the timeline dots. They are never stored as application
//! data: a [`MarkerProvider`] reports where the rendered layout put them,
//! relative to the viewport, and discovery converts those boxes into
//! document coordinates using the current scroll offset.

/// Role a marker plays on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    Milestone,
    End,
}

/// Marker box as the layout reports it (viewport-relative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRect {
    pub role: MarkerRole,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl MarkerRect {
    pub fn new(role: MarkerRole, top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            role,
            top,
            left,
            width,
            height,
        }
    }
}

/// Marker box relative to the top of the scrollable document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub role: MarkerRole,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Marker {
    /// Vertical centre of the marker
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Horizontal centre of the marker
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Source of marker geometry
///
/// Implemented by the view layer over its rendered layout, and by tests
/// over synthetic coordinates.
pub trait MarkerProvider {
    /// Whether the container holding the markers is part of the rendered layout
    fn container_attached(&self) -> bool;

    /// Marker boxes in document order, relative to the viewport
    fn marker_rects(&self) -> Vec<MarkerRect>;
}

/// First and end marker of a discovery pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSpan {
    pub first: Marker,
    pub end: Marker,
    /// Number of markers found
    pub count: usize,
}

/// Locate the timeline markers and pick the first and end marker
///
/// The end marker is an explicit [`MarkerRole::End`] marker when the layout
/// has one, otherwise the last marker found. Returns `None` when the
/// container is not attached or holds no markers; both are transient
/// "not ready" states, not errors.
pub fn discover<P: MarkerProvider + ?Sized>(provider: &P, scroll_y: f64) -> Option<MarkerSpan> {
    if !provider.container_attached() {
        return None;
    }

    let markers: Vec<Marker> = provider
        .marker_rects()
        .into_iter()
        .filter(|rect| rect.top.is_finite() && rect.left.is_finite())
        .map(|rect| Marker {
            role: rect.role,
            top: rect.top + scroll_y,
            left: rect.left,
            width: rect.width.max(0.0),
            height: rect.height.max(0.0),
        })
        .collect();

    let first = *markers.first()?;
    let end = markers
        .iter()
        .rev()
        .find(|m| m.role == MarkerRole::End)
        .or_else(|| markers.last())
        .copied()?;

    Some(MarkerSpan {
        first,
        end,
        count: markers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        attached: bool,
        rects: Vec<MarkerRect>,
    }

    impl MarkerProvider for Fixed {
        fn container_attached(&self) -> bool {
            self.attached
        }

        fn marker_rects(&self) -> Vec<MarkerRect> {
            self.rects.clone()
        }
    }

    fn dot(role: MarkerRole, top: f64) -> MarkerRect {
        MarkerRect::new(role, top, 10.0, 12.0, 12.0)
    }

    #[test]
    fn test_detached_container_yields_nothing() {
        let provider = Fixed {
            attached: false,
            rects: vec![dot(MarkerRole::Start, 0.0)],
        };
        assert!(discover(&provider, 0.0).is_none());
    }

    #[test]
    fn test_zero_markers_yields_nothing() {
        let provider = Fixed {
            attached: true,
            rects: vec![],
        };
        assert!(discover(&provider, 250.0).is_none());
    }

    #[test]
    fn test_positions_are_document_relative() {
        let provider = Fixed {
            attached: true,
            rects: vec![
                dot(MarkerRole::Start, 100.0),
                dot(MarkerRole::Milestone, 300.0),
            ],
        };
        let span = discover(&provider, 400.0).unwrap();
        assert_eq!(span.first.top, 500.0);
        assert_eq!(span.end.top, 700.0);
        assert_eq!(span.count, 2);
    }

    #[test]
    fn test_explicit_end_marker_wins_over_last() {
        let provider = Fixed {
            attached: true,
            rects: vec![
                dot(MarkerRole::Start, 0.0),
                dot(MarkerRole::End, 200.0),
                dot(MarkerRole::Milestone, 900.0),
            ],
        };
        let span = discover(&provider, 0.0).unwrap();
        assert_eq!(span.end.role, MarkerRole::End);
        assert_eq!(span.end.top, 200.0);
    }

    #[test]
    fn test_single_marker_is_both_first_and_end() {
        let provider = Fixed {
            attached: true,
            rects: vec![dot(MarkerRole::Milestone, 42.0)],
        };
        let span = discover(&provider, 0.0).unwrap();
        assert_eq!(span.first, span.end);
    }

    #[test]
    fn test_non_finite_rects_are_skipped() {
        let provider = Fixed {
            attached: true,
            rects: vec![
                dot(MarkerRole::Start, f64::NAN),
                dot(MarkerRole::Milestone, 10.0),
            ],
        };
        let span = discover(&provider, 0.0).unwrap();
        assert_eq!(span.count, 1);
        assert_eq!(span.first.top, 10.0);
    }

    #[test]
    fn test_marker_centres() {
        let marker = Marker {
            role: MarkerRole::Start,
            top: 100.0,
            left: 20.0,
            width: 12.0,
            height: 12.0,
        };
        assert_eq!(marker.center_y(), 106.0);
        assert_eq!(marker.center_x(), 26.0);
    }
}
