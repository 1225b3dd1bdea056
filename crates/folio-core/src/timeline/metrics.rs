//! Timeline metrics derived from the first and end marker

use tracing::debug;

use super::marker::MarkerSpan;

/// Placement of the timeline line in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineMetrics {
    /// Vertical centre of the first marker
    pub start_y: f64,
    /// Span from the first marker centre to the end marker centre, never negative
    pub height: f64,
    /// Horizontal centre of the first marker
    pub left_x: f64,
}

impl TimelineMetrics {
    pub fn new(start_y: f64, height: f64, left_x: f64) -> Self {
        Self {
            start_y,
            height: if height.is_finite() { height.max(0.0) } else { 0.0 },
            left_x,
        }
    }

    /// Derive metrics from a discovery pass
    ///
    /// An end marker above the first one gives a zero-length line.
    pub fn from_span(span: &MarkerSpan) -> Self {
        let start_y = span.first.center_y();
        let span_height = span.end.center_y() - start_y;
        if span_height < 0.0 {
            debug!(
                start_y,
                end_y = span.end.center_y(),
                "End marker above start marker; clamping timeline height to zero"
            );
        }
        Self::new(start_y, span_height, span.first.center_x())
    }

    /// Document position where the line ends
    pub fn end_y(&self) -> f64 {
        self.start_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::marker::{Marker, MarkerRole};

    fn marker(top: f64, left: f64) -> Marker {
        Marker {
            role: MarkerRole::Milestone,
            top,
            left,
            width: 12.0,
            height: 12.0,
        }
    }

    #[test]
    fn test_metrics_use_marker_centres() {
        let span = MarkerSpan {
            first: marker(994.0, 118.0),
            end: marker(1494.0, 118.0),
            count: 4,
        };
        let metrics = TimelineMetrics::from_span(&span);
        assert_eq!(metrics.start_y, 1000.0);
        assert_eq!(metrics.height, 500.0);
        assert_eq!(metrics.left_x, 124.0);
        assert_eq!(metrics.end_y(), 1500.0);
    }

    #[test]
    fn test_inverted_span_clamps_to_zero() {
        let span = MarkerSpan {
            first: marker(800.0, 0.0),
            end: marker(200.0, 0.0),
            count: 2,
        };
        let metrics = TimelineMetrics::from_span(&span);
        assert_eq!(metrics.height, 0.0);
        assert_eq!(metrics.end_y(), metrics.start_y);
    }

    #[test]
    fn test_non_finite_height_is_zero() {
        assert_eq!(TimelineMetrics::new(0.0, f64::INFINITY, 0.0).height, 0.0);
        assert_eq!(TimelineMetrics::new(0.0, f64::NAN, 0.0).height, 0.0);
    }
}
