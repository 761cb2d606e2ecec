//! Vorschau zwischen letztem Vertex und Pointer.
//!
//! Mit einem Vertex: gestrichelte Gerade in Screen-Pixeln. Ab zwei Vertices:
//! der Pointer wird als vorläufiger Anker angehängt und die ganze Folge
//! geglättet. Der Guide wird immer komplett gelöscht und neu gezeichnet.

use glam::DVec2;

use crate::app::host::HostContext;
use crate::core::LatLng;
use crate::shared::CurveFitter;

/// Zeichnet den Guide mit festem Strich-Abstand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideRenderer {
    /// Abstand der Striche in Pixeln
    spacing: f64,
    /// Maximal gezeichnete Länge in Pixeln (gemessen vom Pointer aus)
    max_length: f64,
}

impl GuideRenderer {
    pub fn new(spacing: f64, max_length: f64) -> Self {
        Self {
            spacing,
            max_length,
        }
    }

    /// Strich-Positionen von `from` nach `to` (Screen-Pixel, abgerundet).
    ///
    /// Ist die Strecke länger als `max_length`, beginnen die Striche erst
    /// `max_length` Pixel vor `to`.
    pub fn dash_points(&self, from: DVec2, to: DVec2) -> Vec<DVec2> {
        let length = from.distance(to).floor();
        if !length.is_finite() || length <= 0.0 || self.spacing <= 0.0 {
            return Vec::new();
        }

        let mut offset = if length > self.max_length {
            length - self.max_length
        } else {
            self.spacing
        };

        let mut dashes = Vec::new();
        while offset < length {
            let fraction = offset / length;
            dashes.push((from * (1.0 - fraction) + to * fraction).floor());
            offset += self.spacing;
        }
        dashes
    }

    /// Zeichnet den Guide für die aktuellen Anker und den Pointer neu.
    pub fn update(
        &self,
        ctx: &mut HostContext<'_>,
        anchors: &[LatLng],
        pointer: LatLng,
        fitter: &CurveFitter,
        color: &str,
    ) {
        ctx.surface.clear_guide();

        match anchors {
            [] => {}
            [last] => {
                let from = ctx.projection.project(*last);
                let to = ctx.projection.project(pointer);
                let dashes = self.dash_points(from, to);
                if !dashes.is_empty() {
                    ctx.surface.draw_guide_dashes(&dashes, color);
                }
            }
            _ => {
                let mut provisional = Vec::with_capacity(anchors.len() + 1);
                provisional.extend_from_slice(anchors);
                provisional.push(pointer);
                let curve = fitter.fit(&provisional);
                ctx.surface.draw_guide_curve(&curve, color);
            }
        }
    }

    pub fn clear(&self, ctx: &mut HostContext<'_>) {
        ctx.surface.clear_guide();
    }
}
