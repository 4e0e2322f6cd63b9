//! Drawing-surface seam and annotation layout.
//!
//! The engine never draws. A `Surface` receives point markers, lines, and
//! text at canvas coordinates; styling (colors, fonts, marker radius) is the
//! surface's business. `RenderCfg` only decides where labels sit relative to
//! the thing they describe.

use nalgebra::Vector2;
use serde::Serialize;

use crate::engine::{EdgeAnnotation, FinishResult, PolygonReport};
use crate::geom2::{LabeledPoint, Point};

/// Output collaborator: a canvas that accepts three primitive commands.
pub trait Surface {
    fn draw_point(&mut self, x: f64, y: f64);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_text(&mut self, x: f64, y: f64, text: &str);
}

/// Label placement (canvas pixels, y down).
#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    /// Offset of an edge's length label from the edge midpoint.
    pub edge_label_offset: Vector2<f64>,
    /// Offset of a point label (`A`, `P1`, ...) from its marker.
    pub point_label_offset: Vector2<f64>,
    /// Where the area line is written.
    pub area_anchor: Point,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            edge_label_offset: Vector2::new(5.0, -5.0),
            point_label_offset: Vector2::new(10.0, -10.0),
            area_anchor: Point::new(10.0, 20.0),
        }
    }
}

/// Marker for a new click, plus its edge if there is one.
pub fn render_click<S: Surface + ?Sized>(
    surface: &mut S,
    cfg: &RenderCfg,
    p: Point,
    edge: Option<&EdgeAnnotation>,
) {
    surface.draw_point(p.x, p.y);
    if let Some(edge) = edge {
        render_edge(surface, cfg, edge);
    }
}

pub fn render_edge<S: Surface + ?Sized>(surface: &mut S, cfg: &RenderCfg, edge: &EdgeAnnotation) {
    surface.draw_line(edge.from, edge.to);
    let at = edge.midpoint + cfg.edge_label_offset;
    surface.draw_text(at.x, at.y, &edge.label);
}

fn render_labeled_point<S: Surface + ?Sized>(surface: &mut S, cfg: &RenderCfg, lp: &LabeledPoint) {
    surface.draw_point(lp.at.x, lp.at.y);
    let at = lp.at + cfg.point_label_offset;
    surface.draw_text(at.x, at.y, &lp.label);
}

/// Draw a finish outcome. `TooFew` draws nothing.
pub fn render_finish<S: Surface + ?Sized>(surface: &mut S, cfg: &RenderCfg, result: &FinishResult) {
    match result {
        FinishResult::TooFew => {}
        FinishResult::Triangle { centroid } => render_labeled_point(surface, cfg, centroid),
        FinishResult::Polygon(report) => render_polygon(surface, cfg, report),
    }
}

fn render_polygon<S: Surface + ?Sized>(surface: &mut S, cfg: &RenderCfg, report: &PolygonReport) {
    render_edge(surface, cfg, &report.closing_edge);
    for d in &report.diagonals {
        surface.draw_line(d.segment.a, d.segment.b);
    }
    if let Some(meet) = &report.meet {
        render_labeled_point(surface, cfg, &meet.point);
        for m in &meet.midpoints {
            render_labeled_point(surface, cfg, m);
        }
    }
    surface.draw_text(
        cfg.area_anchor.x,
        cfg.area_anchor.y,
        &format!("Area: {}", report.area_label),
    );
}

/// One recorded surface command.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCmd {
    Point { x: f64, y: f64 },
    Line { from: Point, to: Point },
    Text { x: f64, y: f64, text: String },
}

/// Surface that keeps every command in order (tests, CLI output, replays).
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub cmds: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every `Text` command, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn draw_point(&mut self, x: f64, y: f64) {
        self.cmds.push(DrawCmd::Point { x, y });
    }
    fn draw_line(&mut self, from: Point, to: Point) {
        self.cmds.push(DrawCmd::Line { from, to });
    }
    fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        self.cmds.push(DrawCmd::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PolygonGeometryEngine;
    use nalgebra::vector;

    #[test]
    fn click_without_edge_draws_marker_only() {
        let mut rec = Recorder::new();
        render_click(&mut rec, &RenderCfg::default(), vector![4.0, 2.0], None);
        assert_eq!(rec.cmds, vec![DrawCmd::Point { x: 4.0, y: 2.0 }]);
    }

    #[test]
    fn edge_label_sits_above_right_of_midpoint() {
        let edge = EdgeAnnotation::between(vector![0.0, 0.0], vector![10.0, 0.0]);
        let mut rec = Recorder::new();
        render_click(&mut rec, &RenderCfg::default(), edge.to, Some(&edge));
        assert_eq!(
            rec.cmds,
            vec![
                DrawCmd::Point { x: 10.0, y: 0.0 },
                DrawCmd::Line {
                    from: vector![0.0, 0.0],
                    to: vector![10.0, 0.0]
                },
                DrawCmd::Text {
                    x: 10.0,
                    y: -5.0,
                    text: "10.00 px".into()
                },
            ]
        );
    }

    #[test]
    fn too_few_draws_nothing() {
        let mut rec = Recorder::new();
        render_finish(&mut rec, &RenderCfg::default(), &FinishResult::TooFew);
        assert!(rec.cmds.is_empty());
    }

    #[test]
    fn triangle_draws_centroid_marker_and_label() {
        let mut e = PolygonGeometryEngine::new();
        for p in [vector![0.0, 0.0], vector![6.0, 0.0], vector![0.0, 6.0]] {
            e.add_point(p);
        }
        let mut rec = Recorder::new();
        render_finish(&mut rec, &RenderCfg::default(), &e.finish());
        assert_eq!(
            rec.cmds,
            vec![
                DrawCmd::Point { x: 2.0, y: 2.0 },
                DrawCmd::Text {
                    x: 12.0,
                    y: -8.0,
                    text: "A (Centroid)".into()
                },
            ]
        );
    }

    #[test]
    fn square_draw_order() {
        let mut e = PolygonGeometryEngine::new();
        for p in [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ] {
            e.add_point(p);
        }
        let mut rec = Recorder::new();
        render_finish(&mut rec, &RenderCfg::default(), &e.finish());
        // closing line + label, 2 diagonals, A + label, 4 x (marker + label), area
        assert_eq!(rec.cmds.len(), 2 + 2 + 2 + 8 + 1);
        assert_eq!(
            rec.texts(),
            vec!["10.00 px", "A", "P1", "P2", "P3", "P4", "Area: 100.00 px²"]
        );
        assert_eq!(
            rec.cmds.last(),
            Some(&DrawCmd::Text {
                x: 10.0,
                y: 20.0,
                text: "Area: 100.00 px²".into()
            })
        );
    }

    #[test]
    fn parallel_diagonals_still_draw_area() {
        let mut e = PolygonGeometryEngine::new();
        for p in [
            vector![0.0, 0.0],
            vector![0.0, 10.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
        ] {
            e.add_point(p);
        }
        let mut rec = Recorder::new();
        render_finish(&mut rec, &RenderCfg::default(), &e.finish());
        assert_eq!(rec.texts(), vec!["14.14 px", "Area: 0.00 px²"]);
    }
}
