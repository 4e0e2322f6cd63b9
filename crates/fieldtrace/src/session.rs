//! One tracing session: an engine plus the layout used to draw its output.
//!
//! UI event handlers hold a `Session` (no ambient state) and forward canvas
//! clicks and the finish trigger to it. Each call runs to completion; the
//! `&mut self` / `&self` split keeps clicks and finish from interleaving.

use crate::engine::{EdgeAnnotation, FinishResult, PolygonGeometryEngine};
use crate::geom2::Point;
use crate::render::{render_click, render_finish, RenderCfg, Surface};

#[derive(Clone, Debug, Default)]
pub struct Session {
    engine: PolygonGeometryEngine,
    cfg: RenderCfg,
}

impl Session {
    pub fn new(cfg: RenderCfg) -> Self {
        Self {
            engine: PolygonGeometryEngine::new(),
            cfg,
        }
    }

    /// Canvas click at local coordinates `(x, y)`.
    pub fn click<S: Surface + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        surface: &mut S,
    ) -> Option<EdgeAnnotation> {
        let p = Point::new(x, y);
        let edge = self.engine.add_point(p);
        render_click(surface, &self.cfg, p, edge.as_ref());
        edge
    }

    /// Finish trigger: compute and draw the closing annotations.
    pub fn finish<S: Surface + ?Sized>(&self, surface: &mut S) -> FinishResult {
        let result = self.engine.finish();
        render_finish(surface, &self.cfg, &result);
        result
    }

    /// Drop all points. Clearing the canvas is up to the caller.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn engine(&self) -> &PolygonGeometryEngine {
        &self.engine
    }

    pub fn cfg(&self) -> &RenderCfg {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCmd, Recorder};

    #[test]
    fn clicks_then_finish_on_square() {
        let mut s = Session::default();
        let mut rec = Recorder::new();
        assert!(s.click(0.0, 0.0, &mut rec).is_none());
        let edges: Vec<_> = [(10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .filter_map(|(x, y)| s.click(x, y, &mut rec))
            .map(|e| e.label)
            .collect();
        assert_eq!(edges, vec!["10.00 px"; 3]);
        // 4 markers + 3 x (line + label)
        assert_eq!(rec.cmds.len(), 4 + 6);

        let result = s.finish(&mut rec);
        assert!(matches!(result, FinishResult::Polygon(ref r) if r.area == 100.0));
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
    fn reset_clears_points_between_sessions() {
        let mut s = Session::default();
        let mut rec = Recorder::new();
        for (x, y) in [(0.0, 0.0), (6.0, 0.0), (0.0, 6.0)] {
            s.click(x, y, &mut rec);
        }
        s.reset();
        assert!(s.engine().is_empty());
        let before = rec.cmds.len();
        assert_eq!(s.finish(&mut rec), FinishResult::TooFew);
        assert_eq!(rec.cmds.len(), before);
    }
}
