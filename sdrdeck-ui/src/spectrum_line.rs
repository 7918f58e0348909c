use eframe::egui::{Mesh, Pos2, Rect, Shape, Stroke, pos2};
use eframe::epaint::{Color32, Vertex, WHITE_UV};

use crate::colormap::ColorWindow;

const LINE_COLOR: Color32 = Color32::from_rgba_premultiplied(0x43, 0xc8, 0x73, 0xe6);
const FILL_COLOR: Color32 = Color32::from_rgba_premultiplied(0x03, 0x14, 0x09, 0x1a);
const IDLE_COLOR: Color32 = Color32::from_rgb(0x14, 0x53, 0x2d);

/// Geometry of the spectrum plot for one pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    /// One vertex per frame bin, with the fill running down to `baseline`.
    Live { points: Vec<Pos2>, baseline: f32 },
    /// Receiver stopped: a flat line across the middle of the plot.
    Idle { y: f32, left: f32, right: f32 },
}

impl Trace {
    /// Bin `i` of `n` sits at `x = left + i / (n - 1) * width`. Values are
    /// placed with `window`, whose max is the top edge of `rect`.
    pub fn live(bins: &[f32], rect: Rect, window: ColorWindow) -> Self {
        let n = bins.len();
        let last = n.saturating_sub(1).max(1) as f32;
        let points = bins
            .iter()
            .enumerate()
            .map(|(i, &db)| {
                let x = rect.left() + i as f32 / last * rect.width();
                let y = rect.bottom() - window.normalize(db) * rect.height();
                pos2(x, y)
            })
            .collect();
        Self::Live {
            points,
            baseline: rect.bottom(),
        }
    }

    pub fn idle(rect: Rect) -> Self {
        Self::Idle {
            y: rect.center().y,
            left: rect.left(),
            right: rect.right(),
        }
    }

    pub fn shapes(&self) -> Vec<Shape> {
        match self {
            Self::Live { points, baseline } => {
                if points.len() < 2 {
                    return Vec::new();
                }
                vec![
                    Shape::mesh(fill_under(points, *baseline, FILL_COLOR)),
                    Shape::line(points.clone(), Stroke::new(1.0, LINE_COLOR)),
                ]
            }
            Self::Idle { y, left, right } => vec![Shape::line_segment(
                [pos2(*left, *y), pos2(*right, *y)],
                Stroke::new(1.0, IDLE_COLOR),
            )],
        }
    }
}

/// Two triangles per segment between the trace and the baseline.
fn fill_under(points: &[Pos2], baseline: f32, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    for &pos in points {
        mesh.vertices.push(Vertex {
            pos,
            uv: WHITE_UV,
            color,
        });
        mesh.vertices.push(Vertex {
            pos: pos2(pos.x, baseline),
            uv: WHITE_UV,
            color,
        });
    }
    for i in 0..points.len().saturating_sub(1) {
        let base = (i * 2) as u32;
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
    }
    mesh
}
