/// Integer line rasterization onto a grid of character cells
use crate::geometry::Edge;
use crate::matrix::Mat4x8;

/// Destination for rasterized cells
pub trait Plot {
    fn plot(&mut self, x: i32, y: i32);
}

/// Draw every edge of a transformed vertex set.
///
/// Endpoints are read from row 0 (x) and row 1 (y) of `points` and truncated
/// toward zero before rasterizing.
pub fn draw<P: Plot>(edges: &[Edge], points: &Mat4x8, sink: &mut P) {
    for edge in edges {
        let (x0, y0) = (points[(0, edge.a)] as i32, points[(1, edge.a)] as i32);
        let (x1, y1) = (points[(0, edge.b)] as i32, points[(1, edge.b)] as i32);
        draw_line(x0, y0, x1, y1, sink);
    }
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// Plots `max(|dx|, |dy|) + 1` cells. Endpoints are reordered so the major
/// axis always steps forward, which makes the cell set independent of the
/// direction the line is drawn in.
pub fn draw_line<P: Plot>(x0: i32, y0: i32, x1: i32, y1: i32, sink: &mut P) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if dy * dy < dx * dx {
        if x0 > x1 {
            draw_line_shallow(x1, y1, x0, y0, sink);
        } else {
            draw_line_shallow(x0, y0, x1, y1, sink);
        }
    } else if y0 > y1 {
        draw_line_steep(x1, y1, x0, y0, sink);
    } else {
        draw_line_steep(x0, y0, x1, y1, sink);
    }
}

// Requires x0 <= x1 and |dy| < |dx|.
fn draw_line_shallow<P: Plot>(x0: i32, y0: i32, x1: i32, y1: i32, sink: &mut P) {
    let dx = x1 - x0;
    let (dy, yi) = if y1 < y0 { (y0 - y1, -1) } else { (y1 - y0, 1) };
    let mut d = 2 * dy - dx;
    let mut y = y0;

    for x in x0..=x1 {
        sink.plot(x, y);
        if d > 0 {
            y += yi;
            d -= 2 * dx;
        }
        d += 2 * dy;
    }
}

// Requires y0 <= y1 and |dx| <= |dy|.
fn draw_line_steep<P: Plot>(x0: i32, y0: i32, x1: i32, y1: i32, sink: &mut P) {
    let dy = y1 - y0;
    let (dx, xi) = if x1 < x0 { (x0 - x1, -1) } else { (x1 - x0, 1) };
    let mut d = 2 * dx - dy;
    let mut x = x0;

    for y in y0..=y1 {
        sink.plot(x, y);
        if d > 0 {
            x += xi;
            d -= 2 * dy;
        }
        d += 2 * dx;
    }
}
