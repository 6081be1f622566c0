use crate::shading::{shade_rgb, ScreenQuad};
use glam::Vec2;
use scene_core::Viewport;
use std::f64::consts::TAU;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, viewport: Viewport) {
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
}

pub fn fill_background(ctx: &web::CanvasRenderingContext2d, viewport: Viewport, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
}

pub fn stroke_circle(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32) {
    ctx.begin_path();
    _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    ctx.stroke();
}

pub fn fill_disc(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    ctx.fill();
}

pub fn trace_polygon(ctx: &web::CanvasRenderingContext2d, points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.close_path();
}

pub fn fill_polygon(ctx: &web::CanvasRenderingContext2d, points: &[Vec2], color: &str) {
    trace_polygon(ctx, points);
    ctx.set_fill_style_str(color);
    ctx.fill();
}

/// Fill lit quads in the order given; callers sort them first.
pub fn fill_quads(ctx: &web::CanvasRenderingContext2d, quads: &[ScreenQuad], rgb: [f32; 3]) {
    for q in quads {
        fill_polygon(ctx, &q.points, &shade_rgb(rgb, q.shade));
    }
}

/// Stroke a three-point path as two cubic segments through the middle point.
pub fn stroke_smooth_path(
    ctx: &web::CanvasRenderingContext2d,
    points: &[Vec2],
    handle_in: Vec2,
    handle_out: Vec2,
) {
    if points.len() < 3 {
        return;
    }
    let (a, m, b) = (points[0], points[1], points[2]);
    let cin = m + handle_in;
    let cout = m + handle_out;
    ctx.begin_path();
    ctx.move_to(a.x as f64, a.y as f64);
    bezier_to(ctx, a, cin, m);
    bezier_to(ctx, cout, b, b);
    ctx.stroke();
}

fn bezier_to(ctx: &web::CanvasRenderingContext2d, c1: Vec2, c2: Vec2, to: Vec2) {
    ctx.bezier_curve_to(
        c1.x as f64,
        c1.y as f64,
        c2.x as f64,
        c2.y as f64,
        to.x as f64,
        to.y as f64,
    );
}
