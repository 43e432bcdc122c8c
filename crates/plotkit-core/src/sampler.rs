//! Path sampling helpers.
//!
//! Stateless producers of raw contour geometry in unit space. A figure
//! layer scales and positions these before converting them to device
//! units with [`to_path_data`]. None of these perform any sequencing;
//! they only supply vertices.

use std::f64::consts::TAU;

use crate::error::ValidationError;
use crate::path::PathData;

/// Minimum segments per sampled edge or curve.
pub const MIN_RESOLUTION: u32 = 1;
/// Maximum segments per sampled edge or curve.
pub const MAX_RESOLUTION: u32 = 1000;

/// Minimum regular polygon corner count.
pub const MIN_POLYGON_VERTICES: u32 = 3;
/// Maximum regular polygon corner count.
pub const MAX_POLYGON_VERTICES: u32 = 20;

/// Minimum spiral winding count.
pub const MIN_SPIRAL_REPEATS: u32 = 1;
/// Maximum spiral winding count.
pub const MAX_SPIRAL_REPEATS: u32 = 50;

fn check_resolution(resolution: u32) -> Result<(), ValidationError> {
    if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        return Err(ValidationError::ResolutionOutOfRange {
            value: resolution,
            min: MIN_RESOLUTION,
            max: MAX_RESOLUTION,
        });
    }
    Ok(())
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    to * t + (1.0 - t) * from
}

/// Samples a straight segment, endpoints included (`resolution + 1` points).
pub fn line(
    begin: (f64, f64),
    end: (f64, f64),
    resolution: u32,
) -> Result<Vec<(f64, f64)>, ValidationError> {
    check_resolution(resolution)?;
    let steps = f64::from(resolution);
    Ok((0..=resolution)
        .map(|i| {
            let t = f64::from(i) / steps;
            (lerp(begin.0, end.0, t), lerp(begin.1, end.1, t))
        })
        .collect())
}

/// Samples a closed polyline through `corners`, `resolution` segments per
/// edge. The ring is closed by returning to the first corner; shared
/// corners appear once per adjoining edge.
pub fn polygon(
    corners: &[(f64, f64)],
    resolution: u32,
) -> Result<Vec<(f64, f64)>, ValidationError> {
    check_resolution(resolution)?;
    if corners.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    let mut points = Vec::with_capacity(corners.len() * (resolution as usize + 1));
    for i in 0..corners.len() {
        let begin = corners[i];
        let end = corners[(i + 1) % corners.len()];
        points.extend(line(begin, end, resolution)?);
    }
    Ok(points)
}

/// Samples the unit square, `resolution` segments per side.
pub fn rect(resolution: u32) -> Result<Vec<(f64, f64)>, ValidationError> {
    polygon(
        &[(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)],
        resolution,
    )
}

/// Samples a regular polygon inscribed in the unit circle.
pub fn ngon(vertex_count: u32, resolution: u32) -> Result<Vec<(f64, f64)>, ValidationError> {
    if !(MIN_POLYGON_VERTICES..=MAX_POLYGON_VERTICES).contains(&vertex_count) {
        return Err(ValidationError::PolygonVertexCountOutOfRange {
            value: vertex_count,
            min: MIN_POLYGON_VERTICES,
            max: MAX_POLYGON_VERTICES,
        });
    }
    let corners: Vec<(f64, f64)> = (0..vertex_count)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(vertex_count);
            (angle.sin(), angle.cos())
        })
        .collect();
    polygon(&corners, resolution)
}

/// Samples the unit circle, closed (first and last points coincide).
pub fn circle(resolution: u32) -> Result<Vec<(f64, f64)>, ValidationError> {
    check_resolution(resolution)?;
    let step = TAU / f64::from(resolution);
    Ok((0..=resolution)
        .map(|i| {
            let angle = f64::from(i) * step;
            (angle.sin(), angle.cos())
        })
        .collect())
}

/// Samples an Archimedean spiral winding `repeats` times out to the unit
/// circle.
pub fn spiral(resolution: u32, repeats: u32) -> Result<Vec<(f64, f64)>, ValidationError> {
    check_resolution(resolution)?;
    if !(MIN_SPIRAL_REPEATS..=MAX_SPIRAL_REPEATS).contains(&repeats) {
        return Err(ValidationError::SpiralRepeatsOutOfRange {
            value: repeats,
            min: MIN_SPIRAL_REPEATS,
            max: MAX_SPIRAL_REPEATS,
        });
    }
    let steps = f64::from(resolution);
    let step = TAU * f64::from(repeats) / steps;
    Ok((0..=resolution)
        .map(|i| {
            let radius = f64::from(i) / steps;
            let angle = f64::from(i) * step;
            (angle.sin() * radius, angle.cos() * radius)
        })
        .collect())
}

/// Scales unit-space points to device units and rounds to integers.
///
/// A scaled coordinate that rounds outside the i32 position range (or is
/// not finite) is rejected, never saturated.
pub fn to_path_data(points: &[(f64, f64)], scale: f64) -> Result<PathData, ValidationError> {
    let mut xs = Vec::with_capacity(points.len());
    let mut ys = Vec::with_capacity(points.len());
    for (index, &(x, y)) in points.iter().enumerate() {
        xs.push(device_unit(x * scale, index)?);
        ys.push(device_unit(y * scale, index)?);
    }
    PathData::new(xs, ys)
}

fn device_unit(value: f64, index: usize) -> Result<i32, ValidationError> {
    let rounded = value.round();
    if !rounded.is_finite()
        || rounded < f64::from(i32::MIN)
        || rounded > f64::from(i32::MAX)
    {
        return Err(ValidationError::CoordinateOutOfRange { index });
    }
    Ok(rounded as i32)
}
