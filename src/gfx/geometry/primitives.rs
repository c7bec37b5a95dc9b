//! # Primitive Shape Generation
//!
//! All shapes are centered at the origin, Y-up, with outward normals and
//! UV coordinates in `0..=1`.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Number of longitude segments (at least 3)
/// * `height_segments` - Number of latitude segments (at least 2)
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = width_segments.max(3);
    let lat_segs = height_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.push(
                [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
                [long as f32 / long_segs as f32, lat as f32 / lat_segs as f32],
            );
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;
            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate an axis-aligned box of the given dimensions
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);

    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];

    for (normal, u_axis, v_axis) in faces {
        let base = data.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut position = [0.0f32; 3];
            for k in 0..3 {
                position[k] = normal[k] + u_axis[k] * su + v_axis[k] * sv;
            }
            position[0] *= hx;
            position[1] *= hy;
            position[2] *= hz;
            data.push(position, normal, [(su + 1.0) * 0.5, (sv + 1.0) * 0.5]);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a torus lying in the XY plane
///
/// # Arguments
/// * `radius` - Distance from the center to the middle of the tube
/// * `tube` - Tube radius
/// * `radial_segments` - Segments around the tube cross-section
/// * `tubular_segments` - Segments along the ring
pub fn generate_torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * 2.0 * PI;
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * 2.0 * PI;
            let (sin_u, cos_u) = u.sin_cos();

            let ring = radius + tube * cos_v;
            let position = [ring * cos_u, ring * sin_u, tube * sin_v];
            let normal = [cos_v * cos_u, cos_v * sin_u, sin_v];
            data.push(
                position,
                normal,
                [i as f32 / tubular as f32, j as f32 / radial as f32],
            );
        }
    }

    for j in 1..=radial {
        for i in 1..=tubular {
            let a = (tubular + 1) * j + i - 1;
            let b = (tubular + 1) * (j - 1) + i - 1;
            let c = (tubular + 1) * (j - 1) + i;
            let d = (tubular + 1) * j + i;
            data.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    data
}

/// Generate a flat-shaded icosahedron with the given circumradius
pub fn generate_icosahedron(radius: f32) -> GeometryData {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let corners: [[f32; 3]; 12] = [
        [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
        [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
        [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
    ];
    let faces: [[usize; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    let scale = radius / (1.0 + t * t).sqrt();
    let mut data = GeometryData::new();

    for face in faces {
        let p = face.map(|i| corners[i].map(|c| c * scale));
        let normal = normalize(cross(sub(p[1], p[0]), sub(p[2], p[0])));
        let base = data.push(p[0], normal, [0.0, 0.0]);
        data.push(p[1], normal, [1.0, 0.0]);
        data.push(p[2], normal, [0.5, 1.0]);
        data.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    data
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length > 0.0 {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        v
    }
}
