use std::collections::BTreeSet;

use glam::Vec3;

/// Relative tolerance used when matching edge lengths.
const EDGE_TOLERANCE: f32 = 1e-4;

/// Convex solid centered at the origin: vertex positions plus polygonal faces.
///
/// Faces are vertex index cycles wound counter-clockwise around their outward
/// normal (`(b - a) x (c - a)` points away from the center). Positions are
/// scaled to unit circumradius.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub positions: Vec<Vec3>,
    pub faces: Vec<Vec<u16>>,
}

impl Polyhedron {
    pub fn tetrahedron() -> Self {
        Self::deltahedron(vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        ])
    }

    pub fn hexahedron() -> Self {
        let positions = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ];
        let faces = vec![
            vec![0, 1, 2, 3], // -z
            vec![4, 5, 6, 7], // +z
            vec![0, 1, 5, 4], // -y
            vec![3, 2, 6, 7], // +y
            vec![0, 3, 7, 4], // -x
            vec![1, 2, 6, 5], // +x
        ];
        Self::from_faces(positions, faces)
    }

    pub fn octahedron() -> Self {
        Self::deltahedron(vec![
            Vec3::Y,
            Vec3::X,
            Vec3::Z,
            Vec3::NEG_X,
            Vec3::NEG_Z,
            Vec3::NEG_Y,
        ])
    }

    pub fn icosahedron() -> Self {
        let phi = (1.0 + 5.0f32.sqrt()) * 0.5;
        Self::deltahedron(vec![
            Vec3::new(0.0, 1.0, phi),
            Vec3::new(0.0, -1.0, phi),
            Vec3::new(0.0, 1.0, -phi),
            Vec3::new(0.0, -1.0, -phi),
            Vec3::new(1.0, phi, 0.0),
            Vec3::new(-1.0, phi, 0.0),
            Vec3::new(1.0, -phi, 0.0),
            Vec3::new(-1.0, -phi, 0.0),
            Vec3::new(phi, 0.0, 1.0),
            Vec3::new(-phi, 0.0, 1.0),
            Vec3::new(phi, 0.0, -1.0),
            Vec3::new(-phi, 0.0, -1.0),
        ])
    }

    pub fn dodecahedron() -> Self {
        Self::icosahedron().dual()
    }

    /// Builds a solid from positions and face cycles of arbitrary winding.
    pub fn from_faces(positions: Vec<Vec3>, faces: Vec<Vec<u16>>) -> Self {
        let mut poly = Self { positions, faces };
        poly.orient_outward();
        poly.normalize();
        poly
    }

    /// Triangle-faced solid: every vertex triple whose pairwise distances all
    /// equal the shortest edge is a face.
    fn deltahedron(positions: Vec<Vec3>) -> Self {
        let n = positions.len();

        let mut edge = f32::INFINITY;
        for i in 0..n {
            for j in (i + 1)..n {
                edge = edge.min(positions[i].distance(positions[j]));
            }
        }

        let is_edge =
            |a: usize, b: usize| (positions[a].distance(positions[b]) - edge).abs() <= edge * EDGE_TOLERANCE;

        let mut faces = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if !is_edge(i, j) {
                    continue;
                }
                for k in (j + 1)..n {
                    if is_edge(i, k) && is_edge(j, k) {
                        faces.push(vec![i as u16, j as u16, k as u16]);
                    }
                }
            }
        }

        Self::from_faces(positions, faces)
    }

    /// Dual solid: face centroids become vertices, and each vertex becomes a
    /// face joining the centroids of the faces around it.
    pub fn dual(&self) -> Self {
        let positions: Vec<Vec3> = self.faces.iter().map(|f| self.face_centroid(f)).collect();

        let faces = (0..self.positions.len())
            .map(|v| {
                let axis = self.positions[v].normalize_or_zero();

                let around: Vec<(usize, Vec3)> = self
                    .faces
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.contains(&(v as u16)))
                    .map(|(fi, _)| {
                        let c = positions[fi];
                        (fi, c - axis * c.dot(axis))
                    })
                    .collect();

                let Some(&(_, reference)) = around.first() else {
                    return Vec::new();
                };
                let u = reference.normalize_or_zero();
                let w = axis.cross(u);

                let mut ordered: Vec<(f32, u16)> = around
                    .iter()
                    .map(|&(fi, d)| (d.dot(w).atan2(d.dot(u)), fi as u16))
                    .collect();
                ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
                ordered.into_iter().map(|(_, fi)| fi).collect()
            })
            .collect();

        Self::from_faces(positions, faces)
    }

    /// Area-weighted face normal (Newell); not normalized.
    pub fn face_normal(&self, face: &[u16]) -> Vec3 {
        let mut n = Vec3::ZERO;
        for (i, &a) in face.iter().enumerate() {
            let b = face[(i + 1) % face.len()];
            n += self.positions[a as usize].cross(self.positions[b as usize]);
        }
        n
    }

    pub fn face_centroid(&self, face: &[u16]) -> Vec3 {
        if face.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = face.iter().map(|&i| self.positions[i as usize]).sum();
        sum / face.len() as f32
    }

    /// Unique undirected polygon edges, each as `(low, high)`.
    pub fn edges(&self) -> Vec<(u16, u16)> {
        let mut set = BTreeSet::new();
        for face in &self.faces {
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                set.insert((a.min(b), a.max(b)));
            }
        }
        set.into_iter().collect()
    }

    /// `V - E + F`; 2 for any closed convex solid.
    pub fn euler_characteristic(&self) -> i64 {
        self.positions.len() as i64 - self.edges().len() as i64 + self.faces.len() as i64
    }

    fn orient_outward(&mut self) {
        for i in 0..self.faces.len() {
            let n = self.face_normal(&self.faces[i]);
            let c = self.face_centroid(&self.faces[i]);
            if n.dot(c) < 0.0 {
                self.faces[i].reverse();
            }
        }
    }

    fn normalize(&mut self) {
        let radius = self.positions.iter().map(|p| p.length()).fold(0.0f32, f32::max);
        if radius > f32::EPSILON {
            for p in &mut self.positions {
                *p /= radius;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<(&'static str, Polyhedron, usize, usize, usize)> {
        // (name, solid, vertices, edges, faces)
        vec![
            ("tetrahedron", Polyhedron::tetrahedron(), 4, 6, 4),
            ("hexahedron", Polyhedron::hexahedron(), 8, 12, 6),
            ("octahedron", Polyhedron::octahedron(), 6, 12, 8),
            ("dodecahedron", Polyhedron::dodecahedron(), 20, 30, 12),
            ("icosahedron", Polyhedron::icosahedron(), 12, 30, 20),
        ]
    }

    #[test]
    fn combinatorial_counts_match_platonic_solids() {
        for (name, p, v, e, f) in all() {
            assert_eq!(p.positions.len(), v, "{name} vertices");
            assert_eq!(p.edges().len(), e, "{name} edges");
            assert_eq!(p.faces.len(), f, "{name} faces");
            assert_eq!(p.euler_characteristic(), 2, "{name} euler");
        }
    }

    #[test]
    fn faces_are_regular_polygons_of_expected_degree() {
        let degree = [3, 4, 3, 5, 3];
        for ((name, p, ..), d) in all().into_iter().zip(degree) {
            assert!(p.faces.iter().all(|f| f.len() == d), "{name} face degree");
        }
    }

    #[test]
    fn every_face_winds_outward() {
        for (name, p, ..) in all() {
            for face in &p.faces {
                let n = p.face_normal(face);
                let c = p.face_centroid(face);
                assert!(n.dot(c) > 0.0, "{name} face {face:?} winds inward");
            }
        }
    }

    #[test]
    fn positions_lie_on_unit_sphere() {
        for (name, p, ..) in all() {
            for pos in &p.positions {
                assert!((pos.length() - 1.0).abs() < 1e-5, "{name} radius {}", pos.length());
            }
        }
    }

    #[test]
    fn all_edges_have_equal_length() {
        for (name, p, ..) in all() {
            let lengths: Vec<f32> = p
                .edges()
                .iter()
                .map(|&(a, b)| p.positions[a as usize].distance(p.positions[b as usize]))
                .collect();
            let min = lengths.iter().copied().fold(f32::INFINITY, f32::min);
            let max = lengths.iter().copied().fold(0.0, f32::max);
            assert!(max - min < 1e-4, "{name} edge lengths {min}..{max}");
        }
    }

    #[test]
    fn dodecahedron_faces_are_planar() {
        let p = Polyhedron::dodecahedron();
        for face in &p.faces {
            let n = p.face_normal(face).normalize();
            let c = p.face_centroid(face);
            for &i in face {
                let off = (p.positions[i as usize] - c).dot(n);
                assert!(off.abs() < 1e-4, "vertex {i} off plane by {off}");
            }
        }
    }

    #[test]
    fn octahedron_keeps_axis_vertex_order() {
        let p = Polyhedron::octahedron();
        assert_eq!(p.positions[0], Vec3::Y);
        assert_eq!(p.positions[5], Vec3::NEG_Y);
    }
}
