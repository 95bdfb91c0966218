use std::io::{self, Write};

use slotmap::SecondaryMap;

use super::{Polytope, VertexId};

impl Polytope {
    /// Writes the polytope in SVT text format for external debug viewers.
    ///
    /// ```text
    /// -----
    /// Points:
    /// x y z
    /// Edges:
    /// i j
    /// Faces:
    /// i j k
    /// ```
    ///
    /// Indices are 0-based positions in vertex insertion order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn dump_svt<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut index: SecondaryMap<VertexId, usize> = SecondaryMap::new();

        writeln!(out, "-----")?;
        writeln!(out, "Points:")?;
        for (i, id) in self.vertices().enumerate() {
            if let Some(vertex) = self.vertices.get(id) {
                index.insert(id, i);
                let p = vertex.point();
                writeln!(out, "{} {} {}", p.x, p.y, p.z)?;
            }
        }

        writeln!(out, "Edges:")?;
        for id in self.edges() {
            if let Some(edge) = self.edges.get(id) {
                let [a, b] = edge.vertices();
                if let (Some(a), Some(b)) = (index.get(a), index.get(b)) {
                    writeln!(out, "{a} {b}")?;
                }
            }
        }

        writeln!(out, "Faces:")?;
        for id in self.faces() {
            if let Ok([a, b, c]) = self.face_vertices(id) {
                if let (Some(a), Some(b), Some(c)) = (index.get(a), index.get(b), index.get(c)) {
                    writeln!(out, "{a} {b} {c}")?;
                }
            }
        }

        out.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::math::Point3;
    use crate::polytope::Polytope;

    #[test]
    fn dump_lists_points_edges_and_faces() {
        let mut pt = Polytope::new();
        let a = pt.add_vertex(Point3::new(0.0, 0.0, 1.0));
        let b = pt.add_vertex(Point3::new(1.0, 0.0, 1.0));
        let c = pt.add_vertex(Point3::new(0.0, 1.0, 1.5));
        let ab = pt.add_edge(a, b).unwrap();
        let bc = pt.add_edge(b, c).unwrap();
        let ca = pt.add_edge(c, a).unwrap();
        pt.add_face(ab, bc, ca).unwrap();

        let mut buf = Vec::new();
        pt.dump_svt(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "-----\nPoints:\n0 0 1\n1 0 1\n0 1 1.5\nEdges:\n0 1\n1 2\n2 0\nFaces:\n0 1 2\n"
        );
    }

    #[test]
    fn dump_of_empty_polytope_has_headers_only() {
        let mut buf = Vec::new();
        Polytope::new().dump_svt(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "-----\nPoints:\nEdges:\nFaces:\n"
        );
    }
}
