use std::{cmp::Ordering, collections::BTreeMap};

use num_traits::Float;

use crate::{
    IsClose, Shape, Tolerance,
    cartesian::{Point, Segment},
    clipper::{Role, Unknown, chain::Fragment},
};

/// A vertex in the graph, linked to the vertex following it in its boundary.
#[derive(Debug, Clone, Copy)]
pub(super) struct Node<T> {
    /// The location of the vertex.
    pub(super) vertex: Point<T>,
    /// The position of the boundary this node belongs to.
    pub(super) boundary: usize,
    /// The position of the node following this one.
    pub(super) next: usize,
}

/// The entrypoint of a closed list of nodes.
#[derive(Debug, Clone, Copy)]
pub(super) struct Boundary {
    /// The position of any node in the boundary.
    pub(super) entrypoint: usize,
    /// The operand the boundary comes from.
    pub(super) role: Role,
}

/// The boundaries of both operands, split at every point where they meet.
#[derive(Debug)]
pub(super) struct Graph<T> {
    pub(super) nodes: Vec<Node<T>>,
    pub(super) boundaries: Vec<Boundary>,
}

impl<T> Graph<T>
where
    T: Float,
{
    pub(super) fn builder(tolerance: &Tolerance<T>) -> GraphBuilder<'_, T, Unknown, Unknown> {
        GraphBuilder {
            nodes: Vec::new(),
            boundaries: Vec::new(),
            subject: Unknown,
            clip: Unknown,
            tolerance,
        }
    }

    /// Returns all the non-degenerate edges of the graph.
    pub(super) fn fragments(&self, tolerance: &Tolerance<T>) -> Vec<Fragment<T>> {
        self.boundaries
            .iter()
            .flat_map(|boundary| {
                LocateEdges {
                    nodes: &self.nodes,
                    start: boundary.entrypoint,
                    next: None,
                }
                .map(move |location| Fragment {
                    from: *location.edge.from,
                    to: *location.edge.to,
                    role: boundary.role,
                })
            })
            .filter(|fragment| !fragment.from.is_close(&fragment.to, tolerance))
            .collect()
    }
}

/// An edge and its location in the graph.
struct EdgeLocation<'a, T> {
    /// The actual edge.
    edge: Segment<'a, T>,
    /// The position in the graph of the first endpoint of the edge.
    position: usize,
}

/// Yields all the edges of the boundary starting at the given position.
struct LocateEdges<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<usize>,
    start: usize,
}

impl<'a, T> Iterator for LocateEdges<'a, T> {
    type Item = EdgeLocation<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current) = self.next
            && current == self.start
        {
            return None;
        }

        let position = self.next.unwrap_or(self.start);
        let node = &self.nodes[position];
        self.next = Some(node.next);

        Some(EdgeLocation {
            edge: Segment::new(&node.vertex, &self.nodes[node.next].vertex),
            position,
        })
    }
}

/// The intersection between two edges.
#[derive(Debug, Clone, Copy)]
struct EdgeIntersection<T> {
    /// The point of intersection between the edges.
    vertex: Point<T>,
    /// The position in the graph of the intersecting subject edge.
    subject: usize,
    /// The position in the graph of the intersecting clip edge.
    clip: usize,
}

/// All the intersections between the edges of a subject and clip [`Shape`]s.
struct EdgeIntersections<T> {
    /// The intersections between subject and clip shape.
    all: Vec<EdgeIntersection<T>>,
    /// The position of the intersections grouped by edge.
    by_edge: BTreeMap<usize, Vec<usize>>,
}

impl<T> Default for EdgeIntersections<T> {
    fn default() -> Self {
        Self {
            all: Default::default(),
            by_edge: Default::default(),
        }
    }
}

impl<T> EdgeIntersections<T>
where
    T: Float,
{
    /// Registers the given intersection.
    ///
    /// The coordinates of an intersection close to an already registered one are replaced by
    /// the registered ones, so both operands get split at the very same point.
    fn with_intersection(mut self, mut intersection: EdgeIntersection<T>, tolerance: &Tolerance<T>) -> Self {
        if let Some(known) = self
            .all
            .iter()
            .find(|known| known.vertex.is_close(&intersection.vertex, tolerance))
        {
            intersection.vertex = known.vertex;
        }

        let index = self.all.len();
        self.by_edge.entry(intersection.subject).or_default().push(index);
        self.by_edge.entry(intersection.clip).or_default().push(index);
        self.all.push(intersection);
        self
    }
}

/// Builds a [`Graph`] out of a subject and a clip [`Shape`].
pub(super) struct GraphBuilder<'a, T, S, C> {
    /// The nodes of both shapes, plus those added when splitting edges.
    nodes: Vec<Node<T>>,
    /// The boundaries of both shapes.
    boundaries: Vec<Boundary>,
    /// The shape being clipped.
    subject: S,
    /// The shape clipping the subject.
    clip: C,
    /// The tolerance to use during building.
    tolerance: &'a Tolerance<T>,
}

impl<'a, T, C> GraphBuilder<'a, T, Unknown, C>
where
    T: Float,
{
    /// Sets the subject [`Shape`] into the graph.
    pub(super) fn with_subject(self, subject: &'a Shape<T>) -> GraphBuilder<'a, T, &'a Shape<T>, C> {
        let builder = self.with_shape(Role::Subject, subject);

        GraphBuilder {
            nodes: builder.nodes,
            boundaries: builder.boundaries,
            clip: builder.clip,
            subject,
            tolerance: builder.tolerance,
        }
    }
}

impl<'a, T, S> GraphBuilder<'a, T, S, Unknown>
where
    T: Float,
{
    /// Sets the clip [`Shape`] into the graph.
    pub(super) fn with_clip(self, clip: &'a Shape<T>) -> GraphBuilder<'a, T, S, &'a Shape<T>> {
        let builder = self.with_shape(Role::Clip, clip);

        GraphBuilder {
            nodes: builder.nodes,
            boundaries: builder.boundaries,
            subject: builder.subject,
            clip,
            tolerance: builder.tolerance,
        }
    }
}

impl<T, S, C> GraphBuilder<'_, T, S, C>
where
    T: Float,
{
    fn with_shape(mut self, role: Role, shape: &Shape<T>) -> Self {
        for ring in shape.boundaries.iter().filter(|ring| ring.len() >= 3) {
            let base = self.nodes.len();
            let boundary = self.boundaries.len();
            let total = ring.len();

            self.boundaries.push(Boundary {
                entrypoint: base,
                role,
            });

            self.nodes
                .extend(ring.vertices().iter().enumerate().map(|(position, &vertex)| Node {
                    vertex,
                    boundary,
                    next: base + (position + 1) % total,
                }));
        }

        self
    }
}

impl<T> GraphBuilder<'_, T, &Shape<T>, &Shape<T>>
where
    T: Float,
{
    pub(super) fn build(mut self) -> Graph<T> {
        self.weld();

        let intersections = self.intersections();
        for (position, mut indexes) in intersections.by_edge {
            let Node {
                vertex: first,
                boundary,
                next,
            } = self.nodes[position];

            let last = self.nodes[next].vertex;

            indexes.sort_by(|&a, &b| {
                first
                    .distance(&intersections.all[a].vertex)
                    .partial_cmp(&first.distance(&intersections.all[b].vertex))
                    .unwrap_or(Ordering::Equal)
            });

            indexes
                .chunk_by(|&a, &b| intersections.all[a].vertex == intersections.all[b].vertex)
                .map(|chunk| intersections.all[chunk[0]].vertex)
                .filter(|vertex| {
                    !vertex.is_close(&first, self.tolerance) && !vertex.is_close(&last, self.tolerance)
                })
                .fold(position, |previous, vertex| {
                    let index = self.nodes.len();
                    let next = self.nodes[previous].next;
                    self.nodes.push(Node {
                        vertex,
                        boundary,
                        next,
                    });

                    self.nodes[previous].next = index;
                    index
                });
        }

        Graph {
            nodes: self.nodes,
            boundaries: self.boundaries,
        }
    }

    /// Moves every clip vertex close to a subject vertex onto the latter.
    fn weld(&mut self) {
        let subject: Vec<Point<T>> = self
            .nodes
            .iter()
            .filter(|node| self.boundaries[node.boundary].role == Role::Subject)
            .map(|node| node.vertex)
            .collect();

        for node in self.nodes.iter_mut() {
            if self.boundaries[node.boundary].role != Role::Clip {
                continue;
            }

            if let Some(vertex) = subject
                .iter()
                .find(|vertex| vertex.is_close(&node.vertex, self.tolerance))
            {
                node.vertex = *vertex;
            }
        }
    }

    /// Returns an iterator over the edges of all the boundaries with the given role.
    fn edges(&self, role: Role) -> impl Iterator<Item = EdgeLocation<'_, T>> {
        self.boundaries
            .iter()
            .filter(move |boundary| boundary.role == role)
            .flat_map(move |boundary| LocateEdges {
                nodes: &self.nodes,
                start: boundary.entrypoint,
                next: None,
            })
    }

    /// Returns all the intersections between subject and clip edges.
    fn intersections(&self) -> EdgeIntersections<T> {
        let mut intersections = EdgeIntersections::default();
        let (Some(subject), Some(clip)) = (self.subject.bounding_box(), self.clip.bounding_box())
        else {
            return intersections;
        };

        if !subject.intersects(&clip) {
            return intersections;
        }

        for subject in self.edges(Role::Subject) {
            for clip in self.edges(Role::Clip) {
                let Some(intersection) = subject.edge.intersection(&clip.edge, self.tolerance)
                else {
                    continue;
                };

                for vertex in intersection {
                    intersections = intersections.with_intersection(
                        EdgeIntersection {
                            vertex,
                            subject: subject.position,
                            clip: clip.position,
                        },
                        self.tolerance,
                    );
                }
            }
        }

        intersections
    }
}
