use crate::edge_direction::EdgeDirection;

/// Directions in which a way may be traversed.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Directionality {
    Forward,
    Backward,
    Bidirectional,
    /// Not routable for the vehicle at all.
    Inaccessible,
}

impl Directionality {
    pub fn allows(&self, direction: EdgeDirection) -> bool {
        match self {
            Directionality::Bidirectional => true,
            Directionality::Forward => direction == EdgeDirection::Forward,
            Directionality::Backward => direction == EdgeDirection::Backward,
            Directionality::Inaccessible => false,
        }
    }

    pub fn is_accessible(&self) -> bool {
        *self != Directionality::Inaccessible
    }
}
