use super::DrawCmd;

/// Recorded draw stream for one frame.
///
/// Commands paint in insertion order, back to front. `clear` keeps the
/// allocation, so a host that reuses one list per surface pays for the
/// command buffer once, not per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands but keeps capacity for the next frame.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push_filled_circle(Vec2::zero(), 5.0, Color::from_rgb(1, 2, 3));
        list.push_dot(Vec2::zero(), 1.0, Color::from_rgb(4, 5, 6));

        assert_eq!(list.len(), 2);
        assert!(matches!(list.items()[0], DrawCmd::FilledCircle(_)));
        assert!(matches!(list.items()[1], DrawCmd::Dot(_)));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = DrawList::new();
        list.push_dot(Vec2::zero(), 1.0, Color::TRANSPARENT);
        list.clear();
        assert!(list.is_empty());
    }
}
