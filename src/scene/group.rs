use crate::scene::node::{Body, FrameCtx, Step};

/// A node that owns an ordered list of child nodes.
///
/// Stepping a group steps each child in insertion order, each one to completion before the
/// next starts. The group's own [`Body`] is not advanced.
#[derive(Default)]
pub struct NodeGroup {
    pub body: Body,
    children: Vec<Box<dyn Step>>,
}

impl NodeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, child: impl Step + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Step + 'static) {
        self.children.push(Box::new(child));
    }

    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, child: impl Step + 'static) {
        self.children.insert(index, Box::new(child));
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Step>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Step>] {
        &mut self.children
    }
}

impl Step for NodeGroup {
    fn step(&mut self, ctx: &mut FrameCtx<'_>) {
        for child in &mut self.children {
            child.step(ctx);
        }
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn children(&self) -> &[Box<dyn Step>] {
        &self.children
    }
}

impl std::fmt::Debug for NodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeGroup")
            .field("body", &self.body)
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/group.rs"]
mod tests;
