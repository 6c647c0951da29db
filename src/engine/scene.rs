// Scene graph: ordered march-then-render iteration

use super::surface::Surface;
use super::EngineError;

/// Capability contract for anything the scene can drive.
///
/// One tick touches each node twice, in order: `march` advances logic and
/// animation state, then `render` draws the post-march state.
pub trait SceneNode {
    fn march(&mut self) -> Result<(), EngineError>;
    fn render(&self, surface: &mut dyn Surface) -> Result<(), EngineError>;
}

/// Ordered collection of scene nodes.
///
/// Insertion order is iteration order and therefore draw order: nodes added
/// later draw on top.
#[derive(Default)]
pub struct Scene {
    graph: Vec<Box<dyn SceneNode>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. It draws above everything added before it.
    pub fn add_node(&mut self, node: Box<dyn SceneNode>) {
        self.graph.push(node);
    }

    /// Drive one tick across the graph.
    ///
    /// Each node is marched and then immediately rendered before the next
    /// node is touched, so a node's render always reflects its own post-march
    /// state and earlier nodes are fully done before later ones start. The
    /// first error aborts the pass and propagates.
    pub fn iterate(&mut self, surface: &mut dyn Surface) -> Result<(), EngineError> {
        for node in &mut self.graph {
            node.march()?;
            node.render(surface)?;
        }
        Ok(())
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}
