//! The two-phase measurement / layout protocol.
//!
//! Measurement runs bottom-up and produces sizes only. Layout runs bottom-up
//! as well, after measurement has finished for the whole tree, and is the
//! only phase that assigns offsets. Each phase is cached per element by a
//! flag; mutations clear flags and cascade up the parent chain before they
//! return.

use crate::LayoutError;
use crate::containers::ContainerStrategy;
use crate::measure::{TextMeasurer, leaf_size};
use crate::tree::ElementTree;
use figura_types::{ElementId, Size};

impl ElementTree {
    /// Measures `id` and, first, any unmeasured descendant reached through
    /// it. A measured element is returned from cache without any work.
    pub fn measure(
        &mut self,
        id: ElementId,
        measurer: &dyn TextMeasurer,
    ) -> Result<Size, LayoutError> {
        let node = self.get(id)?;
        if node.measured {
            return Ok(node.size);
        }
        let children = node.children.clone();
        for child in children {
            self.measure(child, measurer)?;
        }
        let size = self.perform_measurement(id, measurer)?;
        let node = self.get_mut(id)?;
        node.size = size;
        node.measured = true;
        log::trace!("Measured {} {}: {:?}", node.kind.name(), id, size);
        Ok(size)
    }

    fn perform_measurement(
        &self,
        id: ElementId,
        measurer: &dyn TextMeasurer,
    ) -> Result<Size, LayoutError> {
        let node = self.get(id)?;
        match ContainerStrategy::of(&node.kind) {
            Some(strategy) => strategy.as_strategy().measure(self, id),
            None => leaf_size(&node.kind, &node.box_model, measurer),
        }
    }

    /// Lays out `id` after its children. Never measures; an unmeasured
    /// element is reported as a stale read.
    pub fn layout(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let node = self.get(id)?;
        if node.laid_out {
            return Ok(());
        }
        if !node.measured {
            return Err(LayoutError::StaleCache(id));
        }
        let children = node.children.clone();
        for child in children {
            self.layout(child)?;
        }
        self.perform_layout(id)?;
        self.get_mut(id)?.laid_out = true;
        Ok(())
    }

    fn perform_layout(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let kind = &self.get(id)?.kind;
        let Some(strategy) = ContainerStrategy::of(kind) else {
            return Ok(());
        };
        debug_assert_eq!(strategy.as_strategy().role(), kind.role());
        let size = strategy.as_strategy().layout(self, id)?;
        let node = self.get_mut(id)?;
        if node.size != size {
            log::trace!("Layout resized {} from {:?} to {:?}", id, node.size, size);
        }
        node.size = size;
        Ok(())
    }

    /// Visits the subtree in post-order and measures every element whose
    /// cache is clear.
    ///
    /// Measurement invalidation does not clear ancestors' measurement flags,
    /// so a plain `measure(root)` could stop at a cached parent above a dirty
    /// leaf; the full walk reaches it.
    pub fn measure_tree(
        &mut self,
        root: ElementId,
        measurer: &dyn TextMeasurer,
    ) -> Result<(), LayoutError> {
        for id in self.post_order(root) {
            self.measure(id, measurer)?;
        }
        Ok(())
    }

    /// Lays out the subtree, deepest containers first.
    pub fn layout_tree(&mut self, root: ElementId) -> Result<(), LayoutError> {
        for id in self.post_order(root) {
            self.layout(id)?;
        }
        Ok(())
    }

    /// Clears both caches of `id` and the layout cache of every ancestor.
    pub fn invalidate_measurement(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let node = self.get_mut(id)?;
        node.measured = false;
        node.laid_out = false;
        self.invalidate_ancestors(id)
    }

    /// Clears the layout cache of `id` and every ancestor.
    pub fn invalidate_layout(&mut self, id: ElementId) -> Result<(), LayoutError> {
        self.get_mut(id)?.laid_out = false;
        self.invalidate_ancestors(id)
    }

    fn invalidate_ancestors(&mut self, id: ElementId) -> Result<(), LayoutError> {
        let ancestors: Vec<ElementId> = self.ancestors(id).collect();
        for ancestor in ancestors {
            self.get_mut(ancestor)?.laid_out = false;
        }
        Ok(())
    }

    /// Size produced by the last measurement.
    pub fn measured_size(&self, id: ElementId) -> Result<Size, LayoutError> {
        let node = self.get(id)?;
        if !node.measured {
            return Err(LayoutError::StaleCache(id));
        }
        Ok(node.size)
    }

    /// First element under `root`, in pre-order, with a clear cache flag.
    pub fn first_dirty(&self, root: ElementId) -> Option<ElementId> {
        self.pre_order(root)
            .into_iter()
            .find(|id| self.get(*id).map_or(true, |n| n.is_dirty()))
    }
}
