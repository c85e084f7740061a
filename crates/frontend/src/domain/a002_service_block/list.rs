use super::block::{ServiceBlock, ServiceBlockId};
use contracts::usecases::u001_submit_application::ServiceEntry;

/// Ordered collection of the live service blocks
///
/// Blocks are kept in insertion (= document) order and are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceList {
    blocks: Vec<ServiceBlock>,
}

impl ServiceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new block made by the factory
    pub fn add_block(&mut self) -> ServiceBlockId {
        let block = ServiceBlock::new();
        let id = block.id;
        self.blocks.push(block);
        id
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn ids(&self) -> Vec<ServiceBlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    pub fn block(&self, id: ServiceBlockId) -> Option<&ServiceBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: ServiceBlockId) -> Option<&mut ServiceBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Current values of every block, in document order
    pub fn extract_all(&self) -> Vec<ServiceEntry> {
        self.blocks.iter().map(ServiceBlock::to_entry).collect()
    }
}
