/// Number of configured items the shopper has added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartState {
    item_count: u32,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one item and return the new count.
    pub fn add(&mut self) -> u32 {
        self.item_count = self.item_count.saturating_add(1);
        self.item_count
    }

    pub fn reset(&mut self) {
        self.item_count = 0;
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
