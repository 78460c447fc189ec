/// Fixed-size inventory with stacking slots
/// Invariant: a slot has a kind iff its count is positive, and counts never
/// exceed MAX_STACK. All mutation goes through `add`/`consume_selected`,
/// which preserve the invariant atomically.
use crate::voxel::Voxel;

pub const INVENTORY_SLOTS: usize = 36;
pub const HOTBAR_SLOTS: usize = 9;
pub const MAX_STACK: u8 = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    pub kind: Option<Voxel>,
    pub count: u8,
}

impl Slot {
    pub const EMPTY: Slot = Slot { kind: None, count: 0 };

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub struct Inventory {
    slots: [Slot; INVENTORY_SLOTS],
    /// Selected hotbar slot, 0..HOTBAR_SLOTS
    selected: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: [Slot::EMPTY; INVENTORY_SLOTS],
            selected: 0,
        }
    }
}

impl Inventory {
    /// Add one unit of `kind`: first stacking slot with room wins, then the
    /// first empty slot. Returns false when the inventory is full.
    pub fn add(&mut self, kind: Voxel) -> bool {
        debug_assert!(!kind.is_air(), "air is not an inventory item");

        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|s| s.kind == Some(kind) && s.count < MAX_STACK)
        {
            slot.count += 1;
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.is_empty()) {
            *slot = Slot { kind: Some(kind), count: 1 };
            return true;
        }
        false
    }

    /// Take one unit from the selected hotbar slot. The slot transitions to
    /// empty exactly when its count reaches zero.
    pub fn consume_selected(&mut self) -> Option<Voxel> {
        let slot = &mut self.slots[self.selected];
        let kind = slot.kind?;
        slot.count -= 1;
        if slot.count == 0 {
            slot.kind = None;
        }
        Some(kind)
    }

    pub fn select(&mut self, index: usize) {
        if index < HOTBAR_SLOTS {
            self.selected = index;
        }
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn selected_slot(&self) -> Slot {
        self.slots[self.selected]
    }

    #[inline]
    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Read-only snapshot for the UI shell
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Invariant check used by tests and debug assertions
    pub fn invariant_holds(&self) -> bool {
        self.slots
            .iter()
            .all(|s| (s.kind.is_none() == (s.count == 0)) && s.count <= MAX_STACK)
    }
}
