use bitflags::bitflags;

bitflags! {
    /// A component declaring which UI events an entity wants to receive.
    ///
    /// Events that walk the hierarchy (pointer down, click, drop) are delivered to the first
    /// entity on the way up the [`super::Parent`] chain that handles them.
    pub struct EventHandlers: u32 {
        /// The pointer started pointing at this entity or one of its children
        const POINTER_ENTER = 1 << 0;
        /// The pointer stopped pointing at this entity and its children
        const POINTER_EXIT = 1 << 1;
        /// The pointer was pressed on this entity
        const POINTER_DOWN = 1 << 2;
        /// The pointer was released after being pressed on this entity
        const POINTER_UP = 1 << 3;
        /// This entity was clicked. Clicks happen on press, not on release
        const POINTER_CLICK = 1 << 4;
        /// A drag started on this entity
        const BEGIN_DRAG = 1 << 5;
        /// This entity is being dragged
        const DRAG = 1 << 6;
        /// A drag on this entity finished
        const END_DRAG = 1 << 7;
        /// Something was dropped on this entity
        const DROP = 1 << 8;
        /// This entity became the selected entity
        const SELECT = 1 << 9;
        /// This entity stopped being the selected entity
        const DESELECT = 1 << 10;
        /// Sent every tick while this entity is selected, eg. so a text field can read keys
        const UPDATE_SELECTED = 1 << 11;
        /// Everything a typical button wants
        const BUTTON = Self::POINTER_ENTER.bits
            | Self::POINTER_EXIT.bits
            | Self::POINTER_DOWN.bits
            | Self::POINTER_UP.bits
            | Self::POINTER_CLICK.bits;
    }
}

impl Default for EventHandlers {
    fn default() -> Self {
        EventHandlers::empty()
    }
}
